//! Interactive question flow.
//! Asks what to create and collects the fields of every project involved.

use log::warn;

use crate::error::Result;
use crate::project::{
    require_cpp_namespace, require_identifier, validate_name, AppParams, LibraryParams, Project,
};
use crate::prompt::Prompter;

pub const PROJECT_CHOICES: [&str; 3] = ["Library", "Application", "Application with library"];

/// Asks the user which kind of project to create and returns the projects to
/// generate. For "Application with library" the super project comes last and
/// already owns both children.
pub fn ask_projects(prompter: &dyn Prompter) -> Result<Vec<Project>> {
    let choice = prompter.select("What would you like to create?", &PROJECT_CHOICES)?;

    let projects = match choice {
        0 => vec![ask_library(prompter)?],
        1 => vec![ask_application(prompter)?],
        _ => {
            let name = ask_name(prompter, "Super project name")?;
            let mut parent = Project::super_project(name)?;
            let mut library = ask_library(prompter)?;
            let mut application = ask_application(prompter)?;
            parent.add_child(Some(&mut library))?;
            parent.add_child(Some(&mut application))?;
            vec![library, application, parent]
        }
    };

    Ok(projects)
}

/// Asks for the fields of a library, re-asking every invalid answer.
pub fn ask_library(prompter: &dyn Prompter) -> Result<Project> {
    let name = ask_name(prompter, "Library name")?;
    let alias =
        ask_checked(prompter, "CMake library alias", |v| require_identifier(&name, "alias", v))?;
    let cmake_namespace = ask_checked(prompter, "CMake namespace", |v| {
        require_identifier(&name, "cmake_namespace", v)
    })?;
    let cpp_namespace =
        ask_checked(prompter, "C++ namespace", |v| require_cpp_namespace(&name, v))?;
    let cxx_standard = ask_cxx_standard(prompter)?;

    Project::library(name, cxx_standard, LibraryParams { cmake_namespace, cpp_namespace, alias })
}

/// Asks for the fields of an application, re-asking every invalid answer.
pub fn ask_application(prompter: &dyn Prompter) -> Result<Project> {
    let name = ask_name(prompter, "Application name")?;
    let output_name = ask_checked(prompter, "Name of the executable", |v| {
        require_identifier(&name, "output_name", v)
    })?;
    let cmake_namespace = ask_checked(prompter, "CMake namespace", |v| {
        require_identifier(&name, "cmake_namespace", v)
    })?;
    let cpp_namespace =
        ask_checked(prompter, "C++ namespace", |v| require_cpp_namespace(&name, v))?;
    let cxx_standard = ask_cxx_standard(prompter)?;

    Project::application(
        name,
        cxx_standard,
        AppParams { cmake_namespace, cpp_namespace, output_name },
    )
}

fn ask_text(prompter: &dyn Prompter, prompt: &str) -> Result<String> {
    Ok(prompter.text(prompt)?.trim().to_string())
}

/// Re-asks until `check` accepts the answer.
fn ask_checked<F>(prompter: &dyn Prompter, prompt: &str, check: F) -> Result<String>
where
    F: Fn(&str) -> Result<()>,
{
    loop {
        let answer = ask_text(prompter, prompt)?;
        match check(&answer) {
            Ok(()) => return Ok(answer),
            Err(e) => warn!("{e}"),
        }
    }
}

/// Re-asks until the answer can be used as a directory name.
fn ask_name(prompter: &dyn Prompter, prompt: &str) -> Result<String> {
    ask_checked(prompter, prompt, validate_name)
}

/// Re-asks until the answer is a positive number that fits in a `u8`.
fn ask_cxx_standard(prompter: &dyn Prompter) -> Result<u8> {
    loop {
        let answer = ask_text(prompter, "CXX standard")?;
        match answer.parse::<u8>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => warn!("'{answer}' is not a valid C++ standard"),
        }
    }
}
