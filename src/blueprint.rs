//! Non-interactive project definitions.
//! A blueprint lists the projects to generate as JSON or YAML and replaces the
//! interactive questions when passed through `--answers` or `--stdin`.
//!
//! ```yaml
//! projects:
//!   - kind: super
//!     name: suite
//!     children: [core, tool]
//!   - kind: library
//!     name: core
//!     cxx_standard: 20
//!     cmake_namespace: acme
//!     cpp_namespace: acme
//!     alias: core
//!   - kind: application
//!     name: tool
//!     cmake_namespace: acme
//!     cpp_namespace: acme
//!     output_name: tool
//! ```

use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::project::{AppParams, LibraryParams, Project, DEFAULT_CXX_STANDARD};

/// Where the blueprint text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectEntry {
    Library {
        name: String,
        #[serde(default = "default_cxx_standard")]
        cxx_standard: u8,
        cmake_namespace: String,
        cpp_namespace: String,
        alias: String,
    },
    Application {
        name: String,
        #[serde(default = "default_cxx_standard")]
        cxx_standard: u8,
        cmake_namespace: String,
        cpp_namespace: String,
        output_name: String,
    },
    Super {
        name: String,
        #[serde(default)]
        children: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct Blueprint {
    pub projects: Vec<ProjectEntry>,
}

fn default_cxx_standard() -> u8 {
    DEFAULT_CXX_STANDARD
}

/// Reads the raw blueprint text from `source`.
pub fn read_blueprint(source: &BlueprintSource) -> Result<String> {
    match source {
        BlueprintSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        BlueprintSource::File(path) => {
            debug!("Loading blueprint from {}", path.display());
            if !path.is_file() {
                return Err(Error::BlueprintError(format!(
                    "blueprint file '{}' does not exist",
                    path.display()
                )));
            }
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

/// Parses a blueprint, trying JSON first and YAML second.
///
/// When both fail, a document that looks like JSON reports the JSON error.
pub fn parse_blueprint(content: &str) -> Result<Blueprint> {
    let json_err = match serde_json::from_str(content) {
        Ok(blueprint) => return Ok(blueprint),
        Err(e) => e,
    };
    serde_yaml::from_str(content).map_err(|yaml_err| {
        if content.trim_start().starts_with('{') {
            Error::BlueprintError(format!("invalid JSON blueprint: {json_err}"))
        } else {
            Error::BlueprintError(format!("invalid YAML blueprint: {yaml_err}"))
        }
    })
}

impl Blueprint {
    /// Builds validated projects in blueprint order and links every super
    /// project to the children it names.
    ///
    /// # Errors
    /// * `Error::BlueprintError` for duplicate names or unknown children
    /// * any validation error of the project model
    pub fn into_projects(self) -> Result<Vec<Project>> {
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(self.projects.len());
        let mut links = Vec::new();

        for entry in self.projects {
            let project = match entry {
                ProjectEntry::Library { name, cxx_standard, cmake_namespace, cpp_namespace, alias } => {
                    Project::library(
                        name,
                        cxx_standard,
                        LibraryParams { cmake_namespace, cpp_namespace, alias },
                    )?
                }
                ProjectEntry::Application {
                    name,
                    cxx_standard,
                    cmake_namespace,
                    cpp_namespace,
                    output_name,
                } => Project::application(
                    name,
                    cxx_standard,
                    AppParams { cmake_namespace, cpp_namespace, output_name },
                )?,
                ProjectEntry::Super { name, children } => {
                    links.push((projects.len(), children));
                    Project::super_project(name)?
                }
            };
            if !seen.insert(project.name().to_string()) {
                return Err(Error::BlueprintError(format!(
                    "project '{}' is defined more than once",
                    project.name()
                )));
            }
            projects.push(project);
        }

        for (parent_idx, children) in links {
            for child_name in children {
                let child_idx = projects
                    .iter()
                    .position(|project| project.name() == child_name)
                    .ok_or_else(|| {
                        Error::BlueprintError(format!(
                            "super project '{}' references unknown project '{child_name}'",
                            projects[parent_idx].name()
                        ))
                    })?;
                let (parent, child) = pair_mut(&mut projects, parent_idx, child_idx)?;
                parent.add_child(Some(child))?;
            }
        }

        Ok(projects)
    }
}

fn pair_mut(projects: &mut [Project], a: usize, b: usize) -> Result<(&mut Project, &mut Project)> {
    if a == b {
        return Err(Error::BlueprintError(format!(
            "super project '{}' cannot contain itself",
            projects[a].name()
        )));
    }
    if a < b {
        let (left, right) = projects.split_at_mut(b);
        Ok((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = projects.split_at_mut(a);
        Ok((&mut right[0], &mut left[b]))
    }
}

/// Reads, parses and validates the blueprint at `source`.
pub fn load_projects(source: &BlueprintSource) -> Result<Vec<Project>> {
    let content = read_blueprint(source)?;
    parse_blueprint(&content)?.into_projects()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_mut_both_orders() {
        let mut projects = vec![
            Project::super_project("a").unwrap(),
            Project::super_project("b").unwrap(),
        ];
        let (first, second) = pair_mut(&mut projects, 1, 0).unwrap();
        assert_eq!(first.name(), "b");
        assert_eq!(second.name(), "a");
        assert!(pair_mut(&mut projects, 0, 0).is_err());
    }
}
