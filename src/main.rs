//! cxxinit's main application entry point.
//! Handles command-line argument parsing, collects the projects to create
//! and hands them to the generator.

use cxxinit::{
    blueprint::load_projects,
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::Generator,
    prompt::DialoguerPrompter,
    questions::ask_projects,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose { log::LevelFilter::Trace } else { log::LevelFilter::Off })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads projects from a blueprint or asks for them interactively
/// 2. Generates super projects, libraries and applications in that order
fn run(args: Args) -> Result<()> {
    let projects = match args.blueprint_source() {
        Some(source) => load_projects(&source)?,
        None => ask_projects(&DialoguerPrompter::new())?,
    };

    if projects.is_empty() {
        println!("Nothing to generate.");
        return Ok(());
    }

    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&renderer);

    for generated in generator.generate_all(&args.output_dir, &projects)? {
        for file in &generated.files {
            println!("Wrote: '{}'", file.display());
        }
    }

    println!("Project generation completed successfully in {}.", args.output_dir.display());
    Ok(())
}
