//! Command-line interface implementation for cxxinit.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::blueprint::BlueprintSource;

/// Command-line arguments structure for cxxinit.
#[derive(Parser, Debug)]
#[command(author, version, about = "cxxinit: C++/CMake project scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory in which the projects are created
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read the project blueprint (JSON or YAML) from stdin
    #[arg(short, long, conflicts_with = "answers")]
    pub stdin: bool,

    /// Read the project blueprint (JSON or YAML) from a file
    /// instead of asking questions interactively.
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,
}

impl Args {
    /// Blueprint to read projects from, `None` when questions should be asked.
    pub fn blueprint_source(&self) -> Option<BlueprintSource> {
        match (self.stdin, &self.answers) {
            (true, _) => Some(BlueprintSource::Stdin),
            (false, Some(path)) => Some(BlueprintSource::File(path.clone())),
            (false, None) => None,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
