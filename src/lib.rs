//! cxxinit creates C++/CMake project skeletons.
//! It generates a library, an application, or a super project aggregating
//! both, with CMake build descriptions, clang-format/clang-tidy configuration
//! and placeholder sources.

/// Non-interactive project definitions read from JSON or YAML
pub mod blueprint;

/// Command-line interface module for the cxxinit application
pub mod cli;

/// File names and other fixed values of generated projects
pub mod constants;

/// Error types and handling for the cxxinit application
pub mod error;

/// Directory creation and file emission for a project
pub mod generator;

/// Directory layout of a generated project
pub mod layout;

/// Library, application and super project variants
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Interactive question flow producing projects
pub mod questions;

/// Template rendering functionality
pub mod renderer;

/// Built-in templates of every generated file
pub mod templates;
