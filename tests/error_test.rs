use std::io;
use std::path::PathBuf;

use cxxinit::error::{Error, ErrorKind};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_error_display() {
    let err = Error::TargetDirectoryMissing { target_dir: "/missing".to_string() };
    assert_eq!(err.to_string(), "Target directory '/missing' does not exist or is not a directory.");

    let err = Error::MissingParent { name: "core".to_string() };
    assert_eq!(
        err.to_string(),
        "Project 'core' belongs to a super project, but no parent was supplied."
    );

    let err = Error::WriteFileError {
        path: PathBuf::from("core/.clang-tidy"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write 'core/.clang-tidy': denied.");
}

#[test]
fn test_exit_codes_are_distinct_per_kind() {
    let invalid = Error::BlueprintError("bad".to_string());
    let create = Error::CreateDirectoryError {
        path: PathBuf::from("core"),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
    };
    let write = Error::WriteFileError {
        path: PathBuf::from("core/CMakeLists.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    let io = Error::IoError(io::Error::new(io::ErrorKind::Other, "other"));

    assert_eq!(invalid.kind(), ErrorKind::InvalidInput);
    assert_eq!(invalid.exit_code(), 2);
    assert_eq!(create.exit_code(), 3);
    assert_eq!(write.exit_code(), 4);
    assert_eq!(io.exit_code(), 1);

    let codes = [
        ErrorKind::InvalidInput,
        ErrorKind::CreateDirectory,
        ErrorKind::WriteFile,
        ErrorKind::Prompt,
        ErrorKind::Template,
        ErrorKind::Io,
    ]
    .map(ErrorKind::exit_code);
    for (i, code) in codes.iter().enumerate() {
        assert_ne!(*code, 0);
        assert!(!codes[i + 1..].contains(code));
    }
}

#[test]
fn test_io_failure_kinds() {
    assert!(ErrorKind::CreateDirectory.is_io_failure());
    assert!(ErrorKind::WriteFile.is_io_failure());
    assert!(ErrorKind::Io.is_io_failure());
    assert!(!ErrorKind::InvalidInput.is_io_failure());
    assert!(!ErrorKind::Prompt.is_io_failure());
    assert!(!ErrorKind::Template.is_io_failure());

    let err = Error::MissingParent { name: "core".to_string() };
    assert!(!err.kind().is_io_failure());
}
