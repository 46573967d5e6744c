use clap::Parser;
use cxxinit::blueprint::BlueprintSource;
use cxxinit::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("cxxinit")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(!parsed.verbose);
    assert!(!parsed.stdin);
    assert!(parsed.answers.is_none());
    assert!(parsed.blueprint_source().is_none());
}

#[test]
fn test_output_dir_and_flags() {
    let parsed = Args::try_parse_from(make_args(&["--verbose", "--stdin", "./output"])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
    assert!(parsed.verbose);
    assert_eq!(parsed.blueprint_source(), Some(BlueprintSource::Stdin));
}

#[test]
fn test_answers_file() {
    let parsed = Args::try_parse_from(make_args(&["-a", "projects.yaml", "-v"])).unwrap();

    assert!(parsed.verbose);
    assert_eq!(
        parsed.blueprint_source(),
        Some(BlueprintSource::File(PathBuf::from("projects.yaml")))
    );
}

#[test]
fn test_stdin_conflicts_with_answers() {
    let args = make_args(&["--stdin", "--answers", "projects.json"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
