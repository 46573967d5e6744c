use cxxinit::blueprint::{load_projects, parse_blueprint, BlueprintSource};
use cxxinit::error::{Error, ErrorKind};
use cxxinit::project::{ProjectKind, DEFAULT_CXX_STANDARD};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SUITE_YAML: &str = r#"
projects:
  - kind: library
    name: core
    cxx_standard: 20
    cmake_namespace: acme
    cpp_namespace: acme::core
    alias: core
  - kind: application
    name: tool
    cmake_namespace: acme
    cpp_namespace: acme
    output_name: tool
  - kind: super
    name: suite
    children: [core, tool]
"#;

#[test]
fn test_yaml_blueprint() {
    let projects = parse_blueprint(SUITE_YAML).unwrap().into_projects().unwrap();

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].name(), "core");
    assert_eq!(projects[0].cxx_standard(), 20);
    assert!(projects[0].has_parent());
    assert_eq!(projects[1].cxx_standard(), DEFAULT_CXX_STANDARD);
    assert!(projects[1].has_parent());
    assert_eq!(projects[2].children(), ["core", "tool"]);
    assert!(!projects[2].has_parent());
}

#[test]
fn test_json_blueprint() {
    let content = r#"{
        "projects": [
            {"kind": "library", "name": "mathkit", "cxx_standard": 17,
             "cmake_namespace": "mk", "cpp_namespace": "mk", "alias": "mathkit"}
        ]
    }"#;
    let projects = parse_blueprint(content).unwrap().into_projects().unwrap();

    assert_eq!(projects.len(), 1);
    assert!(!projects[0].has_parent());
    match projects[0].kind() {
        ProjectKind::Library(params) => assert_eq!(params.alias, "mathkit"),
        other => panic!("Expected library, got {other:?}"),
    }
}

#[test]
fn test_unknown_kind_is_rejected() {
    let content = r#"{"projects": [{"kind": "plugin", "name": "x"}]}"#;
    let err = parse_blueprint(content).unwrap_err();
    assert!(matches!(err, Error::BlueprintError(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_malformed_json_reports_json_error() {
    let content = r#"{"projects": [{"kind": "super", "name": "suite"}]"#;
    match parse_blueprint(content).unwrap_err() {
        Error::BlueprintError(message) => {
            assert!(message.starts_with("invalid JSON blueprint"), "{message}");
            assert!(message.contains("line 1"), "{message}");
        }
        other => panic!("Expected BlueprintError, got {other:?}"),
    }

    let content = "projects: [suite\n";
    match parse_blueprint(content).unwrap_err() {
        Error::BlueprintError(message) => {
            assert!(message.starts_with("invalid YAML blueprint"), "{message}")
        }
        other => panic!("Expected BlueprintError, got {other:?}"),
    }
}

#[test]
fn test_unknown_child_is_rejected() {
    let content = r#"{"projects": [{"kind": "super", "name": "suite", "children": ["ghost"]}]}"#;
    let err = parse_blueprint(content).unwrap().into_projects().unwrap_err();
    match err {
        Error::BlueprintError(message) => assert!(message.contains("ghost")),
        other => panic!("Expected BlueprintError, got {other:?}"),
    }
}

#[test]
fn test_nested_and_shared_children_are_rejected() {
    let nested = r#"
projects:
  - {kind: super, name: outer, children: [inner]}
  - {kind: super, name: inner}
"#;
    let err = parse_blueprint(nested).unwrap().into_projects().unwrap_err();
    assert!(matches!(err, Error::InvalidChild { .. }));

    let shared = r#"
projects:
  - {kind: application, name: tool, cmake_namespace: a, cpp_namespace: a, output_name: tool}
  - {kind: super, name: one, children: [tool]}
  - {kind: super, name: two, children: [tool]}
"#;
    let err = parse_blueprint(shared).unwrap().into_projects().unwrap_err();
    assert!(matches!(err, Error::InvalidChild { .. }));

    let own = r#"{"projects": [{"kind": "super", "name": "suite", "children": ["suite"]}]}"#;
    assert!(parse_blueprint(own).unwrap().into_projects().is_err());
}

#[test]
fn test_duplicate_names_are_rejected() {
    let content = r#"
projects:
  - {kind: application, name: tool, cmake_namespace: a, cpp_namespace: a, output_name: tool}
  - {kind: application, name: tool, cmake_namespace: b, cpp_namespace: b, output_name: tool}
"#;
    let err = parse_blueprint(content).unwrap().into_projects().unwrap_err();
    assert!(matches!(err, Error::BlueprintError(_)));
}

#[test]
fn test_invalid_name_is_rejected() {
    let content = r#"{"projects": [{"kind": "super", "name": "../escape"}]}"#;
    let err = parse_blueprint(content).unwrap().into_projects().unwrap_err();
    assert!(matches!(err, Error::InvalidName { .. }));
}

#[test]
fn test_load_projects_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.yaml");
    fs::write(&path, SUITE_YAML).unwrap();

    let projects = load_projects(&BlueprintSource::File(path)).unwrap();
    assert_eq!(projects.len(), 3);

    let missing = BlueprintSource::File(PathBuf::from("/definitely/not/here.yaml"));
    assert!(matches!(load_projects(&missing), Err(Error::BlueprintError(_))));
}
