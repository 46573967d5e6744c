//! Project variants that cxxinit can generate.
//! A project is a library, an application or a super project aggregating
//! other projects by name.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// C++ standard used for super projects, which never compile sources of their own.
pub const DEFAULT_CXX_STANDARD: u8 = 17;

static CPP_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").unwrap());

/// Fields only a library carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryParams {
    pub cmake_namespace: String,
    pub cpp_namespace: String,
    /// Alias target name, exported as `<cmake_namespace>::<alias>`.
    pub alias: String,
}

/// Fields only an application carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppParams {
    pub cmake_namespace: String,
    pub cpp_namespace: String,
    /// File name of the produced executable.
    pub output_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectKind {
    Library(LibraryParams),
    Application(AppParams),
    /// Names of the child projects, in the order they were added.
    Super { children: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    cxx_standard: u8,
    has_parent: bool,
    kind: ProjectKind,
}

impl Project {
    /// Creates a library project without a parent.
    ///
    /// # Errors
    /// * `Error::InvalidName` if `name` is not a single path component
    /// * `Error::InvalidField` for a zero standard, a malformed C++ namespace
    ///   or an empty CMake namespace or alias
    pub fn library<S: Into<String>>(name: S, cxx_standard: u8, params: LibraryParams) -> Result<Self> {
        Self::new(name.into(), cxx_standard, ProjectKind::Library(params))
    }

    /// Creates an application project without a parent.
    ///
    /// # Errors
    /// Same as [`Project::library`], with `output_name` checked instead of `alias`.
    pub fn application<S: Into<String>>(name: S, cxx_standard: u8, params: AppParams) -> Result<Self> {
        Self::new(name.into(), cxx_standard, ProjectKind::Application(params))
    }

    /// Creates a super project without children. Use [`Project::add_child`] to fill it.
    pub fn super_project<S: Into<String>>(name: S) -> Result<Self> {
        Self::new(name.into(), DEFAULT_CXX_STANDARD, ProjectKind::Super { children: Vec::new() })
    }

    fn new(name: String, cxx_standard: u8, kind: ProjectKind) -> Result<Self> {
        validate_name(&name)?;
        if cxx_standard == 0 {
            return Err(Error::InvalidField {
                name,
                field: "cxx_standard",
                reason: "must be a positive number".to_string(),
            });
        }
        match &kind {
            ProjectKind::Library(params) => {
                require_identifier(&name, "cmake_namespace", &params.cmake_namespace)?;
                require_cpp_namespace(&name, &params.cpp_namespace)?;
                require_identifier(&name, "alias", &params.alias)?;
            }
            ProjectKind::Application(params) => {
                require_identifier(&name, "cmake_namespace", &params.cmake_namespace)?;
                require_cpp_namespace(&name, &params.cpp_namespace)?;
                require_identifier(&name, "output_name", &params.output_name)?;
            }
            ProjectKind::Super { .. } => {}
        }

        Ok(Self { name, cxx_standard, has_parent: false, kind })
    }

    /// Project name, also the name of its directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cxx_standard(&self) -> u8 {
        self.cxx_standard
    }

    /// Whether a super project owns this project.
    pub fn has_parent(&self) -> bool {
        self.has_parent
    }

    /// Variant-specific fields.
    pub fn kind(&self) -> &ProjectKind {
        &self.kind
    }

    pub fn is_super(&self) -> bool {
        matches!(self.kind, ProjectKind::Super { .. })
    }

    /// Child names of a super project, empty for any other kind.
    pub fn children(&self) -> &[String] {
        match &self.kind {
            ProjectKind::Super { children } => children,
            _ => &[],
        }
    }

    /// Registers `child` with this super project and marks it as parented.
    ///
    /// Passing `None` does nothing.
    ///
    /// # Errors
    /// * `Error::InvalidChild` if `self` is not a super project, if `child` is
    ///   itself a super project or if `child` already has a parent
    pub fn add_child(&mut self, child: Option<&mut Project>) -> Result<()> {
        let Some(child) = child else {
            return Ok(());
        };

        let reject = |reason: &str| Error::InvalidChild {
            parent: self.name.clone(),
            child: child.name.clone(),
            reason: reason.to_string(),
        };
        if child.is_super() {
            return Err(reject("super projects cannot be nested"));
        }
        if child.has_parent {
            return Err(reject("project already belongs to a super project"));
        }
        let ProjectKind::Super { children } = &mut self.kind else {
            return Err(reject("only a super project can own children"));
        };

        children.push(child.name.clone());
        child.has_parent = true;
        Ok(())
    }

    /// Name of the CMake option toggling tests, e.g. `BUILD_MATHKIT_TESTS`.
    pub fn test_option(&self) -> String {
        format!("BUILD_{}_TESTS", self.name.to_uppercase())
    }
}

/// Checks that `name` can be used as a single directory component.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name cannot be empty")
    } else if name.contains(['/', '\\']) {
        Some("name cannot contain path separators")
    } else if name == "." || name == ".." {
        Some("name cannot be a relative path component")
    } else if name.contains('\0') || name.chars().any(char::is_whitespace) {
        Some("name cannot contain whitespace or NUL characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidName { name: name.to_string(), reason: reason.to_string() }),
        None => Ok(()),
    }
}

/// Checks that `value` is a non-empty token without whitespace.
pub(crate) fn require_identifier(name: &str, field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(Error::InvalidField {
            name: name.to_string(),
            field,
            reason: "must be a non-empty identifier".to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` is a `::`-separated list of C++ identifiers.
pub(crate) fn require_cpp_namespace(name: &str, value: &str) -> Result<()> {
    if !CPP_NAMESPACE.is_match(value) {
        return Err(Error::InvalidField {
            name: name.to_string(),
            field: "cpp_namespace",
            reason: format!("'{value}' is not a valid C++ namespace"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(name: &str) -> Project {
        Project::library(
            name,
            20,
            LibraryParams {
                cmake_namespace: "acme".to_string(),
                cpp_namespace: "acme".to_string(),
                alias: name.to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_add_child_stamps_parent_and_keeps_order() {
        let mut suite = Project::super_project("suite").unwrap();
        let mut core = library("core");
        let mut extra = library("extra");

        suite.add_child(Some(&mut core)).unwrap();
        suite.add_child(Some(&mut extra)).unwrap();

        assert!(core.has_parent());
        assert!(extra.has_parent());
        assert!(!suite.has_parent());
        assert_eq!(suite.children(), ["core", "extra"]);
    }

    #[test]
    fn test_add_child_none_is_noop() {
        let mut suite = Project::super_project("suite").unwrap();
        assert!(suite.add_child(None).is_ok());
        assert!(suite.children().is_empty());
    }

    #[test]
    fn test_add_child_rejects_nesting_and_second_owner() {
        let mut outer = Project::super_project("outer").unwrap();
        let mut inner = Project::super_project("inner").unwrap();
        assert!(matches!(outer.add_child(Some(&mut inner)), Err(Error::InvalidChild { .. })));
        assert!(!inner.has_parent());

        let mut core = library("core");
        outer.add_child(Some(&mut core)).unwrap();
        let mut other = Project::super_project("other").unwrap();
        assert!(other.add_child(Some(&mut core)).is_err());
        assert!(other.children().is_empty());
    }

    #[test]
    fn test_add_child_on_library_fails() {
        let mut core = library("core");
        let mut extra = library("extra");
        assert!(core.add_child(Some(&mut extra)).is_err());
        assert!(!extra.has_parent());
    }

    #[test]
    fn test_test_option() {
        assert_eq!(library("mathkit").test_option(), "BUILD_MATHKIT_TESTS");
        assert_eq!(library("MyLib2").test_option(), "BUILD_MYLIB2_TESTS");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("mathkit").is_ok());
        assert!(validate_name("math-kit_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("my lib").is_err());
    }

    #[test]
    fn test_invalid_fields() {
        let err = Project::library(
            "core",
            0,
            LibraryParams {
                cmake_namespace: "acme".to_string(),
                cpp_namespace: "acme".to_string(),
                alias: "core".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "cxx_standard", .. }));

        let err = Project::application(
            "tool",
            17,
            AppParams {
                cmake_namespace: "acme".to_string(),
                cpp_namespace: "acme::9tool".to_string(),
                output_name: "tool".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "cpp_namespace", .. }));

        assert!(Project::application(
            "tool",
            17,
            AppParams {
                cmake_namespace: "acme".to_string(),
                cpp_namespace: "acme::tool".to_string(),
                output_name: String::new(),
            },
        )
        .is_err());
    }
}
