//! Directory layout of a generated project.

use std::path::{Path, PathBuf};

use crate::project::{Project, ProjectKind};

/// Every path a project may use, plus what the project needs of them.
///
/// The layout is a snapshot: it records the kind and parent flag of the
/// project it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub include: PathBuf,
    pub nested_include: PathBuf,
    pub src: PathBuf,
    pub cmake: PathBuf,
    pub tests: PathBuf,
    pub tests_src: PathBuf,
    is_super: bool,
    is_library: bool,
    has_parent: bool,
}

impl ProjectLayout {
    /// Layout of `project` rooted at `<target_dir>/<name>`.
    pub fn new<P: AsRef<Path>>(target_dir: P, project: &Project) -> Self {
        let root = target_dir.as_ref().join(project.name());
        let include = root.join("include");
        let nested_include = include.join(project.name());
        let tests = root.join("tests");
        let tests_src = tests.join("src");
        Self {
            src: root.join("src"),
            cmake: root.join("cmake"),
            root,
            include,
            nested_include,
            tests,
            tests_src,
            is_super: project.is_super(),
            is_library: matches!(project.kind(), ProjectKind::Library(_)),
            has_parent: project.has_parent(),
        }
    }

    /// Directories the project needs, parents before children.
    ///
    /// # Rules
    /// - `include/`, `include/<name>/` and `src/` for anything but a super project
    /// - `cmake/` for a super project or any project without a parent
    /// - `tests/` and `tests/src/` for libraries only
    pub fn directories(&self) -> Vec<&Path> {
        let is_super = self.is_super;
        let is_library = self.is_library;
        let owns_cmake_dir = is_super || !self.has_parent;

        let candidates = [
            (self.root.as_path(), true),
            (self.include.as_path(), !is_super),
            (self.nested_include.as_path(), !is_super),
            (self.src.as_path(), !is_super),
            (self.cmake.as_path(), owns_cmake_dir),
            (self.tests.as_path(), is_library),
            (self.tests_src.as_path(), is_library),
        ];

        candidates
            .into_iter()
            .filter_map(|(dir, included)| included.then_some(dir))
            .collect()
    }
}
