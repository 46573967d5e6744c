//! Project generation.
//! Creates the directory skeleton of a project and writes its files, taking
//! into account which files the owning super project already provides.

use log::{debug, info};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME_HEADER, CLANG_FORMAT, CLANG_TIDY, CMAKE_HELPERS, CMAKE_HELPERS_REPOSITORY,
    CMAKE_LISTS, MAIN_SOURCE, PROJECT_VERSION,
};
use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::project::{Project, ProjectKind};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::templates::{Artifact, NAMING_RULES};

/// What a single [`Generator::generate`] call put on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub project: String,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Writes projects to disk, rendering every file through `renderer`.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Creates a generator rendering with `renderer`.
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Generates `project` inside `target_dir`.
    ///
    /// `parent` must be the super project owning `project` whenever
    /// `project.has_parent()` is true. Ownership itself is not checked.
    ///
    /// # Errors
    /// * `Error::TargetDirectoryMissing` if `target_dir` is not a directory
    /// * `Error::MissingParent` / `Error::ParentNotSuper` for a bad `parent`
    /// * `Error::CreateDirectoryError` before any file was written
    /// * `Error::WriteFileError` after the files of the earlier steps were written
    pub fn generate<P: AsRef<Path>>(
        &self,
        target_dir: P,
        project: &Project,
        parent: Option<&Project>,
    ) -> Result<Generated> {
        let target_dir = target_dir.as_ref();
        if !target_dir.is_dir() {
            return Err(Error::TargetDirectoryMissing {
                target_dir: target_dir.display().to_string(),
            });
        }
        let parent = resolve_parent(project, parent)?;

        info!("Generating project '{}' in '{}'.", project.name(), target_dir.display());

        let layout = ProjectLayout::new(target_dir, project);
        let mut generated = Generated { project: project.name().to_string(), ..Default::default() };

        for dir in layout.directories() {
            debug!("Creating directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| Error::CreateDirectoryError {
                path: dir.to_path_buf(),
                source,
            })?;
            generated.directories.push(dir.to_path_buf());
        }

        let context = build_context(project, parent);
        let mut emit = |artifact: Artifact, path: PathBuf| -> Result<()> {
            self.write(artifact, &path, &context)?;
            generated.files.push(path);
            Ok(())
        };

        if project.is_super() || !project.has_parent() {
            emit(
                Artifact::PackageConfig,
                layout.cmake.join(format!("{}-config.cmake.in", project.name())),
            )?;
            emit(Artifact::CmakeHelpers, layout.cmake.join(CMAKE_HELPERS))?;
        }

        if !project.has_parent() {
            emit(Artifact::ClangFormat, layout.root.join(CLANG_FORMAT))?;
        }
        emit(Artifact::ClangTidy, layout.root.join(CLANG_TIDY))?;

        match project.kind() {
            ProjectKind::Application(_) => {
                emit(Artifact::AppNameHeader, layout.root.join(APP_NAME_HEADER))?;
                emit(Artifact::AppMain, layout.src.join(MAIN_SOURCE))?;
                emit(Artifact::AppCMakeLists, layout.root.join(CMAKE_LISTS))?;
            }
            ProjectKind::Library(_) => {
                emit(Artifact::LibCMakeLists, layout.root.join(CMAKE_LISTS))?;
                emit(Artifact::TestCMakeLists, layout.tests.join(CMAKE_LISTS))?;
                emit(Artifact::TestMain, layout.tests_src.join(MAIN_SOURCE))?;
            }
            ProjectKind::Super { .. } => {
                emit(Artifact::SuperCMakeLists, layout.root.join(CMAKE_LISTS))?;
            }
        }

        Ok(generated)
    }

    /// Generates every project of `projects`: super projects first, then
    /// libraries, then applications. Children of a super project are placed
    /// inside its directory.
    ///
    /// # Errors
    /// * `Error::MissingParent` if a parented project's super project is not in `projects`
    /// * any error of [`Generator::generate`]; projects generated before it stay on disk
    pub fn generate_all<P: AsRef<Path>>(
        &self,
        target_dir: P,
        projects: &[Project],
    ) -> Result<Vec<Generated>> {
        let target_dir = target_dir.as_ref();
        let rank = |project: &Project| match project.kind() {
            ProjectKind::Super { .. } => 0,
            ProjectKind::Library(_) => 1,
            ProjectKind::Application(_) => 2,
        };
        let mut ordered: Vec<&Project> = projects.iter().collect();
        ordered.sort_by_key(|project| rank(*project));

        let mut results = Vec::with_capacity(ordered.len());
        for project in ordered {
            let generated = if project.has_parent() {
                let owner = projects
                    .iter()
                    .find(|candidate| {
                        candidate.is_super()
                            && candidate.children().iter().any(|child| child == project.name())
                    })
                    .ok_or_else(|| Error::MissingParent { name: project.name().to_string() })?;
                self.generate(target_dir.join(owner.name()), project, Some(owner))?
            } else {
                self.generate(target_dir, project, None)?
            };
            results.push(generated);
        }

        Ok(results)
    }

    fn write(&self, artifact: Artifact, path: &Path, context: &Value) -> Result<()> {
        let content = self.renderer.render(artifact.template(), context)?;
        debug!("Writing {}: {}", artifact, path.display());
        fs::write(path, content)
            .map_err(|source| Error::WriteFileError { path: path.to_path_buf(), source })
    }
}

/// Generates a single project with the built-in MiniJinja renderer.
pub fn generate<P: AsRef<Path>>(
    target_dir: P,
    project: &Project,
    parent: Option<&Project>,
) -> Result<Generated> {
    let renderer = MiniJinjaRenderer::new();
    Generator::new(&renderer).generate(target_dir, project, parent)
}

fn resolve_parent<'p>(project: &Project, parent: Option<&'p Project>) -> Result<Option<&'p Project>> {
    if !project.has_parent() {
        return Ok(None);
    }
    match parent {
        None => Err(Error::MissingParent { name: project.name().to_string() }),
        Some(parent) if !parent.is_super() => Err(Error::ParentNotSuper {
            name: project.name().to_string(),
            parent: parent.name().to_string(),
        }),
        Some(parent) => Ok(Some(parent)),
    }
}

/// Template context for `project`. The test option of a parented project is
/// named after its parent, so all siblings share one switch.
fn build_context(project: &Project, parent: Option<&Project>) -> Value {
    let test_option = match parent {
        Some(parent) => parent.test_option(),
        None => project.test_option(),
    };

    let mut context = Map::new();
    context.insert("name".into(), json!(project.name()));
    context.insert("version".into(), json!(PROJECT_VERSION));
    context.insert("cxx_standard".into(), json!(project.cxx_standard()));
    context.insert("has_parent".into(), json!(project.has_parent()));
    context.insert("test_option".into(), json!(test_option));
    context.insert("helpers_repository".into(), json!(CMAKE_HELPERS_REPOSITORY));
    context.insert("naming_rules".into(), json!(NAMING_RULES));

    match project.kind() {
        ProjectKind::Library(params) => {
            context.insert("cmake_namespace".into(), json!(params.cmake_namespace));
            context.insert("cpp_namespace".into(), json!(params.cpp_namespace));
            context.insert("alias".into(), json!(params.alias));
        }
        ProjectKind::Application(params) => {
            context.insert("cmake_namespace".into(), json!(params.cmake_namespace));
            context.insert("cpp_namespace".into(), json!(params.cpp_namespace));
            context.insert("output_name".into(), json!(params.output_name));
        }
        ProjectKind::Super { children } => {
            context.insert("children".into(), json!(children));
        }
    }

    Value::Object(context)
}
