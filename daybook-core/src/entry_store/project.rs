use crate::config::expand_home;
use crate::error::{DaybookError, Result};
use std::path::{Component, Path, PathBuf};

/// A named journal inside a git working directory: `<base_dir>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Absolute root of the git working directory.
    pub base_dir: PathBuf,
    /// `base_dir/name`, holding the date folders.
    pub project_dir: PathBuf,
}

impl Project {
    /// Resolves `base_dir` (`~` expanded, made absolute) and derives the project directory.
    /// Nothing is touched on disk.
    pub fn new(name: &str, base_dir: &Path) -> Result<Self> {
        let mut components = Path::new(name).components();
        let single_component = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_component {
            return Err(DaybookError::Validation {
                field: "daybook name",
                expected: "a single directory name",
                input: name.to_string(),
            });
        }

        let expanded = expand_home(base_dir);
        let base_dir = std::path::absolute(&expanded)
            .map_err(|source| DaybookError::io("resolving", &expanded, source))?;
        Ok(Self {
            name: name.to_string(),
            project_dir: base_dir.join(name),
            base_dir,
        })
    }

    /// `path` relative to the working directory root, as the history tool names it.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.base_dir).unwrap_or(path)
    }

    /// Whether `path` lies inside this project's directory.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.project_dir)
    }
}
