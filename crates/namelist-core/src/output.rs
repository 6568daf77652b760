//! Writing rendered lists to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RenderError, Result};
use crate::renderer::RenderedList;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "namelist_output";

/// Directory receiving one `<list name>.txt` per rendered list
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory; an existing directory is fine
    ///
    /// Returns `true` when the directory was newly created.
    pub fn ensure(&self) -> Result<bool> {
        if self.path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.path).map_err(|source| RenderError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(true)
    }

    /// Target path for a list
    pub fn file_for(&self, list_name: &str) -> PathBuf {
        self.path.join(format!("{}.txt", file_stem(list_name)))
    }

    /// Write one list, replacing any previous file of the same name
    pub fn write(&self, list: &RenderedList) -> Result<PathBuf> {
        let path = self.file_for(&list.name);
        fs::write(&path, &list.text).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = list.text.len(), "wrote list");
        Ok(path)
    }
}

/// Sheet names may contain path separators; keep the file inside the directory
fn file_stem(list_name: &str) -> String {
    list_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn list(name: &str, text: &str) -> RenderedList {
        RenderedList {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let out = OutputDir::new(dir.path().join("lists"));

        assert!(out.ensure().unwrap());
        assert!(!out.ensure().unwrap());
        assert!(out.path().is_dir());
    }

    #[test]
    fn test_ensure_fails_when_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();

        assert!(OutputDir::new(&file).ensure().is_err());
    }

    #[test]
    fn test_write_list() {
        let dir = TempDir::new().unwrap();
        let out = OutputDir::new(dir.path());

        let path = out.write(&list("HUM1", "HUM1 = {}")).unwrap();

        assert_eq!(path, dir.path().join("HUM1.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "HUM1 = {}");
    }

    #[test]
    fn test_separators_in_list_name() {
        let out = OutputDir::new("lists");
        assert_eq!(out.file_for("A/B"), PathBuf::from("lists").join("A_B.txt"));
    }
}
