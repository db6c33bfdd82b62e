use crate::domain::source::SourceKind;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ProjectLoader;

impl ProjectLoader {
    /// Discover all candidate source files under a project root.
    /// Returns paths sorted for a deterministic processing order.
    /// A missing root is fatal to the whole run.
    pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            bail!("source directory '{}' not found", root.display());
        }

        let mut files = Vec::new();
        Self::collect_sources_recursive(root, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn collect_sources_recursive(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                Self::collect_sources_recursive(&path, out)?;
            } else if SourceKind::from_path(&path).is_some() {
                out.push(path);
            }
        }
        Ok(())
    }
}
