//! Storage abstraction for reading and writing component directories.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Trait for abstracting file I/O (filesystem vs. in-memory in tests).
pub trait ComponentStore {
    /// Read a file at the given path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
    /// Replace the content of the file at `path`.
    fn write_string(&mut self, path: &Utf8Path, content: &str) -> Result<()>;
    /// List files directly inside `dir` whose extension equals `ext`
    /// exactly, sorted by file name.
    fn list_files(&mut self, dir: &Utf8Path, ext: &str) -> Result<Vec<Utf8PathBuf>>;
}

/// Reads and writes files on the local filesystem.
pub struct FsStore;

impl ComponentStore for FsStore {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }

    fn write_string(&mut self, path: &Utf8Path, content: &str) -> Result<()> {
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path))
    }

    fn list_files(&mut self, dir: &Utf8Path, ext: &str) -> Result<Vec<Utf8PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Read dir {}", dir))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let p = Utf8PathBuf::from_path_buf(entry.into_path())
                .map_err(|p| anyhow::anyhow!("Non-UTF8 path {}", p.display()))?;
            if has_extension(&p, ext) {
                files.push(p);
            }
        }
        Ok(files)
    }
}

pub(crate) fn has_extension(path: &Utf8Path, ext: &str) -> bool {
    path.extension() == Some(ext)
}
