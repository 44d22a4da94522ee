use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Create `dir` (and parents) if missing, then check it is a writable directory.
/// Calling it on an existing directory is fine.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir("path is not a directory".into()));
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes whole files through a temp file in the target directory and a rename,
/// so readers see either the old content or the new one.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writer for the directory holding `path`.
    pub fn for_target(path: &Path) -> Self {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::new(dir)
    }

    /// Creates the directory if it is missing; the run's writability check
    /// happens once in `ensure_output_dir`, not per file.
    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        fs::create_dir_all(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // persist() renames over an existing file.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
