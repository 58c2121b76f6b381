use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::OutputError;

const FILE_PREFIX: &str = "task-definition-";
const FILE_SUFFIX: &str = ".json";

/// Writes rendered task definitions to fresh files in one directory.
///
/// Each call creates a new `task-definition-XXXXXX.json` file and leaves it on disk.
#[derive(Debug, Clone)]
pub struct TaskFileWriter {
    dir: PathBuf,
}

impl TaskFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the file, write `contents` and return its absolute path.
    pub fn write(&self, contents: &str) -> Result<PathBuf, OutputError> {
        let mut file = tempfile::Builder::new()
            .prefix(FILE_PREFIX)
            .suffix(FILE_SUFFIX)
            .tempfile_in(&self.dir)
            .map_err(|source| OutputError::Create {
                dir: self.dir.clone(),
                source,
            })?;

        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .map_err(OutputError::Write)?;

        let (_, path) = file.keep().map_err(|e| OutputError::Keep(e.error))?;
        let path = std::path::absolute(&path).map_err(OutputError::Keep)?;

        debug!(target: "ecsmesh.action.writer", path = %path.display(), bytes = contents.len(), "task file written");
        Ok(path)
    }
}
