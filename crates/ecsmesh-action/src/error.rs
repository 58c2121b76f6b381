use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create task definition file in {}: {source}", dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write task definition file: {0}")]
    Write(#[source] std::io::Error),
    #[error("cannot keep task definition file: {0}")]
    Keep(#[source] std::io::Error),
    #[error("cannot append to output file {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("output `{0}` must be a single line")]
    MultilineValue(String),
}
