//! Logging setup shared by ecsmesh binaries.
//!
//! Logs are written to stderr so stdout stays free for workflow commands and the produced path.
mod logger;
pub use logger::*;
