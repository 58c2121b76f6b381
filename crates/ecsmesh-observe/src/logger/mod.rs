mod config;
mod error;
mod format;
mod level;
mod log;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LoggerFormat;
pub use level::LoggerLevel;

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] when a global subscriber is already set.
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => log::Logger::text(cfg),
        LoggerFormat::Json => log::Logger::json(cfg),
    }
}
