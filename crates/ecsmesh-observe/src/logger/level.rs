use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Validated filter directive such as `info` or `warn,ecsmesh=debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(directive: &str) -> Result<Self, LoggerError> {
        let directive = directive.trim();
        if directive.is_empty() {
            return Err(LoggerError::InvalidLogLevel(directive.to_string()));
        }
        EnvFilter::try_new(directive)
            .map_err(|_| LoggerError::InvalidLogLevel(directive.to_string()))?;
        Ok(Self(directive.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.0).map_err(|_| LoggerError::InvalidLogLevel(self.0.clone()))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        assert_eq!(LoggerLevel::new("debug").unwrap().as_str(), "debug");
        assert_eq!(
            LoggerLevel::new(" warn,ecsmesh=trace ").unwrap().as_str(),
            "warn,ecsmesh=trace"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(LoggerLevel::new("").is_err());
        assert!(LoggerLevel::new("ecsmesh=notalevel").is_err());
    }
}
