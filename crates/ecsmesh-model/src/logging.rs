use serde::{Deserialize, Serialize};

/// Log driver used by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDriver {
    /// CloudWatch Logs.
    Awslogs,
}

/// Options understood by the `awslogs` driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOptions {
    #[serde(rename = "awslogs-group")]
    pub group: String,
    #[serde(rename = "awslogs-region")]
    pub region: String,
    #[serde(rename = "awslogs-stream-prefix")]
    pub stream_prefix: String,
}

/// Logging configuration of a single container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfiguration {
    pub log_driver: LogDriver,
    pub options: LogOptions,
}

impl LogConfiguration {
    /// Build an `awslogs` configuration for the given group, region and stream prefix.
    pub fn awslogs(
        group: impl Into<String>,
        region: impl Into<String>,
        stream_prefix: impl Into<String>,
    ) -> Self {
        Self {
            log_driver: LogDriver::Awslogs,
            options: LogOptions {
                group: group.into(),
                region: region.into(),
                stream_prefix: stream_prefix.into(),
            },
        }
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.options.group
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.options.region
    }
}
