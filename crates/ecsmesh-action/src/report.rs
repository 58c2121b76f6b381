//! Reporting results back to the GitHub Actions runner.
//!
//! Outputs go to the runner's output file as `name=value` lines. Without an output file the legacy
//! `::set-output` workflow command is printed instead. Failures are printed as `::error::` commands.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::OutputError;

/// Sink for step outputs and failure messages.
pub trait Reporter {
    /// Publish a step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError>;

    /// Mark the step as failed with a human-readable message.
    fn set_failed(&mut self, message: &str);
}

/// [`Reporter`] speaking the GitHub Actions runner protocol.
pub struct GithubReporter<W: Write> {
    output_file: Option<PathBuf>,
    out: W,
}

impl GithubReporter<std::io::Stdout> {
    pub fn stdout(output_file: Option<PathBuf>) -> Self {
        Self::new(output_file, std::io::stdout())
    }
}

impl<W: Write> GithubReporter<W> {
    pub fn new(output_file: Option<PathBuf>, out: W) -> Self {
        Self { output_file, out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for GithubReporter<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        if value.contains(['\n', '\r']) {
            return Err(OutputError::MultilineValue(name.to_string()));
        }

        match &self.output_file {
            Some(path) => {
                let report = |source| OutputError::Report {
                    path: path.clone(),
                    source,
                };
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(report)?;
                writeln!(file, "{name}={value}").map_err(report)?;
            }
            None => {
                // Nothing sensible to do if stdout is gone.
                let _ = writeln!(
                    self.out,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
            }
        }
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        let _ = writeln!(self.out, "::error::{}", escape_data(message));
        let _ = self.out.flush();
    }
}

/// Escape the data part of a workflow command.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
