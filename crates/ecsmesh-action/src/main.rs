use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};

use ecsmesh_observe::{LoggerConfig, init_logger};

mod args;
mod error;
mod report;
mod run;
mod writer;

use args::Args;
use report::{GithubReporter, Reporter};
use writer::TaskFileWriter;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => return reject_args(e, &mut GithubReporter::stdout(None)),
    };

    let cfg = LoggerConfig {
        format: args.log_format,
        level: args.log_level.clone(),
        ..Default::default()
    };
    if let Err(e) = init_logger(&cfg) {
        eprintln!("logger init failed: {e}");
    }

    let writer = TaskFileWriter::new(args.temp_dir());
    let mut reporter = GithubReporter::stdout(args.output_file());

    match run::run(&args.task_params(), &writer, &mut reporter) {
        Ok(path) => {
            info!(dir = %writer.dir().display(), "done");
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "task definition generation failed");
            reporter.set_failed(&message);
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` are printed by clap itself and are not failures.
fn is_informational(e: &clap::Error) -> bool {
    matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Report a command line error through the runner so the step shows it as an annotation.
fn reject_args(e: clap::Error, reporter: &mut impl Reporter) -> ExitCode {
    reporter.set_failed(e.to_string().trim_end());
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_flag_value_is_reported_as_error_annotation() {
        let e = Args::try_parse_from(["ecsmesh-action", "--log-format", "xml"]).unwrap_err();
        assert!(!is_informational(&e));

        let mut reporter = GithubReporter::new(None, Vec::new());
        reject_args(e, &mut reporter);

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.starts_with("::error::"), "{out}");
        assert!(out.contains("xml"), "{out}");
        assert_eq!(out.lines().count(), 1, "{out}");
    }

    #[test]
    fn help_and_version_are_not_failures() {
        for flag in ["--help", "--version"] {
            let e = Args::try_parse_from(["ecsmesh-action", flag]).unwrap_err();
            assert!(is_informational(&e), "{flag}");
        }
    }
}
