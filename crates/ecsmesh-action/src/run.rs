use std::path::PathBuf;

use anyhow::Context;
use ecsmesh_core::{TaskParams, build, render_pretty};
use ecsmesh_model::TaskDefinition;
use tracing::info;

use crate::report::Reporter;
use crate::writer::TaskFileWriter;

/// Name of the step output carrying the file path.
pub const TASK_DEFINITION_OUTPUT: &str = "task-definition";

/// Build, write and report one task definition.
///
/// Inputs are validated before any file is created, so a failed build leaves nothing behind.
pub fn run(
    params: &TaskParams,
    writer: &TaskFileWriter,
    reporter: &mut impl Reporter,
) -> anyhow::Result<PathBuf> {
    let task: TaskDefinition = build(params)?;
    let text = render_pretty(&task)?;

    let path = writer
        .write(&text)
        .context("failed to write task definition")?;
    info!(
        target: "ecsmesh.action",
        family = %task.family,
        path = %path.display(),
        "task definition generated"
    );

    reporter.set_output(TASK_DEFINITION_OUTPUT, &path.display().to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::GithubReporter;
    use ecsmesh_core::{BuildError, ErrorKind, parse};

    fn params() -> TaskParams {
        TaskParams::new()
            .with_service_name("api")
            .with_image("registry/api:1.0")
            .with_deployment_environment("prod")
            .with_task_role_arn("arn:role:task")
            .with_execution_role_arn("arn:role:exec")
    }

    #[test]
    fn writes_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("github_output");
        let writer = TaskFileWriter::new(dir.path());
        let mut reporter = GithubReporter::new(Some(output.clone()), Vec::new());

        let path = run(
            &params().with_environment(r#"[{"name":"PORT","value":"80"}]"#),
            &writer,
            &mut reporter,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let task = parse(&text).unwrap();
        assert_eq!(task.family, "prod-api-service-task");
        assert_eq!(
            task.container_definitions[0]
                .environment
                .as_ref()
                .unwrap()
                .get("PORT"),
            Some("80")
        );

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["family"], "prod-api-service-task");
        assert!(text.starts_with("{\n  \"containerDefinitions\""));

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            format!("task-definition={}\n", path.display())
        );
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TaskFileWriter::new(dir.path());
        let mut reporter = GithubReporter::new(None, Vec::new());

        let mut p = params();
        p.image = None;
        let err = run(&p, &writer, &mut reporter).unwrap_err();

        let build_err = err.downcast_ref::<BuildError>().unwrap();
        assert_eq!(build_err.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(err.to_string(), "Input required and not supplied: image");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn malformed_environment_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TaskFileWriter::new(dir.path());
        let mut reporter = GithubReporter::new(None, Vec::new());

        let err = run(
            &params().with_environment("PORT=80"),
            &writer,
            &mut reporter,
        )
        .unwrap_err();

        let build_err = err.downcast_ref::<BuildError>().unwrap();
        assert_eq!(build_err.kind(), ErrorKind::MalformedInput);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
