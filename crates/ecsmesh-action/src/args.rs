use std::path::PathBuf;

use clap::Parser;
use ecsmesh_core::TaskParams;
use ecsmesh_observe::{LoggerFormat, LoggerLevel};

/// Generate an App Mesh enabled ECS Fargate task definition.
///
/// Every input can be passed as a flag or through the environment variable a GitHub Actions runner
/// sets for the matching action input.
#[derive(Debug, Parser)]
#[command(name = "ecsmesh-action")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Service name, used for the family, container name and log groups
    #[arg(long, env = "INPUT_SERVICE-NAME")]
    pub service_name: Option<String>,

    /// Application image reference
    #[arg(long, env = "INPUT_IMAGE")]
    pub image: Option<String>,

    /// Application environment as JSON, e.g. '[{"name":"PORT","value":"80"}]'
    #[arg(long, env = "INPUT_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Deployment environment name (e.g. prod, staging)
    #[arg(long, env = "INPUT_DEPLOYMENT-ENVIRONMENT")]
    pub deployment_environment: Option<String>,

    /// AWS region [default: eu-west-2]
    #[arg(long, env = "INPUT_REGION")]
    pub region: Option<String>,

    /// Task CPU units [default: 256]
    #[arg(long, env = "INPUT_CPU")]
    pub cpu: Option<String>,

    /// Task memory in MiB [default: 1024]
    #[arg(long, env = "INPUT_MEMORY")]
    pub memory: Option<String>,

    /// IAM role ARN assumed by the task
    #[arg(long, env = "INPUT_TASK-ROLE-ARN")]
    pub task_role_arn: Option<String>,

    /// IAM role ARN used by the ECS agent to pull images and ship logs
    #[arg(long, env = "INPUT_EXECUTION-ROLE-ARN")]
    pub execution_role_arn: Option<String>,

    /// Directory for the generated file (defaults to the OS temp dir)
    #[arg(long, env = "RUNNER_TEMP")]
    pub temp_dir: Option<PathBuf>,

    /// File receiving `task-definition=<path>`; without it a `::set-output` command is printed
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Log filter directive
    #[arg(long, env = "ECSMESH_LOG", default_value = "info")]
    pub log_level: LoggerLevel,

    /// Log format: text or json
    #[arg(long, env = "ECSMESH_LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,
}

impl Args {
    /// Raw builder inputs; blank values are dealt with by [`TaskParams::resolve`].
    pub fn task_params(&self) -> TaskParams {
        TaskParams {
            service_name: self.service_name.clone(),
            image: self.image.clone(),
            environment: self.environment.clone(),
            deployment_environment: self.deployment_environment.clone(),
            region: self.region.clone(),
            cpu: self.cpu.clone(),
            memory: self.memory.clone(),
            task_role_arn: self.task_role_arn.clone(),
            execution_role_arn: self.execution_role_arn.clone(),
        }
    }

    /// Directory the task file is created in.
    pub fn temp_dir(&self) -> PathBuf {
        non_empty(&self.temp_dir).unwrap_or_else(std::env::temp_dir)
    }

    /// Output file of the runner, if any.
    pub fn output_file(&self) -> Option<PathBuf> {
        non_empty(&self.output_file)
    }
}

fn non_empty(p: &Option<PathBuf>) -> Option<PathBuf> {
    p.as_ref().filter(|p| !p.as_os_str().is_empty()).cloned()
}
