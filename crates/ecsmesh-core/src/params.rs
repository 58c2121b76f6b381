use ecsmesh_model::TaskEnv;

use crate::{environment::decode_environment, error::BuildError};

pub const DEFAULT_REGION: &str = "eu-west-2";
pub const DEFAULT_CPU: &str = "256";
pub const DEFAULT_MEMORY: &str = "1024";

/// Raw inputs as supplied by the caller.
///
/// Every field is optional at this stage. Values are trimmed and an empty value counts as absent,
/// so a blank required input fails the same way as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskParams {
    pub service_name: Option<String>,
    pub image: Option<String>,
    /// JSON text, see [`decode_environment`].
    pub environment: Option<String>,
    pub deployment_environment: Option<String>,
    pub region: Option<String>,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub task_role_arn: Option<String>,
    pub execution_role_arn: Option<String>,
}

impl TaskParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_name(mut self, v: impl Into<String>) -> Self {
        self.service_name = Some(v.into());
        self
    }

    pub fn with_image(mut self, v: impl Into<String>) -> Self {
        self.image = Some(v.into());
        self
    }

    pub fn with_environment(mut self, json: impl Into<String>) -> Self {
        self.environment = Some(json.into());
        self
    }

    pub fn with_deployment_environment(mut self, v: impl Into<String>) -> Self {
        self.deployment_environment = Some(v.into());
        self
    }

    pub fn with_region(mut self, v: impl Into<String>) -> Self {
        self.region = Some(v.into());
        self
    }

    /// CPU units, given either as text or as a number.
    pub fn with_cpu(mut self, v: impl ToString) -> Self {
        self.cpu = Some(v.to_string());
        self
    }

    /// Memory in MiB, given either as text or as a number.
    pub fn with_memory(mut self, v: impl ToString) -> Self {
        self.memory = Some(v.to_string());
        self
    }

    pub fn with_task_role_arn(mut self, v: impl Into<String>) -> Self {
        self.task_role_arn = Some(v.into());
        self
    }

    pub fn with_execution_role_arn(mut self, v: impl Into<String>) -> Self {
        self.execution_role_arn = Some(v.into());
        self
    }

    /// Check required inputs, apply defaults and decode the environment list.
    ///
    /// Required inputs are checked in the order `service-name`, `image`, `deployment-environment`,
    /// `task-role-arn`, `execution-role-arn`; the first missing one is reported.
    /// The environment is decoded only after all required inputs are present.
    pub fn resolve(&self) -> Result<ResolvedParams, BuildError> {
        let service_name = required(&self.service_name, "service-name")?;
        let image = required(&self.image, "image")?;
        let deployment_environment =
            required(&self.deployment_environment, "deployment-environment")?;
        let task_role_arn = required(&self.task_role_arn, "task-role-arn")?;
        let execution_role_arn = required(&self.execution_role_arn, "execution-role-arn")?;

        let environment = match present(&self.environment) {
            Some(raw) => decode_environment(raw)?,
            None => TaskEnv::new(),
        };

        Ok(ResolvedParams {
            service_name,
            image,
            environment,
            deployment_environment,
            region: or_default(&self.region, DEFAULT_REGION),
            cpu: or_default(&self.cpu, DEFAULT_CPU),
            memory: or_default(&self.memory, DEFAULT_MEMORY),
            task_role_arn,
            execution_role_arn,
        })
    }
}

/// Inputs after validation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    pub service_name: String,
    pub image: String,
    pub environment: TaskEnv,
    pub deployment_environment: String,
    pub region: String,
    pub cpu: String,
    pub memory: String,
    pub task_role_arn: String,
    pub execution_role_arn: String,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required(v: &Option<String>, field: &'static str) -> Result<String, BuildError> {
    present(v)
        .map(str::to_string)
        .ok_or(BuildError::MissingRequiredField { field })
}

fn or_default(v: &Option<String>, default: &str) -> String {
    present(v).unwrap_or(default).to_string()
}
