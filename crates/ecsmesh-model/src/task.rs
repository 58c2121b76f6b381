use serde::{Deserialize, Serialize};

use crate::{ContainerDefinition, ProxyConfiguration};

/// Docker networking mode of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// Each task gets its own elastic network interface.
    Awsvpc,
    Bridge,
    Host,
    None,
}

/// Launch type a task definition is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compatibility {
    Ec2,
    Fargate,
    External,
}

/// Complete ECS task definition.
///
/// Top-level keys serialize in declaration order:
/// `containerDefinitions`, `family`, `networkMode`, `requiresCompatibilities`, `cpu`, `memory`,
/// `taskRoleArn`, `executionRoleArn`, `proxyConfiguration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub container_definitions: Vec<ContainerDefinition>,
    pub family: String,
    pub network_mode: NetworkMode,
    pub requires_compatibilities: Vec<Compatibility>,
    /// Task CPU units, kept as text (`"256"`).
    pub cpu: String,
    /// Task memory in MiB, kept as text (`"1024"`).
    pub memory: String,
    pub task_role_arn: String,
    pub execution_role_arn: String,
    pub proxy_configuration: ProxyConfiguration,
}

impl TaskDefinition {
    /// Find a container definition by name.
    pub fn container(&self, name: &str) -> Option<&ContainerDefinition> {
        self.container_definitions.iter().find(|c| c.name == name)
    }
}
