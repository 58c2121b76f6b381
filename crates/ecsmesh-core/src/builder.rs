use ecsmesh_model::{
    Compatibility, ContainerDefinition, ContainerDependency, DependencyCondition,
    LogConfiguration, NetworkMode, PortMapping, TaskDefinition, Ulimit,
};
use tracing::debug;

use crate::error::BuildError;
use crate::mesh::{ENVOY_CONTAINER, NOFILE_LIMIT, envoy_container, proxy_configuration};
use crate::naming::{LOG_STREAM_PREFIX, app_container_name, app_log_group, family};
use crate::params::{ResolvedParams, TaskParams};
use crate::xray::{XRAY_CONTAINER, xray_container};

const APP_PORT: u16 = 80;

/// Validate raw inputs and build the task definition.
pub fn build(params: &TaskParams) -> Result<TaskDefinition, BuildError> {
    let resolved = params.resolve()?;
    Ok(build_task_definition(&resolved))
}

/// Build the task definition from validated inputs.
///
/// Pure and deterministic: equal inputs give equal definitions. Containers are emitted in the order
/// application, `envoy`, `xray`.
pub fn build_task_definition(p: &ResolvedParams) -> TaskDefinition {
    let task = TaskDefinition {
        container_definitions: vec![app_container(p), envoy_container(p), xray_container(p)],
        family: family(p),
        network_mode: NetworkMode::Awsvpc,
        requires_compatibilities: vec![Compatibility::Fargate],
        cpu: p.cpu.clone(),
        memory: p.memory.clone(),
        task_role_arn: p.task_role_arn.clone(),
        execution_role_arn: p.execution_role_arn.clone(),
        proxy_configuration: proxy_configuration(),
    };

    debug!(
        target: "ecsmesh.core.builder",
        family = %task.family,
        region = %p.region,
        env_vars = p.environment.len(),
        "task definition built"
    );
    task
}

/// The application container.
///
/// It waits for `envoy` to become healthy and for `xray` to start, so no application traffic flows
/// before the proxy is ready.
fn app_container(p: &ResolvedParams) -> ContainerDefinition {
    ContainerDefinition::new(app_container_name(p), &p.image)
        .with_cpu(0)
        .with_environment(p.environment.clone())
        .with_log_configuration(LogConfiguration::awslogs(
            app_log_group(p),
            &p.region,
            LOG_STREAM_PREFIX,
        ))
        .with_port_mapping(PortMapping::tcp(APP_PORT))
        .with_dependency(ContainerDependency::new(
            ENVOY_CONTAINER,
            DependencyCondition::Healthy,
        ))
        .with_dependency(ContainerDependency::new(
            XRAY_CONTAINER,
            DependencyCondition::Start,
        ))
        .with_ulimit(Ulimit::nofile(NOFILE_LIMIT))
}
