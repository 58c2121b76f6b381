//! Names derived from the service and deployment environment.

use crate::params::ResolvedParams;

/// Stream prefix shared by every container's log configuration.
pub const LOG_STREAM_PREFIX: &str = "ecs";

/// `{env}-{service}-service-task`
pub fn family(p: &ResolvedParams) -> String {
    format!(
        "{}-{}-service-task",
        p.deployment_environment, p.service_name
    )
}

/// `{service}-service-container`
pub fn app_container_name(p: &ResolvedParams) -> String {
    format!("{}-service-container", p.service_name)
}

/// `/ecs/{env}/{service}-service-task`
///
/// Sidecar log groups nest below this path.
pub fn app_log_group(p: &ResolvedParams) -> String {
    format!(
        "/ecs/{}/{}-service-task",
        p.deployment_environment, p.service_name
    )
}

/// Log group of a sidecar: `{app_log_group}/{sidecar}`.
pub fn sidecar_log_group(p: &ResolvedParams, sidecar: &str) -> String {
    format!("{}/{}", app_log_group(p), sidecar)
}

/// `mesh/{env}-mesh/virtualNode/{service}`
pub fn virtual_node_name(p: &ResolvedParams) -> String {
    format!(
        "mesh/{}-mesh/virtualNode/{}",
        p.deployment_environment, p.service_name
    )
}
