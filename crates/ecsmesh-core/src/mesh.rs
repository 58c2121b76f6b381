//! App Mesh Envoy sidecar and the task-level proxy configuration that routes traffic through it.

use ecsmesh_model::{
    ContainerDefinition, HealthCheck, KeyOrder, KeyValue, LogConfiguration, ProxyConfiguration,
    ProxyType, TaskEnv, Ulimit,
};

use crate::naming::{LOG_STREAM_PREFIX, sidecar_log_group, virtual_node_name};
use crate::params::ResolvedParams;

pub const ENVOY_CONTAINER: &str = "envoy";

/// UID the proxy runs as; the proxy ignores its own traffic by this UID.
pub const PROXY_UID: &str = "1337";

/// Per-container open file limit shared by the application and the proxy.
pub const NOFILE_LIMIT: u32 = 65535;

const ENVOY_REGISTRY_ACCOUNT: &str = "840364872350";
const ENVOY_IMAGE: &str = "aws-appmesh-envoy:v1.18.3.0-prod";
const VIRTUAL_NODE_ENV: &str = "APPMESH_VIRTUAL_NODE_NAME";
const ENVOY_HEALTH_COMMAND: &str =
    "curl -s http://localhost:9901/server_info | grep state | grep -q LIVE";

const PROXY_INGRESS_PORT: &str = "15000";
const PROXY_EGRESS_PORT: &str = "15001";
const APP_PORTS: &str = "80";
// ECS task metadata/credentials endpoint and EC2 instance metadata endpoint.
const EGRESS_IGNORED_IPS: &str = "169.254.170.2,169.254.169.254";

/// Region-pinned Envoy image in the App Mesh ECR registry.
pub fn envoy_image(region: &str) -> String {
    format!("{ENVOY_REGISTRY_ACCOUNT}.dkr.ecr.{region}.amazonaws.com/{ENVOY_IMAGE}")
}

/// The Envoy container definition.
pub fn envoy_container(p: &ResolvedParams) -> ContainerDefinition {
    ContainerDefinition::new(ENVOY_CONTAINER, envoy_image(&p.region))
        .with_environment(TaskEnv::single(VIRTUAL_NODE_ENV, virtual_node_name(p)))
        .with_health_check(
            HealthCheck::shell(ENVOY_HEALTH_COMMAND)
                .with_retries(3)
                .with_timeout(2)
                .with_interval(5)
                .with_start_period(10),
        )
        .with_user(PROXY_UID)
        .with_log_configuration(LogConfiguration::awslogs(
            sidecar_log_group(p, ENVOY_CONTAINER),
            &p.region,
            LOG_STREAM_PREFIX,
        ))
        .with_ulimit(Ulimit::nofile(NOFILE_LIMIT))
        .with_key_order(KeyOrder::Proxy)
}

/// Proxy configuration naming Envoy as the traffic interceptor.
///
/// `IgnoredGID` and `EgressIgnoredPorts` are always empty.
pub fn proxy_configuration() -> ProxyConfiguration {
    ProxyConfiguration {
        kind: ProxyType::Appmesh,
        container_name: ENVOY_CONTAINER.to_string(),
        properties: vec![
            KeyValue::new("ProxyIngressPort", PROXY_INGRESS_PORT),
            KeyValue::new("AppPorts", APP_PORTS),
            KeyValue::new("EgressIgnoredIPs", EGRESS_IGNORED_IPS),
            KeyValue::new("IgnoredGID", ""),
            KeyValue::new("EgressIgnoredPorts", ""),
            KeyValue::new("IgnoredUID", PROXY_UID),
            KeyValue::new("ProxyEgressPort", PROXY_EGRESS_PORT),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TaskParams;

    fn params(region: &str) -> ResolvedParams {
        TaskParams::new()
            .with_service_name("api")
            .with_image("img")
            .with_deployment_environment("prod")
            .with_region(region)
            .with_task_role_arn("t")
            .with_execution_role_arn("e")
            .resolve()
            .unwrap()
    }

    #[test]
    fn image_is_pinned_per_region() {
        assert_eq!(
            envoy_image("us-east-1"),
            "840364872350.dkr.ecr.us-east-1.amazonaws.com/aws-appmesh-envoy:v1.18.3.0-prod"
        );
    }

    #[test]
    fn envoy_declares_virtual_node_and_health_check() {
        let c = envoy_container(&params("eu-west-2"));

        assert_eq!(c.name, "envoy");
        let env = c.environment.as_ref().unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(
            env.get("APPMESH_VIRTUAL_NODE_NAME"),
            Some("mesh/prod-mesh/virtualNode/api")
        );

        let hc = c.health_check.as_ref().unwrap();
        assert_eq!(hc.command[0], "CMD-SHELL");
        assert_eq!(hc.command[1], ENVOY_HEALTH_COMMAND);
        assert_eq!((hc.retries, hc.timeout, hc.interval, hc.start_period), (3, 2, 5, 10));

        assert_eq!(c.user.as_deref(), Some("1337"));
        assert_eq!(c.ulimits, vec![Ulimit::nofile(65535)]);
        assert!(c.depends_on.is_empty());
        assert!(c.port_mappings.is_empty());
        assert!(c.cpu.is_none());
    }

    #[test]
    fn envoy_logs_nest_under_app_group() {
        let c = envoy_container(&params("us-east-1"));
        let logs = c.log_configuration.unwrap();
        assert_eq!(logs.group(), "/ecs/prod/api-service-task/envoy");
        assert_eq!(logs.region(), "us-east-1");
    }

    #[test]
    fn proxy_properties_are_fixed_and_ordered() {
        let cfg = proxy_configuration();
        assert_eq!(cfg.kind, ProxyType::Appmesh);
        assert_eq!(cfg.container_name, ENVOY_CONTAINER);

        let props: Vec<_> = cfg
            .properties
            .iter()
            .map(|kv| (kv.name(), kv.value()))
            .collect();
        assert_eq!(
            props,
            [
                ("ProxyIngressPort", "15000"),
                ("AppPorts", "80"),
                ("EgressIgnoredIPs", "169.254.170.2,169.254.169.254"),
                ("IgnoredGID", ""),
                ("EgressIgnoredPorts", ""),
                ("IgnoredUID", "1337"),
                ("ProxyEgressPort", "15001"),
            ]
        );
    }
}
