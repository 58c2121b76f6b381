use ecsmesh_model::{ContainerDefinition, KeyOrder, LogConfiguration, PortMapping};

use crate::mesh::PROXY_UID;
use crate::naming::{LOG_STREAM_PREFIX, sidecar_log_group};
use crate::params::ResolvedParams;

pub const XRAY_CONTAINER: &str = "xray";

const XRAY_IMAGE: &str = "amazon/aws-xray-daemon";
const XRAY_DAEMON_PORT: u16 = 2000;

/// The X-Ray daemon container definition.
///
/// Has no health check and no dependencies of its own.
pub fn xray_container(p: &ResolvedParams) -> ContainerDefinition {
    ContainerDefinition::new(XRAY_CONTAINER, XRAY_IMAGE)
        .with_port_mapping(PortMapping::udp(XRAY_DAEMON_PORT))
        .with_user(PROXY_UID)
        .with_log_configuration(LogConfiguration::awslogs(
            sidecar_log_group(p, XRAY_CONTAINER),
            &p.region,
            LOG_STREAM_PREFIX,
        ))
        .with_key_order(KeyOrder::Daemon)
}
