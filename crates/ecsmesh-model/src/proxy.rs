use serde::{Deserialize, Serialize};

use crate::{ContainerName, KeyValue};

/// Kind of proxy that intercepts task traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProxyType {
    /// AWS App Mesh Envoy proxy.
    Appmesh,
}

/// Task-level proxy configuration.
///
/// Names the container that transparently intercepts inbound and outbound traffic, together with
/// the networking properties the proxy is started with. Properties keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfiguration {
    #[serde(rename = "type")]
    pub kind: ProxyType,
    pub container_name: ContainerName,
    pub properties: Vec<KeyValue>,
}

impl ProxyConfiguration {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|kv| kv.name() == name)
            .map(|kv| kv.value())
    }
}
