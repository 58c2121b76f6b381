use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::{ContainerName, LogConfiguration, TaskEnv};

/// Transport protocol of a port mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// A port exposed by a container.
///
/// Serialized as `hostPort, protocol, containerPort` when a host port is set and as
/// `containerPort, protocol` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    /// Host port; in `awsvpc` mode it must equal the container port when set.
    #[serde(default)]
    pub host_port: Option<u16>,
    pub protocol: Protocol,
    pub container_port: u16,
}

impl Serialize for PortMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self.host_port {
            Some(host_port) => {
                map.serialize_entry("hostPort", &host_port)?;
                map.serialize_entry("protocol", &self.protocol)?;
                map.serialize_entry("containerPort", &self.container_port)?;
            }
            None => {
                map.serialize_entry("containerPort", &self.container_port)?;
                map.serialize_entry("protocol", &self.protocol)?;
            }
        }
        map.end()
    }
}

impl PortMapping {
    /// TCP mapping with the host port pinned to the container port.
    pub fn tcp(port: u16) -> Self {
        Self {
            host_port: Some(port),
            protocol: Protocol::Tcp,
            container_port: port,
        }
    }

    /// UDP mapping on the container port only.
    pub fn udp(port: u16) -> Self {
        Self {
            host_port: None,
            protocol: Protocol::Udp,
            container_port: port,
        }
    }
}

/// Condition a dependency must reach before the dependent container starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DependencyCondition {
    /// The dependency has been started.
    Start,
    /// The dependency ran to completion.
    Complete,
    /// The dependency exited with status zero.
    Success,
    /// The dependency passed its health check.
    Healthy,
}

/// Startup ordering edge between two containers of the same task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDependency {
    pub container_name: ContainerName,
    pub condition: DependencyCondition,
}

impl ContainerDependency {
    pub fn new(container_name: impl Into<ContainerName>, condition: DependencyCondition) -> Self {
        Self {
            container_name: container_name.into(),
            condition,
        }
    }
}

/// Resource kind limited by a [`Ulimit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UlimitName {
    Core,
    Memlock,
    Nofile,
    Nproc,
}

/// Per-container resource limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ulimit {
    pub name: UlimitName,
    pub soft_limit: u32,
    pub hard_limit: u32,
}

impl Ulimit {
    /// Open file descriptor limit with equal soft and hard values.
    pub fn nofile(limit: u32) -> Self {
        Self {
            name: UlimitName::Nofile,
            soft_limit: limit,
            hard_limit: limit,
        }
    }
}

/// Container health check.
///
/// All durations are in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub retries: u32,
    pub command: Vec<String>,
    pub timeout: u32,
    pub interval: u32,
    pub start_period: u32,
}

impl HealthCheck {
    /// Health check running `script` through the container shell.
    pub fn shell(script: impl Into<String>) -> Self {
        Self {
            retries: 3,
            command: vec!["CMD-SHELL".to_string(), script.into()],
            timeout: 5,
            interval: 30,
            start_period: 0,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_timeout(mut self, secs: u32) -> Self {
        self.timeout = secs;
        self
    }

    pub fn with_interval(mut self, secs: u32) -> Self {
        self.interval = secs;
        self
    }

    pub fn with_start_period(mut self, secs: u32) -> Self {
        self.start_period = secs;
        self
    }
}

/// Order in which a container's keys are written.
///
/// Each layout lists every key; unset optional keys are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    /// `name, image, cpu, environment, healthCheck, user, logConfiguration, portMappings, dependsOn, ulimits`
    #[default]
    Application,
    /// Like [`KeyOrder::Application`] with `environment` moved ahead of `image`.
    Proxy,
    /// Like [`KeyOrder::Application`] with `portMappings` moved ahead of `user`.
    Daemon,
}

#[derive(Clone, Copy)]
enum Key {
    Name,
    Image,
    Cpu,
    Environment,
    HealthCheck,
    User,
    LogConfiguration,
    PortMappings,
    DependsOn,
    Ulimits,
}

impl KeyOrder {
    fn keys(self) -> &'static [Key] {
        use Key::*;
        match self {
            KeyOrder::Application => &[
                Name,
                Image,
                Cpu,
                Environment,
                HealthCheck,
                User,
                LogConfiguration,
                PortMappings,
                DependsOn,
                Ulimits,
            ],
            KeyOrder::Proxy => &[
                Name,
                Environment,
                Image,
                Cpu,
                HealthCheck,
                User,
                LogConfiguration,
                PortMappings,
                DependsOn,
                Ulimits,
            ],
            KeyOrder::Daemon => &[
                Name,
                Image,
                Cpu,
                Environment,
                HealthCheck,
                PortMappings,
                User,
                LogConfiguration,
                DependsOn,
                Ulimits,
            ],
        }
    }
}

/// One container of a task definition.
///
/// Optional parts are omitted from the serialized form when unset. Keys are written in the
/// order given by [`KeyOrder`]; the layout is not part of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    pub name: ContainerName,
    pub image: String,
    /// Reserved CPU units; `0` defers to the task-level allocation.
    #[serde(default)]
    pub cpu: Option<u32>,
    #[serde(default)]
    pub environment: Option<TaskEnv>,
    #[serde(default)]
    pub health_check: Option<HealthCheck>,
    /// User the container process runs as.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub log_configuration: Option<LogConfiguration>,
    #[serde(default)]
    pub port_mappings: Vec<PortMapping>,
    #[serde(default)]
    pub depends_on: Vec<ContainerDependency>,
    #[serde(default)]
    pub ulimits: Vec<Ulimit>,
    #[serde(skip)]
    pub key_order: KeyOrder,
}

impl Serialize for ContainerDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in self.key_order.keys() {
            match key {
                Key::Name => map.serialize_entry("name", &self.name)?,
                Key::Image => map.serialize_entry("image", &self.image)?,
                Key::Cpu => {
                    if let Some(cpu) = &self.cpu {
                        map.serialize_entry("cpu", cpu)?;
                    }
                }
                Key::Environment => {
                    if let Some(env) = &self.environment {
                        map.serialize_entry("environment", env)?;
                    }
                }
                Key::HealthCheck => {
                    if let Some(check) = &self.health_check {
                        map.serialize_entry("healthCheck", check)?;
                    }
                }
                Key::User => {
                    if let Some(user) = &self.user {
                        map.serialize_entry("user", user)?;
                    }
                }
                Key::LogConfiguration => {
                    if let Some(cfg) = &self.log_configuration {
                        map.serialize_entry("logConfiguration", cfg)?;
                    }
                }
                Key::PortMappings => {
                    if !self.port_mappings.is_empty() {
                        map.serialize_entry("portMappings", &self.port_mappings)?;
                    }
                }
                Key::DependsOn => {
                    if !self.depends_on.is_empty() {
                        map.serialize_entry("dependsOn", &self.depends_on)?;
                    }
                }
                Key::Ulimits => {
                    if !self.ulimits.is_empty() {
                        map.serialize_entry("ulimits", &self.ulimits)?;
                    }
                }
            }
        }
        map.end()
    }
}

impl ContainerDefinition {
    /// Bare container with only a name and an image.
    pub fn new(name: impl Into<ContainerName>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            cpu: None,
            environment: None,
            health_check: None,
            user: None,
            log_configuration: None,
            port_mappings: Vec::new(),
            depends_on: Vec::new(),
            ulimits: Vec::new(),
            key_order: KeyOrder::default(),
        }
    }

    pub fn with_key_order(mut self, order: KeyOrder) -> Self {
        self.key_order = order;
        self
    }

    pub fn with_cpu(mut self, cpu: u32) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_environment(mut self, env: TaskEnv) -> Self {
        self.environment = Some(env);
        self
    }

    pub fn with_health_check(mut self, check: HealthCheck) -> Self {
        self.health_check = Some(check);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_log_configuration(mut self, cfg: LogConfiguration) -> Self {
        self.log_configuration = Some(cfg);
        self
    }

    pub fn with_port_mapping(mut self, mapping: PortMapping) -> Self {
        self.port_mappings.push(mapping);
        self
    }

    pub fn with_dependency(mut self, dep: ContainerDependency) -> Self {
        self.depends_on.push(dep);
        self
    }

    pub fn with_ulimit(mut self, ulimit: Ulimit) -> Self {
        self.ulimits.push(ulimit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_container_serializes_name_and_image_only() {
        let c = ContainerDefinition::new("xray", "amazon/aws-xray-daemon");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"name":"xray","image":"amazon/aws-xray-daemon"}"#);
    }

    #[test]
    fn empty_environment_is_kept_when_set() {
        let c = ContainerDefinition::new("app", "img").with_environment(TaskEnv::new());
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["environment"], serde_json::json!([]));
    }

    #[test]
    fn udp_mapping_has_no_host_port() {
        let json = serde_json::to_value(PortMapping::udp(2000)).unwrap();
        assert_eq!(json, serde_json::json!({ "protocol": "udp", "containerPort": 2000 }));
    }

    #[test]
    fn port_mapping_key_order_follows_host_port() {
        let tcp = serde_json::to_string(&PortMapping::tcp(80)).unwrap();
        assert_eq!(tcp, r#"{"hostPort":80,"protocol":"tcp","containerPort":80}"#);

        let udp = serde_json::to_string(&PortMapping::udp(2000)).unwrap();
        assert_eq!(udp, r#"{"containerPort":2000,"protocol":"udp"}"#);
    }

    #[test]
    fn proxy_layout_writes_environment_before_image() {
        let c = ContainerDefinition::new("envoy", "envoy:1")
            .with_environment(TaskEnv::single("A", "1"))
            .with_user("1337")
            .with_key_order(KeyOrder::Proxy);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"name":"envoy","environment":[{"name":"A","value":"1"}],"image":"envoy:1","user":"1337"}"#
        );
    }

    #[test]
    fn daemon_layout_writes_port_mappings_before_user() {
        let c = ContainerDefinition::new("xray", "xray:1")
            .with_port_mapping(PortMapping::udp(2000))
            .with_user("1337")
            .with_key_order(KeyOrder::Daemon);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"name":"xray","image":"xray:1","portMappings":[{"containerPort":2000,"protocol":"udp"}],"user":"1337"}"#
        );
    }

    #[test]
    fn key_order_is_not_read_back() {
        let c = ContainerDefinition::new("envoy", "envoy:1").with_key_order(KeyOrder::Proxy);
        let back: ContainerDefinition =
            serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back.key_order, KeyOrder::Application);
        assert_eq!(back.with_key_order(KeyOrder::Proxy), c);
    }

    #[test]
    fn dependency_condition_is_uppercase() {
        let dep = ContainerDependency::new("envoy", DependencyCondition::Healthy);
        let json = serde_json::to_string(&dep).unwrap();
        assert_eq!(json, r#"{"containerName":"envoy","condition":"HEALTHY"}"#);
    }

    #[test]
    fn nofile_ulimit_and_health_check_use_camel_case() {
        let json = serde_json::to_value(Ulimit::nofile(65535)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "nofile", "softLimit": 65535, "hardLimit": 65535 })
        );

        let check = HealthCheck::shell("true").with_start_period(10);
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["startPeriod"], 10);
        assert_eq!(json["command"], serde_json::json!(["CMD-SHELL", "true"]));
    }

    #[test]
    fn missing_optional_parts_deserialize_as_unset() {
        let c: ContainerDefinition =
            serde_json::from_str(r#"{"name":"xray","image":"amazon/aws-xray-daemon"}"#).unwrap();
        assert_eq!(c, ContainerDefinition::new("xray", "amazon/aws-xray-daemon"));
    }
}
