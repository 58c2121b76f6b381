mod kv;
pub use kv::KeyValue;

mod task_env;
pub use task_env::TaskEnv;

mod logging;
pub use logging::{LogConfiguration, LogDriver, LogOptions};

mod container;
pub use container::{
    ContainerDefinition, ContainerDependency, DependencyCondition, HealthCheck, KeyOrder,
    PortMapping, Protocol, Ulimit, UlimitName,
};

mod proxy;
pub use proxy::{ProxyConfiguration, ProxyType};

mod task;
pub use task::{Compatibility, NetworkMode, TaskDefinition};

/// Name of a container inside a task definition.
///
/// Used by dependency declarations and the proxy configuration to refer to sibling containers.
pub type ContainerName = String;
