use ecsmesh_model::{KeyOrder, TaskDefinition};

use crate::error::RenderError;
use crate::mesh::ENVOY_CONTAINER;
use crate::xray::XRAY_CONTAINER;

/// Serialize a task definition as pretty-printed JSON with a 2-space indent.
pub fn render_pretty(task: &TaskDefinition) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Parse a task definition previously produced by [`render_pretty`].
///
/// Sidecar key layouts are restored by container name, so rendering the result again gives the
/// same text.
pub fn parse(text: &str) -> Result<TaskDefinition, RenderError> {
    let mut task: TaskDefinition = serde_json::from_str(text)?;
    for c in &mut task.container_definitions {
        c.key_order = match c.name.as_str() {
            ENVOY_CONTAINER => KeyOrder::Proxy,
            XRAY_CONTAINER => KeyOrder::Daemon,
            _ => KeyOrder::Application,
        };
    }
    Ok(task)
}
