//! Decoding of the `environment` input.
//!
//! The input is JSON text holding an array of `{ "name": ..., "value": ... }` objects, for example
//! `[{"name":"PORT","value":"80"}]`. Both members must be strings and no other members are accepted.
//! Order is preserved.

use ecsmesh_model::{KeyValue, TaskEnv};
use tracing::trace;

use crate::error::BuildError;

/// Input name used in error reports.
pub const ENVIRONMENT_FIELD: &str = "environment";

/// Decode the JSON text of the `environment` input into a typed list.
///
/// Empty (or whitespace-only) text decodes to an empty list.
pub fn decode_environment(raw: &str) -> Result<TaskEnv, BuildError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(TaskEnv::new());
    }

    let items: Vec<KeyValue> =
        serde_json::from_str(raw).map_err(|e| BuildError::MalformedInput {
            field: ENVIRONMENT_FIELD,
            reason: e.to_string(),
        })?;

    trace!(target: "ecsmesh.core.environment", count = items.len(), "environment decoded");
    Ok(TaskEnv::from(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_text_is_empty_env() {
        assert!(decode_environment("").unwrap().is_empty());
        assert!(decode_environment("   \n").unwrap().is_empty());
        assert!(decode_environment("[]").unwrap().is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let env = decode_environment(
            r#"[ {"name":"B","value":"2"}, {"name":"A","value":"1"}, {"name":"B","value":"3"} ]"#,
        )
        .unwrap();

        let pairs: Vec<_> = env.iter().map(|kv| (kv.name(), kv.value())).collect();
        assert_eq!(pairs, [("B", "2"), ("A", "1"), ("B", "3")]);
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = decode_environment("[{name: PORT}]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.field(), ENVIRONMENT_FIELD);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        for raw in [
            r#"{"name":"PORT","value":"80"}"#,
            r#"["PORT=80"]"#,
            r#"[{"name":"PORT"}]"#,
            r#"[{"name":"PORT","value":80}]"#,
            "null",
            "42",
        ] {
            let err = decode_environment(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "input: {raw}");
        }
    }

    #[test]
    fn extra_keys_in_an_entry_are_malformed() {
        let err = decode_environment(r#"[{"name":"A","value":"1","extra":"x"}]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("extra"), "{err}");
    }
}
