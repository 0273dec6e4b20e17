//! Serializable configuration for a shape shifter
//!
//! The callable parts of a configuration (processors) are only set through
//! [`ShapeShifterBuilder`](crate::ShapeShifterBuilder). Everything else can be
//! loaded from JSON and applied with
//! [`ShapeShifterBuilder::config`](crate::ShapeShifterBuilder::config).
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do when the input and the template disagree on container kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Fail the transform with `Error::ShapeMismatch`
    #[default]
    Error,
    /// Ignore the template at that node and keep the input's own shape
    Mirror,
    /// Produce `null` at that node
    Null,
}

/// Data-only configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShifterConfig {
    /// Template used when a call does not supply one
    pub template: Option<Value>,
    /// Policy for mapping/sequence disagreements, `MismatchPolicy::Error` when never set
    pub on_mismatch: Option<MismatchPolicy>,
    /// Maximum recursion depth below the start node, unlimited when absent
    pub max_depth: Option<usize>,
}

impl ShifterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ShifterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ShifterConfig::default());
        assert!(config.on_mismatch.is_none());
        assert!(config.template.is_none());
        assert!(config.max_depth.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = ShifterConfig::from_value(json!({
            "template": {"name": null},
            "on_mismatch": "mirror",
            "max_depth": 8
        }))
        .unwrap();

        assert_eq!(config.template, Some(json!({"name": null})));
        assert_eq!(config.on_mismatch, Some(MismatchPolicy::Mirror));
        assert_eq!(config.max_depth, Some(8));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ShifterConfig::from_json_str(r#"{"leaf_processor": "upper"}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));

        let err = ShifterConfig::from_json_str(r#"{"on_mismatch": "explode"}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_policy_serializes_snake_case() {
        assert_eq!(serde_json::to_value(MismatchPolicy::Null).unwrap(), json!("null"));
    }
}
