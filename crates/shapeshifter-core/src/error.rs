//! Error types for the Shapeshifter core library
//!
//! This module defines the error handling system for Shapeshifter,
//! using thiserror for ergonomic error definitions and anyhow for flexible error contexts.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use crate::path::PathError;
use std::fmt;
use thiserror::Error;

/// Main error type for Shapeshifter operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid builder or configuration input, raised before any transform runs
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A path string could not be parsed
    #[error("Invalid path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: PathError,
    },

    /// Input and template disagree on container kind at a node
    #[error("Shape mismatch at '{path}': template expects {expected}, input is {found}")]
    ShapeMismatch {
        path: String,
        expected: ShapeKind,
        found: ShapeKind,
    },

    /// Recursion went deeper than the configured limit
    #[error("Depth limit of {limit} exceeded at '{path}'")]
    DepthLimit {
        path: String,
        limit: usize,
    },

    /// Failure raised by a caller-supplied processor
    #[error("Processor failed at '{path}': {message}")]
    Processor {
        path: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Structural kind of a value or template node, used in mismatch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Mapping,
    Sequence,
    Scalar,
}

impl Error {
    /// Create a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a processor error for callbacks that want to report a failure
    pub fn processor(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Processor {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a processor error wrapping an arbitrary cause
    pub fn processor_with_source(
        path: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Processor {
            path: path.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Path at which the error was raised, when it is tied to a node
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidPath { path, .. }
            | Self::ShapeMismatch { path, .. }
            | Self::DepthLimit { path, .. }
            | Self::Processor { path, .. } => Some(path),
            Self::Configuration { .. } | Self::Json { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl ShapeKind {
    /// Classify a JSON value
    pub fn of(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(_) => ShapeKind::Mapping,
            serde_json::Value::Array(_) => ShapeKind::Sequence,
            _ => ShapeKind::Scalar,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Mapping => write!(f, "mapping"),
            ShapeKind::Sequence => write!(f, "sequence"),
            ShapeKind::Scalar => write!(f, "scalar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_kind_of() {
        assert_eq!(ShapeKind::of(&json!({"a": 1})), ShapeKind::Mapping);
        assert_eq!(ShapeKind::of(&json!([1, 2])), ShapeKind::Sequence);
        assert_eq!(ShapeKind::of(&json!(null)), ShapeKind::Scalar);
        assert_eq!(ShapeKind::of(&json!("x")), ShapeKind::Scalar);
    }

    #[test]
    fn test_mismatch_message() {
        let err = Error::ShapeMismatch {
            path: "a.b".to_string(),
            expected: ShapeKind::Sequence,
            found: ShapeKind::Mapping,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch at 'a.b': template expects sequence, input is mapping"
        );
        assert_eq!(err.path(), Some("a.b"));
    }

    #[test]
    fn test_processor_error_keeps_source() {
        let cause = anyhow::anyhow!("boom");
        let err = Error::processor_with_source("x[0]", "leaf rejected", cause);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("x[0]"));
        assert!(Error::configuration("bad").path().is_none());
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}
