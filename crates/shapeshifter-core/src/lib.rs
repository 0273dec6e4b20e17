//! Shapeshifter Core - template-driven structural transformer for JSON values
//!
//! This crate reshapes an input value to match a shape template: mapping
//! templates select and order keys, sequence templates shape every element by
//! their first entry, and scalars are leaves. Along the way keys can be renamed
//! and leaf values rewritten by pluggable processors, and any node can be
//! overridden by a processor registered for its path.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Path Addressing**: Structured paths, rendering and wildcard lookup
//! - **Templates**: Shape descriptors built from JSON or by hand
//! - **Processors**: Leaf, key and path-specific callbacks
//! - **Shifter**: The configured transformer and its recursive walk
//!
//! # Example
//!
//! ```
//! use shapeshifter_core::{Result, ShapeShifter, Template};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let shifter = ShapeShifter::builder()
//!         .path_processor("details.age", |value, _template, _path| {
//!             let age = value.as_i64().unwrap_or_default();
//!             Ok(json!(if age > 18 { "adult" } else { "minor" }))
//!         })
//!         .build()?;
//!
//!     let template = Template::from(json!({"details": {"age": null}}));
//!     let output = shifter.transform_with_template(&json!({"details": {"age": 20}}), &template)?;
//!     assert_eq!(output, json!({"details": {"age": "adult"}}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod path;
pub mod processor;
pub mod shifter;
pub mod template;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use config::{MismatchPolicy, ShifterConfig};
pub use error::{Error, Result, ShapeKind};
pub use path::{child_mapping_path, child_sequence_path, wildcard_of, Path, PathError, Segment};
pub use processor::{InlineProcessor, KeyProcessor, LeafProcessor, PathProcessor, PathProcessors};
pub use shifter::{ShapeShifter, ShapeShifterBuilder, TransformOptions};
pub use template::Template;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transform `input` against `template` with default processors
pub fn transform(input: &serde_json::Value, template: &Template) -> Result<serde_json::Value> {
    ShapeShifter::new().transform_with_template(input, template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_transform_shortcut() {
        let output = transform(
            &json!({"name": "John", "age": 30}),
            &Template::from(json!({"name": null})),
        )
        .unwrap();
        assert_eq!(output, json!({"name": "John"}));
    }

    #[test]
    fn test_shifter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeShifter>();
        assert_send_sync::<Template>();
    }
}
