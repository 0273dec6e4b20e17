//! Template-driven transformation of JSON values
//!
//! A [`ShapeShifter`] holds the configured processors and default template and
//! runs the recursive walk. It is immutable once built and can be shared
//! across threads.
//!
//! # Module Organization
//!
//! - [`builder`] - Fluent builder that injects defaults and validates paths
//! - `walker` - The recursive traversal
//! - `tests` - Test suite
//!
//! # Examples
//!
//! ```
//! use shapeshifter_core::{ShapeShifter, Template};
//! use serde_json::json;
//!
//! let shifter = ShapeShifter::builder()
//!     .key_processor(|key, _path| Ok(key.to_uppercase()))
//!     .path_processor("hobbies[*].name", |value, _template, _path| {
//!         Ok(json!(value.as_str().unwrap_or_default().to_uppercase()))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let template = Template::from(json!({"hobbies": [{"name": null}]}));
//! let input = json!({"hobbies": [{"name": "sing"}, {"name": "run"}], "age": 30});
//!
//! let output = shifter.transform_with_template(&input, &template).unwrap();
//! assert_eq!(output, json!({"HOBBIES": [{"NAME": "SING"}, {"NAME": "RUN"}]}));
//! ```
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

pub mod builder;
mod walker;


pub use builder::ShapeShifterBuilder;

use crate::config::MismatchPolicy;
use crate::path::Path;
use crate::processor::{KeyProcessor, LeafProcessor, PathProcessors};
use crate::template::Template;
use crate::Result;
use serde_json::Value;
use std::fmt;
use walker::Walker;

/// Configured transformer
#[derive(Clone)]
pub struct ShapeShifter {
    leaf_processor: LeafProcessor,
    key_processor: KeyProcessor,
    path_processors: PathProcessors,
    template: Option<Template>,
    on_mismatch: MismatchPolicy,
    max_depth: Option<usize>,
}

/// Per-call options
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Template for this call; falls back to the configured default, then to the input's shape
    pub template: Option<Template>,
    /// Path of the input relative to the overall document, root by default
    pub start_path: Path,
}

impl TransformOptions {
    /// Options starting the walk at the given rendered path
    pub fn at(path: &str) -> Result<Self> {
        Ok(Self {
            template: None,
            start_path: Path::parse(path)?,
        })
    }

    pub fn with_template(mut self, template: impl Into<Template>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl ShapeShifter {
    /// Shifter with identity processors, no overrides and no default template
    pub fn new() -> Self {
        ShapeShifterBuilder::new().assemble(PathProcessors::new())
    }

    pub fn builder() -> ShapeShifterBuilder {
        ShapeShifterBuilder::new()
    }

    /// Transform using the configured default template, or the input's own shape
    pub fn transform(&self, input: &Value) -> Result<Value> {
        self.run(input, self.template.as_ref(), &Path::root())
    }

    /// Transform against an explicit template
    pub fn transform_with_template(&self, input: &Value, template: &Template) -> Result<Value> {
        self.run(input, Some(template), &Path::root())
    }

    /// Transform with per-call options
    pub fn transform_with(&self, input: &Value, options: &TransformOptions) -> Result<Value> {
        let template = options.template.as_ref().or(self.template.as_ref());
        self.run(input, template, &options.start_path)
    }

    /// Default template configured at build time
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn path_processors(&self) -> &PathProcessors {
        &self.path_processors
    }

    pub fn on_mismatch(&self) -> MismatchPolicy {
        self.on_mismatch
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    fn run(&self, input: &Value, template: Option<&Template>, start: &Path) -> Result<Value> {
        Walker::new(self, start.clone()).walk(input, template, 0)
    }
}

impl Default for ShapeShifter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeShifter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeShifter")
            .field("path_processors", &self.path_processors)
            .field("template", &self.template)
            .field("on_mismatch", &self.on_mismatch)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}
