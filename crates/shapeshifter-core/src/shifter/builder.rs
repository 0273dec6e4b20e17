//! Builder for creating shape shifters
//!
//! This module provides a fluent builder API that injects identity defaults
//! for unset processors and validates path-specific processor keys.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use super::ShapeShifter;
use crate::config::{MismatchPolicy, ShifterConfig};
use crate::processor::{identity_key, identity_leaf, KeyProcessor, LeafProcessor, PathProcessor, PathProcessors};
use crate::template::Template;
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;

/// Builder for creating shape shifters
#[derive(Default)]
pub struct ShapeShifterBuilder {
    leaf_processor: Option<LeafProcessor>,
    key_processor: Option<KeyProcessor>,
    path_processors: Vec<(String, PathProcessor)>,
    template: Option<Template>,
    on_mismatch: MismatchPolicy,
    max_depth: Option<usize>,
}

impl ShapeShifterBuilder {
    /// Create a new builder with nothing configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processor applied to scalars without a path override
    pub fn leaf_processor<F>(mut self, processor: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.leaf_processor = Some(Arc::new(processor));
        self
    }

    /// Set the processor that renames mapping keys
    pub fn key_processor<F>(mut self, processor: F) -> Self
    where
        F: Fn(&str, &str) -> Result<String> + Send + Sync + 'static,
    {
        self.key_processor = Some(Arc::new(processor));
        self
    }

    /// Register a processor replacing the sub-tree at `path`
    pub fn path_processor<F>(mut self, path: impl Into<String>, processor: F) -> Self
    where
        F: Fn(&Value, &Template, &str) -> Result<Value> + Send + Sync + 'static,
    {
        self.path_processors.push((path.into(), Arc::new(processor)));
        self
    }

    /// Register several already boxed path processors
    pub fn path_processors<I, K>(mut self, processors: I) -> Self
    where
        I: IntoIterator<Item = (K, PathProcessor)>,
        K: Into<String>,
    {
        self.path_processors
            .extend(processors.into_iter().map(|(path, p)| (path.into(), p)));
        self
    }

    /// Set the default template
    pub fn template(mut self, template: impl Into<Template>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the shape mismatch policy
    pub fn on_mismatch(mut self, policy: MismatchPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    /// Limit recursion depth below the start node
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Apply a loaded configuration; unset fields leave the builder untouched
    pub fn config(mut self, config: ShifterConfig) -> Self {
        if let Some(template) = config.template {
            self.template = Some(Template::from(template));
        }
        if let Some(policy) = config.on_mismatch {
            self.on_mismatch = policy;
        }
        if config.max_depth.is_some() {
            self.max_depth = config.max_depth;
        }
        self
    }

    /// Build the shape shifter
    pub fn build(mut self) -> Result<ShapeShifter> {
        let mut path_processors = PathProcessors::new();
        for (path, processor) in std::mem::take(&mut self.path_processors) {
            path_processors
                .insert(&path, processor)
                .map_err(|err| match err {
                    Error::InvalidPath { .. } => Error::Configuration {
                        message: format!("Invalid path processor key '{}'", path),
                        source: Some(anyhow::Error::new(err)),
                    },
                    other => other,
                })?;
        }

        log::debug!(
            "Built shape shifter: {} path processor(s), default template: {}, mismatch policy: {:?}",
            path_processors.len(),
            self.template.is_some(),
            self.on_mismatch
        );

        Ok(self.assemble(path_processors))
    }

    /// Fill unset processors with identity defaults around validated overrides
    pub(super) fn assemble(self, path_processors: PathProcessors) -> ShapeShifter {
        ShapeShifter {
            leaf_processor: self.leaf_processor.unwrap_or_else(identity_leaf),
            key_processor: self.key_processor.unwrap_or_else(identity_key),
            path_processors,
            template: self.template,
            on_mismatch: self.on_mismatch,
            max_depth: self.max_depth,
        }
    }
}
