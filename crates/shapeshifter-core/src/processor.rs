//! Processor signatures and path-specific processor resolution
//!
//! Processors are caller-supplied callbacks. Errors they return propagate
//! unchanged to the caller of the transform.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use crate::path::Path;
use crate::template::Template;
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Rewrites a scalar value
pub type LeafProcessor = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Renames a mapping key; receives the key and the rendered path of the field
pub type KeyProcessor = Arc<dyn Fn(&str, &str) -> Result<String> + Send + Sync>;

/// Replaces the whole sub-tree at a path; receives input, template and rendered path
pub type PathProcessor = Arc<dyn Fn(&Value, &Template, &str) -> Result<Value> + Send + Sync>;

/// Function embedded in a template node
pub type InlineProcessor = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Leaf processor returning its input unchanged
pub fn identity_leaf() -> LeafProcessor {
    Arc::new(|value: &Value| Ok(value.clone()))
}

/// Key processor returning the key unchanged
pub fn identity_key() -> KeyProcessor {
    Arc::new(|key: &str, _path: &str| Ok(key.to_string()))
}

/// Path-specific processors keyed by exact or wildcard path
///
/// Registrations are indexed by parsed path and by rendered form. A mapping
/// key containing `.` renders the same as two nested keys, so `a.b` reaches
/// both the root key `"a.b"` and the field `b` under `a`.
#[derive(Clone, Default)]
pub struct PathProcessors {
    entries: HashMap<Path, PathProcessor>,
    rendered: HashMap<String, Path>,
}

impl PathProcessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor for a rendered path such as `hobbies[*].name`.
    ///
    /// Fails if the path does not parse or if another registration already
    /// renders to the same path (`a.b`, `a['b']` and `['a.b']` all collide).
    pub fn insert(&mut self, pattern: &str, processor: PathProcessor) -> Result<()> {
        let path = Path::parse(pattern)?;
        let rendered = path.to_string();
        if self.entries.contains_key(&path) || self.rendered.contains_key(&rendered) {
            return Err(Error::configuration(format!(
                "Duplicate path processor for '{}'",
                rendered
            )));
        }
        self.rendered.insert(rendered, path.clone());
        self.entries.insert(path, processor);
        Ok(())
    }

    /// Processor for a concrete path: exact match first, then the wildcard form.
    ///
    /// `rendered` is the path as handed to processors; it is consulted after
    /// the structured lookup at each of the two steps.
    pub fn resolve(&self, path: &Path, rendered: &str) -> Option<&PathProcessor> {
        if self.entries.is_empty() {
            return None;
        }
        self.lookup(path, rendered).or_else(|| {
            let wild = path.wildcard()?;
            self.lookup(&wild, &wild.to_string())
        })
    }

    fn lookup(&self, path: &Path, rendered: &str) -> Option<&PathProcessor> {
        self.entries.get(path).or_else(|| {
            self.rendered
                .get(rendered)
                .and_then(|registered| self.entries.get(registered))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PathProcessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut patterns: Vec<String> = self.entries.keys().map(|p| p.to_string()).collect();
        patterns.sort();
        f.debug_struct("PathProcessors")
            .field("patterns", &patterns)
            .finish()
    }
}
