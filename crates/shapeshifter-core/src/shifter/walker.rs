//! Recursive traversal of input and template in lock-step
//!
//! At every node the walker, in order:
//!
//! 1. substitutes the input's own shape when the template is absent or a leaf
//! 2. returns the result of an inline template function, if the template is one
//! 3. returns the result of a path-specific processor, if one resolves for the path
//! 4. otherwise descends: mappings by template key order, sequences by input
//!    element against the template's first element, scalars through the leaf
//!    processor
//!
//! Steps 2 and 3 replace the whole sub-tree; nothing below them is visited.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use super::ShapeShifter;
use crate::config::MismatchPolicy;
use crate::error::ShapeKind;
use crate::path::{child_mapping_path, child_sequence_path, Path, Segment};
use crate::template::Template;
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::mem;

/// Current position, kept both structured (for lookup) and rendered (for callbacks)
struct Cursor {
    path: Path,
    rendered: String,
}

impl Cursor {
    fn new(path: Path) -> Self {
        let rendered = path.to_string();
        Self { path, rendered }
    }

    /// Enter a mapping field; returns the parent rendering to restore on leave
    fn enter_key(&mut self, key: &str) -> String {
        let child = child_mapping_path(&self.rendered, key);
        self.path.push(Segment::Key(key.to_string()));
        mem::replace(&mut self.rendered, child)
    }

    /// Enter a sequence element; returns the parent rendering to restore on leave
    fn enter_index(&mut self, index: usize) -> String {
        let child = child_sequence_path(&self.rendered, index);
        self.path.push(Segment::Index(index));
        mem::replace(&mut self.rendered, child)
    }

    fn leave(&mut self, parent: String) {
        self.rendered = parent;
        self.path.pop();
    }
}

pub(super) struct Walker<'s> {
    shifter: &'s ShapeShifter,
    cursor: Cursor,
}

impl<'s> Walker<'s> {
    pub(super) fn new(shifter: &'s ShapeShifter, start: Path) -> Self {
        Self {
            shifter,
            cursor: Cursor::new(start),
        }
    }

    pub(super) fn walk(
        &mut self,
        input: &Value,
        template: Option<&Template>,
        depth: usize,
    ) -> Result<Value> {
        if let Some(limit) = self.shifter.max_depth {
            if depth > limit {
                return Err(Error::DepthLimit {
                    path: self.cursor.rendered.clone(),
                    limit,
                });
            }
        }

        let mirrored;
        let template = match template {
            Some(template) if !template.is_leaf() => template,
            _ => {
                mirrored = Template::mirror(input);
                &mirrored
            }
        };

        if let Template::Inline(inline) = template {
            log::trace!("Inline template applied at '{}'", self.cursor.rendered);
            return inline(input);
        }

        if let Some(processor) = self
            .shifter
            .path_processors
            .resolve(&self.cursor.path, &self.cursor.rendered)
        {
            log::trace!("Path processor applied at '{}'", self.cursor.rendered);
            return processor(input, template, self.cursor.rendered.as_str());
        }

        self.descend(input, template, depth)
    }

    /// Default traversal of a node with no override
    fn descend(&mut self, input: &Value, template: &Template, depth: usize) -> Result<Value> {
        match (input, template) {
            (Value::Object(map), Template::Mapping(entries)) => {
                let mut result = Map::new();
                for (key, child_template) in entries {
                    let Some(child) = map.get(key) else {
                        continue;
                    };
                    let parent = self.cursor.enter_key(key);
                    let output_key =
                        (self.shifter.key_processor)(key.as_str(), self.cursor.rendered.as_str())?;
                    let value = self.walk(child, Some(child_template), depth + 1)?;
                    self.cursor.leave(parent);
                    result.insert(output_key, value);
                }
                Ok(Value::Object(result))
            }
            (Value::Array(items), Template::Sequence(elements)) => {
                // An empty sequence template constrains nothing
                let element_template = elements.first();
                let mut result = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let parent = self.cursor.enter_index(index);
                    let value = self.walk(item, element_template, depth + 1)?;
                    self.cursor.leave(parent);
                    result.push(value);
                }
                Ok(Value::Array(result))
            }
            (Value::Object(_), Template::Sequence(_)) => {
                self.mismatch(input, ShapeKind::Sequence, depth)
            }
            (Value::Array(_), Template::Mapping(_)) => {
                self.mismatch(input, ShapeKind::Mapping, depth)
            }
            // Scalars are leaves whatever the template says
            _ => (self.shifter.leaf_processor)(input),
        }
    }

    fn mismatch(&mut self, input: &Value, expected: ShapeKind, depth: usize) -> Result<Value> {
        let found = ShapeKind::of(input);
        match self.shifter.on_mismatch {
            MismatchPolicy::Error => Err(Error::ShapeMismatch {
                path: self.cursor.rendered.clone(),
                expected,
                found,
            }),
            MismatchPolicy::Mirror => {
                log::debug!(
                    "Template expects {} but input is {} at '{}', keeping input shape",
                    expected,
                    found,
                    self.cursor.rendered
                );
                let mirrored = Template::mirror(input);
                self.descend(input, &mirrored, depth)
            }
            MismatchPolicy::Null => {
                log::debug!(
                    "Template expects {} but input is {} at '{}', emitting null",
                    expected,
                    found,
                    self.cursor.rendered
                );
                Ok(Value::Null)
            }
        }
    }
}
