//! Shape templates
//!
//! A template describes which parts of an input survive a transformation and
//! how nested structures are organised. Data templates are usually written as
//! JSON and converted with [`Template::from`]; the content of scalar nodes is
//! irrelevant, only the shape counts.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use crate::processor::InlineProcessor;
use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shape descriptor for a transformation
#[derive(Clone)]
pub enum Template {
    /// No shape constraint: the input's own shape is used from here down
    Leaf,
    /// Keep only these keys, in this order
    Mapping(Vec<(String, Template)>),
    /// Shape every element by the first entry; further entries are ignored
    Sequence(Vec<Template>),
    /// Replace the node with the result of a function of the input
    Inline(InlineProcessor),
}

impl Template {
    /// Template for a mapping with the given fields.
    ///
    /// A repeated key replaces the earlier entry but keeps its position.
    pub fn mapping<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Template)>,
        K: Into<String>,
    {
        let mut entries: Vec<(String, Template)> = Vec::new();
        for (key, template) in fields {
            let key = key.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = template,
                None => entries.push((key, template)),
            }
        }
        Template::Mapping(entries)
    }

    /// Template for a sequence whose elements all have the given shape
    pub fn sequence(element: Template) -> Self {
        Template::Sequence(vec![element])
    }

    /// Template node computed by a function of the input sub-tree
    pub fn inline<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Template::Inline(Arc::new(f))
    }

    /// The input's own shape, used when no template is supplied
    pub fn mirror(value: &Value) -> Self {
        Self::from(value)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Template::Leaf)
    }

    /// Template of a mapping field, if this is a mapping template
    pub fn get(&self, key: &str) -> Option<&Template> {
        match self {
            Template::Mapping(entries) => entries
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, template)| template),
            _ => None,
        }
    }

    /// Element shape of a sequence template
    pub fn element(&self) -> Option<&Template> {
        match self {
            Template::Sequence(elements) => elements.first(),
            _ => None,
        }
    }
}

impl From<&Value> for Template {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => Template::Mapping(
                map.iter()
                    .map(|(key, child)| (key.clone(), Template::from(child)))
                    .collect(),
            ),
            Value::Array(items) => Template::Sequence(items.iter().map(Template::from).collect()),
            _ => Template::Leaf,
        }
    }
}

impl From<Value> for Template {
    fn from(value: Value) -> Self {
        Template::from(&value)
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            // Functions compare by identity
            (Self::Inline(a), Self::Inline(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Leaf => write!(f, "Leaf"),
            Template::Mapping(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            Template::Sequence(elements) => f.debug_list().entries(elements).finish(),
            Template::Inline(_) => write!(f, "Inline(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_become_leaves() {
        for scalar in [json!(null), json!(false), json!(0), json!(""), json!("x"), json!(1.5)] {
            assert!(Template::from(&scalar).is_leaf());
        }
    }

    #[test]
    fn test_mapping_keeps_key_order() {
        let template = Template::from(json!({"b": null, "a": {"c": null}}));
        match &template {
            Template::Mapping(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            other => panic!("Expected mapping, got {other:?}"),
        }
        assert_eq!(
            template.get("a"),
            Some(&Template::mapping([("c", Template::Leaf)]))
        );
        assert!(template.get("missing").is_none());
    }

    #[test]
    fn test_sequence_element_is_first_entry() {
        let template = Template::from(json!([{"name": null}, {"other": null}]));
        assert_eq!(
            template.element(),
            Some(&Template::mapping([("name", Template::Leaf)]))
        );
        assert!(Template::from(json!([])).element().is_none());
    }

    #[test]
    fn test_mapping_builder_replaces_duplicates_in_place() {
        let template = Template::mapping([
            ("a", Template::Leaf),
            ("b", Template::Leaf),
            ("a", Template::sequence(Template::Leaf)),
        ]);
        assert_eq!(
            template,
            Template::Mapping(vec![
                ("a".to_string(), Template::Sequence(vec![Template::Leaf])),
                ("b".to_string(), Template::Leaf),
            ])
        );
    }

    #[test]
    fn test_inline_equality_is_identity() {
        let inline = Template::inline(|v| Ok(v.clone()));
        assert_eq!(inline, inline.clone());
        assert_ne!(inline, Template::inline(|v| Ok(v.clone())));
        assert_eq!(format!("{inline:?}"), "Inline(..)");
    }
}
