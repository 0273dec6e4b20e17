//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random JSON
//! inputs and templates for property testing the walker.

#![cfg(test)]

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for mapping keys
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Strategy for scalar values
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

fn object(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
    Value::Object(entries.into_iter().collect::<Map<String, Value>>())
}

/// Strategy for arbitrary JSON values with controlled depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..5).prop_map(Value::Array),
            btree_map(key_strategy(), inner, 0..5).prop_map(object),
        ]
    })
}

/// Strategy for values whose sequences hold elements of one shape.
///
/// Such values are reproduced exactly when used as their own template,
/// since every element matches the shape of the first.
pub fn uniform_value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            vec(scalar_strategy(), 0..5).prop_map(Value::Array),
            (inner.clone(), 1usize..4).prop_map(|(element, count)| Value::Array(vec![element; count])),
            btree_map(key_strategy(), inner, 0..5).prop_map(object),
        ]
    })
}

/// Strategy for a flat mapping template, as JSON with null leaves
pub fn flat_template_strategy() -> impl Strategy<Value = Value> {
    vec(key_strategy(), 0..6).prop_map(|keys| object(keys.into_iter().map(|k| (k, Value::Null))))
}

/// Strategy for a flat mapping of scalars
pub fn flat_object_strategy() -> impl Strategy<Value = Value> {
    btree_map(key_strategy(), scalar_strategy(), 0..8).prop_map(object)
}
