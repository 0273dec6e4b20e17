//! Shared test support utilities for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use shapeshifter_core::{Result, ShapeShifter};

/// Uppercase strings, pass everything else through
pub fn uppercase(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_uppercase()),
        other => other.clone(),
    }
}

/// Shifter whose leaf processor uppercases strings
pub fn uppercasing_shifter() -> Result<ShapeShifter> {
    ShapeShifter::builder()
        .leaf_processor(|value| Ok(uppercase(value)))
        .build()
}

/// A person record with nested details and a list of hobbies
pub fn person() -> Value {
    json!({
        "name": "John",
        "age": 30,
        "details": {"age": 20, "city": "Lyon"},
        "hobbies": [
            {"name": "sing", "since": 2001},
            {"name": "run", "since": 2010}
        ]
    })
}
