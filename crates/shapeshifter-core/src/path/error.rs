//! Error types for path parsing
//!
//! Parse failures carry the byte position and the input so callers can
//! render a caret under the offending character.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Path parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Structural errors such as unterminated brackets
    #[error("Parse error at position {position}: {message}")]
    Parse {
        message: String,
        position: usize,
        input: String,
    },

    /// An unexpected character where a specific token was required
    #[error("Syntax error at position {position}: {message}")]
    Syntax {
        message: String,
        position: usize,
        input: String,
        expected: Vec<String>,
        found: String,
    },
}

impl PathError {
    /// Create a parse error with position
    pub fn parse(message: impl Into<String>, position: usize, input: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            position,
            input: input.into(),
        }
    }

    /// Create a syntax error with detailed information
    pub fn syntax(
        message: impl Into<String>,
        position: usize,
        input: impl Into<String>,
        expected: Vec<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
            input: input.into(),
            expected,
            found: found.into(),
        }
    }

    /// Byte offset of the failure
    pub fn position(&self) -> usize {
        match self {
            Self::Parse { position, .. } | Self::Syntax { position, .. } => *position,
        }
    }

    /// Get the error message with formatted context
    pub fn detailed_message(&self) -> String {
        match self {
            Self::Parse { message, position, input } => {
                let mut result = format!("Parse error at position {}: {}", position, message);
                push_caret(&mut result, input, *position);
                result
            }
            Self::Syntax { message, position, input, expected, found } => {
                let mut result = format!("Syntax error at position {}: {}", position, message);
                result.push_str(&format!("\nExpected one of: {}", expected.join(", ")));
                result.push_str(&format!("\nFound: {}", found));
                push_caret(&mut result, input, *position);
                result
            }
        }
    }
}

fn push_caret(result: &mut String, input: &str, position: usize) {
    if input.is_empty() {
        return;
    }
    result.push_str(&format!("\nInput: {}", input));
    if position <= input.len() {
        let column = input[..position].chars().count();
        result.push_str(&format!("\n       {}^", " ".repeat(column)));
    }
}
