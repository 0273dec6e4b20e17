//! Path expression parser
//!
//! Recursive descent over the rendered path grammar:
//!
//! ```text
//! path     := "" | first ( "." key | bracket )*
//! first    := key | bracket
//! bracket  := "[" ( digits | "*" | quoted ) "]"
//! quoted   := "'" chars "'" | '"' chars '"'
//! ```
//!
//! Keys run until the next `.` or `[`. Keys that contain either character
//! can be written in the quoted bracket form, e.g. `['a.b']`.
//!
//! Copyright (c) 2025 Shapeshifter Team
//! Licensed under the Apache-2.0 license

use super::error::PathError;
use super::{Path, Segment};
use std::iter::Peekable;
use std::str::CharIndices;

type ParseResult<T> = std::result::Result<T, PathError>;

/// Path expression parser
pub struct PathParser<'a> {
    /// Input string being parsed
    input: &'a str,
    /// Character iterator with byte offsets
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> PathParser<'a> {
    /// Create a new parser for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Parse the input into a structured path
    pub fn parse(mut self) -> ParseResult<Path> {
        let mut segments = Vec::new();

        if self.is_at_end() {
            return Ok(Path::root());
        }

        match self.current_char() {
            Some('[') => segments.push(self.parse_bracket_segment()?),
            _ => segments.push(Segment::Key(self.parse_key()?)),
        }

        while let Some(ch) = self.current_char() {
            let segment = match ch {
                '.' => {
                    self.advance(); // consume '.'
                    Segment::Key(self.parse_key()?)
                }
                '[' => self.parse_bracket_segment()?,
                other => {
                    return Err(PathError::syntax(
                        "Unexpected character after segment",
                        self.position(),
                        self.input,
                        vec![".".to_string(), "[".to_string()],
                        other.to_string(),
                    ))
                }
            };
            segments.push(segment);
        }

        Ok(Path::from_segments(segments))
    }

    /// Parse a bare key up to the next separator
    fn parse_key(&mut self) -> ParseResult<String> {
        let start = self.position();
        while let Some(ch) = self.current_char() {
            if ch == '.' || ch == '[' {
                break;
            }
            self.advance();
        }
        let end = self.position();

        if start == end {
            return Err(PathError::syntax(
                "Expected property name",
                start,
                self.input,
                vec!["property name".to_string()],
                self.found(),
            ));
        }

        Ok(self.input[start..end].to_string())
    }

    /// Parse `[n]`, `[*]` or a quoted key in brackets
    fn parse_bracket_segment(&mut self) -> ParseResult<Segment> {
        let open = self.position();
        self.advance(); // consume '['

        let segment = match self.current_char() {
            Some('*') => {
                self.advance();
                Segment::Wildcard
            }
            Some(quote @ ('\'' | '"')) => Segment::Key(self.parse_quoted_string(quote)?),
            Some(ch) if ch.is_ascii_digit() => Segment::Index(self.parse_index()?),
            Some(ch) => {
                return Err(PathError::syntax(
                    "Invalid character in bracket segment",
                    self.position(),
                    self.input,
                    vec!["digit".to_string(), "*".to_string(), "quote".to_string()],
                    ch.to_string(),
                ))
            }
            None => {
                return Err(PathError::parse("Unterminated bracket segment", open, self.input))
            }
        };

        self.expect_close(open)?;
        Ok(segment)
    }

    fn parse_index(&mut self) -> ParseResult<usize> {
        let start = self.position();
        while matches!(self.current_char(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }
        let end = self.position();
        let input = self.input;
        let digits = &input[start..end];
        digits
            .parse::<usize>()
            .map_err(|_| PathError::parse(format!("Index '{}' is out of range", digits), start, input))
    }

    /// Parse a quoted key, honouring backslash escapes
    fn parse_quoted_string(&mut self, quote: char) -> ParseResult<String> {
        let open = self.position();
        self.advance(); // consume opening quote

        let mut key = String::new();
        loop {
            match self.current_char() {
                Some('\\') => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => {
                            key.push(escaped);
                            self.advance();
                        }
                        None => break,
                    }
                }
                Some(ch) if ch == quote => {
                    self.advance();
                    return Ok(key);
                }
                Some(ch) => {
                    key.push(ch);
                    self.advance();
                }
                None => break,
            }
        }

        Err(PathError::parse("Unterminated quoted key", open, self.input))
    }

    fn expect_close(&mut self, open: usize) -> ParseResult<()> {
        match self.current_char() {
            Some(']') => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(PathError::syntax(
                "Expected closing bracket",
                self.position(),
                self.input,
                vec!["]".to_string()],
                ch.to_string(),
            )),
            None => Err(PathError::parse("Unterminated bracket segment", open, self.input)),
        }
    }

    fn current_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map(|&(i, _)| i).unwrap_or(self.input.len())
    }

    fn advance(&mut self) {
        self.chars.next();
    }

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn found(&mut self) -> String {
        self.current_char()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "EOF".to_string())
    }
}
