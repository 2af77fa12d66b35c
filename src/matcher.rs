//! Marker construction for conditional blocks.
//!
//! A tag `NAME` wraps a region of a template file between `{{{NAME}}}` and
//! `{{{/NAME}}}`.

use regex::{Regex, RegexBuilder};
use std::fmt;

/// A named conditional block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the opening and closing marker literals.
    pub fn markers(&self) -> (String, String) {
        (format!("{{{{{{{}}}}}}}", self.0), format!("{{{{{{/{}}}}}}}", self.0))
    }

    /// Builds the pattern matching one whole block, markers included.
    ///
    /// The body match is non-greedy and spans lines, so several blocks with
    /// the same name in one file are matched one by one.
    pub fn between_pattern(&self) -> Result<Regex, regex::Error> {
        let (open, close) = self.markers();
        RegexBuilder::new(&format!(
            r"{}[\s\S]*?{}",
            regex::escape(&open),
            regex::escape(&close)
        ))
        .case_insensitive(true)
        .multi_line(true)
        .build()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}
