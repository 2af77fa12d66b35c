//! Operator answers and the rules that validate them.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Accepts `scheme:`/`scheme://` or `www.` prefixed addresses anywhere in the answer.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"((([A-Za-z]{3,9}:(?://)?)(?:[-;:&=+$,\w]+@)?[A-Za-z0-9.-]+|(?:www\.|[-;:&=+$,\w]+@)[A-Za-z0-9.-]+)((?:/[+~%/.\w_-]*)?\??(?:[-+=&;%@.\w_]*)#?(?:[.!/\\\w]*))?)",
    )
    .expect("URL pattern is valid")
});

/// Lowercase letters and underscores, at least three characters, letters at both ends.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z_]+[a-z]$").expect("identifier pattern is valid"));

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Affirmative,
    Negative,
}

impl Decision {
    /// Accepts `yes`, `y`, `no` and `n` in any case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(Decision::Affirmative),
            "no" | "n" => Some(Decision::Negative),
            _ => None,
        }
    }

    pub fn is_affirmative(self) -> bool {
        self == Decision::Affirmative
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_affirmative() { "yes" } else { "no" })
    }
}

/// A short lowercase name used for prefixes and post types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        IDENTIFIER_REGEX.is_match(&normalized).then_some(Identifier(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }

    /// File name friendly form of the identifier.
    pub fn slug(&self) -> String {
        self.0.replace(' ', "-")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated operator answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Boolean(Decision),
    Identifier(Identifier),
    Text(String),
}

impl Answer {
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Answer::Boolean(decision) => Some(*decision),
            _ => None,
        }
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Answer::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }

    /// Text form of the answer, as substituted into the template.
    pub fn text(&self) -> String {
        match self {
            Answer::Boolean(decision) => decision.to_string(),
            Answer::Identifier(identifier) => identifier.to_string(),
            Answer::Text(text) => text.clone(),
        }
    }
}

/// Validation applied to the raw input of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Anything, normalized to trimmed lowercase text
    Any,
    YesNo,
    Url,
    Identifier,
    /// Free text
    Text,
}

impl Rule {
    /// Normalizes and checks `raw`, returning `None` when the answer must be asked again.
    pub fn validate(&self, raw: &str) -> Option<Answer> {
        match self {
            Rule::Any => Some(Answer::Text(raw.trim().to_lowercase())),
            Rule::YesNo => Decision::parse(raw).map(Answer::Boolean),
            Rule::Identifier => Identifier::parse(raw).map(Answer::Identifier),
            Rule::Url => {
                let text = sanitize_text(raw);
                URL_REGEX.is_match(&text).then_some(Answer::Text(text))
            }
            Rule::Text => Some(Answer::Text(sanitize_text(raw))),
        }
    }

    /// Notice printed before the question is asked again.
    pub fn retry_notice(&self) -> &'static str {
        match self {
            Rule::YesNo => "Please try again and type either yes, y, no, or n",
            _ => "Please try again",
        }
    }

    /// Input hint printed under the question.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Rule::Url => Some("(Must start with http://, https:// or www)"),
            Rule::Identifier => Some(
                "(At least three characters, first and last characters letters only, letters and _'s for the rest.)",
            ),
            _ => None,
        }
    }
}

/// Drops the line terminator and any `*/`, which would close a PHP comment.
pub fn sanitize_text(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n']).replace("*/", "")
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
