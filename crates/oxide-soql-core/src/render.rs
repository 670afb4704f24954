//! Render-time options.
//!
//! SOQL is usually sent as a URL query parameter, where spaces between
//! tokens are written as `+`. The same fragment tree can be rendered for
//! display with plain spaces by passing a different [`RenderContext`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Character placed between syntactic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Whitespace {
    /// A plain space.
    Space,
    /// A literal `+`, for URL-embeddable output.
    #[default]
    Plus,
}

impl Whitespace {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Plus => '+',
        }
    }

    /// Returns the separator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Plus => "+",
        }
    }
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => f.write_str("space"),
            Self::Plus => f.write_str("plus"),
        }
    }
}

impl FromStr for Whitespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            " " => return Ok(Self::Space),
            "+" => return Ok(Self::Plus),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "space" => Ok(Self::Space),
            "plus" => Ok(Self::Plus),
            _ => Err(Error::InvalidWhitespace(s.to_string())),
        }
    }
}

/// Options applied while rendering a fragment tree.
///
/// Deserializes from an empty map into the default context, so it can be
/// embedded in a larger configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// Separator placed between keywords and operands.
    pub whitespace: Whitespace,
}

impl RenderContext {
    /// Creates a context with the given separator.
    #[must_use]
    pub const fn new(whitespace: Whitespace) -> Self {
        Self { whitespace }
    }

    /// Creates a context that joins tokens with plain spaces.
    #[must_use]
    pub const fn space() -> Self {
        Self::new(Whitespace::Space)
    }

    /// Creates a context that joins tokens with `+`.
    #[must_use]
    pub const fn plus() -> Self {
        Self::new(Whitespace::Plus)
    }

    /// Joins tokens with the active separator.
    ///
    /// An empty leading token yields a leading separator, which is how
    /// clauses such as `WHERE` attach to whatever precedes them.
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(self.whitespace.as_char());
            }
            out.push_str(token.as_ref());
        }
        out
    }
}

/// Types that render to SOQL text.
pub trait Render {
    /// Renders the value under the given context.
    fn render(&self, ctx: &RenderContext) -> String;

    /// Renders the value under the default context (`+` separators).
    fn build(&self) -> String {
        self.render(&RenderContext::default())
    }
}
