//! RawNumber: a numeric field that may still hold raw input text.

use serde::{Deserialize, Serialize};

/// A numeric field as the input layer sees it: either an actual number or the
/// raw text typed so far (possibly empty). The raw text is stored verbatim and
/// only converted to a number through [`RawNumber::coerce`], so a half-edited
/// field survives a save/reload exactly as the user left it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Value(f64),
    Text(String),
}

impl RawNumber {
    /// Numeric view with a default of 0 for empty or unparsable text.
    pub fn coerce(&self) -> f64 {
        self.coerce_or(0.0)
    }

    /// Numeric view: `Value(n)` is returned unchanged; empty text yields
    /// `default`; any other text is parsed as a float, falling back to
    /// `default` when it does not parse.
    pub fn coerce_or(&self, default: f64) -> f64 {
        match self {
            RawNumber::Value(n) => *n,
            RawNumber::Text(s) if s.is_empty() => default,
            RawNumber::Text(s) => s.trim().parse().unwrap_or(default),
        }
    }
}

impl Default for RawNumber {
    fn default() -> Self {
        RawNumber::Value(0.0)
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Value(n)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_string())
    }
}
