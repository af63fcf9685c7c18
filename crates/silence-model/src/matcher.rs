//! Label matchers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A label-match predicate selecting which alerts a silence applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    /// Label name
    pub name: String,
    /// Label value (literal or regex, depending on `is_regex`)
    pub value: String,
    /// Whether `value` is a regular expression
    #[serde(default)]
    pub is_regex: bool,
    /// Whether the match is positive (`=`/`=~`) or negated (`!=`/`!~`)
    #[serde(default = "default_is_equal")]
    pub is_equal: bool,
}

fn default_is_equal() -> bool {
    true
}

impl Matcher {
    /// The operator token for this matcher (`=`, `!=`, `=~`, `!~`)
    pub fn operator(&self) -> &'static str {
        match (self.is_equal, self.is_regex) {
            (true, false) => "=",
            (false, false) => "!=",
            (true, true) => "=~",
            (false, true) => "!~",
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.operator(), self.value)
    }
}
