//! Null-value handling policy for query merges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an absent (or blank) value is merged into a collection.
///
/// Present values append under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullValueHandling {
    /// Delete every entry with that name and add nothing.
    #[default]
    Remove,
    /// Leave the collection untouched.
    Ignore,
    /// Append a bare `name` entry with no `=`.
    NameOnly,
    /// Append `name=` with an empty value.
    AlwaysAppend,
}

impl NullValueHandling {
    pub fn as_str(self) -> &'static str {
        match self {
            NullValueHandling::Remove => "remove",
            NullValueHandling::Ignore => "ignore",
            NullValueHandling::NameOnly => "name-only",
            NullValueHandling::AlwaysAppend => "always-append",
        }
    }
}

impl fmt::Display for NullValueHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NullValueHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remove" => Ok(NullValueHandling::Remove),
            "ignore" => Ok(NullValueHandling::Ignore),
            "name-only" | "nameonly" => Ok(NullValueHandling::NameOnly),
            "always-append" | "alwaysappend" => Ok(NullValueHandling::AlwaysAppend),
            other => Err(format!(
                "unknown null value handling {other:?} (expected remove, ignore, name-only or always-append)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_remove() {
        assert_eq!(NullValueHandling::default(), NullValueHandling::Remove);
    }

    #[test]
    fn parse_accepts_both_spellings() {
        assert_eq!(
            "NameOnly".parse::<NullValueHandling>().unwrap(),
            NullValueHandling::NameOnly
        );
        assert_eq!(
            "always-append".parse::<NullValueHandling>().unwrap(),
            NullValueHandling::AlwaysAppend
        );
        assert!("sometimes".parse::<NullValueHandling>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for policy in [
            NullValueHandling::Remove,
            NullValueHandling::Ignore,
            NullValueHandling::NameOnly,
            NullValueHandling::AlwaysAppend,
        ] {
            assert_eq!(policy.to_string().parse::<NullValueHandling>().unwrap(), policy);
        }
    }
}
