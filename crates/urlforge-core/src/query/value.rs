//! Scalar query values.

use std::fmt;

/// A scalar query value. Absence is modelled as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    /// Any other number; renders with its JSON text (`1.0`, `18446744073709551615`).
    Number(serde_json::Number),
    Bool(bool),
}

impl QueryValue {
    /// True when the value would render as blank or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            QueryValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{n}"),
            QueryValue::Number(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Integer(n)
    }
}

/// NaN and infinities have no number form and fall back to text.
impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        match serde_json::Number::from_f64(x) {
            Some(n) => QueryValue::Number(n),
            None => QueryValue::Text(x.to_string()),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(QueryValue::from("abc").to_string(), "abc");
        assert_eq!(QueryValue::from(42).to_string(), "42");
        assert_eq!(QueryValue::from(2.5).to_string(), "2.5");
        assert_eq!(QueryValue::from(1.0).to_string(), "1.0");
        assert_eq!(
            QueryValue::Number(u64::MAX.into()).to_string(),
            "18446744073709551615"
        );
        assert_eq!(QueryValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(QueryValue::from(true).to_string(), "true");
    }

    #[test]
    fn blank_detection() {
        assert!(QueryValue::from("").is_blank());
        assert!(QueryValue::from("  \t").is_blank());
        assert!(!QueryValue::from(" x ").is_blank());
        assert!(!QueryValue::from(0).is_blank());
    }
}
