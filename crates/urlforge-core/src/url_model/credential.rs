//! Password handle for URL userinfo.

use std::fmt;

/// Plaintext password unwrapped by the caller's boundary.
///
/// `Debug` is redacted so records can be traced safely. Once placed in a URL
/// the password is plaintext by the URL grammar; nothing further protects it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(plaintext.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
