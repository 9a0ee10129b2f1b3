//! URL model: scheme, host, port, path, userinfo, query and fragment.
//!
//! A model is created once per build (optionally from a base URL), updated
//! only in the fields a caller supplies, and rendered once at the end.

mod credential;
mod parse;
mod render;

use std::fmt;
use std::str::FromStr;

pub use credential::Credential;
pub use render::{UrlOutput, UrlOutputMode};

use crate::error::BuildError;
use crate::query::{NullValueHandling, QueryParamCollection, ResolvedQuery};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlModel {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    user_name: Option<String>,
    password: Option<Credential>,
    path: Vec<String>,
    /// Path starts with `/`. Rootless paths (`mailto:x`, `a/b`) keep no leading slash.
    rooted: bool,
    trailing_slash: bool,
    query: QueryParamCollection,
    fragment: Option<String>,
}

impl UrlModel {
    /// All fields unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds a model from URL text.
    pub fn from_base(text: &str) -> Result<Self, BuildError> {
        parse::parse_url(text)
    }

    /// Seeds a model from a parsed URI value.
    pub fn from_uri(uri: &url::Url) -> Result<Self, BuildError> {
        parse::parse_url(uri.as_str())
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn password(&self) -> Option<&Credential> {
        self.password.as_ref()
    }

    /// Decoded `user[:password]`, for display.
    pub fn userinfo(&self) -> Option<String> {
        let user = self.user_name.as_deref()?;
        Some(match &self.password {
            Some(password) => format!("{user}:{}", password.expose()),
            None => user.to_string(),
        })
    }

    /// Decoded path segments in order.
    pub fn path_segments(&self) -> &[String] {
        &self.path
    }

    pub fn query(&self) -> &QueryParamCollection {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParamCollection {
        &mut self.query
    }

    /// `Some("")` is an explicitly cleared fragment, distinct from `None`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Some(scheme.into());
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// Rejects ports outside 1..=65535; never clamps.
    pub fn set_port(&mut self, port: i64) -> Result<(), BuildError> {
        let port = validate_port(port)?;
        self.port = Some(port);
        Ok(())
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = Some(fragment.into());
    }

    /// Appends segments after the existing path; repeated calls accumulate.
    ///
    /// Empty segments are skipped. A trailing slash is consumed by the first
    /// appended segment, and appending to an empty path roots it.
    pub fn append_path_segments<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for segment in segments {
            let segment = segment.into();
            if segment.is_empty() {
                continue;
            }
            if self.path.is_empty() {
                self.rooted = true;
            }
            self.path.push(segment);
            self.trailing_slash = false;
        }
    }

    /// `user` alone, or `user:password` when a credential is supplied.
    pub fn set_user_info(&mut self, user: &str, password: Option<&Credential>) {
        self.user_name = Some(user.to_string());
        self.password = password.cloned();
    }

    /// Merges resolved query input; the query is never replaced wholesale.
    pub fn merge_query(&mut self, input: ResolvedQuery, policy: NullValueHandling) {
        self.query.merge(input, policy);
    }
}

/// `scheme://` at the start of `text`.
pub(crate) fn starts_with_scheme(text: &str) -> bool {
    matches!(text.trim_start().split_once("://"), Some((scheme, _)) if parse::is_scheme(scheme))
}

pub(crate) fn validate_port(port: i64) -> Result<u16, BuildError> {
    if (1..=65535).contains(&port) {
        Ok(port as u16)
    } else {
        Err(BuildError::port_out_of_range(port))
    }
}

impl fmt::Display for UrlModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

impl FromStr for UrlModel {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base(s)
    }
}
