//! Text, URI and model output of a [`UrlModel`].

use serde::{Deserialize, Serialize};

use super::UrlModel;
use crate::error::BuildError;
use crate::query::encode::{
    encode_fragment, encode_host, encode_path_segment, encode_user_name, encode_userinfo,
};

/// Output mode for a URL build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlOutputMode {
    #[default]
    Model,
    Uri,
    Text,
}

/// Rendered result of a URL build.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlOutput {
    Model(UrlModel),
    Uri(url::Url),
    Text(String),
}

impl std::fmt::Display for UrlOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlOutput::Model(model) => write!(f, "{model}"),
            UrlOutput::Uri(uri) => write!(f, "{uri}"),
            UrlOutput::Text(text) => f.write_str(text),
        }
    }
}

/// `[scheme:][//[userinfo@]host[:port]][/path][?query][#fragment]`
///
/// `//authority` is written only when a host is set; userinfo and port need a
/// host to appear. `encode_space_as_plus` only affects the query.
pub(super) fn render_url(model: &UrlModel, encode_space_as_plus: bool) -> String {
    let mut out = String::new();

    if let Some(scheme) = &model.scheme {
        out.push_str(scheme);
        out.push(':');
    }

    if let Some(host) = &model.host {
        out.push_str("//");
        if let Some(user) = &model.user_name {
            out.push_str(&encode_user_name(user));
            if let Some(password) = &model.password {
                out.push(':');
                out.push_str(&encode_userinfo(password.expose()));
            }
            out.push('@');
        }
        out.push_str(&encode_host(host));
        if let Some(port) = model.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
    }

    let rooted = model.rooted || model.host.is_some();
    for (i, segment) in model.path.iter().enumerate() {
        if i > 0 || rooted {
            out.push('/');
        }
        out.push_str(&encode_path_segment(segment));
    }
    if model.trailing_slash {
        out.push('/');
    }

    if !model.query.is_empty() {
        out.push('?');
        out.push_str(&model.query.to_query_string(encode_space_as_plus));
    }

    if let Some(fragment) = model.fragment.as_deref().filter(|f| !f.is_empty()) {
        out.push('#');
        out.push_str(&encode_fragment(fragment));
    }

    out
}

impl UrlModel {
    /// Renders the model to URL text.
    pub fn to_text(&self, encode_space_as_plus: bool) -> String {
        render_url(self, encode_space_as_plus)
    }

    /// Renders to text, then parses into the canonical URI type.
    pub fn to_uri(&self, encode_space_as_plus: bool) -> Result<url::Url, BuildError> {
        let text = self.to_text(encode_space_as_plus);
        url::Url::parse(&text).map_err(|e| BuildError::InvalidUrl {
            input: text,
            reason: e.to_string(),
        })
    }

    /// Produces the output for `mode`, consuming the model.
    pub fn render(self, mode: UrlOutputMode, encode_space_as_plus: bool) -> Result<UrlOutput, BuildError> {
        match mode {
            UrlOutputMode::Model => Ok(UrlOutput::Model(self)),
            UrlOutputMode::Uri => self.to_uri(encode_space_as_plus).map(UrlOutput::Uri),
            UrlOutputMode::Text => Ok(UrlOutput::Text(self.to_text(encode_space_as_plus))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{NullValueHandling, QueryValue};

    #[test]
    fn full_render() {
        let mut m = UrlModel::empty();
        m.set_scheme("https");
        m.set_host("example.com");
        m.set_port(8443).unwrap();
        m.set_user_info("me", None);
        m.append_path_segments(["a b", "c/d"]);
        m.query_mut()
            .add("q", Some(QueryValue::from("x y")), NullValueHandling::Remove);
        m.set_fragment("sec 1");
        assert_eq!(
            m.to_text(false),
            "https://me@example.com:8443/a%20b/c%2Fd?q=x%20y#sec%201"
        );
        assert_eq!(
            m.to_text(true),
            "https://me@example.com:8443/a%20b/c%2Fd?q=x+y#sec%201"
        );
    }

    #[test]
    fn hostless_and_schemeless_renders_query_only() {
        let mut m = UrlModel::empty();
        m.query_mut()
            .add("x", Some(QueryValue::from("1")), NullValueHandling::Remove);
        assert_eq!(m.to_text(false), "?x=1");

        m.set_fragment("f");
        assert_eq!(m.to_text(false), "?x=1#f");
    }

    #[test]
    fn empty_model_renders_empty() {
        assert_eq!(UrlModel::empty().to_text(false), "");
    }

    #[test]
    fn empty_fragment_is_not_rendered() {
        let mut m = UrlModel::from_base("https://example.com/#old").unwrap();
        m.set_fragment("");
        assert_eq!(m.fragment(), Some(""));
        assert_eq!(m.to_text(false), "https://example.com/");
    }

    #[test]
    fn uri_mode_parses_rendered_text() {
        let m = UrlModel::from_base("https://example.com/a?x=1").unwrap();
        match m.render(UrlOutputMode::Uri, false).unwrap() {
            UrlOutput::Uri(uri) => {
                assert_eq!(uri.host_str(), Some("example.com"));
                assert_eq!(uri.query(), Some("x=1"));
            }
            other => panic!("expected Uri, got {other:?}"),
        }
    }

    #[test]
    fn uri_mode_rejects_relative_model() {
        let mut m = UrlModel::empty();
        m.append_path_segments(["a"]);
        assert!(matches!(
            m.render(UrlOutputMode::Uri, false),
            Err(BuildError::InvalidUrl { .. })
        ));
    }
}
