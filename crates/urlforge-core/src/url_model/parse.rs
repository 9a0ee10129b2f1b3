//! Splits URL text into model fields.

use super::{Credential, UrlModel};
use crate::error::BuildError;
use crate::query::encode::decode_component;
use crate::query::QueryParamCollection;

fn invalid(input: &str, reason: impl Into<String>) -> BuildError {
    BuildError::InvalidUrl {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// `scheme` = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub(super) fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Parses `[scheme:][//[userinfo@]host[:port]][/path][?query][#fragment]`.
///
/// Components are percent-decoded; the query keeps bare and empty entries as
/// stored state.
pub(super) fn parse_url(input: &str) -> Result<UrlModel, BuildError> {
    let text = input.trim();
    let mut model = UrlModel::empty();

    let (rest, fragment) = match text.split_once('#') {
        Some((r, f)) => (r, Some(decode_component(f))),
        None => (text, None),
    };
    model.fragment = fragment;

    let (rest, query) = match rest.split_once('?') {
        Some((r, q)) => (r, Some(q)),
        None => (rest, None),
    };
    if let Some(q) = query {
        model.query = QueryParamCollection::parse(q);
    }

    let rest = match rest.split_once(':') {
        Some((scheme, after)) if !scheme.contains('/') && is_scheme(scheme) => {
            model.scheme = Some(scheme.to_string());
            after
        }
        _ => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            parse_authority(input, &after[..end], &mut model)?;
            &after[end..]
        }
        None => rest,
    };

    let (segments, rooted, trailing_slash) = split_path(path);
    model.path = segments;
    model.rooted = rooted;
    model.trailing_slash = trailing_slash;

    Ok(model)
}

fn parse_authority(input: &str, authority: &str, model: &mut UrlModel) -> Result<(), BuildError> {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, hp)) => {
            let (user, password) = match userinfo.split_once(':') {
                Some((u, p)) => (u, Some(p)),
                None => (userinfo, None),
            };
            model.user_name = Some(decode_component(user));
            model.password = password.map(|p| Credential::new(decode_component(p)));
            hp
        }
        None => authority,
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| invalid(input, "unterminated IPv6 host"))?;
        let after = &host_port[close + 1..];
        let port = match after.strip_prefix(':') {
            Some(p) => Some(p),
            None if after.is_empty() => None,
            None => return Err(invalid(input, "unexpected text after IPv6 host")),
        };
        (&host_port[..=close], port)
    } else {
        match host_port.rsplit_once(':') {
            Some((h, p)) => (h, Some(p)),
            None => (host_port, None),
        }
    };

    model.host = Some(decode_component(host));

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(input, format!("port {port:?} is not a number")));
        }
        let value: i64 = port
            .parse()
            .map_err(|_| invalid(input, format!("port {port:?} is too large")))?;
        model.set_port(value)?;
    }

    Ok(())
}

/// Splits a path into decoded segments plus rooted and trailing-slash flags.
fn split_path(path: &str) -> (Vec<String>, bool, bool) {
    let rooted = path.starts_with('/');
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return (Vec::new(), rooted, rooted);
    }

    let mut segments: Vec<String> = trimmed.split('/').map(decode_component).collect();
    let trailing_slash = segments.last().is_some_and(|s| s.is_empty());
    if trailing_slash {
        segments.pop();
    }
    (segments, rooted, trailing_slash)
}
