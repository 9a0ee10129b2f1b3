//! Ordered, duplicate-permitting query parameter list and its merge rules.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::encode::{decode_query_component, encode_query_component};
use super::policy::NullValueHandling;
use super::value::QueryValue;

/// One `name[=value]` entry. `value: None` renders as a bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParam {
    pub name: String,
    pub value: Option<QueryValue>,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, value: Option<QueryValue>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Query component of a URL: pairs in insertion order, names may repeat.
///
/// Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamCollection {
    params: Vec<QueryParam>,
}

impl QueryParamCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `k1=v1&k2&k3=` as stored state: bare names stay bare, `k=` keeps
    /// an empty value, nothing is removed. A leading `?` is ignored.
    pub fn parse(text: &str) -> Self {
        Self {
            params: split_pairs(text).collect(),
        }
    }

    /// Merges one pair under `policy`.
    ///
    /// Blank or whitespace-only text counts as absent. Empty names are skipped.
    pub fn add(&mut self, name: impl Into<String>, value: Option<QueryValue>, policy: NullValueHandling) {
        let name = name.into();
        if name.is_empty() {
            tracing::trace!("skipping query pair with empty name");
            return;
        }

        let value = value.filter(|v| !v.is_blank());
        match (value, policy) {
            (Some(v), _) => self.params.push(QueryParam::new(name, Some(v))),
            (None, NullValueHandling::Remove) => {
                let removed = self.remove(&name);
                tracing::trace!(name = %name, removed, "absent value removed existing entries");
            }
            (None, NullValueHandling::Ignore) => {
                tracing::trace!(name = %name, "absent value ignored");
            }
            (None, NullValueHandling::NameOnly) => self.params.push(QueryParam::new(name, None)),
            (None, NullValueHandling::AlwaysAppend) => self
                .params
                .push(QueryParam::new(name, Some(QueryValue::Text(String::new())))),
        }
    }

    /// Applies [`add`](Self::add) to each pair in order with one policy.
    pub fn add_range<I>(&mut self, pairs: I, policy: NullValueHandling)
    where
        I: IntoIterator<Item = QueryParam>,
    {
        for pair in pairs {
            self.add(pair.name, pair.value, policy);
        }
    }

    /// Removes every entry named `name`, returning how many were dropped.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.params.len();
        self.params.retain(|p| p.name != name);
        before - self.params.len()
    }

    /// First value stored under `name`. `Some(None)` is a bare entry.
    pub fn get(&self, name: &str) -> Option<Option<&QueryValue>> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_ref())
    }

    pub fn get_all(&self, name: &str) -> Vec<Option<&QueryValue>> {
        self.params
            .iter()
            .filter(|p| p.name == name)
            .map(|p| p.value.as_ref())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryParam> {
        self.params.iter()
    }

    /// Renders `name=value&...` in collection order.
    pub fn to_query_string(&self, encode_space_as_plus: bool) -> String {
        let mut out = String::new();
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_query_component(&param.name, encode_space_as_plus));
            if let Some(value) = &param.value {
                out.push('=');
                out.push_str(&encode_query_component(&value.to_string(), encode_space_as_plus));
            }
        }
        out
    }
}

impl fmt::Display for QueryParamCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string(false))
    }
}

impl FromStr for QueryParamCollection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a QueryParamCollection {
    type Item = &'a QueryParam;
    type IntoIter = std::slice::Iter<'a, QueryParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for QueryParamCollection {
    type Item = QueryParam;
    type IntoIter = std::vec::IntoIter<QueryParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

/// Splits delimited query text into pairs.
///
/// Segments split on the first `=`; a segment without `=` is a bare name.
/// Empty segments and empty names are dropped.
pub(crate) fn split_pairs(text: &str) -> impl Iterator<Item = QueryParam> + '_ {
    text.strip_prefix('?')
        .unwrap_or(text)
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (name, value) = match segment.split_once('=') {
                Some((n, v)) => (n, Some(QueryValue::Text(decode_query_component(v)))),
                None => (segment, None),
            };
            let name = decode_query_component(name);
            if name.is_empty() {
                None
            } else {
                Some(QueryParam { name, value })
            }
        })
}
