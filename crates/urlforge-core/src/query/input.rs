//! Query input shapes and their normalization into ordered pairs.
//!
//! Every shape funnels into one stream of [`QueryParam`]s so the merge engine
//! has a single input contract. A canonical [`QueryParamCollection`] is the one
//! exception: it is passed through as itself and never flattened.

use std::fmt;

use super::collection::{split_pairs, QueryParam, QueryParamCollection};
use super::policy::NullValueHandling;
use super::value::QueryValue;
use crate::error::BuildError;

/// Key/value entries of one mapping, in the mapping's own iteration order.
pub type QueryMapping = Vec<(String, Option<QueryValue>)>;

/// A two-element record. The name must be present at merge time.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub name: Option<String>,
    pub value: Option<QueryValue>,
}

impl PairRecord {
    pub fn new(name: impl Into<String>, value: Option<QueryValue>) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    fn into_param(self) -> Result<QueryParam, BuildError> {
        match self.name {
            Some(name) => Ok(QueryParam::new(name, self.value)),
            None => Err(BuildError::MissingPairKey {
                value: self
                    .value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "<absent>".to_string()),
            }),
        }
    }
}

/// Every query shape a caller may supply.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryInput {
    /// `k1=v1&k2=v2`
    Text(String),
    /// Fragments re-joined with `&` and parsed as [`QueryInput::Text`].
    Strings(Vec<String>),
    Mapping(QueryMapping),
    Pair(PairRecord),
    Pairs(Vec<PairRecord>),
    Mappings(Vec<QueryMapping>),
    /// Already canonical; passed through untouched.
    Collection(QueryParamCollection),
}

impl QueryInput {
    /// Builds a mapping input from any ordered key/value iterator.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<QueryValue>)>,
    {
        QueryInput::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Name of the shape, for logs.
    pub fn shape_name(&self) -> &'static str {
        match self {
            QueryInput::Text(_) => "string",
            QueryInput::Strings(_) => "sequence of strings",
            QueryInput::Mapping(_) => "mapping",
            QueryInput::Pair(_) => "paired record",
            QueryInput::Pairs(_) => "sequence of paired records",
            QueryInput::Mappings(_) => "sequence of mappings",
            QueryInput::Collection(_) => "query parameter collection",
        }
    }

    /// Resolves the shape into a pair stream, or passes a collection through.
    pub fn normalize(self) -> NormalizedQuery {
        let stream: Box<dyn Iterator<Item = Result<QueryParam, BuildError>>> = match self {
            QueryInput::Collection(collection) => return NormalizedQuery::Collection(collection),
            QueryInput::Text(text) => Box::new(parse_text(&text)),
            QueryInput::Strings(parts) => Box::new(parse_text(&parts.join("&"))),
            QueryInput::Mapping(entries) => Box::new(mapping_params(entries).map(Ok)),
            QueryInput::Pair(record) => Box::new(std::iter::once(record.into_param())),
            QueryInput::Pairs(records) => Box::new(records.into_iter().map(PairRecord::into_param)),
            QueryInput::Mappings(maps) => {
                Box::new(maps.into_iter().flat_map(mapping_params).map(Ok))
            }
        };
        NormalizedQuery::Pairs(PairStream { inner: stream })
    }
}

impl From<&str> for QueryInput {
    fn from(s: &str) -> Self {
        QueryInput::Text(s.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(s: String) -> Self {
        QueryInput::Text(s)
    }
}

impl From<QueryParamCollection> for QueryInput {
    fn from(c: QueryParamCollection) -> Self {
        QueryInput::Collection(c)
    }
}

fn parse_text(text: &str) -> std::vec::IntoIter<Result<QueryParam, BuildError>> {
    split_pairs(text).map(Ok).collect::<Vec<_>>().into_iter()
}

fn mapping_params(entries: QueryMapping) -> impl Iterator<Item = QueryParam> {
    entries.into_iter().map(|(k, v)| QueryParam::new(k, v))
}

/// Lazy, ordered stream of pairs produced by the normalizer.
pub struct PairStream {
    inner: Box<dyn Iterator<Item = Result<QueryParam, BuildError>>>,
}

impl Iterator for PairStream {
    type Item = Result<QueryParam, BuildError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for PairStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairStream").finish_non_exhaustive()
    }
}

/// Output of [`QueryInput::normalize`].
#[derive(Debug)]
pub enum NormalizedQuery {
    Pairs(PairStream),
    Collection(QueryParamCollection),
}

impl NormalizedQuery {
    /// The generic pair stream. A canonical collection is refused rather than
    /// silently flattened.
    pub fn into_pairs(self) -> Result<PairStream, BuildError> {
        match self {
            NormalizedQuery::Pairs(stream) => Ok(stream),
            NormalizedQuery::Collection(_) => Err(BuildError::AmbiguousCollectionReuse),
        }
    }

    /// Resolves every pair up front so a merge either applies fully or not at all.
    pub fn resolve(self) -> Result<ResolvedQuery, BuildError> {
        match self {
            NormalizedQuery::Pairs(stream) => {
                Ok(ResolvedQuery::Pairs(stream.collect::<Result<Vec<_>, _>>()?))
            }
            NormalizedQuery::Collection(collection) => Ok(ResolvedQuery::Collection(collection)),
        }
    }
}

/// Fully materialized query input, ready to merge without failing.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedQuery {
    Pairs(Vec<QueryParam>),
    Collection(QueryParamCollection),
}

impl QueryParamCollection {
    /// Merges resolved input under `policy`.
    ///
    /// A canonical collection is consumed as a unit, never re-normalized, but
    /// each of its entries obeys the same blank and policy rules as any pair.
    pub fn merge(&mut self, input: ResolvedQuery, policy: NullValueHandling) {
        match input {
            ResolvedQuery::Pairs(pairs) => self.add_range(pairs, policy),
            ResolvedQuery::Collection(collection) => self.add_range(collection, policy),
        }
    }
}
