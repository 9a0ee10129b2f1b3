//! urlforge core: URL model and query-parameter merge engine.
//!
//! Query data arrives in many shapes ([`query::QueryInput`]), is normalized to
//! ordered name/value pairs and merged into a [`query::QueryParamCollection`]
//! under a [`query::NullValueHandling`] policy. A [`url_model::UrlModel`] owns
//! one collection together with the other URL components and renders to text,
//! a URI value, or itself.

pub mod boundary;
pub mod build;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod url_model;

pub use build::{
    build_query, build_url, merge_record, QueryBuildOptions, QueryOutput, QueryOutputMode,
    UrlBase, UrlBuildOptions, UrlRecord,
};
pub use error::BuildError;
pub use query::{NullValueHandling, QueryInput, QueryParam, QueryParamCollection, QueryValue};
pub use url_model::{Credential, UrlModel, UrlOutput, UrlOutputMode};
