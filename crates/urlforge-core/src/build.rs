//! `build-url` and `build-query` operations.
//!
//! Each operation folds zero or more sequentially delivered records into one
//! model (or collection) in delivery order, then renders exactly once.

use crate::error::BuildError;
use crate::query::{NullValueHandling, QueryInput, QueryParamCollection};
use crate::url_model::{validate_port, Credential, UrlModel, UrlOutput, UrlOutputMode};

/// Where a URL build starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlBase {
    Text(String),
    Uri(url::Url),
}

impl UrlBase {
    fn into_model(self) -> Result<UrlModel, BuildError> {
        match self {
            UrlBase::Text(text) => UrlModel::from_base(&text),
            UrlBase::Uri(uri) => UrlModel::from_uri(&uri),
        }
    }
}

/// Fields supplied for one record. `None` leaves the model field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlRecord {
    pub host: Option<String>,
    pub scheme: Option<String>,
    pub port: Option<i64>,
    pub path: Option<Vec<String>>,
    /// `Some("")` clears the fragment.
    pub fragment: Option<String>,
    pub user_name: Option<String>,
    /// Only used together with `user_name`.
    pub password: Option<Credential>,
    pub query: Option<QueryInput>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlBuildOptions {
    pub null_value_handling: NullValueHandling,
    pub encode_space_as_plus: bool,
    pub output: UrlOutputMode,
    /// Applied when the result has a host but no scheme.
    pub default_scheme: Option<String>,
}

impl UrlBuildOptions {
    /// Space-as-plus only means something for text, so it selects text output
    /// unless a URI was asked for.
    pub fn effective_output(&self) -> UrlOutputMode {
        match self.output {
            UrlOutputMode::Model if self.encode_space_as_plus => UrlOutputMode::Text,
            mode => mode,
        }
    }
}

impl UrlModel {
    /// Applies one record.
    ///
    /// Everything that can fail is checked before any field is written, so an
    /// error leaves the model exactly as it was.
    pub fn apply(&mut self, record: UrlRecord, policy: NullValueHandling) -> Result<(), BuildError> {
        let port = record.port.map(validate_port).transpose()?;
        let query = record
            .query
            .map(|q| q.normalize().resolve())
            .transpose()?;

        if let Some(host) = record.host {
            self.set_host(host);
        }
        if let Some(scheme) = record.scheme {
            self.set_scheme(scheme);
        }
        if let Some(port) = port {
            self.set_port(i64::from(port))?;
        }
        if let Some(fragment) = record.fragment {
            self.set_fragment(fragment);
        }
        if let Some(path) = record.path {
            self.append_path_segments(path);
        }
        match (record.user_name, record.password) {
            (Some(user), password) => self.set_user_info(&user, password.as_ref()),
            (None, Some(_)) => tracing::debug!("password supplied without user name; ignored"),
            (None, None) => {}
        }
        if let Some(query) = query {
            self.merge_query(query, policy);
        }
        Ok(())
    }
}

/// One fold step: `merge(model, record) -> model`.
pub fn merge_record(
    mut model: UrlModel,
    record: UrlRecord,
    policy: NullValueHandling,
) -> Result<UrlModel, BuildError> {
    model.apply(record, policy)?;
    Ok(model)
}

/// Builds a URL from an optional base and records delivered in order.
pub fn build_url<I>(base: Option<UrlBase>, records: I, options: &UrlBuildOptions) -> Result<UrlOutput, BuildError>
where
    I: IntoIterator<Item = UrlRecord>,
{
    let seed = match base {
        Some(base) => base.into_model()?,
        None => UrlModel::empty(),
    };

    let policy = options.null_value_handling;
    let mut model = records
        .into_iter()
        .enumerate()
        .try_fold(seed, |model, (index, record)| {
            tracing::debug!(index, ?record, %policy, "merging url record");
            merge_record(model, record, policy)
        })?;

    if let Some(scheme) = &options.default_scheme {
        if model.scheme().is_none() && model.host().is_some() {
            model.set_scheme(scheme.clone());
        }
    }

    let mode = options.effective_output();
    tracing::debug!(?mode, "rendering url");
    model.render(mode, options.encode_space_as_plus)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryOutputMode {
    #[default]
    Collection,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    Collection(QueryParamCollection),
    Text(String),
}

impl std::fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryOutput::Collection(c) => write!(f, "{c}"),
            QueryOutput::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryBuildOptions {
    pub null_value_handling: NullValueHandling,
    pub encode_space_as_plus: bool,
    pub output: QueryOutputMode,
}

impl QueryBuildOptions {
    pub fn effective_output(&self) -> QueryOutputMode {
        if self.encode_space_as_plus {
            QueryOutputMode::Text
        } else {
            self.output
        }
    }
}

/// Builds a standalone query collection from inputs delivered in order.
pub fn build_query<I>(inputs: I, options: &QueryBuildOptions) -> Result<QueryOutput, BuildError>
where
    I: IntoIterator<Item = QueryInput>,
{
    let policy = options.null_value_handling;
    let collection = inputs
        .into_iter()
        .enumerate()
        .try_fold(QueryParamCollection::new(), |mut acc, (index, input)| {
            tracing::debug!(index, shape = input.shape_name(), %policy, "merging query input");
            acc.merge(input.normalize().resolve()?, policy);
            Ok::<_, BuildError>(acc)
        })?;

    Ok(match options.effective_output() {
        QueryOutputMode::Collection => QueryOutput::Collection(collection),
        QueryOutputMode::Text => {
            QueryOutput::Text(collection.to_query_string(options.encode_space_as_plus))
        }
    })
}
