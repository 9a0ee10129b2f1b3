//! Explicit conversions used by the command surface.
//!
//! Text, URI values, JSON records and the model types convert here; no merge
//! logic lives in this module.

use serde::Deserialize;
use serde_json::Value;

use crate::build::UrlRecord;
use crate::error::BuildError;
use crate::query::{QueryInput, QueryParamCollection};
use crate::url_model::{starts_with_scheme, Credential, UrlModel};

pub fn url_from_text(text: &str) -> Result<UrlModel, BuildError> {
    UrlModel::from_base(text)
}

pub fn url_to_text(model: &UrlModel) -> String {
    model.to_text(false)
}

pub fn url_from_uri(uri: &url::Url) -> Result<UrlModel, BuildError> {
    UrlModel::from_uri(uri)
}

pub fn url_to_uri(model: &UrlModel) -> Result<url::Url, BuildError> {
    model.to_uri(false)
}

/// Parses query text, or takes the query of an absolute URL (`scheme://...`).
///
/// Only a leading scheme counts; `next=http://...` is query text.
pub fn query_from_text(text: &str) -> Result<QueryParamCollection, BuildError> {
    if starts_with_scheme(text) {
        Ok(query_from_url(&UrlModel::from_base(text)?))
    } else {
        Ok(QueryParamCollection::parse(text))
    }
}

pub fn query_to_text(collection: &QueryParamCollection) -> String {
    collection.to_query_string(false)
}

pub fn query_from_url(model: &UrlModel) -> QueryParamCollection {
    model.query().clone()
}

/// Wire form of a `build-url` pipeline record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUrlRecord {
    #[serde(default, alias = "host_name")]
    host: Option<String>,
    #[serde(default)]
    scheme: Option<String>,
    #[serde(default)]
    port: Option<i64>,
    #[serde(default)]
    path: Option<Vec<String>>,
    #[serde(default)]
    fragment: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    query: Option<Value>,
}

/// Decodes one JSON pipeline record for `build-url`.
pub fn url_record_from_json(value: Value) -> Result<UrlRecord, BuildError> {
    if !value.is_object() {
        return Err(BuildError::InvalidRecord {
            reason: "expected a JSON object".to_string(),
        });
    }
    let raw: RawUrlRecord = serde_json::from_value(value).map_err(|e| BuildError::InvalidRecord {
        reason: e.to_string(),
    })?;

    let query = raw.query.map(QueryInput::from_json).transpose()?;

    Ok(UrlRecord {
        host: raw.host,
        scheme: raw.scheme,
        port: raw.port,
        path: raw.path,
        fragment: raw.fragment,
        user_name: raw.user_name,
        password: raw.password.map(Credential::new),
        query,
    })
}

/// Decodes one JSON pipeline record for `build-query`.
pub fn query_record_from_json(value: Value) -> Result<QueryInput, BuildError> {
    QueryInput::from_json(value)
}

/// Parses a JSON line; malformed JSON is an invalid record.
pub fn parse_json_line(line: &str) -> Result<Value, BuildError> {
    serde_json::from_str(line).map_err(|e| BuildError::InvalidRecord {
        reason: format!("malformed JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{NullValueHandling, QueryValue};
    use serde_json::json;

    #[test]
    fn url_text_round_trip() {
        let model = url_from_text("https://example.com/a b?q=x y").unwrap();
        let text = url_to_text(&model);
        assert_eq!(text, "https://example.com/a%20b?q=x%20y");
        assert_eq!(url_from_text(&text).unwrap(), model);
    }

    #[test]
    fn url_uri_round_trip() {
        let uri = url::Url::parse("https://example.com:8443/p?x=1#f").unwrap();
        let model = url_from_uri(&uri).unwrap();
        assert_eq!(model.port(), Some(8443));
        assert_eq!(url_to_uri(&model).unwrap(), uri);
    }

    #[test]
    fn query_text_accepts_url_or_query() {
        let from_url = query_from_text("https://example.com/?a=1&b").unwrap();
        let from_query = query_from_text("a=1&b").unwrap();
        assert_eq!(from_url, from_query);
        assert_eq!(query_to_text(&from_query), "a=1&b");
    }

    #[test]
    fn query_text_with_embedded_url_value() {
        let q = query_from_text("next=http://a.example/x&y=1").unwrap();
        assert_eq!(q.get("next"), Some(Some(&QueryValue::from("http://a.example/x"))));
        assert_eq!(q.len(), 2);

        let q = query_from_text("?redirect=https://b.example").unwrap();
        assert!(q.contains("redirect"));
    }

    #[test]
    fn query_from_url_model() {
        let mut model = url_from_text("https://example.com/?a=1").unwrap();
        model
            .query_mut()
            .add("b", Some(QueryValue::from("2")), NullValueHandling::Remove);
        assert_eq!(query_from_url(&model).to_string(), "a=1&b=2");
    }

    #[test]
    fn url_record_decodes_all_fields() {
        let record = url_record_from_json(json!({
            "host": "example.com",
            "scheme": "https",
            "port": 8080,
            "path": ["a", "b"],
            "fragment": "",
            "user_name": "me",
            "password": "pw",
            "query": {"x": null}
        }))
        .unwrap();
        assert_eq!(record.host.as_deref(), Some("example.com"));
        assert_eq!(record.port, Some(8080));
        assert_eq!(record.path, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(record.fragment.as_deref(), Some(""));
        assert_eq!(record.password, Some(Credential::new("pw")));
        assert_eq!(
            record.query,
            Some(QueryInput::Mapping(vec![("x".to_string(), None)]))
        );
    }

    #[test]
    fn url_record_rejects_unknown_fields_and_non_objects() {
        assert!(matches!(
            url_record_from_json(json!({"hots": "typo"})),
            Err(BuildError::InvalidRecord { .. })
        ));
        assert!(matches!(
            url_record_from_json(json!("https://example.com")),
            Err(BuildError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn url_record_propagates_query_shape_errors() {
        assert!(matches!(
            url_record_from_json(json!({"query": 5})),
            Err(BuildError::InvalidInputShape { .. })
        ));
    }

    #[test]
    fn malformed_json_line() {
        assert!(matches!(
            parse_json_line("{not json"),
            Err(BuildError::InvalidRecord { .. })
        ));
    }
}
