//! JSON views of the model types, printed when no text output is requested.

use serde_json::{json, Value};
use urlforge_core::{QueryParamCollection, QueryValue, UrlModel};

fn value_json(value: Option<&QueryValue>) -> Value {
    match value {
        None => Value::Null,
        Some(QueryValue::Text(s)) => json!(s),
        Some(QueryValue::Integer(n)) => json!(n),
        Some(QueryValue::Number(n)) => Value::Number(n.clone()),
        Some(QueryValue::Bool(b)) => json!(b),
    }
}

/// `[[name, value], ...]`; a bare entry has a `null` value.
pub fn collection_json(collection: &QueryParamCollection) -> Value {
    Value::Array(
        collection
            .iter()
            .map(|p| json!([p.name, value_json(p.value.as_ref())]))
            .collect(),
    )
}

pub fn model_json(model: &UrlModel) -> Value {
    json!({
        "scheme": model.scheme(),
        "host": model.host(),
        "port": model.port(),
        "userinfo": model.userinfo(),
        "path": model.path_segments(),
        "query": collection_json(model.query()),
        "fragment": model.fragment(),
        "url": model.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_view() {
        let q = QueryParamCollection::parse("a=1&flag&b=");
        assert_eq!(collection_json(&q), json!([["a", "1"], ["flag", null], ["b", ""]]));
    }

    #[test]
    fn model_view() {
        let m = UrlModel::from_base("https://example.com:8080/a?x=1").unwrap();
        let v = model_json(&m);
        assert_eq!(v["host"], json!("example.com"));
        assert_eq!(v["port"], json!(8080));
        assert_eq!(v["path"], json!(["a"]));
        assert_eq!(v["fragment"], Value::Null);
        assert_eq!(v["url"], json!("https://example.com:8080/a?x=1"));
    }
}
