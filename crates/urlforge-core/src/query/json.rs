//! Classifies dynamic JSON values into [`QueryInput`] shapes.

use serde_json::Value;

use super::input::{PairRecord, QueryInput, QueryMapping};
use super::value::QueryValue;
use crate::error::BuildError;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Scalar value of a pair; `null` is absent, containers are rejected.
fn scalar(value: Value) -> Result<Option<QueryValue>, BuildError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(QueryValue::Bool(b))),
        Value::String(s) => Ok(Some(QueryValue::Text(s))),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Some(QueryValue::Integer(i))),
            None => Ok(Some(QueryValue::Number(n))),
        },
        other => Err(BuildError::invalid_shape(format!(
            "{} used as a query value",
            json_type_name(&other)
        ))),
    }
}

fn mapping(object: serde_json::Map<String, Value>) -> Result<QueryMapping, BuildError> {
    object
        .into_iter()
        .map(|(k, v)| Ok((k, scalar(v)?)))
        .collect()
}

/// Element 1 is coerced to text; `null` leaves the name missing.
fn pair(mut elements: Vec<Value>) -> Result<PairRecord, BuildError> {
    let value = scalar(elements.pop().unwrap_or(Value::Null))?;
    let name = match elements.pop().unwrap_or(Value::Null) {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => {
            return Err(BuildError::invalid_shape(format!(
                "{} used as a pair name",
                json_type_name(&other)
            )))
        }
    };
    Ok(PairRecord { name, value })
}

fn is_pair_like(elements: &[Value]) -> bool {
    elements.len() == 2
        && matches!(elements[0], Value::Null | Value::String(_))
        && (elements[0].is_null() || !elements[1].is_string())
        && !matches!(elements[1], Value::Array(_) | Value::Object(_))
}

impl QueryInput {
    /// Resolves a JSON value to a query shape.
    ///
    /// - string: delimited text
    /// - object: mapping, in key order
    /// - array of strings: fragments joined with `&`
    /// - array of two-element arrays: paired records
    /// - array of objects: mappings, flattened in order
    /// - `[name, non-string]` or `[null, value]`: one paired record
    pub fn from_json(value: Value) -> Result<Self, BuildError> {
        match value {
            Value::String(s) => Ok(QueryInput::Text(s)),
            Value::Object(object) => Ok(QueryInput::Mapping(mapping(object)?)),
            Value::Array(elements) => Self::from_json_array(elements),
            other => Err(BuildError::invalid_shape(json_type_name(&other))),
        }
    }

    fn from_json_array(elements: Vec<Value>) -> Result<Self, BuildError> {
        if elements.iter().all(Value::is_string) {
            let parts = elements
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            return Ok(QueryInput::Strings(parts));
        }

        if is_pair_like(&elements) {
            return Ok(QueryInput::Pair(pair(elements)?));
        }

        if elements.iter().all(Value::is_object) {
            let maps = elements
                .into_iter()
                .map(|v| match v {
                    Value::Object(object) => mapping(object),
                    other => Err(BuildError::invalid_shape(json_type_name(&other))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(QueryInput::Mappings(maps));
        }

        if elements
            .iter()
            .all(|v| v.as_array().is_some_and(|a| a.len() == 2))
        {
            let records = elements
                .into_iter()
                .map(|v| match v {
                    Value::Array(inner) => pair(inner),
                    other => Err(BuildError::invalid_shape(json_type_name(&other))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(QueryInput::Pairs(records));
        }

        Err(BuildError::invalid_shape("array of mixed elements"))
    }
}
