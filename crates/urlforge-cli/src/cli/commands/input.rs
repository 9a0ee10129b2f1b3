//! Turns `--query` values and stdin lines into core inputs.

use anyhow::{Context, Result};
use std::io::BufRead;
use urlforge_core::boundary::parse_json_line;
use urlforge_core::QueryInput;

fn looks_like_json(value: &str) -> bool {
    let trimmed = value.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Plain text values join into one sequence-of-strings input; any JSON value
/// makes every value its own input, merged in argument order.
pub fn query_inputs_from_args(values: &[String]) -> Result<Vec<QueryInput>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    if !values.iter().any(|v| looks_like_json(v)) {
        return Ok(vec![QueryInput::Strings(values.to_vec())]);
    }

    values
        .iter()
        .map(|v| {
            if looks_like_json(v) {
                let json = parse_json_line(v).with_context(|| format!("--query {v}"))?;
                QueryInput::from_json(json).with_context(|| format!("--query {v}"))
            } else {
                Ok(QueryInput::Text(v.clone()))
            }
        })
        .collect()
}

/// Reads one JSON value per non-empty line, converting each with `convert`.
///
/// All lines are decoded before anything is merged.
pub fn read_json_records<R, T, F>(reader: R, convert: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: Fn(serde_json::Value) -> Result<T, urlforge_core::BuildError>,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_json_line(&line).with_context(|| format!("stdin line {}", index + 1))?;
        records.push(convert(value).with_context(|| format!("stdin line {}", index + 1))?);
    }
    tracing::debug!(count = records.len(), "read stdin records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlforge_core::boundary::query_record_from_json;
    use urlforge_core::BuildError;

    #[test]
    fn text_values_join_as_strings() {
        let inputs = query_inputs_from_args(&["a=1".into(), "b".into()]).unwrap();
        assert_eq!(
            inputs,
            vec![QueryInput::Strings(vec!["a=1".into(), "b".into()])]
        );
    }

    #[test]
    fn json_values_stay_separate() {
        let inputs = query_inputs_from_args(&["a=1".into(), r#"{"b": null}"#.into()]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], QueryInput::Text("a=1".into()));
        assert_eq!(
            inputs[1],
            QueryInput::Mapping(vec![("b".to_string(), None)])
        );
    }

    #[test]
    fn invalid_json_shape_is_reported() {
        let err = query_inputs_from_args(&["[1, 2, 3]".into()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::InvalidInputShape { .. })
        ));
    }

    #[test]
    fn stdin_lines_skip_blanks() {
        let data = "\"a=1\"\n\n{\"b\": \"2\"}\n";
        let records = read_json_records(data.as_bytes(), query_record_from_json).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn stdin_bad_line_names_line_number() {
        let data = "\"a=1\"\n{oops\n";
        let err = read_json_records(data.as_bytes(), query_record_from_json).unwrap_err();
        assert!(format!("{err:#}").contains("stdin line 2"));
    }
}
