//! Error types for query normalization, URL building and rendering.

use thiserror::Error;

/// Shapes the query normalizer accepts, listed in `InvalidInputShape` messages.
pub const ACCEPTED_QUERY_SHAPES: &str = "string, sequence of strings, mapping, paired record, \
     sequence of paired records, sequence of mappings, query parameter collection";

/// Errors raised by a single build operation.
///
/// None of these are process-fatal; the command layer reports them and exits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The query input's shape is not one of the recognized forms.
    #[error("invalid query input shape: {found} (expected one of: {accepted})")]
    InvalidInputShape {
        found: String,
        accepted: &'static str,
    },

    /// A numeric field is outside its allowed range.
    #[error("{field} {value} is out of range (must be between {min} and {max})")]
    InvalidRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A canonical collection was about to be flattened into a generic pair stream.
    #[error("query parameter collection cannot be re-ingested as an independent pair stream")]
    AmbiguousCollectionReuse,

    /// A paired record has no name element.
    #[error("paired record is missing its name (value: {value})")]
    MissingPairKey { value: String },

    /// URL text could not be parsed, or the rendered URL was rejected by the URI type.
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// A pipeline record is not an object of known fields.
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },
}

impl BuildError {
    pub(crate) fn invalid_shape(found: impl Into<String>) -> Self {
        BuildError::InvalidInputShape {
            found: found.into(),
            accepted: ACCEPTED_QUERY_SHAPES,
        }
    }

    pub(crate) fn port_out_of_range(value: i64) -> Self {
        BuildError::InvalidRange {
            field: "port",
            value,
            min: 1,
            max: 65535,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_shape_lists_accepted_shapes() {
        let msg = BuildError::invalid_shape("number").to_string();
        assert!(msg.contains("number"));
        assert!(msg.contains("sequence of mappings"));
        assert!(msg.contains("query parameter collection"));
    }

    #[test]
    fn port_range_display() {
        assert_eq!(
            BuildError::port_out_of_range(0).to_string(),
            "port 0 is out of range (must be between 1 and 65535)"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            BuildError::AmbiguousCollectionReuse,
            BuildError::AmbiguousCollectionReuse
        );
        assert_ne!(
            BuildError::AmbiguousCollectionReuse,
            BuildError::port_out_of_range(0)
        );
    }
}
