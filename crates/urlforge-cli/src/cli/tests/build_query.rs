//! Parse tests for build-query.

use super::parse;
use crate::cli::CliCommand;
use urlforge_core::NullValueHandling;

#[test]
fn cli_parse_build_query_defaults() {
    match parse(&["urlforge", "build-query"]) {
        CliCommand::BuildQuery(args) => {
            assert!(args.query.queries.is_empty());
            assert!(args.query.null_value_handling.is_none());
            assert!(!args.as_string);
        }
        _ => panic!("expected BuildQuery"),
    }
}

#[test]
fn cli_parse_build_query_flags() {
    match parse(&[
        "urlforge",
        "build-query",
        "-q",
        "a=1",
        "-q",
        "b",
        "--null-value-handling",
        "always-append",
        "--encode-space-as-plus",
        "--stdin",
        "--as-string",
    ]) {
        CliCommand::BuildQuery(args) => {
            assert_eq!(args.query.queries, vec!["a=1", "b"]);
            assert_eq!(
                args.query.null_value_handling,
                Some(NullValueHandling::AlwaysAppend)
            );
            assert!(args.query.encode_space_as_plus);
            assert!(args.query.stdin);
            assert!(args.as_string);
        }
        _ => panic!("expected BuildQuery with flags"),
    }
}
