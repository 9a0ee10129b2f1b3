//! Parse tests for build-url.

use super::{parse, parse_err};
use crate::cli::CliCommand;
use clap::error::ErrorKind;
use urlforge_core::NullValueHandling;

#[test]
fn cli_parse_build_url_defaults() {
    match parse(&["urlforge", "build-url"]) {
        CliCommand::BuildUrl(args) => {
            assert!(args.base.is_none());
            assert!(args.host.is_none());
            assert!(args.port.is_none());
            assert!(args.path.is_none());
            assert!(args.query.queries.is_empty());
            assert!(args.query.null_value_handling.is_none());
            assert!(!args.query.encode_space_as_plus);
            assert!(!args.query.stdin);
            assert!(!args.as_uri);
            assert!(!args.as_string);
        }
        _ => panic!("expected BuildUrl"),
    }
}

#[test]
fn cli_parse_build_url_components() {
    match parse(&[
        "urlforge",
        "build-url",
        "https://example.com",
        "--host-name",
        "other.org",
        "--scheme",
        "http",
        "--port",
        "8080",
        "--path",
        "a",
        "b c",
        "--fragment",
        "top",
        "-q",
        "x=1",
        "--query",
        "{\"y\":null}",
        "--null-value-handling",
        "name-only",
    ]) {
        CliCommand::BuildUrl(args) => {
            assert_eq!(args.base.as_deref(), Some("https://example.com"));
            assert_eq!(args.host.as_deref(), Some("other.org"));
            assert_eq!(args.scheme.as_deref(), Some("http"));
            assert_eq!(args.port, Some(8080));
            assert_eq!(args.path, Some(vec!["a".to_string(), "b c".to_string()]));
            assert_eq!(args.fragment.as_deref(), Some("top"));
            assert_eq!(args.query.queries, vec!["x=1", "{\"y\":null}"]);
            assert_eq!(args.query.null_value_handling, Some(NullValueHandling::NameOnly));
        }
        _ => panic!("expected BuildUrl with components"),
    }
}

#[test]
fn cli_parse_build_url_empty_fragment_and_negative_port() {
    match parse(&["urlforge", "build-url", "--fragment", "", "--port", "-1"]) {
        CliCommand::BuildUrl(args) => {
            assert_eq!(args.fragment.as_deref(), Some(""));
            assert_eq!(args.port, Some(-1));
        }
        _ => panic!("expected BuildUrl"),
    }
}

#[test]
fn cli_parse_build_url_credentials() {
    match parse(&["urlforge", "build-url", "--user-name", "bob", "--password", "pw"]) {
        CliCommand::BuildUrl(args) => {
            assert_eq!(args.user_name.as_deref(), Some("bob"));
            assert_eq!(args.password.as_deref(), Some("pw"));
        }
        _ => panic!("expected BuildUrl with credentials"),
    }
    assert_eq!(
        parse_err(&["urlforge", "build-url", "--password", "pw"]),
        ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn cli_parse_build_url_output_conflicts() {
    assert_eq!(
        parse_err(&["urlforge", "build-url", "--as-uri", "--as-string"]),
        ErrorKind::ArgumentConflict
    );
    assert_eq!(
        parse_err(&["urlforge", "build-url", "--as-uri", "--encode-space-as-plus"]),
        ErrorKind::ArgumentConflict
    );
}

#[test]
fn cli_parse_build_url_rejects_unknown_policy() {
    assert_eq!(
        parse_err(&["urlforge", "build-url", "--null-value-handling", "drop"]),
        ErrorKind::ValueValidation
    );
}
