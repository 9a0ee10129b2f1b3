//! Percent-encoding sets and helpers for each URL component.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Query names and values: everything except RFC 3986 unreserved characters.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path segments. `/` is escaped so each stored segment stays one segment.
const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Userinfo keeps `:` so `user:password` survives intact.
const USERINFO_SET: &AsciiSet = &PATH_SEGMENT_SET.add(b'@');

/// The user part escapes `:` so it cannot be confused with the password separator.
const USER_NAME_SET: &AsciiSet = &USERINFO_SET.add(b':');

/// Hosts keep `:`, `[` and `]` for IPv6 literals.
const HOST_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encodes a query name or value. Space becomes `+` or `%20`.
pub fn encode_query_component(input: &str, encode_space_as_plus: bool) -> String {
    let encoded = utf8_percent_encode(input, QUERY_SET).to_string();
    if encode_space_as_plus {
        encoded.replace("%20", "+")
    } else {
        encoded
    }
}

/// Decodes a query name or value; `+` is read as a space.
pub fn decode_query_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub fn encode_path_segment(input: &str) -> String {
    utf8_percent_encode(input, PATH_SEGMENT_SET).to_string()
}

pub fn encode_fragment(input: &str) -> String {
    utf8_percent_encode(input, FRAGMENT_SET).to_string()
}

pub fn encode_userinfo(input: &str) -> String {
    utf8_percent_encode(input, USERINFO_SET).to_string()
}

pub fn encode_user_name(input: &str) -> String {
    utf8_percent_encode(input, USER_NAME_SET).to_string()
}

pub fn encode_host(input: &str) -> String {
    utf8_percent_encode(input, HOST_SET).to_string()
}

/// Decodes any non-query component (`+` is literal).
pub fn decode_component(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
