//! Tests for JSON rendering of error chains

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cryypt_errors::{Code, Error, Plain};
use serde::Serialize;

#[derive(Serialize)]
struct Response {
    ok: bool,
    error: Error,
}

#[test]
fn test_json_is_quoted_message_at_any_depth() {
    let mut err = Error::new_code(Code::NOT_FOUND, "missing row");
    for depth in 0..4 {
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, format!("\"{err}\""), "depth {depth}");
        err = Error::wrap(Some(err), format!("layer {depth}")).unwrap();
    }
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        "\"layer 3: layer 2: layer 1: layer 0: missing row\""
    );
}

#[test]
fn test_json_of_clone_matches() {
    let err = Error::wrap_code(Code::INTERNAL, Some(Plain::new("io")), "flush").unwrap();
    let copy = err.clone();
    assert_eq!(
        serde_json::to_string(&copy).unwrap(),
        serde_json::to_string(&err).unwrap()
    );
}

#[test]
fn test_json_never_decomposes() {
    let body = Response {
        ok: false,
        error: Error::new_code(Code::INVALID_PARAMETER, "bad id"),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["error"], serde_json::json!("bad id"));
}

#[test]
fn test_json_escapes_quotes() {
    let err = Error::new(r#"unexpected "token""#);
    let json = serde_json::to_string(&err).unwrap();
    let back: String = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err.to_string());
}
