#![cfg(feature = "cli")]

use std::process::{Command, Output};

// gzip of "hello", mtime 0
const HELLO_GZ: &str = "H4sIAAAAAAACA8tIzcnJBwCGphA2BQAAAA==";

fn sniffpack(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sniffpack"))
        .args(args)
        .env_clear()
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn validate_prints_report_and_succeeds() {
    let out = sniffpack(&["validate", HELLO_GZ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "{\"valid\": true, \"message\": \"\"}\n");
}

#[test]
fn decode_prints_literal() {
    let out = sniffpack(&["decode", HELLO_GZ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "{\"output\": \"'hello'\", \"read-only\": true, \"format\": \"plain_text\"}\n"
    );
}

#[test]
fn validate_failure_is_not_fatal() {
    let out = sniffpack(&["validate", "not-base64!!"]);
    assert_eq!(out.status.code(), Some(0));
    let line = stdout(&out);
    assert!(line.starts_with("{\"valid\": false, \"message\": \"Cannot decode value: "), "{line}");
}

#[test]
fn decode_failure_exits_with_two() {
    let out = sniffpack(&["decode", "not-base64!!"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).starts_with("Cannot decode value: "));

    let out = sniffpack(&["decode", ""]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(stdout(&out), "Cannot decompress value: lz4 input is empty\n");
}

#[test]
fn invalid_action_exits_with_one_before_decoding() {
    let out = sniffpack(&["inflate", "not-base64!!"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Error: Invalid action inflate\n");
}

#[test]
fn encoding_flag_is_honoured() {
    // gzip of b"caf\xe9", mtime 0
    let value = "H4sIAAAAAAACA0tOTHsJABuws6sEAAAA";
    let out = sniffpack(&["decode", value]);
    assert_eq!(out.status.code(), Some(2));

    let out = sniffpack(&["--encoding", "latin-1", "decode", value]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "{\"output\": \"'caf\\u00e9'\", \"read-only\": true, \"format\": \"plain_text\"}\n"
    );
}

#[test]
fn logs_stay_off_stdout() {
    let out = sniffpack(&["-vvv", "validate", HELLO_GZ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).lines().count(), 1);
    assert!(!out.stderr.is_empty());
}
