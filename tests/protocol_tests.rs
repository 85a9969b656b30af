//! Tests for the text protocol
//!
//! These tests verify:
//! - Command parsing (case, arity, spacing)
//! - Response rendering

use appendkv::protocol::{parse_command, Command, Response, NULL_MARKER};
use appendkv::KvError;

// =============================================================================
// Command Parsing Tests
// =============================================================================

#[test]
fn test_parse_set() {
    let command = parse_command("SET name alice\n").unwrap();
    assert_eq!(
        command,
        Some(Command::Set {
            key: "name".to_string(),
            value: "alice".to_string()
        })
    );
}

#[test]
fn test_parse_get() {
    let command = parse_command("GET name").unwrap();
    assert_eq!(command, Some(Command::Get { key: "name".to_string() }));
}

#[test]
fn test_parse_exit() {
    assert_eq!(parse_command("EXIT").unwrap(), Some(Command::Exit));
}

#[test]
fn test_command_names_are_case_insensitive() {
    assert!(matches!(parse_command("set k v").unwrap(), Some(Command::Set { .. })));
    assert!(matches!(parse_command("Get k").unwrap(), Some(Command::Get { .. })));
    assert_eq!(parse_command("exit").unwrap(), Some(Command::Exit));
}

#[test]
fn test_arguments_keep_their_case() {
    let command = parse_command("set Key VALUE").unwrap();
    assert_eq!(
        command,
        Some(Command::Set {
            key: "Key".to_string(),
            value: "VALUE".to_string()
        })
    );
}

#[test]
fn test_extra_whitespace_is_ignored() {
    let command = parse_command("  SET \t k    v  \r\n").unwrap();
    assert_eq!(
        command,
        Some(Command::Set {
            key: "k".to_string(),
            value: "v".to_string()
        })
    );
}

#[test]
fn test_blank_lines_yield_nothing() {
    assert_eq!(parse_command("").unwrap(), None);
    assert_eq!(parse_command("   \n").unwrap(), None);
}

#[test]
fn test_wrong_arity_is_rejected() {
    for line in ["SET k", "SET k v w", "GET", "GET a b", "EXIT now"] {
        assert!(
            matches!(parse_command(line), Err(KvError::InvalidCommand(_))),
            "expected rejection for {:?}",
            line
        );
    }
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(matches!(parse_command("DEL k"), Err(KvError::InvalidCommand(_))));
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_render_responses() {
    assert_eq!(Response::Ok.to_string(), "OK");
    assert_eq!(Response::Value("world".to_string()).to_string(), "world");
    assert_eq!(Response::Null.to_string(), NULL_MARKER);
    assert_eq!(Response::Null.to_string(), "NULL");
}

#[test]
fn test_invalid_command_renders_generic_error() {
    let err = parse_command("FOO").unwrap_err();
    assert_eq!(Response::from_error(&err).to_string(), "ERR: Invalid command");
}

#[test]
fn test_other_errors_render_their_message() {
    let err = KvError::InvalidRecord("key must not be empty".to_string());
    assert_eq!(
        Response::from_error(&err).to_string(),
        "ERR: Invalid record: key must not be empty"
    );
}
