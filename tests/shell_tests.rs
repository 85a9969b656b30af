//! Tests for the shell session
//!
//! These tests verify:
//! - One response line per command
//! - EXIT and EOF both end the session
//! - Errors are answered without ending the session
//! - State written in one session is visible in the next

use std::io::Cursor;
use std::path::Path;

use appendkv::protocol::{Command, Response};
use appendkv::shell::{execute, Session, SessionSummary};
use appendkv::Store;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_session(store: &mut Store, input: &str) -> (String, SessionSummary) {
    let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = session.run(store).unwrap();
    let (_, output) = session.into_inner();
    (String::from_utf8(output).unwrap(), summary)
}

fn open_store(dir: &Path) -> Store {
    Store::open_path(&dir.join("data.db")).unwrap()
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_basic_session() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let (output, summary) = run_session(&mut store, "SET a 1\nGET a\nGET b\n");

    assert_eq!(output, "OK\n1\nNULL\n");
    assert_eq!(summary, SessionSummary { commands: 3, errors: 0 });
}

#[test]
fn test_exit_stops_reading() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let (output, summary) = run_session(&mut store, "SET a 1\nEXIT\nSET b 2\n");

    assert_eq!(output, "OK\n");
    assert_eq!(summary.commands, 1);
    assert_eq!(store.get("b"), None);
}

#[test]
fn test_blank_lines_are_ignored() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let (output, summary) = run_session(&mut store, "\n   \nGET a\n\n");

    assert_eq!(output, "NULL\n");
    assert_eq!(summary.commands, 1);
}

#[test]
fn test_invalid_commands_do_not_end_the_session() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let (output, summary) = run_session(&mut store, "BOGUS\nSET a\nSET a 1\nget a\n");

    assert_eq!(
        output,
        "ERR: Invalid command\nERR: Invalid command\nOK\n1\n"
    );
    assert_eq!(summary, SessionSummary { commands: 4, errors: 2 });
}

#[test]
fn test_last_line_without_newline() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let (output, _) = run_session(&mut store, "SET a 1\nGET a");

    assert_eq!(output, "OK\n1\n");
}

#[test]
fn test_state_survives_between_sessions() {
    let temp = TempDir::new().unwrap();
    {
        let mut store = open_store(temp.path());
        run_session(&mut store, "SET user alice\nSET user bob\nEXIT\n");
    }

    let mut store = open_store(temp.path());
    let (output, _) = run_session(&mut store, "GET user\n");

    assert_eq!(output, "bob\n");
}

// =============================================================================
// Execute Tests
// =============================================================================

#[test]
fn test_execute_routes_commands() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let set = execute(
        &mut store,
        Command::Set {
            key: "k".to_string(),
            value: "v".to_string(),
        },
    );
    let get = execute(&mut store, Command::Get { key: "k".to_string() });
    let exit = execute(&mut store, Command::Exit);

    assert_eq!(set, Some(Response::Ok));
    assert_eq!(get, Some(Response::Value("v".to_string())));
    assert_eq!(exit, None);
}

#[test]
fn test_execute_reports_rejected_set() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path());

    let response = execute(
        &mut store,
        Command::Set {
            key: "k".to_string(),
            value: String::new(),
        },
    );

    assert!(matches!(response, Some(Response::Error(_))));
    assert!(store.is_empty());
}
