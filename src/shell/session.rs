//! Session Handler
//!
//! Reads command lines, executes them against a store and writes responses.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::{parse_command, Command, Response};
use crate::store::Store;

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands answered (blank lines and EXIT excluded)
    pub commands: u64,

    /// Commands answered with an `ERR:` line
    pub errors: u64,
}

/// Execute a single command against the store
///
/// `Exit` has no response of its own and is answered with `None`.
pub fn execute(store: &mut Store, command: Command) -> Option<Response> {
    let response = match command {
        Command::Set { key, value } => match store.set(&key, &value) {
            Ok(()) => Response::Ok,
            Err(e) => {
                tracing::error!(key = %key, "SET failed, write not committed: {}", e);
                Response::from_error(&e)
            }
        },
        Command::Get { key } => match store.get(&key) {
            Some(value) => Response::Value(value.to_string()),
            None => Response::Null,
        },
        Command::Exit => return None,
    };
    Some(response)
}

/// A single command session over a reader/writer pair
pub struct Session<R, W> {
    /// Command source
    reader: R,

    /// Response sink
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Handle the session (blocking until EOF or EXIT)
    ///
    /// Failed commands are answered and the loop continues. Only I/O
    /// failures on the reader or writer end the session with an error.
    pub fn run(&mut self, store: &mut Store) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("Input closed");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            let response = match parse_command(&line) {
                Ok(Some(command)) => {
                    tracing::trace!("Received command: {:?}", command);
                    match execute(store, command) {
                        Some(response) => response,
                        None => break,
                    }
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Rejected input: {}", e);
                    Response::from_error(&e)
                }
            };

            summary.commands += 1;
            if matches!(response, Response::Error(_)) {
                summary.errors += 1;
            }
            self.send_response(&response)?;
        }

        Ok(summary)
    }

    /// Send a response line to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        writeln!(self.writer, "{}", response)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
