//! appendkv Shell Binary
//!
//! Reads SET/GET/EXIT commands from stdin and answers on stdout.

use std::io;
use std::path::PathBuf;

use appendkv::config::DEFAULT_LOG_FILE;
use appendkv::shell::Session;
use appendkv::{Config, Store};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// appendkv
#[derive(Parser, Debug)]
#[command(name = "appendkv")]
#[command(about = "Durable key-value store backed by an append-only log")]
#[command(version)]
struct Args {
    /// Log file holding every committed SET
    #[arg(short = 'f', long, default_value = DEFAULT_LOG_FILE)]
    data_file: PathBuf,
}

fn main() {
    // Logs go to stderr; stdout carries responses only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,appendkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("appendkv v{}", appendkv::VERSION);
    tracing::info!("Log file: {}", args.data_file.display());

    let config = Config::builder().log_path(&args.data_file).build();

    let mut store = match Store::open(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run(&mut store) {
        Ok(summary) => tracing::info!(
            "Session ended: {} commands, {} errors",
            summary.commands,
            summary.errors
        ),
        Err(e) => {
            tracing::error!("Session error: {}", e);
            std::process::exit(1);
        }
    }
}
