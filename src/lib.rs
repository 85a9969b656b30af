//! # appendkv
//!
//! A minimal durable key-value store with:
//! - An append-only text log as the single source of truth
//! - Sync-before-acknowledge writes
//! - Full log replay on startup, tolerant of a torn tail
//! - A line-oriented SET/GET shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell Session                           │
//! │               (stdin lines → responses)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │              (append, then apply to index)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │     Log     │          │    Index    │
//!   │  (Append)   │          │ (Vec scan)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod index;
pub mod protocol;
pub mod shell;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of appendkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
