//! gha-core — event engine for gha.
//!
//! This crate turns the raw JSON text of a GitHub user-events response into a
//! sequence of structured event descriptions, without ever building a parse
//! tree.
//!
//! # Architecture
//!
//! ```text
//! response text ──► scan ──► extract ──► filter ──► describe
//!                 (split)   (fields)   (retain?)  (FormattedEvent)
//! ```
//!
//! Everything here is synchronous and pure: no I/O, no shared state, and no
//! error path that escapes the crate. Malformed or incomplete input degrades
//! to defaults (`"unknown"` repo, generic description) rather than failing.

pub mod config;
pub mod describe;
pub mod extract;
pub mod filter;
pub mod scan;
pub mod types;

pub use describe::{describe, summarize};
pub use filter::EventFilter;
pub use types::{EventKind, FormattedEvent};
