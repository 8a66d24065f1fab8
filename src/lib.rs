//! gha — GitHub user activity in your terminal.
//!
//! Fetches a user's recent public events from the GitHub Events API and
//! prints one human-readable line per event. The root crate only wires the
//! layers together:
//!
//! ```text
//! gha-api ──► gha-core ──► gha-render ──► stdout
//! (fetch)     (engine)     (catalog)
//! ```
//!
//! [`app`] is public so the integration harnesses can drive the same code
//! paths as the binary.

pub mod app;
