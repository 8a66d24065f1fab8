//! gha-api — GitHub Events API adapter for gha.
//!
//! The client fetches a user's public events and hands the raw response body
//! to `gha-core` untouched; parsing is entirely the engine's concern. All
//! transport and HTTP-status failures surface here as [`FetchError`] and
//! never reach the core.

pub mod client;

pub use client::{Client, FetchError};
