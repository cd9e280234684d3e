#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::LookupClient;

// Configuration
pub use config::LookupConfig;

// Errors surfaced by construction; lookups report `TrackInfoError`
pub use error::{LookupError, LookupResult};

// Silence unused dev-dependency warnings for crates only the integration tests use
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;
