//! Iris-Serve - Minimal inference service for the Iris classification task
//!
//! This crate loads a pre-trained classifier once at startup and exposes it
//! over HTTP through an HTML form and a JSON endpoint.
//!
//! # Modules
//!
//! - [`model`] - The opaque classifier contract, label table, and the
//!   nearest-centroid artifact implementation
//! - [`server`] - HTTP server: router, handlers, shared state
//! - [`error`] - Crate-level error handling

pub mod error;
pub mod model;
pub mod server;

pub use error::{IrisError, Result};
