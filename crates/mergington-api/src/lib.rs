//! Activities API server for Mergington High School.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities and for signing students
//!   up or unregistering them
//! - **Static hosting** of the front-end page under `/static`, with `GET /`
//!   redirecting to it
//!
//! # Architecture
//!
//! Handlers receive a shared [`AppState`] holding the [`RosterStore`].
//! The store serializes mutations per activity, so handlers never take
//! locks themselves. Store errors map onto HTTP status codes in
//! [`ApiError`].
//!
//! [`RosterStore`]: mergington_roster::RosterStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
