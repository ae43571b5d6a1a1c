//! Shared type definitions for the Mergington activities API.
//!
//! These types are the JSON contract between the HTTP layer and the
//! front-end page. They are exported to `TypeScript` via `ts-rs` so the
//! static client can be type-checked against the server.
//!
//! # Modules
//!
//! - [`activity`] -- The activity record and its roster helpers
//! - [`responses`] -- Success and error bodies returned by the API

pub mod activity;
pub mod responses;

pub use activity::{Activity, ActivityMap};
pub use responses::{ErrorResponse, MessageResponse};
