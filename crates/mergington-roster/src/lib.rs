//! In-memory roster store for Mergington High School activities.
//!
//! The [`RosterStore`] owns the activity-name to [`Activity`] mapping and
//! enforces the membership rules for joining and leaving. The set of
//! activities is fixed when the store is built; only participant rosters
//! change afterwards.
//!
//! # Modules
//!
//! - [`roster`] -- The store, its operations, and enrollment confirmations
//! - [`policy`] -- Whether joins respect `max_participants`
//! - [`seed`] -- The built-in Mergington activity catalogue
//! - [`error`] -- Failure kinds reported by the store
//!
//! [`Activity`]: mergington_types::Activity

pub mod error;
pub mod policy;
pub mod roster;
pub mod seed;

pub use error::RosterError;
pub use policy::CapacityPolicy;
pub use roster::{Enrollment, EnrollmentKind, RosterStore};
pub use seed::mergington_activities;
