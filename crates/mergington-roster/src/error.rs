//! Error types for the `mergington-roster` crate.
//!
//! The display strings double as the human-readable `detail` returned to
//! API clients, so they are phrased for students rather than operators.

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// No activity with the requested name exists.
    #[error("Activity not found")]
    NotFound(String),

    /// The student is already on the activity's roster.
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered {
        /// The activity name.
        activity: String,
        /// The student email.
        email: String,
    },

    /// The student is not on the activity's roster.
    #[error("Student is not registered for this activity")]
    NotRegistered {
        /// The activity name.
        activity: String,
        /// The student email.
        email: String,
    },

    /// The roster has reached `max_participants` and capacity is enforced.
    #[error("Activity is full")]
    ActivityFull {
        /// The activity name.
        activity: String,
        /// The configured cap.
        max_participants: u32,
    },

    /// Two seed activities share the same name.
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    /// A seed activity declares a capacity of zero.
    #[error("activity {0} must allow at least one participant")]
    ZeroCapacity(String),
}

impl RosterError {
    /// Whether this error was caused by the caller's input rather than by
    /// how the store was constructed.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::AlreadyRegistered { .. }
                | Self::NotRegistered { .. }
                | Self::ActivityFull { .. }
        )
    }
}
