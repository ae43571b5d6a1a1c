//! Capacity enforcement policy for joins.

use serde::Deserialize;

/// Whether [`join`](crate::RosterStore::join) checks `max_participants`.
///
/// Deserializes from the lowercase strings `"enforce"` and `"ignore"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Reject joins once the roster is full.
    #[default]
    Enforce,
    /// Accept joins past the cap.
    Ignore,
}

impl CapacityPolicy {
    /// Whether a full roster blocks new joins.
    pub const fn enforces(self) -> bool {
        matches!(self, Self::Enforce)
    }
}
