//! The activity record served by `GET /activities`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Activities keyed by their display name.
pub type ActivityMap = BTreeMap<String, Activity>;

/// An extracurricular offering with a capacity and a participant roster.
///
/// The name is not stored here; it is the key the record lives under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text description shown on the activity card.
    pub description: String,
    /// Human-readable meeting schedule.
    pub schedule: String,
    /// Maximum roster size. Always positive.
    pub max_participants: u32,
    /// Student emails currently signed up. Emails are opaque strings.
    pub participants: BTreeSet<String>,
}

impl Activity {
    /// Build an activity with an initial roster.
    pub fn new<I, S>(description: &str, schedule: &str, max_participants: u32, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of students currently on the roster.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Whether `email` is on the roster.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.contains(email)
    }

    /// Remaining places, saturating at zero for over-full rosters.
    pub fn spots_left(&self) -> usize {
        usize::try_from(self.max_participants)
            .unwrap_or(usize::MAX)
            .saturating_sub(self.participants.len())
    }

    /// Whether the roster has reached `max_participants`.
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            2,
            ["michael@mergington.edu"],
        )
    }

    #[test]
    fn serializes_with_all_fields() {
        let json = serde_json::to_value(chess()).unwrap_or_default();
        assert!(json.get("description").is_some());
        assert!(json.get("schedule").is_some());
        assert_eq!(json["max_participants"], 2);
        assert_eq!(json["participants"], serde_json::json!(["michael@mergington.edu"]));
    }

    #[test]
    fn participants_deserialize_from_array() {
        let json = r#"{
            "description": "d",
            "schedule": "s",
            "max_participants": 3,
            "participants": ["b@x", "a@x", "a@x"]
        }"#;
        let activity: Result<Activity, _> = serde_json::from_str(json);
        assert!(activity.is_ok());
        let activity = activity.unwrap_or_else(|_| chess());
        assert_eq!(activity.participant_count(), 2);
        assert!(activity.has_participant("a@x"));
    }

    #[test]
    fn spots_left_tracks_roster() {
        let mut activity = chess();
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());

        activity.participants.insert("daniel@mergington.edu".to_owned());
        assert_eq!(activity.spots_left(), 0);
        assert!(activity.is_full());

        // Over-full seed rosters do not underflow.
        activity.participants.insert("extra@mergington.edu".to_owned());
        assert_eq!(activity.spots_left(), 0);
    }
}
