//! The activity roster store.
//!
//! [`RosterStore`] maps each activity name to its [`Activity`] record.
//! The map itself is immutable after construction; each record sits
//! behind its own [`tokio::sync::Mutex`] so joins and leaves on the same
//! activity are serialized while different activities proceed in
//! parallel.

use std::collections::BTreeMap;
use std::fmt;

use mergington_types::{Activity, ActivityMap};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::policy::CapacityPolicy;
use crate::seed::mergington_activities;

/// Which way a roster changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentKind {
    /// The student was added to the roster.
    Joined,
    /// The student was removed from the roster.
    Left,
}

/// Confirmation of a successful join or leave.
///
/// Its [`Display`](fmt::Display) output is the message returned to the
/// client, naming both the student and the activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// The activity whose roster changed.
    pub activity: String,
    /// The student email that was added or removed.
    pub email: String,
    /// Whether the student joined or left.
    pub kind: EnrollmentKind,
}

impl Enrollment {
    fn new(activity: &str, email: &str, kind: EnrollmentKind) -> Self {
        Self {
            activity: activity.to_owned(),
            email: email.to_owned(),
            kind,
        }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EnrollmentKind::Joined => write!(f, "Signed up {} for {}", self.email, self.activity),
            EnrollmentKind::Left => write!(f, "Unregistered {} from {}", self.email, self.activity),
        }
    }
}

/// In-memory store of activities and their participant rosters.
#[derive(Debug)]
pub struct RosterStore {
    /// Activity records keyed by name. Keys never change after construction.
    activities: BTreeMap<String, Mutex<Activity>>,
    /// Whether joins respect `max_participants`.
    policy: CapacityPolicy,
}

impl RosterStore {
    /// Build a store from `(name, activity)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateActivity`] if a name appears twice,
    /// or [`RosterError::ZeroCapacity`] if an activity allows nobody.
    pub fn new<I>(activities: I, policy: CapacityPolicy) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut map = BTreeMap::new();
        for (name, activity) in activities {
            if activity.max_participants == 0 {
                return Err(RosterError::ZeroCapacity(name));
            }
            if map.contains_key(&name) {
                return Err(RosterError::DuplicateActivity(name));
            }
            let cap = usize::try_from(activity.max_participants).unwrap_or(usize::MAX);
            if activity.participant_count() > cap {
                warn!(
                    activity = %name,
                    participants = activity.participant_count(),
                    max_participants = activity.max_participants,
                    "Seed roster exceeds capacity"
                );
            }
            map.insert(name, Mutex::new(activity));
        }

        Ok(Self {
            activities: map,
            policy,
        })
    }

    /// Build a store holding the built-in Mergington catalogue.
    ///
    /// # Errors
    ///
    /// Propagates any validation failure from [`RosterStore::new`].
    pub fn with_seed(policy: CapacityPolicy) -> Result<Self, RosterError> {
        Self::new(mergington_activities(), policy)
    }

    /// The capacity policy joins are checked against.
    pub const fn capacity_policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Number of activities in the store.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the store holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Whether an activity with this exact name exists.
    pub fn contains(&self, activity_name: &str) -> bool {
        self.activities.contains_key(activity_name)
    }

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    /// Snapshot every activity and its current roster.
    ///
    /// Each record is copied under its own lock, so every activity is
    /// internally consistent; the map as a whole is not a single atomic
    /// view.
    pub async fn list_activities(&self) -> ActivityMap {
        let mut snapshot = BTreeMap::new();
        for (name, slot) in &self.activities {
            let activity = slot.lock().await.clone();
            snapshot.insert(name.clone(), activity);
        }
        snapshot
    }

    /// Snapshot a single activity.
    pub async fn activity(&self, activity_name: &str) -> Option<Activity> {
        let slot = self.activities.get(activity_name)?;
        Some(slot.lock().await.clone())
    }

    // -------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------

    /// Add `email` to the roster of `activity_name`.
    ///
    /// # Errors
    ///
    /// - [`RosterError::NotFound`] if the activity does not exist.
    /// - [`RosterError::AlreadyRegistered`] if the student is already on it.
    /// - [`RosterError::ActivityFull`] if the roster is full and the
    ///   policy is [`CapacityPolicy::Enforce`].
    pub async fn join(&self, activity_name: &str, email: &str) -> Result<Enrollment, RosterError> {
        let slot = self.slot(activity_name)?;
        let mut activity = slot.lock().await;

        if activity.has_participant(email) {
            debug!(activity = activity_name, email, "Signup rejected: already registered");
            return Err(RosterError::AlreadyRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        if self.policy.enforces() && activity.is_full() {
            debug!(
                activity = activity_name,
                email,
                max_participants = activity.max_participants,
                "Signup rejected: activity full"
            );
            return Err(RosterError::ActivityFull {
                activity: activity_name.to_owned(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.insert(email.to_owned());
        info!(
            activity = activity_name,
            email,
            participants = activity.participant_count(),
            "Student signed up"
        );

        Ok(Enrollment::new(activity_name, email, EnrollmentKind::Joined))
    }

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// # Errors
    ///
    /// - [`RosterError::NotFound`] if the activity does not exist.
    /// - [`RosterError::NotRegistered`] if the student is not on it.
    pub async fn leave(&self, activity_name: &str, email: &str) -> Result<Enrollment, RosterError> {
        let slot = self.slot(activity_name)?;
        let mut activity = slot.lock().await;

        if !activity.participants.remove(email) {
            debug!(activity = activity_name, email, "Unregister rejected: not registered");
            return Err(RosterError::NotRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        info!(
            activity = activity_name,
            email,
            participants = activity.participant_count(),
            "Student unregistered"
        );

        Ok(Enrollment::new(activity_name, email, EnrollmentKind::Left))
    }

    fn slot(&self, activity_name: &str) -> Result<&Mutex<Activity>, RosterError> {
        self.activities.get(activity_name).ok_or_else(|| {
            debug!(activity = activity_name, "Unknown activity");
            RosterError::NotFound(activity_name.to_owned())
        })
    }
}
