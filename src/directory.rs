use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::models::{Activity, ActivitySeed};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Authoritative in-memory state of all activities and their rosters.
///
/// Built once at startup from the seed file and shared across request
/// handlers behind an `Arc`. Every operation takes the lock exactly once,
/// so each check-then-mutate step is atomic with respect to other requests.
pub struct ActivityDirectory {
    activities: Mutex<HashMap<String, Activity>>,
}

impl ActivityDirectory {
    pub fn new(seeds: Vec<ActivitySeed>) -> Self {
        let activities = seeds
            .into_iter()
            .map(|seed| {
                let name = seed.name.clone();
                (name, Activity::from(seed))
            })
            .collect();
        Self {
            activities: Mutex::new(activities),
        }
    }

    /// Snapshot of the full name → activity mapping.
    pub fn list(&self) -> HashMap<String, Activity> {
        self.activities.lock().unwrap().clone()
    }

    /// Append `email` to the activity's roster, preserving signup order.
    /// Capacity is informational only; signup does not check it.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.lock().unwrap();
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's roster.
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.lock().unwrap();
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }
}
