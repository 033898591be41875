use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::SeedFile;

pub fn load_config(path: &Path) -> Result<SeedFile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let seed: SeedFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    validate(&seed)?;
    Ok(seed)
}

/// Reject seed files that would start the directory in an invalid state.
/// Runtime signup stays permissive about capacity; the seed file does not.
fn validate(seed: &SeedFile) -> Result<()> {
    let mut names = HashSet::new();
    for activity in &seed.activities {
        if !names.insert(activity.name.as_str()) {
            bail!("Duplicate activity '{}' in seed file", activity.name);
        }
        if activity.max_participants == 0 {
            bail!("Activity '{}' has max_participants = 0", activity.name);
        }
        let mut emails = HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email.as_str()) {
                bail!(
                    "Duplicate participant '{}' in activity '{}'",
                    email,
                    activity.name
                );
            }
        }
        if activity.participants.len() > activity.max_participants as usize {
            bail!(
                "Activity '{}' seeds {} participants but only has room for {}",
                activity.name,
                activity.participants.len(),
                activity.max_participants
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Result<SeedFile> {
        let seed: SeedFile = toml::from_str(toml_str)?;
        validate(&seed)?;
        Ok(seed)
    }

    #[test]
    fn test_parse_valid_seed() {
        let seed = parse(
            r#"
            [[activities]]
            name = "Chess Club"
            description = "Learn strategies and compete in chess tournaments"
            schedule = "Fridays, 3:30 PM - 5:00 PM"
            max_participants = 12
            participants = ["michael@mergington.edu", "daniel@mergington.edu"]

            [[activities]]
            name = "Math Club"
            description = "Problem solving and competition math"
            schedule = "Tuesdays, 3:30 PM - 4:30 PM"
            max_participants = 10
            "#,
        )
        .unwrap();

        assert_eq!(seed.activities.len(), 2);
        assert_eq!(seed.activities[0].participants.len(), 2);
        // participants defaults to empty when omitted
        assert!(seed.activities[1].participants.is_empty());
    }

    #[test]
    fn test_reject_duplicate_activity() {
        let err = parse(
            r#"
            [[activities]]
            name = "Chess Club"
            description = "a"
            schedule = "b"
            max_participants = 5

            [[activities]]
            name = "Chess Club"
            description = "c"
            schedule = "d"
            max_participants = 5
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate activity"));
    }

    #[test]
    fn test_reject_zero_capacity() {
        let err = parse(
            r#"
            [[activities]]
            name = "Empty Club"
            description = "a"
            schedule = "b"
            max_participants = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_participants"));
    }

    #[test]
    fn test_reject_duplicate_participant() {
        let err = parse(
            r#"
            [[activities]]
            name = "Chess Club"
            description = "a"
            schedule = "b"
            max_participants = 5
            participants = ["twice@mergington.edu", "twice@mergington.edu"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate participant"));
    }

    #[test]
    fn test_reject_overfull_seed_roster() {
        let err = parse(
            r#"
            [[activities]]
            name = "Chess Club"
            description = "a"
            schedule = "b"
            max_participants = 1
            participants = ["a@mergington.edu", "b@mergington.edu"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("only has room for"));
    }
}
