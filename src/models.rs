use serde::{Deserialize, Serialize};

/// Seed file layout: `[[activities]]` tables in activities.toml.
#[derive(Debug, Deserialize, Serialize)]
pub struct SeedFile {
    pub activities: Vec<ActivitySeed>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// One activity as held in the directory and serialized over the wire.
/// The name is the directory key, not a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<ActivitySeed> for Activity {
    fn from(seed: ActivitySeed) -> Self {
        Self {
            description: seed.description,
            schedule: seed.schedule,
            max_participants: seed.max_participants,
            participants: seed.participants,
        }
    }
}
