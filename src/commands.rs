use std::path::Path;

use anyhow::Result;

use crate::config;

/// Print the seeded activities with schedule and roster usage.
pub fn run_list(config_path: &Path, verbose: bool) -> Result<()> {
    let seed = config::load_config(config_path)?;

    if seed.activities.is_empty() {
        println!("No activities in {}.", config_path.display());
        return Ok(());
    }

    for activity in &seed.activities {
        let taken = activity.participants.len() as u32;
        let free = activity.max_participants.saturating_sub(taken);
        println!(
            "{} — {} ({}/{}, {} spots left)",
            activity.name, activity.schedule, taken, activity.max_participants, free
        );
        if verbose {
            println!("  {}", activity.description);
            for email in &activity.participants {
                println!("  - {}", email);
            }
        }
    }

    Ok(())
}
