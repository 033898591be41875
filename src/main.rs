mod commands;
mod config;
mod directory;
mod models;
mod web;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use directory::ActivityDirectory;

/// Mergington High School activity signup — extracurricular rosters over HTTP.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print detailed request handling logs
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the signup API and front-end server
    Serve {
        /// Path to the activities seed file
        #[arg(short = 'c', long, default_value = "activities.toml")]
        config: PathBuf,

        /// Listen address (e.g. "0.0.0.0:8000")
        #[arg(short = 'a', long, default_value = "0.0.0.0:8000")]
        addr: String,

        /// Directory with the front-end assets served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },

    /// Show seeded activities and how full their rosters are
    List {
        /// Path to the activities seed file
        #[arg(short = 'c', long, default_value = "activities.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve {
            config,
            addr,
            static_dir,
        } => {
            let seed = config::load_config(config)?;
            let directory = ActivityDirectory::new(seed.activities);
            web::serve(directory, static_dir, addr).await?;
        }
        Command::List { config } => {
            commands::run_list(config, cli.verbose)?;
        }
    }

    Ok(())
}
