// sesame/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sesame")]
#[command(about = "Connection credential resolver for dbt-style data projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📇 Lists the profiles (and their targets) declared in profiles.yml
    Profiles {
        /// Explicit path to the profile document
        #[arg(long)]
        profiles_path: Option<PathBuf>,
    },

    /// 🔑 Resolves the connection credentials of a profile target
    Resolve {
        /// Explicit path to the project descriptor (dbt_project.yml)
        #[arg(long)]
        project: Option<PathBuf>,

        /// Explicit path to the profile document
        #[arg(long)]
        profiles_path: Option<PathBuf>,

        /// Profile name (default: the descriptor's 'profile' field)
        #[arg(long, short)]
        profile: Option<String>,

        /// Target name (default: the profile's declared target)
        #[arg(long, short)]
        target: Option<String>,
    },

    /// 🪄 Runs the templating pass over a file and prints the result
    Render {
        /// File to render
        file: PathBuf,
    },
}
