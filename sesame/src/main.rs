// sesame/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug sesame resolve ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profiles { profiles_path } => commands::profiles::execute(profiles_path).await,

        Commands::Resolve {
            project,
            profiles_path,
            profile,
            target,
        } => commands::resolve::execute(project, profiles_path, profile, target).await,

        Commands::Render { file } => commands::render::execute(file).await,
    }
}
