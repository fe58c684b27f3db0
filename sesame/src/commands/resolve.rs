// sesame/src/commands/resolve.rs
//
// USE CASE: Resolve one target into typed credentials and print them
// as YAML. Output is plaintext: protecting the secret is the caller's
// job, not ours.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use sesame_core::application::ProjectLoader;
use sesame_core::infrastructure::config::profile::load_profile_store;
use sesame_core::infrastructure::template::PipeRenderer;

pub async fn execute(
    project: Option<PathBuf>,
    profiles_path: Option<PathBuf>,
    profile: Option<String>,
    target: Option<String>,
) -> anyhow::Result<()> {
    let engine = Arc::new(PipeRenderer::new());
    debug!(?profile, ?target, "Resolving credentials");

    let credentials = match profile {
        // Explicit profile: the project descriptor is not needed.
        Some(name) => {
            let store = load_profile_store(profiles_path.as_deref(), engine.as_ref()).await?;
            store.credentials_for(&name, target.as_deref()).await?
        }
        None => {
            let project = ProjectLoader::new(engine).load(project.as_deref()).await?;
            eprintln!(
                "🔑 Resolving credentials for profile '{}'...",
                project.profile_name()
            );
            project
                .load_credentials(profiles_path.as_deref(), target.as_deref())
                .await?
        }
    };

    print!("{}", serde_yaml::to_string(&credentials)?);
    Ok(())
}
