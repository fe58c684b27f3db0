// sesame/src/commands/profiles.rs
//
// USE CASE: List profiles and their targets (diagnostics before resolving).

use comfy_table::Table;
use std::path::PathBuf;

use sesame_core::infrastructure::config::profile::load_profile_store;
use sesame_core::infrastructure::template::PipeRenderer;

pub async fn execute(profiles_path: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = PipeRenderer::new();
    let store = load_profile_store(profiles_path.as_deref(), &engine).await?;

    let mut table = Table::new();
    table.set_header(vec!["Profile", "Default target", "Targets"]);

    for name in store.profiles() {
        let profile = store.profile(name)?;
        table.add_row(vec![
            name.to_string(),
            profile.target.clone(),
            profile.targets().join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
