// sesame/src/commands/render.rs
//
// USE CASE: Debug the templating pass on any file.

use std::path::PathBuf;

use sesame_core::infrastructure::template::PipeRenderer;

pub async fn execute(file: PathBuf) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&file).await?;
    let rendered = PipeRenderer::new().render(&raw)?;

    print!("{rendered}");
    Ok(())
}
