// sesame-core/src/infrastructure/config/project.rs

use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument};

use crate::infrastructure::config::schema;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{path_candidates, read_first};

const PROJECT_FILE_STEM: &str = "dbt_project";

/// The only field the resolver needs from the project descriptor.
/// Everything else in dbt_project.yml is ignored on purpose.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectConfig {
    pub profile: String,
}

/// Locate and parse the project descriptor. Candidates: the explicit
/// path first, then `dbt_project.yml|yaml` in the working directory.
#[instrument]
pub async fn load_project_config(
    explicit: Option<&Path>,
) -> Result<ProjectConfig, InfrastructureError> {
    let working_dir = std::env::current_dir()?;
    let candidates = path_candidates(explicit, &[working_dir.join(PROJECT_FILE_STEM)]);

    let content = read_first(&candidates).await?;
    let raw: serde_yaml::Value = serde_yaml::from_str(&content)?;
    let config: ProjectConfig = schema::validate(PROJECT_FILE_STEM, raw)?;

    info!(profile = %config.profile, "Project descriptor loaded");
    Ok(config)
}
