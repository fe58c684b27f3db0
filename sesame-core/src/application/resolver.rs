// sesame-core/src/application/resolver.rs

// USE CASE: Compose the two resolution pipelines (project descriptor,
// then profile document) into a single "load my credentials" operation.
// The first failure anywhere in the chain is the one returned.

use std::path::Path;
use std::sync::Arc;

use crate::application::ports::TemplateEngine;
use crate::domain::credentials::Credentials;
use crate::error::SesameError;
use crate::infrastructure::config::profile::load_profile_store;
use crate::infrastructure::config::project::{ProjectConfig, load_project_config};

pub struct ProjectLoader {
    engine: Arc<dyn TemplateEngine>,
}

impl ProjectLoader {
    /// The template registry is built once, before any render, and
    /// shared read-only from here on.
    pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Locate and parse the project descriptor.
    pub async fn load(&self, project_path: Option<&Path>) -> Result<Project, SesameError> {
        let config = load_project_config(project_path).await?;

        Ok(Project {
            config,
            engine: Arc::clone(&self.engine),
        })
    }
}

pub struct Project {
    config: ProjectConfig,
    engine: Arc<dyn TemplateEngine>,
}

impl Project {
    /// Default profile name declared by the descriptor.
    pub fn profile_name(&self) -> &str {
        &self.config.profile
    }

    /// Resolve credentials for this project's profile. The profile
    /// document is located independently of the project descriptor.
    pub async fn load_credentials(
        &self,
        profiles_path: Option<&Path>,
        target: Option<&str>,
    ) -> Result<Credentials, SesameError> {
        let store = load_profile_store(profiles_path, self.engine.as_ref()).await?;
        store.credentials_for(&self.config.profile, target).await
    }
}
