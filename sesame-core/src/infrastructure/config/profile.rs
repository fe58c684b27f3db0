// sesame-core/src/infrastructure/config/profile.rs

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::application::ports::TemplateEngine;
use crate::domain::credentials::Credentials;
use crate::domain::error::DomainError;
use crate::error::SesameError;
use crate::infrastructure::adapters;
use crate::infrastructure::config::schema::FieldDiagnostic;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{path_candidates, read_first};

const PROFILE_FILE_STEM: &str = "profiles";
const HOME_FALLBACK_DIR: &str = ".dbt";

/// One profile entry: the declared default target plus the raw output
/// configs, keyed by target name. Outputs stay raw on purpose: they are
/// only validated when a target is actually resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionProfile {
    pub target: String,
    pub outputs: Mapping,
}

impl ConnectionProfile {
    /// Target names, in document order.
    pub fn targets(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|(name, _)| name.as_str())
            .collect()
    }

    fn output(&self, target: &str) -> Option<&Value> {
        self.outputs.get(&Value::String(target.to_string()))
    }
}

/// Parsed, shape-validated profile document. Immutable once built;
/// profile order follows the document.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<(String, ConnectionProfile)>,
}

impl ProfileStore {
    /// Parse a (already templated) profile document and validate its
    /// top-level shape. All shape violations are reported together, as
    /// one ParseError carrying per-field diagnostics.
    pub fn from_yaml_str(text: &str) -> Result<Self, InfrastructureError> {
        let document: Mapping = serde_yaml::from_str(text)?;

        let mut profiles = Vec::with_capacity(document.len());
        let mut diagnostics = Vec::new();

        for (key, value) in &document {
            let Some(name) = key.as_str() else {
                diagnostics.push(FieldDiagnostic::new("", "profile names must be strings"));
                continue;
            };

            match parse_profile(name, value) {
                Ok(profile) => profiles.push((name.to_string(), profile)),
                Err(mut issues) => diagnostics.append(&mut issues),
            }
        }

        if !diagnostics.is_empty() {
            return Err(InfrastructureError::Parse { diagnostics });
        }

        Ok(Self { profiles })
    }

    /// Profile names, in document order.
    pub fn profiles(&self) -> Vec<&str> {
        self.profiles.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn profile(&self, name: &str) -> Result<&ConnectionProfile, DomainError> {
        self.profiles
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, profile)| profile)
            .ok_or_else(|| DomainError::ProfileNotFound(name.to_string()))
    }

    /// Resolve one target of one profile into typed credentials. When
    /// no target is given, the profile's declared default target is
    /// used.
    pub async fn credentials_for(
        &self,
        profile_name: &str,
        target: Option<&str>,
    ) -> Result<Credentials, SesameError> {
        let profile = self.profile(profile_name)?;
        let target_name = target.unwrap_or(&profile.target);

        let output = profile
            .output(target_name)
            .ok_or_else(|| DomainError::TargetNotFound(target_name.to_string()))?;

        adapters::resolve(output).await
    }
}

// A profile must be `{ target: string, outputs: mapping }` and every
// output must at least carry its string `type` discriminator.
fn parse_profile(name: &str, value: &Value) -> Result<ConnectionProfile, Vec<FieldDiagnostic>> {
    let profile: ConnectionProfile = serde_yaml::from_value(value.clone())
        .map_err(|e| vec![FieldDiagnostic::new(name, e.to_string())])?;

    let mut issues = Vec::new();
    for (target, output) in &profile.outputs {
        let target_name = target.as_str().unwrap_or("?");

        if !output.is_mapping() {
            issues.push(FieldDiagnostic::new(
                format!("{name}.outputs.{target_name}"),
                "expected a mapping",
            ));
            continue;
        }

        match output.get("type") {
            Some(Value::String(_)) => {}
            Some(_) => issues.push(FieldDiagnostic::new(
                format!("{name}.outputs.{target_name}.type"),
                "expected a string",
            )),
            None => issues.push(FieldDiagnostic::new(
                format!("{name}.outputs.{target_name}.type"),
                "missing required field",
            )),
        }
    }

    if issues.is_empty() {
        Ok(profile)
    } else {
        Err(issues)
    }
}

// Candidate bases for the profile document: the explicit path first,
// then $DBT_PROFILES_DIR (or the working directory), then ~/.dbt.
fn profile_candidates(explicit: Option<&Path>) -> Result<Vec<PathBuf>, InfrastructureError> {
    let profiles_dir = match std::env::var_os("DBT_PROFILES_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    let mut bases = vec![profiles_dir.join(PROFILE_FILE_STEM)];
    if let Some(user_dirs) = directories::UserDirs::new() {
        bases.push(
            user_dirs
                .home_dir()
                .join(HOME_FALLBACK_DIR)
                .join(PROFILE_FILE_STEM),
        );
    }

    Ok(path_candidates(explicit, &bases))
}

/// Locate, template and parse the profile document.
#[instrument(skip(engine))]
pub async fn load_profile_store(
    explicit: Option<&Path>,
    engine: &dyn TemplateEngine,
) -> Result<ProfileStore, SesameError> {
    let candidates = profile_candidates(explicit)?;
    let raw = read_first(&candidates).await?;

    // Templating runs on the raw text, before any YAML parsing.
    let rendered = engine.render(&raw)?;

    let store = ProfileStore::from_yaml_str(&rendered)?;
    info!(profiles = store.profiles.len(), "Profile document loaded");
    Ok(store)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::credentials::DatabaseKind;
    use crate::infrastructure::template::PipeRenderer;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    const EXAMPLE_PROFILES: &str = r#"
snowflake:
  target: my-target
  outputs:
    my-target:
      type: snowflake
      account: my-account
      user: my-user
      port: 443
      schema: my-schema
      password: my-password
      role: my-role
      warehouse: my-warehouse
      database: my-database
redshift:
  target: dev
  outputs:
    dev:
      type: redshift
      host: my-host
      port: 5439
      user: my-user
      password: my-password
      dbname: my-database
      schema: my-schema
bigquery:
  target: dev
  outputs:
    dev:
      type: bigquery
      method: service-account
      project: my-project
      dataset: my-dataset
      timeout_seconds: 10
      retries: 3
      keyfile_json:
        project_id: my-project
        private_key_id: my-private
        private_key: my-key
        client_email: my-email
        client_id: my-id
        auth_uri: my-uri
        token_uri: my-uri
        auth_provider_x509_cert_url: my-url
        client_x509_cert_url: my-url
postgres:
  target: dev
  outputs:
    dev:
      type: postgres
      host: my-host
      port: 5439
      user: my-user
      password: my-password
      dbname: my-database
      schema: my-schema
unsupported-db:
  target: dev
  outputs:
    dev:
      type: mariadb
"#;

    #[test]
    fn test_invalid_document_shape() {
        let err = ProfileStore::from_yaml_str("invalid: config").unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse { .. }));
    }

    #[test]
    fn test_valid_document() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;
        assert_eq!(
            store.profiles(),
            vec![
                "snowflake",
                "redshift",
                "bigquery",
                "postgres",
                "unsupported-db"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_output_without_type_is_rejected() {
        let document = "dev:\n  target: x\n  outputs:\n    x:\n      host: h\n";
        let err = ProfileStore::from_yaml_str(document).unwrap_err();

        match err {
            InfrastructureError::Parse { diagnostics } => {
                assert_eq!(diagnostics[0].path, "dev.outputs.x.type");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_targets_in_document_order() -> Result<()> {
        let document = "dev:\n  target: a\n  outputs:\n    b:\n      type: postgres\n    a:\n      type: postgres\n";
        let store = ProfileStore::from_yaml_str(document)?;
        assert_eq!(store.profile("dev")?.targets(), vec!["b", "a"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_profile() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;

        let err = store
            .credentials_for("invalid-profile", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Profile not found: invalid-profile");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_target() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;

        let err = store
            .credentials_for("snowflake", Some("invalid-target"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Target not found: invalid-target");
        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_database() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;

        let err = store.credentials_for("unsupported-db", None).await.unwrap_err();
        assert_eq!(err.to_string(), "Database not supported: mariadb");
        Ok(())
    }

    #[tokio::test]
    async fn test_every_supported_database_resolves() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;

        for kind in DatabaseKind::ALL {
            let credentials = store.credentials_for(kind.as_str(), None).await?;
            assert_eq!(credentials.kind(), kind);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() -> Result<()> {
        let store = ProfileStore::from_yaml_str(EXAMPLE_PROFILES)?;

        let first = store.credentials_for("postgres", None).await?;
        let second = store.credentials_for("postgres", None).await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_profile_store_templates_before_parsing() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("profiles.yml");
        fs::write(
            &path,
            "dev:\n  target: out\n  outputs:\n    out:\n      type: postgres\n      host: my-host\n      port: 5432\n      user: my-user\n      password: \"{{ env_var('SESAME_TEST_PG_PASSWORD') | to_upper }}\"\n      dbname: my-database\n      schema: my-schema\n",
        )?;

        let engine = PipeRenderer::new();
        let store = temp_env::async_with_vars(
            [("SESAME_TEST_PG_PASSWORD", Some("s3cret"))],
            load_profile_store(Some(&path), &engine),
        )
        .await?;

        let credentials = store.credentials_for("dev", None).await?;
        match credentials {
            Credentials::Postgres(postgres) => assert_eq!(postgres.password, "S3CRET"),
            other => panic!("unexpected credentials: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_load_profile_store_honours_profiles_dir_env() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("profiles.yml"),
            "dev:\n  target: out\n  outputs:\n    out:\n      type: postgres\n      host: h\n      port: 5432\n      user: u\n      password: p\n      dbname: d\n      schema: s\n",
        )?;

        let engine = PipeRenderer::new();
        let store = temp_env::async_with_vars(
            [("DBT_PROFILES_DIR", Some(dir.path().to_str().unwrap()))],
            load_profile_store(None, &engine),
        )
        .await?;

        assert_eq!(store.profiles(), vec!["dev"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_profile_store_missing_everywhere() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("nope.yml");

        let engine = PipeRenderer::new();
        // Pin DBT_PROFILES_DIR to the empty directory so the cascade
        // cannot pick up a profile document from the host environment.
        let err = temp_env::async_with_vars(
            [("DBT_PROFILES_DIR", Some(dir.path().to_str().unwrap()))],
            load_profile_store(Some(&explicit), &engine),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().starts_with("No such file: "));
    }
}
