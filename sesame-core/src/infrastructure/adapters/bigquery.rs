// sesame-core/src/infrastructure/adapters/bigquery.rs

// BigQuery is the only adapter with a secondary read: the
// service-account key comes either from the file named by `keyfile` or
// from the inline `keyfile_json` mapping. The file wins when both are
// present.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

use crate::domain::credentials::{BigQueryCredentials, BigQueryMethod, ServiceAccountKey};
use crate::infrastructure::config::schema::{self, FieldDiagnostic};
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize)]
struct BigQueryConfig {
    method: Option<BigQueryMethod>,
    project: String,
    dataset: String,
    keyfile: Option<String>,
    keyfile_json: Option<Value>,
    timeout_seconds: Option<u64>,
    retries: Option<u32>,
}

pub async fn from_config(output: &Value) -> Result<BigQueryCredentials, InfrastructureError> {
    let config: BigQueryConfig = schema::validate("bigquery", output.clone())?;

    let credentials = match &config.keyfile {
        Some(keyfile) => read_key_file(Path::new(keyfile)).await?,
        None => inline_key(config.keyfile_json.clone())?,
    };

    Ok(BigQueryCredentials {
        method: config.method,
        project: config.project,
        dataset: config.dataset,
        keyfile: config.keyfile,
        keyfile_json: config.keyfile_json,
        timeout_seconds: config.timeout_seconds,
        retries: config.retries,
        credentials,
    })
}

async fn read_key_file(path: &Path) -> Result<ServiceAccountKey, InfrastructureError> {
    if !path.is_file() {
        return Err(InfrastructureError::KeyFileNotFound(
            path.display().to_string(),
        ));
    }

    debug!(path = ?path, "Reading service-account key file");
    let content = tokio::fs::read_to_string(path).await?;

    serde_json::from_str(&content).map_err(|e| InfrastructureError::Parse {
        diagnostics: vec![FieldDiagnostic::new("keyfile", e.to_string())],
    })
}

fn inline_key(keyfile_json: Option<Value>) -> Result<ServiceAccountKey, InfrastructureError> {
    let Some(raw) = keyfile_json else {
        return Err(InfrastructureError::Parse {
            diagnostics: vec![FieldDiagnostic::new("keyfile_json", "missing required field")],
        });
    };

    schema::validate("keyfile_json", raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn key_json(project_id: &str) -> String {
        format!(
            r#"{{
  "project_id": "{project_id}",
  "private_key_id": "my-private",
  "private_key": "my-key",
  "client_email": "my-email",
  "client_id": "my-id",
  "auth_uri": "my-uri",
  "token_uri": "my-uri",
  "auth_provider_x509_cert_url": "my-url",
  "client_x509_cert_url": "my-url"
}}"#
        )
    }

    fn config_with_keyfile(keyfile: &str) -> Value {
        serde_yaml::from_str(&format!(
            "type: bigquery\nmethod: service-account\nproject: my-project\ndataset: my-dataset\nkeyfile: {keyfile}\ntimeout_seconds: 10\nretries: 3\n"
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_key_file_mode() -> Result<()> {
        let dir = tempdir()?;
        let keyfile = dir.path().join("keyfile.json");
        fs::write(&keyfile, key_json("my-project"))?;

        let output = config_with_keyfile(keyfile.to_str().unwrap());
        let credentials = from_config(&output).await?;

        assert_eq!(credentials.project, "my-project");
        assert_eq!(credentials.method, Some(BigQueryMethod::ServiceAccount));
        assert_eq!(credentials.credentials.project_id, "my-project");
        assert_eq!(credentials.credentials.private_key, "my-key");
        Ok(())
    }

    #[tokio::test]
    async fn test_key_file_missing() {
        let output = config_with_keyfile("./tmp/does-not-exist.json");

        let err = from_config(&output).await.unwrap_err();
        assert!(matches!(err, InfrastructureError::KeyFileNotFound(_)));
        assert_eq!(err.to_string(), "No such file: ./tmp/does-not-exist.json");
    }

    #[tokio::test]
    async fn test_key_file_with_invalid_shape() -> Result<()> {
        let dir = tempdir()?;
        let keyfile = dir.path().join("keyfile.json");
        fs::write(&keyfile, r#"{"project_id": "only-one-field"}"#)?;

        let output = config_with_keyfile(keyfile.to_str().unwrap());
        let err = from_config(&output).await.unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_inline_key_mode() -> Result<()> {
        let output: Value = serde_yaml::from_str(
            r#"
type: bigquery
project: my-project
dataset: my-dataset
keyfile_json:
  project_id: inline-project
  private_key_id: my-private
  private_key: my-key
  client_email: my-email
  client_id: my-id
  auth_uri: my-uri
  token_uri: my-uri
  auth_provider_x509_cert_url: my-url
  client_x509_cert_url: my-url
"#,
        )?;

        let credentials = from_config(&output).await?;
        assert_eq!(credentials.credentials.project_id, "inline-project");
        Ok(())
    }

    #[tokio::test]
    async fn test_key_file_wins_over_inline_key() -> Result<()> {
        let dir = tempdir()?;
        let keyfile = dir.path().join("keyfile.json");
        fs::write(&keyfile, key_json("from-file"))?;

        // The two sources diverge on purpose: the file must win.
        let output: Value = serde_yaml::from_str(&format!(
            r#"
type: bigquery
project: my-project
dataset: my-dataset
keyfile: {}
keyfile_json:
  project_id: from-inline
  private_key_id: my-private
  private_key: my-key
  client_email: my-email
  client_id: my-id
  auth_uri: my-uri
  token_uri: my-uri
  auth_provider_x509_cert_url: my-url
  client_x509_cert_url: my-url
"#,
            keyfile.to_str().unwrap()
        ))?;

        let credentials = from_config(&output).await?;
        assert_eq!(credentials.credentials.project_id, "from-file");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_both_key_sources() -> Result<()> {
        let output: Value =
            serde_yaml::from_str("type: bigquery\nproject: my-project\ndataset: my-dataset\n")?;

        let err = from_config(&output).await.unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse { .. }));
        Ok(())
    }
}
