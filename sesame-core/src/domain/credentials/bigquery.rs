// sesame-core/src/domain/credentials/bigquery.rs

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// How the service-account key is sourced. Informational only: the
/// presence of `keyfile` / `keyfile_json` is what actually decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BigQueryMethod {
    ServiceAccount,
    ServiceAccountJson,
}

/// The nine-field Google service-account key, sourced either inline
/// (`keyfile_json`) or from the file named by `keyfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    pub client_id: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub auth_provider_x509_cert_url: String,
    pub client_x509_cert_url: String,
}

/// BigQuery connection parameters plus the validated service-account
/// key under `credentials`. `keyfile_json` is kept verbatim, as found
/// in the profile document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigQueryCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<BigQueryMethod>,
    pub project: String,
    pub dataset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyfile_json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    pub credentials: ServiceAccountKey,
}
