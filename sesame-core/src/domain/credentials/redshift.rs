// sesame-core/src/domain/credentials/redshift.rs

use serde::{Deserialize, Serialize};

use super::{SslMode, coercion};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedshiftCredentials {
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "coercion::port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sslmode: Option<SslMode>,
}

fn default_port() -> u16 {
    5439
}
