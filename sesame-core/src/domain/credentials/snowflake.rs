// sesame-core/src/domain/credentials/snowflake.rs

use serde::{Deserialize, Serialize};

use super::coercion;

/// Snowflake connection parameters. Every field is required; the port
/// may be written as a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowflakeCredentials {
    pub account: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub role: String,
    #[serde(deserialize_with = "coercion::port")]
    pub port: u16,
    pub warehouse: String,
    pub schema: String,
}
