// sesame-core/src/infrastructure/adapters/snowflake.rs

use serde_yaml::Value;

use crate::domain::credentials::SnowflakeCredentials;
use crate::infrastructure::config::schema;
use crate::infrastructure::error::InfrastructureError;

pub fn from_config(output: &Value) -> Result<SnowflakeCredentials, InfrastructureError> {
    schema::validate("snowflake", output.clone())
}
