// sesame-core/src/infrastructure/adapters/postgres.rs

use serde_yaml::Value;

use crate::domain::credentials::PostgresCredentials;
use crate::infrastructure::config::schema;
use crate::infrastructure::error::InfrastructureError;

pub fn from_config(output: &Value) -> Result<PostgresCredentials, InfrastructureError> {
    schema::validate("postgres", output.clone())
}
