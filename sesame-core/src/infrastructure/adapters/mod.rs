// sesame-core/src/infrastructure/adapters/mod.rs

pub mod bigquery;
pub mod postgres;
pub mod redshift;
pub mod snowflake;

use serde_yaml::Value;

use crate::domain::credentials::{Credentials, DatabaseKind};
use crate::error::SesameError;
use crate::infrastructure::config::schema::FieldDiagnostic;
use crate::infrastructure::error::InfrastructureError;

/// Dispatch a raw output config to its adapter, keyed by the `type`
/// discriminator. The supported set is fixed and closed, so this is a
/// match over `DatabaseKind`, not an open lookup table.
pub async fn resolve(output: &Value) -> Result<Credentials, SesameError> {
    let tag = output
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| InfrastructureError::Parse {
            diagnostics: vec![FieldDiagnostic::new("type", "missing required field")],
        })?;

    let kind: DatabaseKind = tag.parse()?;

    match kind {
        DatabaseKind::Snowflake => Ok(Credentials::Snowflake(snowflake::from_config(output)?)),
        DatabaseKind::Bigquery => Ok(Credentials::Bigquery(bigquery::from_config(output).await?)),
        DatabaseKind::Redshift => Ok(Credentials::Redshift(redshift::from_config(output)?)),
        DatabaseKind::Postgres => Ok(Credentials::Postgres(postgres::from_config(output)?)),
    }
}
