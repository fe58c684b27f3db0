// sesame-core/src/domain/credentials/mod.rs

pub mod bigquery;
pub mod postgres;
pub mod redshift;
pub mod snowflake;

pub use bigquery::{BigQueryCredentials, BigQueryMethod, ServiceAccountKey};
pub use postgres::PostgresCredentials;
pub use redshift::RedshiftCredentials;
pub use snowflake::SnowflakeCredentials;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Closed set of supported database types. The `type` discriminator of
/// an output config must parse into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Snowflake,
    Bigquery,
    Redshift,
    Postgres,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 4] = [
        DatabaseKind::Snowflake,
        DatabaseKind::Bigquery,
        DatabaseKind::Redshift,
        DatabaseKind::Postgres,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Snowflake => "snowflake",
            DatabaseKind::Bigquery => "bigquery",
            DatabaseKind::Redshift => "redshift",
            DatabaseKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "snowflake" => Ok(DatabaseKind::Snowflake),
            "bigquery" => Ok(DatabaseKind::Bigquery),
            "redshift" => Ok(DatabaseKind::Redshift),
            "postgres" => Ok(DatabaseKind::Postgres),
            other => Err(DomainError::DatabaseNotSupported(other.to_string())),
        }
    }
}

/// One fully-typed, validated connection. Exactly one variant is
/// produced per successful resolution; the `type` tag pins it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Credentials {
    Snowflake(SnowflakeCredentials),
    Bigquery(BigQueryCredentials),
    Redshift(RedshiftCredentials),
    Postgres(PostgresCredentials),
}

impl Credentials {
    pub fn kind(&self) -> DatabaseKind {
        match self {
            Credentials::Snowflake(_) => DatabaseKind::Snowflake,
            Credentials::Bigquery(_) => DatabaseKind::Bigquery,
            Credentials::Redshift(_) => DatabaseKind::Redshift,
            Credentials::Postgres(_) => DatabaseKind::Postgres,
        }
    }
}

/// TLS negotiation mode shared by the Postgres-family adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    Disable,
    Require,
    VerifyCa,
    VerifyFull,
}

pub(crate) mod coercion {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }

    /// Accepts a port written either as a number or as a string.
    pub(crate) fn port<'de, D>(deserializer: D) -> Result<u16, D::Error>
    where
        D: Deserializer<'de>,
    {
        match PortRepr::deserialize(deserializer)? {
            PortRepr::Number(port) => Ok(port),
            PortRepr::Text(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| D::Error::custom(format!("invalid port number `{raw}`"))),
        }
    }
}
