// sesame-core/src/infrastructure/adapters/redshift.rs

use serde_yaml::Value;

use crate::domain::credentials::RedshiftCredentials;
use crate::infrastructure::config::schema;
use crate::infrastructure::error::InfrastructureError;

pub fn from_config(output: &Value) -> Result<RedshiftCredentials, InfrastructureError> {
    schema::validate("redshift", output.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::credentials::SslMode;
    use anyhow::Result;

    #[test]
    fn test_valid_config() -> Result<()> {
        let output: Value = serde_yaml::from_str(
            r#"
type: redshift
host: my-host
port: 5439
user: my-user
password: my-password
dbname: my-database
schema: my-schema
threads: 10
sslmode: disable
"#,
        )?;

        let credentials = from_config(&output)?;
        assert_eq!(credentials.host, "my-host");
        assert_eq!(credentials.threads, Some(10));
        assert_eq!(credentials.sslmode, Some(SslMode::Disable));
        Ok(())
    }

    #[test]
    fn test_port_defaults_when_missing() -> Result<()> {
        let output: Value = serde_yaml::from_str(
            "type: redshift\nhost: h\nuser: u\npassword: p\ndbname: d\nschema: s\n",
        )?;

        let credentials = from_config(&output)?;
        assert_eq!(credentials.port, 5439);
        Ok(())
    }

    #[test]
    fn test_invalid_config() -> Result<()> {
        // Old field names ('pass') and junk values must be rejected.
        let output: Value = serde_yaml::from_str(
            r#"
type: redshift
host: my-host
port: my-port
user: my-user
pass: my-password
dbname: my-database
schema: my-schema
threads: my-threads
sslmode: my-sslmode
"#,
        )?;

        let err = from_config(&output).unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse { .. }));
        Ok(())
    }
}
