// sesame-core/src/infrastructure/config/schema.rs

// Normalizes the external validator (serde deserialization) into the
// uniform ParseError shape carried by InfrastructureError::Parse, so
// that every config failure surfaces as field-level diagnostics instead
// of raw library errors.

use serde::de::DeserializeOwned;
use std::fmt;

use crate::infrastructure::error::InfrastructureError;

/// One field-level validation failure: where, and what was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiagnostic {
    pub path: String,
    pub message: String,
}

impl FieldDiagnostic {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Coerce a raw YAML value into `T`, reporting any failure as a single
/// diagnostic anchored at `scope` (a field path prefix).
pub fn validate<T: DeserializeOwned>(
    scope: &str,
    value: serde_yaml::Value,
) -> Result<T, InfrastructureError> {
    serde_yaml::from_value(value).map_err(|e| InfrastructureError::Parse {
        diagnostics: vec![FieldDiagnostic::new(scope, e.to_string())],
    })
}
