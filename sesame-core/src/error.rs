// sesame-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SesameError {
    // --- ERREURS DU DOMAINE (Profils, Targets, Databases) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing, Templating) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for SesameError {
    fn from(err: std::io::Error) -> Self {
        SesameError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<TemplateError> for SesameError {
    fn from(err: TemplateError) -> Self {
        SesameError::Infrastructure(InfrastructureError::Template(err))
    }
}
