// sesame-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Profile not found: {0}")]
    #[diagnostic(
        code(sesame::domain::profile_not_found),
        help("Check the top-level profile names declared in your profiles.yml.")
    )]
    ProfileNotFound(String),

    #[error("Target not found: {0}")]
    #[diagnostic(
        code(sesame::domain::target_not_found),
        help("Check the 'outputs' keys of this profile.")
    )]
    TargetNotFound(String),

    #[error("Database not supported: {0}")]
    #[diagnostic(code(sesame::domain::database_not_supported))]
    DatabaseNotSupported(String),
}
