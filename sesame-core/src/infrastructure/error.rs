// sesame-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::infrastructure::config::schema::FieldDiagnostic;
use crate::infrastructure::template::TemplateError;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sesame::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- RESOLUTION (Cascade de chemins) ---
    #[error("No such file: {}", .candidates.join(", "))]
    #[diagnostic(
        code(sesame::infra::no_such_file),
        help("Every candidate path was tried, in order.")
    )]
    NoSuchFile { candidates: Vec<String> },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sesame::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {}", format_diagnostics(.diagnostics))]
    #[diagnostic(code(sesame::infra::parse))]
    Parse { diagnostics: Vec<FieldDiagnostic> },

    // --- BIGQUERY KEY FILE ---
    #[error("No such file: {0}")]
    #[diagnostic(
        code(sesame::infra::keyfile_missing),
        help("The 'keyfile' of a bigquery output must point to a service-account JSON file.")
    )]
    KeyFileNotFound(String),

    // --- TEMPLATING ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] TemplateError),
}

fn format_diagnostics(diagnostics: &[FieldDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
