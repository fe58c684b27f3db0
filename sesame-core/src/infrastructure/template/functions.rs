// sesame-core/src/infrastructure/template/functions.rs

// Built-in transforms pre-registered on every default renderer.

use super::engine::{PipeRenderer, TemplateError};

pub(super) fn install_builtins(renderer: PipeRenderer) -> PipeRenderer {
    renderer
        .register("to_upper", to_upper)
        .register("to_lower", to_lower)
        .register("env_var", env_var)
}

pub fn to_upper(args: &[String]) -> Result<String, TemplateError> {
    Ok(args.first().map(|s| s.to_uppercase()).unwrap_or_default())
}

pub fn to_lower(args: &[String]) -> Result<String, TemplateError> {
    Ok(args.first().map(|s| s.to_lowercase()).unwrap_or_default())
}

/// Environment variable lookup. Unset (or non-unicode) variables read
/// as the empty string, never as an error.
pub fn env_var(args: &[String]) -> Result<String, TemplateError> {
    Ok(args
        .first()
        .and_then(|name| std::env::var(name).ok())
        .unwrap_or_default())
}
