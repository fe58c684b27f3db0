// sesame-core/src/application/mod.rs

pub mod ports;
pub mod resolver;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use sesame_core::application::{Project, ProjectLoader};`
// sans avoir à connaître la structure interne des fichiers.

pub use resolver::{Project, ProjectLoader};
