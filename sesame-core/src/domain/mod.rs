pub mod credentials;
pub mod error;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use credentials::{Credentials, DatabaseKind};
pub use error::DomainError;
