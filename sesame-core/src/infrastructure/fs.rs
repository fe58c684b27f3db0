// sesame-core/src/infrastructure/fs.rs

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::infrastructure::error::InfrastructureError;

/// Extensions recognized by the configuration cascade, in probe order.
const RECOGNIZED_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Expand candidate bases into an ordered, de-duplicated path list.
///
/// The explicit path (if any) always comes first. A base that already
/// carries a recognized extension is kept verbatim; anything else is
/// expanded into one candidate per extension, `yml` before `yaml`.
/// De-duplication keeps the first occurrence.
pub fn path_candidates(explicit: Option<&Path>, bases: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    let all_bases = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(bases.iter().cloned());

    for base in all_bases {
        if has_recognized_extension(&base) {
            push_unique(&mut candidates, base);
        } else {
            for extension in RECOGNIZED_EXTENSIONS {
                let mut with_extension = base.clone().into_os_string();
                with_extension.push(".");
                with_extension.push(extension);
                push_unique(&mut candidates, PathBuf::from(with_extension));
            }
        }
    }

    candidates
}

/// Scan candidates in order and return the first that exists and is a
/// regular file. Directories do not count. The error message enumerates
/// every path tried.
pub fn locate(candidates: &[PathBuf]) -> Result<&Path, InfrastructureError> {
    for candidate in candidates {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(InfrastructureError::NoSuchFile {
        candidates: candidates
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    })
}

/// Locate and read the first matching candidate.
pub async fn read_first(candidates: &[PathBuf]) -> Result<String, InfrastructureError> {
    let path = locate(candidates)?;
    debug!(path = ?path, "Reading configuration file");

    tokio::fs::read_to_string(path)
        .await
        .map_err(InfrastructureError::Io)
}

fn has_recognized_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| RECOGNIZED_EXTENSIONS.contains(&extension))
}

fn push_unique(candidates: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}
