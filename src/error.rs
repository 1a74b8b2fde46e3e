use std::path::PathBuf;

use thiserror::Error;

/// Structural failures that abort the run with exit code 1.
///
/// Problems *found in* the dependencies (unused, missing, and so on) are
/// report content, not errors, and never show up here.
#[derive(Debug, Error)]
pub enum DepMoleError {
    #[error("`package.json` not found at {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid JSON in {}: {details}", .path.display())]
    ManifestParseError { path: PathBuf, details: String },

    #[error("invalid option combination: {message}")]
    InvalidOptionCombination { message: String },
}
