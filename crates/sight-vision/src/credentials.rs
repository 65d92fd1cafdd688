//! Service-account credential resolution.
//!
//! Resolution happens once per process: an explicit path wins, otherwise
//! `GOOGLE_APPLICATION_CREDENTIALS` is consulted. The file itself is not
//! touched here; an unreadable key surfaces when a session is opened.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{VisionError, VisionResult};

/// Environment variable holding the default key file path.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Handle to a service-account key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the credentials file from an explicit path or the environment.
pub fn resolve(explicit_path: Option<&str>) -> VisionResult<CredentialsFile> {
    if let Some(path) = explicit_path.filter(|p| !p.is_empty()) {
        debug!(path = %path, "Using explicit credentials file");
        return Ok(CredentialsFile::new(path));
    }

    match std::env::var(CREDENTIALS_ENV) {
        Ok(path) if !path.is_empty() => {
            debug!(path = %path, "Using credentials file from {}", CREDENTIALS_ENV);
            Ok(CredentialsFile::new(path))
        }
        _ => Err(VisionError::MissingCredentials),
    }
}
