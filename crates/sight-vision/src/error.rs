//! Vision client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for Vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur while preparing or sending an annotation batch.
///
/// Every variant is terminal for a CLI invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Unable to read GOOGLE_APPLICATION_CREDENTIALS: variable is unset or empty")]
    MissingCredentials,

    #[error("Failed to read image {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Annotation request failed ({status} {code}): {message}")]
    Request {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VisionError {
    pub fn image_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ImageRead {
            path: path.into(),
            source,
        }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn request(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status reported by the service, if the error came from it.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            VisionError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VisionError::MissingCredentials | VisionError::Config(_) => 2,
            VisionError::ImageRead { .. } | VisionError::InvalidRequest(_) => 3,
            VisionError::Connection(_) => 4,
            VisionError::Request { .. } => 5,
            VisionError::Serialization(_) => 6,
        }
    }
}

impl From<reqwest::Error> for VisionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            VisionError::Serialization(err.to_string())
        } else {
            VisionError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for VisionError {
    fn from(err: serde_json::Error) -> Self {
        VisionError::Serialization(err.to_string())
    }
}

impl From<gcp_auth::Error> for VisionError {
    fn from(err: gcp_auth::Error) -> Self {
        VisionError::Connection(format!("authentication failed: {}", err))
    }
}
