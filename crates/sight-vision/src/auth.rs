//! Access tokens for the annotation service.

use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use tracing::debug;

use crate::credentials::CredentialsFile;
use crate::error::{VisionError, VisionResult};

/// OAuth scope for the Vision API.
pub const VISION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-vision";

/// Source of bearer tokens for a session.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> VisionResult<String>;
}

/// Mints tokens from a service-account key file.
///
/// The key is read and a token requested every time a session opens;
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ServiceAccountTokenSource {
    credentials: CredentialsFile,
}

impl ServiceAccountTokenSource {
    pub fn new(credentials: CredentialsFile) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl AccessTokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> VisionResult<String> {
        let path = self.credentials.path();
        let account = CustomServiceAccount::from_file(path).map_err(|e| {
            VisionError::connection(format!(
                "failed to load service account from {}: {}",
                path.display(),
                e
            ))
        })?;

        let token = account.token(&[VISION_SCOPE]).await?;
        debug!(key = %path.display(), "Obtained Vision access token");
        Ok(token.as_str().to_string())
    }
}

/// Fixed token, for local emulators and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl AccessTokenSource for StaticToken {
    async fn access_token(&self) -> VisionResult<String> {
        Ok(self.0.clone())
    }
}
