//! Cloud Vision REST API client.
//!
//! A `VisionClient` owns the endpoint configuration, a token source and the
//! OCR language hints. Each `annotate` call opens its own session (HTTP
//! client plus access token), sends the whole batch in one request and
//! drops the session before returning.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, StatusCode};
use sight_models::{
    ApiErrorBody, BatchAnnotateImagesRequest, BatchAnnotateImagesResponse, DetectionFeature,
    LanguageHints,
};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::auth::{AccessTokenSource, ServiceAccountTokenSource};
use crate::config::VisionConfig;
use crate::credentials::CredentialsFile;
use crate::error::{VisionError, VisionResult};
use crate::request::build_batch;

// =============================================================================
// Client
// =============================================================================

/// Image annotation client.
pub struct VisionClient {
    config: VisionConfig,
    tokens: Arc<dyn AccessTokenSource>,
    language_hints: LanguageHints,
    keep_language_hints: bool,
}

impl VisionClient {
    /// Create a client with an arbitrary token source.
    pub fn new(config: VisionConfig, tokens: Arc<dyn AccessTokenSource>) -> Self {
        Self {
            config,
            tokens,
            language_hints: LanguageHints::default(),
            keep_language_hints: false,
        }
    }

    /// Create a client authenticating with a service-account key file.
    pub fn from_credentials(config: VisionConfig, credentials: CredentialsFile) -> Self {
        Self::new(config, Arc::new(ServiceAccountTokenSource::new(credentials)))
    }

    /// Set OCR language hints.
    ///
    /// With `keep = false` the hints apply to the next batch only and are
    /// cleared once it has been built.
    pub fn set_language_hints(&mut self, hints: LanguageHints, keep: bool) {
        self.language_hints = hints;
        self.keep_language_hints = keep;
    }

    pub fn language_hints(&self) -> &LanguageHints {
        &self.language_hints
    }

    /// Build a batch from image files using the client's current hints.
    pub fn prepare_batch<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        feature: DetectionFeature,
    ) -> VisionResult<BatchAnnotateImagesRequest> {
        let batch = build_batch(paths, feature, &self.language_hints)?;

        if !self.keep_language_hints {
            self.language_hints.clear();
        }

        Ok(batch)
    }

    /// Read the images, then annotate them in a single batch.
    pub async fn request_image_annotation<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        feature: DetectionFeature,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        let batch = self.prepare_batch(paths, feature)?;
        self.annotate(&batch).await
    }

    /// Submit a batch and return the per-image responses.
    pub async fn annotate(
        &self,
        batch: &BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        let feature = batch
            .requests
            .first()
            .map(|r| r.feature())
            .unwrap_or_default();
        let span = info_span!("vision_annotate", images = batch.len(), feature = %feature);

        async {
            let start = Instant::now();
            let session = Session::open(&self.config, self.tokens.as_ref()).await?;
            let response = session.batch_annotate(batch).await?;

            if response.responses.len() != batch.len() {
                warn!(
                    expected = batch.len(),
                    received = response.responses.len(),
                    "Response count does not match request count"
                );
            }

            let failed = response.failed_indexes();
            if !failed.is_empty() {
                warn!(?failed, "Service reported per-image errors");
            }

            info!(
                latency_ms = start.elapsed().as_millis() as u64,
                "Annotation batch completed"
            );
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

// =============================================================================
// Session
// =============================================================================

/// One connection to the service, scoped to a single batch call.
struct Session<'a> {
    http: Client,
    token: String,
    url: String,
    config: &'a VisionConfig,
}

impl<'a> Session<'a> {
    async fn open(config: &'a VisionConfig, tokens: &dyn AccessTokenSource) -> VisionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("sightline/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let token = tokens.access_token().await?;

        Ok(Self {
            http,
            token,
            url: config.annotate_url(),
            config,
        })
    }

    async fn batch_annotate(
        &self,
        batch: &BatchAnnotateImagesRequest,
    ) -> VisionResult<BatchAnnotateImagesResponse> {
        debug!(url = %self.url, timeout = ?self.config.timeout, "Sending annotation batch");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(batch)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            VisionError::serialization(format!("failed to decode annotation response: {}", e))
        })
    }

    fn error_from_response(status: StatusCode, body: &str) -> VisionError {
        let (code, message) = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => (parsed.error.status, parsed.error.message),
            Err(_) => (String::new(), body.trim().to_string()),
        };
        let code = if code.is_empty() {
            status.canonical_reason().unwrap_or("UNKNOWN").to_string()
        } else {
            code
        };

        if status == StatusCode::UNAUTHORIZED {
            return VisionError::connection(format!("authentication rejected: {}", message));
        }

        VisionError::request(status.as_u16(), code, message)
    }
}

// =============================================================================
// Tests
// =============================================================================
