//! `images:annotate` request and response types.
//!
//! Requests are fully typed. Responses keep each per-image result as raw
//! JSON: the CLI prints them back verbatim, so every annotation kind the
//! service may return (including per-image `error` objects) survives.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::feature::DetectionFeature;
use crate::hints::LanguageHints;

/// Image payload. Only inline content is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Base64-encoded image bytes
    pub content: String,
}

impl Image {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: STANDARD.encode(bytes),
        }
    }
}

/// Feature descriptor. `maxResults` and `model` are never sent so the
/// service applies its defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: DetectionFeature,
}

/// Per-image context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContext {
    #[serde(rename = "languageHints", default)]
    pub language_hints: LanguageHints,
}

/// Annotation request for a single image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
    #[serde(rename = "imageContext")]
    pub image_context: ImageContext,
}

impl AnnotateImageRequest {
    /// Build a request carrying exactly one feature descriptor.
    pub fn new(image: Image, feature: DetectionFeature, language_hints: LanguageHints) -> Self {
        Self {
            image,
            features: vec![Feature { kind: feature }],
            image_context: ImageContext { language_hints },
        }
    }

    /// The single requested feature.
    pub fn feature(&self) -> DetectionFeature {
        self.features
            .first()
            .map(|f| f.kind)
            .unwrap_or_default()
    }

    pub fn language_hints(&self) -> &LanguageHints {
        &self.image_context.language_hints
    }
}

/// Batch of per-image requests. Order matches the input image order.
///
/// `parent` and `labels` are intentionally absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

impl BatchAnnotateImagesRequest {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Batch response: one entry per request, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<serde_json::Value>,
}

impl BatchAnnotateImagesResponse {
    /// Indexes of responses the service marked with a per-image `error`.
    pub fn failed_indexes(&self) -> Vec<usize> {
        self.responses
            .iter()
            .enumerate()
            .filter(|(_, r)| r.get("error").is_some_and(|e| !e.is_null()))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Error body returned by Google APIs on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
