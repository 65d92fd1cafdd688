//! Shared data models for Sightline.
//!
//! This crate provides Serde-serializable types for:
//! - Detection features and their wire names
//! - OCR language hints
//! - `images:annotate` batch requests and responses

pub mod annotate;
pub mod feature;
pub mod hints;

// Re-export common types
pub use annotate::{
    AnnotateImageRequest, ApiErrorBody, ApiErrorDetail, BatchAnnotateImagesRequest,
    BatchAnnotateImagesResponse, Feature, Image, ImageContext,
};
pub use feature::{DetectionFeature, DetectionFeatureParseError};
pub use hints::LanguageHints;
