//! Detection feature definitions.
//!
//! A `DetectionFeature` names the single kind of annotation requested for
//! every image in a batch:
//!
//! - `Face`, `Landmark`, `Logo`, `Label`: object-level detectors
//! - `Text`, `DocumentText`: OCR (the only features that honor language hints)
//! - `SafeSearch`, `ImageProperties`: whole-image classifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Vision feature requested for a batch.
///
/// Serializes to the service's `Feature.Type` wire names
/// (`FACE_DETECTION`, `TEXT_DETECTION`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DetectionFeature {
    /// Unspecified or unknown feature type.
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified,

    /// Face detection.
    #[serde(rename = "FACE_DETECTION")]
    Face,

    /// Landmark detection.
    #[serde(rename = "LANDMARK_DETECTION")]
    Landmark,

    /// Logo detection.
    #[serde(rename = "LOGO_DETECTION")]
    Logo,

    /// Label detection.
    #[serde(rename = "LABEL_DETECTION")]
    Label,

    /// OCR tuned for sparse text in photos.
    #[serde(rename = "TEXT_DETECTION")]
    Text,

    /// OCR tuned for dense text and documents.
    #[serde(rename = "DOCUMENT_TEXT_DETECTION")]
    DocumentText,

    /// Sensitive content likelihoods.
    #[serde(rename = "SAFE_SEARCH_DETECTION")]
    SafeSearch,

    /// Dominant colors and crop hints.
    #[serde(rename = "IMAGE_PROPERTIES")]
    ImageProperties,
}

impl DetectionFeature {
    /// All features, in CLI flag precedence order (highest first),
    /// followed by `Unspecified`.
    pub const ALL: &'static [DetectionFeature] = &[
        DetectionFeature::Face,
        DetectionFeature::Landmark,
        DetectionFeature::Logo,
        DetectionFeature::Label,
        DetectionFeature::Text,
        DetectionFeature::DocumentText,
        DetectionFeature::SafeSearch,
        DetectionFeature::ImageProperties,
        DetectionFeature::Unspecified,
    ];

    /// Short name, matching the CLI flag spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionFeature::Unspecified => "unspecified",
            DetectionFeature::Face => "face",
            DetectionFeature::Landmark => "landmark",
            DetectionFeature::Logo => "logo",
            DetectionFeature::Label => "label",
            DetectionFeature::Text => "text",
            DetectionFeature::DocumentText => "doc",
            DetectionFeature::SafeSearch => "safe-search",
            DetectionFeature::ImageProperties => "image-properties",
        }
    }

    /// The service's `Feature.Type` name.
    pub fn wire_name(&self) -> &'static str {
        match self {
            DetectionFeature::Unspecified => "TYPE_UNSPECIFIED",
            DetectionFeature::Face => "FACE_DETECTION",
            DetectionFeature::Landmark => "LANDMARK_DETECTION",
            DetectionFeature::Logo => "LOGO_DETECTION",
            DetectionFeature::Label => "LABEL_DETECTION",
            DetectionFeature::Text => "TEXT_DETECTION",
            DetectionFeature::DocumentText => "DOCUMENT_TEXT_DETECTION",
            DetectionFeature::SafeSearch => "SAFE_SEARCH_DETECTION",
            DetectionFeature::ImageProperties => "IMAGE_PROPERTIES",
        }
    }

    /// Returns true if the service applies language hints for this feature.
    pub fn supports_language_hints(&self) -> bool {
        matches!(self, DetectionFeature::Text | DetectionFeature::DocumentText)
    }
}

impl fmt::Display for DetectionFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DetectionFeature {
    type Err = DetectionFeatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "unspecified" | "type_unspecified" => Ok(DetectionFeature::Unspecified),
            "face" | "face_detection" => Ok(DetectionFeature::Face),
            "landmark" | "landmark_detection" => Ok(DetectionFeature::Landmark),
            "logo" | "logo_detection" => Ok(DetectionFeature::Logo),
            "label" | "label_detection" => Ok(DetectionFeature::Label),
            "text" | "text_detection" => Ok(DetectionFeature::Text),
            "doc" | "document_text" | "document_text_detection" => {
                Ok(DetectionFeature::DocumentText)
            }
            "safe-search" | "safe_search" | "safe_search_detection" => {
                Ok(DetectionFeature::SafeSearch)
            }
            "image-properties" | "image_properties" => Ok(DetectionFeature::ImageProperties),
            _ => Err(DetectionFeatureParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown detection feature: {0}")]
pub struct DetectionFeatureParseError(String);
