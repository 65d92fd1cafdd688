//! OCR language hints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::feature::DetectionFeature;

/// Ordered list of language codes (e.g. `en`, `it`) passed to the OCR
/// features through the image context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageHints(Vec<String>);

impl LanguageHints {
    /// Create hints from any list of codes. Blank codes are dropped.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            codes
                .into_iter()
                .map(Into::into)
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated list such as `"en,it"`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Hints as they apply to `feature`: unchanged for OCR features, empty otherwise.
    pub fn for_feature(&self, feature: DetectionFeature) -> Self {
        if feature.supports_language_hints() {
            self.clone()
        } else {
            Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for LanguageHints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
