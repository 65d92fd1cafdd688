//! Vision client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{VisionError, VisionResult};

/// Default REST endpoint for the Vision API.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1";

/// Vision client configuration.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Base URL; `images:annotate` is appended to it
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl VisionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> VisionResult<Self> {
        let config = Self {
            endpoint: std::env::var("VISION_API_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                std::env::var("VISION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("VISION_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the endpoint, validating the new value.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> VisionResult<Self> {
        self.endpoint = endpoint.into();
        self.validate()?;
        Ok(self)
    }

    /// Full URL of the batch annotation method.
    pub fn annotate_url(&self) -> String {
        format!("{}/images:annotate", self.endpoint.trim_end_matches('/'))
    }

    fn validate(&self) -> VisionResult<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            VisionError::config(format!("invalid endpoint {:?}: {}", self.endpoint, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VisionError::config(format!(
                "endpoint must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = VisionConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(
            config.annotate_url(),
            "https://vision.googleapis.com/v1/images:annotate"
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("VISION_API_ENDPOINT", "http://localhost:9000/v1/");
        std::env::set_var("VISION_TIMEOUT_SECS", "5");
        std::env::remove_var("VISION_CONNECT_TIMEOUT_SECS");

        let config = VisionConfig::from_env().unwrap();
        assert_eq!(config.annotate_url(), "http://localhost:9000/v1/images:annotate");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));

        std::env::remove_var("VISION_API_ENDPOINT");
        std::env::remove_var("VISION_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_endpoint() {
        std::env::set_var("VISION_API_ENDPOINT", "not a url");
        assert!(matches!(VisionConfig::from_env(), Err(VisionError::Config(_))));
        std::env::remove_var("VISION_API_ENDPOINT");

        assert!(VisionConfig::default().with_endpoint("ftp://example.com").is_err());
    }
}
