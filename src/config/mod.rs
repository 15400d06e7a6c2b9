// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the screening service clients

use std::env;
use std::time::Duration;

use url::Url;

/// Default base URL of the classification server
pub const DEFAULT_CLASSIFIER_BASE_URL: &str = "http://localhost:8000";

/// Default Gemini generateContent endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Default transport-level request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the classifier client and the assessment generator
///
/// Built explicitly (tests inject arbitrary URLs) or from environment
/// variables via [`ScreeningConfig::from_env`]. Read once at startup;
/// there is no dynamic reload.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Base URL of the classification server
    pub classifier_base_url: String,
    /// Gemini API key. An empty key is sent as-is; the provider rejects
    /// the request and the generator answers from the fallback table.
    pub gemini_api_key: String,
    /// Full URL of the Gemini generateContent endpoint
    pub gemini_endpoint: String,
    /// Timeout applied when building each HTTP client
    pub request_timeout_secs: u64,
}

impl ScreeningConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional: `CLASSIFIER_BASE_URL`,
    /// `GEMINI_API_KEY`, `GEMINI_ENDPOINT`, `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self {
            classifier_base_url: env::var("CLASSIFIER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CLASSIFIER_BASE_URL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_endpoint: env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let base = Url::parse(&self.classifier_base_url)
            .map_err(|e| format!("Invalid classifier base URL: {}", e))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(format!(
                "Classifier base URL must be http or https, got {}",
                base.scheme()
            ));
        }
        Url::parse(&self.gemini_endpoint)
            .map_err(|e| format!("Invalid Gemini endpoint: {}", e))?;
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Transport timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            classifier_base_url: DEFAULT_CLASSIFIER_BASE_URL.to_string(),
            gemini_api_key: String::new(),
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();
        assert_eq!(config.classifier_base_url, DEFAULT_CLASSIFIER_BASE_URL);
        assert_eq!(config.gemini_endpoint, DEFAULT_GEMINI_ENDPOINT);
        assert!(config.gemini_api_key.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = ScreeningConfig::default();
        config.classifier_base_url = "ftp://classifier.local".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unparseable_base_url() {
        let mut config = ScreeningConfig::default();
        config.classifier_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ScreeningConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_gemini_endpoint() {
        let mut config = ScreeningConfig::default();
        config.gemini_endpoint = "::::".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_duration() {
        let mut config = ScreeningConfig::default();
        config.request_timeout_secs = 5;
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
