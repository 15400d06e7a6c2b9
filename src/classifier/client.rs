// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the retinopathy classification server

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::types::{AnalysisResult, ClassifierError, ErrorBody};
use crate::config::ScreeningConfig;

/// Client for the classification server's `/predict` and `/health` endpoints
pub struct ClassifierClient {
    client: Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a new classifier client from configuration
    pub fn new(config: &ScreeningConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::InvalidConfig)?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let base_url = config.classifier_base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Base URL the client posts to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a retinal image file
    ///
    /// Reads the file from disk and uploads it. No size, type, or
    /// content validation happens locally; those checks belong to the
    /// server.
    pub async fn analyze_image(&self, path: &Path) -> Result<AnalysisResult, ClassifierError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        self.analyze_image_bytes(bytes, &file_name).await
    }

    /// Classify raw image bytes
    ///
    /// Posts the bytes under the `file` multipart field and decodes the
    /// JSON body as [`AnalysisResult`], trusting whatever the server
    /// reports. A non-2xx status becomes [`ClassifierError::Api`] with
    /// the server's `detail` message when one is present.
    pub async fn analyze_image_bytes(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<AnalysisResult, ClassifierError> {
        debug!("Uploading {} ({} bytes) for classification", file_name, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Classification request failed: {}", e);
                ClassifierError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .detail
                    .unwrap_or_else(|| format!("Server error: {}", status.as_u16())),
                Err(_) => format!("Server error: {}", status.as_u16()),
            };
            warn!("Classification rejected with status {}: {}", status, message);
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result = response.json::<AnalysisResult>().await?;
        debug!(
            "Classification complete: {} ({} labels)",
            result.highest_probability_class,
            result.detailed_classification.len()
        );
        Ok(result)
    }

    /// Probe the server's liveness endpoint
    ///
    /// Always resolves to a value. The body is passed through verbatim;
    /// its shape is the server's business. Any transport failure or
    /// undecodable body yields the fixed unhealthy status object.
    pub async fn check_server_health(&self) -> Value {
        let response = match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Health check failed: {}", e);
                return Self::unreachable_status();
            }
        };

        match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Health check body was not JSON: {}", e);
                Self::unreachable_status()
            }
        }
    }

    fn unreachable_status() -> Value {
        json!({
            "status": "unhealthy",
            "message": "Could not connect to server"
        })
    }
}
