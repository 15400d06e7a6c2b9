// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Wire types and errors for the classification server client

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification result returned by the server's `/predict` endpoint
///
/// The body is relayed verbatim: field names mirror the server's JSON
/// and no schema validation happens beyond deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Probability per severity label, exactly as the server sent it
    /// (range is the server's choice and is not checked here)
    pub detailed_classification: HashMap<String, f64>,
    /// The label the server ranked highest. Trusted as-is; not checked
    /// against the keys of `detailed_classification`.
    pub highest_probability_class: String,
}

/// Error body the classification server attaches to non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}

/// Errors surfaced by the classifier client
///
/// Classification is the one operation in this crate that propagates
/// failure to the caller; assessment and health degrade instead.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The server answered with a non-success status. The message is the
    /// server's `detail` field when present, `Server error: <status>`
    /// otherwise.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable failure description
        message: String,
    },

    /// The request never completed (DNS, connection refused, timeout)
    /// or the success body could not be decoded
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image file could not be read from disk
    #[error("Could not read image file: {0}")]
    Io(#[from] std::io::Error),

    /// The client was constructed with unusable configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
