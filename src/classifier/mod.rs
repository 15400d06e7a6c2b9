// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Retinal image classification client
//!
//! Talks to the external classification server:
//! - Image upload and severity scoring via `/predict`
//! - Liveness probing via `/health`
//!
//! The server owns all interpretation of the image. This module relays
//! its answers and converts its failures into [`ClassifierError`].

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::ClassifierClient;
pub use types::{AnalysisResult, ClassifierError};
