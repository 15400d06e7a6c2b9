// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod assessment;
pub mod classifier;
pub mod cli;
pub mod config;

// Re-export main types
pub use assessment::{Assessment, AssessmentGenerator, AssessmentOutcome, AssessmentSource};
pub use classifier::{AnalysisResult, ClassifierClient, ClassifierError};
pub use config::ScreeningConfig;
