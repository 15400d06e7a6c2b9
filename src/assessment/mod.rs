// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Explanatory assessment generation
//!
//! Turns a severity classification into three-part patient-facing text:
//! - Live generation via the Gemini generateContent API
//! - Total section parsing with per-field defaults
//! - Static fallback table when the live call fails
//!
//! The public entry point never errors; every failure mode degrades to
//! the fallback table.

pub mod fallback;
pub mod generator;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use fallback::{fallback_assessment, GENERIC_REMEDY};
pub use generator::AssessmentGenerator;
pub use parser::{parse_assessment_text, DEFAULT_CAUSE, DEFAULT_DESCRIPTION, DEFAULT_REMEDY};
pub use types::{Assessment, AssessmentOutcome, AssessmentSource};
