// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result types for assessment generation

use serde::{Deserialize, Serialize};

/// Three-part explanatory text for a classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// What the classification means
    pub description: String,
    /// Likely cause of the condition
    pub cause: String,
    /// Recommended next steps
    pub remedy: String,
}

/// Where an assessment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentSource {
    /// Parsed out of a live generative-model response
    Generated,
    /// Taken from the static fallback table
    Fallback,
}

/// An assessment together with the path that produced it
///
/// Callers that only want text can read `assessment` and ignore
/// `source`; tests assert on `source` to pin down which path ran.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub assessment: Assessment,
    pub source: AssessmentSource,
}

impl AssessmentOutcome {
    /// True when the assessment came from the fallback table
    pub fn used_fallback(&self) -> bool {
        self.source == AssessmentSource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_serialization() {
        let assessment = Assessment {
            description: "Healthy retina.".to_string(),
            cause: "No vessel damage.".to_string(),
            remedy: "Routine checkups.".to_string(),
        };
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["description"], "Healthy retina.");
        assert_eq!(json["cause"], "No vessel damage.");
        assert_eq!(json["remedy"], "Routine checkups.");
    }

    #[test]
    fn test_used_fallback() {
        let assessment = Assessment {
            description: String::new(),
            cause: String::new(),
            remedy: String::new(),
        };
        let generated = AssessmentOutcome {
            assessment: assessment.clone(),
            source: AssessmentSource::Generated,
        };
        let fallback = AssessmentOutcome {
            assessment,
            source: AssessmentSource::Fallback,
        };
        assert!(!generated.used_fallback());
        assert!(fallback.used_fallback());
    }
}
