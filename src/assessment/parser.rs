// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Section parsing for generative assessment responses
//!
//! The model is asked for three labeled sections. Models do not always
//! comply, so parsing is total: any input string yields an
//! [`Assessment`], with per-field defaults standing in for sections
//! that are absent or empty.

use regex::Regex;

use super::types::Assessment;

/// Default when the DESCRIPTION section is missing
pub const DEFAULT_DESCRIPTION: &str = "Assessment not available.";

/// Default when the CAUSE section is missing
pub const DEFAULT_CAUSE: &str = "Cause assessment not available.";

/// Default when the REMEDY section is missing
pub const DEFAULT_REMEDY: &str = "Please consult with a healthcare professional.";

/// Parse model output into the three assessment sections
///
/// Each section is looked up independently, so one malformed section
/// never takes down the others.
pub fn parse_assessment_text(text: &str) -> Assessment {
    Assessment {
        description: extract_section(text, "DESCRIPTION", &["CAUSE", "REMEDY"])
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        cause: extract_section(text, "CAUSE", &["DESCRIPTION", "REMEDY"])
            .unwrap_or_else(|| DEFAULT_CAUSE.to_string()),
        remedy: extract_section(text, "REMEDY", &["DESCRIPTION", "CAUSE"])
            .unwrap_or_else(|| DEFAULT_REMEDY.to_string()),
    }
}

/// Extract the text following `label:` up to the next section label or
/// end of input
///
/// Label matching is case-insensitive. The captured text is trimmed;
/// a label followed by nothing counts as missing.
fn extract_section(text: &str, label: &str, next_labels: &[&str]) -> Option<String> {
    let pattern = format!(
        r"(?is){}\s*:\s*(.*?)(?:(?:{})\s*:|\z)",
        label,
        next_labels.join("|")
    );
    let re = Regex::new(&pattern).unwrap();

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
