// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pre-authored assessments used when the generative call is unavailable
//!
//! One entry per known severity label plus a generic arm, so lookup is
//! total. The generic arm is routine, not exceptional: any upstream
//! label outside the known set lands there.

use super::types::Assessment;

/// Remedy used for labels outside the known severity set
pub const GENERIC_REMEDY: &str =
    "Please consult with an eye care professional for proper evaluation.";

/// Static assessment for a classification label
///
/// Exact-match over the five known diabetic retinopathy severity
/// labels. Anything else gets a generic assessment with the label
/// interpolated, never a missing-entry failure.
pub fn fallback_assessment(classification: &str) -> Assessment {
    match classification {
        "No DR" => Assessment {
            description: "No signs of diabetic retinopathy were detected in this retinal image. \
                          The blood vessels of the retina appear healthy, with no visible \
                          microaneurysms, hemorrhages, or exudates."
                .to_string(),
            cause: "Blood sugar levels have not caused detectable damage to the small blood \
                    vessels of the retina at this time."
                .to_string(),
            remedy: "Maintain good blood sugar control and schedule a routine retinal screening \
                     every year."
                .to_string(),
        },
        "Mild" => Assessment {
            description: "Mild nonproliferative diabetic retinopathy was detected. Small \
                          balloon-like swellings called microaneurysms have formed in the \
                          retina's blood vessels."
                .to_string(),
            cause: "Prolonged elevated blood sugar has started to weaken the walls of the \
                    smallest blood vessels in the retina."
                .to_string(),
            remedy: "Improve blood sugar, blood pressure, and cholesterol control, and repeat \
                     retinal screening within six to twelve months."
                .to_string(),
        },
        "Moderate" => Assessment {
            description: "Moderate nonproliferative diabetic retinopathy was detected. Some of \
                          the blood vessels that nourish the retina are swollen, distorted, or \
                          blocked."
                .to_string(),
            cause: "Continuing vessel damage from high blood sugar is reducing the blood supply \
                    to parts of the retina."
                .to_string(),
            remedy: "See an eye care specialist within the next few months for a dilated \
                     examination and closer monitoring."
                .to_string(),
        },
        "Severe" => Assessment {
            description: "Severe nonproliferative diabetic retinopathy was detected. Many \
                          retinal blood vessels are blocked, leaving large areas of the retina \
                          without adequate blood supply."
                .to_string(),
            cause: "Widespread blockage of retinal vessels has deprived the retina of \
                    circulation, prompting it to signal for the growth of new abnormal vessels."
                .to_string(),
            remedy: "Consult a retina specialist promptly; treatment such as laser therapy may \
                     be needed to prevent progression."
                .to_string(),
        },
        "Proliferative DR" => Assessment {
            description: "Proliferative diabetic retinopathy was detected, the most advanced \
                          stage of the disease. Fragile new blood vessels are growing on the \
                          surface of the retina and can leak, bleed, or cause scarring."
                .to_string(),
            cause: "Extensive loss of blood supply in the retina has triggered the growth of \
                    abnormal new vessels that bleed easily and can detach the retina."
                .to_string(),
            remedy: "Seek urgent care from a retina specialist; laser surgery, injections, or \
                     vitrectomy may be required to protect vision."
                .to_string(),
        },
        other => Assessment {
            description: format!(
                "A classification of {} was reported for this retinal image.",
                other
            ),
            cause: format!(
                "The underlying cause for {} could not be determined automatically.",
                other
            ),
            remedy: GENERIC_REMEDY.to_string(),
        },
    }
}
