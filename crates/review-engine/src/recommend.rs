//! Recommendations and procedural next steps
//!
//! Recommendations roll missing requirements up by severity: critical items
//! get an urgent summary plus up to three bullets, important items a summary
//! plus up to two. Recommended-importance items are informational only and
//! never surface as action items. With nothing critical or important the
//! output is a fixed completion message pair, not an empty list.

use planning_types::{DocumentType, Importance, MissingRequirement};

pub fn recommendations(missing: &[MissingRequirement]) -> Vec<String> {
    let critical: Vec<&MissingRequirement> = missing
        .iter()
        .filter(|req| req.importance == Importance::Critical)
        .collect();
    let important: Vec<&MissingRequirement> = missing
        .iter()
        .filter(|req| req.importance == Importance::Important)
        .collect();

    let mut recommendations = Vec::new();

    if !critical.is_empty() {
        recommendations.push(format!(
            "URGENT: {} critical requirements are missing. Application cannot proceed without these.",
            critical.len()
        ));
        for req in critical.iter().take(3) {
            recommendations.push(format!(
                "• Provide {} (Source: {})",
                req.description, req.suggested_source
            ));
        }
    }

    if !important.is_empty() {
        recommendations.push(format!(
            "IMPORTANT: {} important requirements need attention.",
            important.len()
        ));
        for req in important.iter().take(2) {
            recommendations.push(format!("• Include {}", req.description));
        }
    }

    if critical.is_empty() && important.is_empty() {
        recommendations.push("Document appears complete for basic requirements.".to_string());
        recommendations.push("Review with planning staff for final approval.".to_string());
    }

    recommendations
}

pub fn next_steps(doc_type: DocumentType, missing: &[MissingRequirement]) -> Vec<String> {
    let has_critical = missing
        .iter()
        .any(|req| req.importance == Importance::Critical);

    let mut steps = Vec::new();

    if has_critical {
        steps.push("1. Gather missing critical information before submitting application".to_string());
        steps.push("2. Contact planning department for pre-application consultation".to_string());
        steps.push("3. Prepare additional documentation as identified".to_string());
    } else {
        steps.push("1. Review application for completeness".to_string());
        steps.push("2. Submit application to planning department".to_string());
        steps.push("3. Schedule follow-up meeting if needed".to_string());
    }

    match doc_type {
        DocumentType::ZoningApplication => {
            steps.push("4. Prepare for public hearing if required".to_string());
        }
        DocumentType::BuildingPermit => {
            steps.push("4. Schedule building inspection once approved".to_string());
        }
        _ => {}
    }

    steps
}
