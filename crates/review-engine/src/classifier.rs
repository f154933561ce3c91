//! Document type classification from keyword triggers
//!
//! A type earns one point per distinct trigger phrase present in the
//! lower-cased text. Presence is plain substring containment, so repetition
//! does not add points and short triggers can match inside longer words.
//! Ties go to the earliest entry in the trigger table; that order is part of
//! the classification contract.

use planning_types::DocumentType;

/// Trigger phrases per candidate type, in tie-break order
pub const TYPE_TRIGGERS: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::ZoningApplication,
        &["zoning", "rezone", "zone change", "zoning application"],
    ),
    (
        DocumentType::BuildingPermit,
        &["building permit", "construction permit", "building application"],
    ),
    (
        DocumentType::SitePlan,
        &["site plan", "site development", "development plan"],
    ),
    (
        DocumentType::EnvironmentalImpact,
        &["environmental impact", "environmental assessment", "eir", "eis"],
    ),
    (
        DocumentType::VarianceRequest,
        &["variance", "variance request", "zoning variance"],
    ),
    (
        DocumentType::SubdivisionPlan,
        &["subdivision", "subdivision plan", "plat"],
    ),
    (
        DocumentType::ConditionalUse,
        &["conditional use", "special use", "cup"],
    ),
];

/// Pick the best-matching document type, or `Unknown` with no trigger hits
pub fn classify(text: &str) -> DocumentType {
    let text_lower = text.to_lowercase();

    let mut best: Option<(DocumentType, usize)> = None;
    for (doc_type, triggers) in TYPE_TRIGGERS {
        let hits = triggers
            .iter()
            .filter(|trigger| text_lower.contains(*trigger))
            .count();
        if hits == 0 {
            continue;
        }
        // Strictly-greater keeps the earliest type on equal scores
        match best {
            Some((_, top)) if hits <= top => {}
            _ => best = Some((*doc_type, hits)),
        }
    }

    best.map_or(DocumentType::Unknown, |(doc_type, _)| doc_type)
}
