//! Weighted compliance scoring and extraction confidence
//!
//! Compliance weighs each catalog field by importance and reports the share
//! of weight satisfied, in [0, 100]. Confidence only counts how many fields
//! were extracted, required or not; the two must never be conflated.

use crate::catalog::{self, CatalogSection};
use planning_types::{DocumentType, FoundInformation};

/// Weighted share of the type's catalog satisfied by the found fields
pub fn compliance_score(doc_type: DocumentType, found: &FoundInformation) -> f64 {
    weighted_score(&catalog::requirements(doc_type), found)
}

/// Score an explicit catalog snapshot
///
/// An empty catalog (zero total weight) is vacuously compliant at 100.0.
pub fn weighted_score(sections: &[CatalogSection], found: &FoundInformation) -> f64 {
    let mut total_weight = 0u32;
    let mut missing_weight = 0u32;

    for (_, fields) in sections {
        for requirement in fields {
            let weight = requirement.importance.weight();
            total_weight += weight;
            if !is_present(found, requirement.field_name) {
                missing_weight += weight;
            }
        }
    }

    if total_weight == 0 {
        return 100.0;
    }

    let score = f64::from(total_weight - missing_weight) / f64::from(total_weight) * 100.0;
    score.clamp(0.0, 100.0)
}

/// Extraction coverage heuristic: ten points per found field, capped at 100
pub fn confidence_score(found: &FoundInformation) -> f64 {
    (found.len() as f64 * 10.0).min(100.0)
}

/// A field counts as present only with a non-empty value
pub(crate) fn is_present(found: &FoundInformation, field_name: &str) -> bool {
    found.get(field_name).map_or(false, |value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planning_types::{FieldRequirement, FieldValue, Importance, RequirementCategory};

    fn section(fields: Vec<FieldRequirement>) -> CatalogSection {
        (RequirementCategory::PropertyInfo, fields)
    }

    fn req(field_name: &'static str, importance: Importance) -> FieldRequirement {
        FieldRequirement {
            field_name,
            description: "",
            importance,
        }
    }

    fn found(fields: &[&str]) -> FoundInformation {
        fields
            .iter()
            .map(|f| (f.to_string(), FieldValue::Text("value".into())))
            .collect()
    }

    #[test]
    fn test_empty_catalog_is_vacuously_compliant() {
        assert_eq!(weighted_score(&[], &found(&[])), 100.0);
    }

    #[test]
    fn test_all_fields_present_scores_100() {
        let sections = vec![section(vec![
            req("a", Importance::Critical),
            req("b", Importance::Recommended),
        ])];
        assert_eq!(weighted_score(&sections, &found(&["a", "b"])), 100.0);
    }

    #[test]
    fn test_nothing_found_scores_0() {
        let sections = vec![section(vec![req("a", Importance::Critical)])];
        assert_eq!(weighted_score(&sections, &found(&[])), 0.0);
    }

    #[test]
    fn test_critical_fields_weigh_more_than_recommended() {
        let sections = vec![section(vec![
            req("critical_field", Importance::Critical),
            req("recommended_field", Importance::Recommended),
        ])];
        let missing_critical = weighted_score(&sections, &found(&["recommended_field"]));
        let missing_recommended = weighted_score(&sections, &found(&["critical_field"]));
        assert!(missing_critical < missing_recommended);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let sections = vec![section(vec![req("a", Importance::Critical)])];
        let mut info = FoundInformation::new();
        info.insert("a".to_string(), FieldValue::Text("   ".into()));
        assert_eq!(weighted_score(&sections, &info), 0.0);
    }

    #[test]
    fn test_compliance_uses_the_full_type_catalog() {
        // Base catalog only, nothing found: zero for any type
        assert_eq!(
            compliance_score(DocumentType::Unknown, &found(&[])),
            0.0
        );
        // Finding every base field fully satisfies the unknown catalog
        let all_base = found(&[
            "property_address",
            "parcel_number",
            "lot_size",
            "current_zoning",
            "property_owner",
            "applicant_name",
            "applicant_address",
            "applicant_phone",
            "applicant_email",
            "agent_info",
        ]);
        assert_eq!(compliance_score(DocumentType::Unknown, &all_base), 100.0);
        // The same fields leave a zoning application short of its extensions
        assert!(compliance_score(DocumentType::ZoningApplication, &all_base) < 100.0);
    }

    #[test]
    fn test_confidence_counts_fields_and_caps_at_100() {
        assert_eq!(confidence_score(&found(&[])), 0.0);
        assert_eq!(confidence_score(&found(&["a", "b", "c"])), 30.0);
        let many: Vec<String> = (0..15).map(|i| format!("field_{i}")).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        assert_eq!(confidence_score(&found(&many_refs)), 100.0);
    }
}
