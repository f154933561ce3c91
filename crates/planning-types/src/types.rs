//! Shared domain types for planning document review
//!
//! These are the records exchanged between the review engine and its callers.
//! Callers own serialization; every public output type derives serde with the
//! wire names used by the municipal review tooling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planning and zoning document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ZoningApplication,
    BuildingPermit,
    SitePlan,
    EnvironmentalImpact,
    VarianceRequest,
    SubdivisionPlan,
    ConditionalUse,
    Unknown,
}

impl DocumentType {
    /// Stable identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ZoningApplication => "zoning_application",
            DocumentType::BuildingPermit => "building_permit",
            DocumentType::SitePlan => "site_plan",
            DocumentType::EnvironmentalImpact => "environmental_impact",
            DocumentType::VarianceRequest => "variance_request",
            DocumentType::SubdivisionPlan => "subdivision_plan",
            DocumentType::ConditionalUse => "conditional_use",
            DocumentType::Unknown => "unknown",
        }
    }
}

/// Categories grouping required fields for presentation and scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementCategory {
    #[serde(rename = "property_information")]
    PropertyInfo,
    #[serde(rename = "applicant_information")]
    ApplicantInfo,
    #[serde(rename = "project_details")]
    ProjectDetails,
    #[serde(rename = "zoning_compliance")]
    ZoningCompliance,
    #[serde(rename = "environmental_considerations")]
    Environmental,
    #[serde(rename = "infrastructure_requirements")]
    Infrastructure,
    #[serde(rename = "financial_information")]
    Financial,
    #[serde(rename = "legal_documentation")]
    Legal,
}

impl RequirementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::PropertyInfo => "property_information",
            RequirementCategory::ApplicantInfo => "applicant_information",
            RequirementCategory::ProjectDetails => "project_details",
            RequirementCategory::ZoningCompliance => "zoning_compliance",
            RequirementCategory::Environmental => "environmental_considerations",
            RequirementCategory::Infrastructure => "infrastructure_requirements",
            RequirementCategory::Financial => "financial_information",
            RequirementCategory::Legal => "legal_documentation",
        }
    }
}

/// Severity of a required field
///
/// Variants are declared lowest-severity first so the derived `Ord` agrees
/// with severity: `Critical > Important > Recommended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Recommended,
    Important,
    Critical,
}

impl Importance {
    /// Scoring weight. Strictly decreasing with severity, always positive.
    pub fn weight(self) -> u32 {
        match self {
            Importance::Critical => 3,
            Importance::Important => 2,
            Importance::Recommended => 1,
        }
    }
}

/// Static catalog entry: one field a document type must supply
///
/// The owning category is carried by the catalog section, not repeated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirement {
    pub field_name: &'static str,
    pub description: &'static str,
    pub importance: Importance,
}

/// A value extracted from document text
///
/// Pattern-derived fields are single strings; entity-derived fields are
/// grouped lists. Serialized untagged, so callers see a plain string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Whitespace-only text and empty lists count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// Field name to extracted value, in deterministic order
pub type FoundInformation = BTreeMap<String, FieldValue>;

/// Entity categories an external recognizer may supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Organization,
    Location,
    Money,
}

impl EntityKind {
    /// Key under which this entity group lands in found information
    pub fn field_key(self) -> &'static str {
        match self {
            EntityKind::Person => "person_entities",
            EntityKind::Organization => "organization_entities",
            EntityKind::Location => "location_entities",
            EntityKind::Money => "financial_entities",
        }
    }
}

/// Supplementary entity spans from an external recognizer
pub type EntityMap = BTreeMap<EntityKind, Vec<String>>;

/// A required field the document failed to supply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRequirement {
    pub category: RequirementCategory,
    pub field_name: String,
    pub description: String,
    pub importance: Importance,
    pub suggested_source: String,
    pub example_value: Option<String>,
}

/// Complete outcome of one document review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub extracted_text_preview: String,
    pub found_information: FoundInformation,
    pub missing_requirements: Vec<MissingRequirement>,
    pub compliance_score: f64,
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_wire_names_match_as_str() {
        for doc_type in [
            DocumentType::ZoningApplication,
            DocumentType::BuildingPermit,
            DocumentType::SitePlan,
            DocumentType::EnvironmentalImpact,
            DocumentType::VarianceRequest,
            DocumentType::SubdivisionPlan,
            DocumentType::ConditionalUse,
            DocumentType::Unknown,
        ] {
            let wire = serde_json::to_value(doc_type).unwrap();
            assert_eq!(wire, serde_json::Value::String(doc_type.as_str().into()));
        }
    }

    #[test]
    fn test_category_wire_names_match_as_str() {
        for category in [
            RequirementCategory::PropertyInfo,
            RequirementCategory::ApplicantInfo,
            RequirementCategory::ProjectDetails,
            RequirementCategory::ZoningCompliance,
            RequirementCategory::Environmental,
            RequirementCategory::Infrastructure,
            RequirementCategory::Financial,
            RequirementCategory::Legal,
        ] {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, serde_json::Value::String(category.as_str().into()));
        }
    }

    #[test]
    fn test_importance_orders_by_severity() {
        assert!(Importance::Critical > Importance::Important);
        assert!(Importance::Important > Importance::Recommended);
    }

    #[test]
    fn test_importance_weights_strictly_decrease() {
        assert!(Importance::Critical.weight() > Importance::Important.weight());
        assert!(Importance::Important.weight() > Importance::Recommended.weight());
        assert!(Importance::Recommended.weight() > 0);
    }

    #[test]
    fn test_whitespace_text_counts_as_empty() {
        assert!(FieldValue::Text("   ".into()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Text("R-1".into()).is_empty());
        assert!(!FieldValue::List(vec!["John Smith".into()]).is_empty());
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let text = serde_json::to_value(FieldValue::Text("0.25 acres".into())).unwrap();
        assert_eq!(text, serde_json::json!("0.25 acres"));

        let list =
            serde_json::to_value(FieldValue::List(vec!["Shady Cove".into(), "Oregon".into()]))
                .unwrap();
        assert_eq!(list, serde_json::json!(["Shady Cove", "Oregon"]));
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = AnalysisResult {
            document_type: DocumentType::ZoningApplication,
            extracted_text_preview: "ZONING APPLICATION".into(),
            found_information: FoundInformation::from([(
                "current_zoning".to_string(),
                FieldValue::Text("R-1".into()),
            )]),
            missing_requirements: vec![MissingRequirement {
                category: RequirementCategory::PropertyInfo,
                field_name: "parcel_number".into(),
                description: "Tax assessor parcel number".into(),
                importance: Importance::Critical,
                suggested_source: "County assessor records".into(),
                example_value: Some("37-1W-25-1000".into()),
            }],
            compliance_score: 42.5,
            confidence_score: 10.0,
            recommendations: vec!["URGENT: 1 critical requirements are missing.".into()],
            next_steps: vec!["1. Review application for completeness".into()],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
