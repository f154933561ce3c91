//! Required-information catalog per document type
//!
//! Property and applicant sections apply to every document type. Types with
//! dedicated review tracks append their own sections on top; the composition
//! is a union, never an override. The section order here is the canonical
//! catalog order consumed by the missing-requirement walk.

use planning_types::{DocumentType, FieldRequirement, Importance, RequirementCategory};

/// One catalog section: a category and its ordered field list
pub type CatalogSection = (RequirementCategory, Vec<FieldRequirement>);

const fn req(
    field_name: &'static str,
    description: &'static str,
    importance: Importance,
) -> FieldRequirement {
    FieldRequirement {
        field_name,
        description,
        importance,
    }
}

fn base_sections() -> Vec<CatalogSection> {
    vec![
        (
            RequirementCategory::PropertyInfo,
            vec![
                req(
                    "property_address",
                    "Complete property address",
                    Importance::Critical,
                ),
                req(
                    "parcel_number",
                    "Tax assessor parcel number",
                    Importance::Critical,
                ),
                req(
                    "lot_size",
                    "Total lot size in square feet or acres",
                    Importance::Critical,
                ),
                req(
                    "current_zoning",
                    "Current zoning designation",
                    Importance::Critical,
                ),
                req(
                    "property_owner",
                    "Legal property owner name",
                    Importance::Important,
                ),
            ],
        ),
        (
            RequirementCategory::ApplicantInfo,
            vec![
                req("applicant_name", "Full name of applicant", Importance::Critical),
                req(
                    "applicant_address",
                    "Applicant mailing address",
                    Importance::Important,
                ),
                req(
                    "applicant_phone",
                    "Contact phone number",
                    Importance::Important,
                ),
                req("applicant_email", "Email address", Importance::Recommended),
                req(
                    "agent_info",
                    "Authorized agent information if applicable",
                    Importance::Recommended,
                ),
            ],
        ),
    ]
}

/// Full ordered catalog for a document type
///
/// Pure function of the type; repeated calls return identical sections.
pub fn requirements(doc_type: DocumentType) -> Vec<CatalogSection> {
    let mut sections = base_sections();

    match doc_type {
        DocumentType::ZoningApplication => {
            sections.push((
                RequirementCategory::ProjectDetails,
                vec![
                    req(
                        "proposed_use",
                        "Detailed description of proposed use",
                        Importance::Critical,
                    ),
                    req(
                        "building_height",
                        "Maximum building height",
                        Importance::Critical,
                    ),
                    req(
                        "building_footprint",
                        "Building footprint area",
                        Importance::Critical,
                    ),
                    req(
                        "setbacks",
                        "Front, rear, and side setbacks",
                        Importance::Critical,
                    ),
                    req(
                        "parking_spaces",
                        "Number of parking spaces provided",
                        Importance::Important,
                    ),
                    req(
                        "landscaping_plan",
                        "Landscaping and green space plan",
                        Importance::Important,
                    ),
                ],
            ));
            sections.push((
                RequirementCategory::ZoningCompliance,
                vec![
                    req(
                        "density_calculation",
                        "Dwelling units per acre calculation",
                        Importance::Critical,
                    ),
                    req(
                        "floor_area_ratio",
                        "Floor area ratio compliance",
                        Importance::Important,
                    ),
                    req(
                        "open_space_ratio",
                        "Required open space percentage",
                        Importance::Important,
                    ),
                ],
            ));
        }
        DocumentType::BuildingPermit => {
            sections.push((
                RequirementCategory::ProjectDetails,
                vec![
                    req(
                        "construction_type",
                        "Type of construction (new, addition, renovation)",
                        Importance::Critical,
                    ),
                    req(
                        "building_value",
                        "Estimated construction value",
                        Importance::Critical,
                    ),
                    req(
                        "square_footage",
                        "Total square footage",
                        Importance::Critical,
                    ),
                    req(
                        "number_of_stories",
                        "Number of stories",
                        Importance::Important,
                    ),
                    req(
                        "occupancy_type",
                        "Building occupancy classification",
                        Importance::Critical,
                    ),
                ],
            ));
            sections.push((
                RequirementCategory::Infrastructure,
                vec![
                    req(
                        "water_connection",
                        "Water service connection details",
                        Importance::Critical,
                    ),
                    req(
                        "sewer_connection",
                        "Sewer service connection details",
                        Importance::Critical,
                    ),
                    req(
                        "electrical_service",
                        "Electrical service requirements",
                        Importance::Important,
                    ),
                ],
            ));
        }
        // Types without a dedicated review track carry the base catalog only
        DocumentType::SitePlan
        | DocumentType::EnvironmentalImpact
        | DocumentType::VarianceRequest
        | DocumentType::SubdivisionPlan
        | DocumentType::ConditionalUse
        | DocumentType::Unknown => {}
    }

    sections
}
