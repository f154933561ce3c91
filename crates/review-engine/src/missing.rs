//! Missing-requirement identification
//!
//! Walks the type's catalog in canonical order (section order, then field
//! order) and materializes one record per absent or empty field. This module
//! owns that ordering; downstream recommendation rollups rely on it.

use crate::catalog;
use crate::scoring::is_present;
use planning_types::{DocumentType, FoundInformation, MissingRequirement};

/// Catalog fields the document failed to supply, in catalog order
pub fn identify(doc_type: DocumentType, found: &FoundInformation) -> Vec<MissingRequirement> {
    let mut missing = Vec::new();

    for (category, fields) in catalog::requirements(doc_type) {
        for requirement in fields {
            if is_present(found, requirement.field_name) {
                continue;
            }
            missing.push(MissingRequirement {
                category,
                field_name: requirement.field_name.to_string(),
                description: requirement.description.to_string(),
                importance: requirement.importance,
                suggested_source: suggested_source(requirement.field_name).to_string(),
                example_value: example_value(requirement.field_name).map(str::to_string),
            });
        }
    }

    missing
}

/// Where an applicant can obtain a missing field
pub fn suggested_source(field_name: &str) -> &'static str {
    match field_name {
        "property_address" => "Property deed or tax records",
        "parcel_number" => "County assessor records",
        "lot_size" => "Survey or property deed",
        "current_zoning" => "Municipal zoning map",
        "applicant_name" | "applicant_address" | "applicant_phone" | "applicant_email" => {
            "Application form"
        }
        "proposed_use" => "Project description document",
        "building_height" => "Architectural plans",
        "building_footprint" => "Site plan or architectural drawings",
        "setbacks" => "Site plan with measurements",
        "parking_spaces" => "Site plan or parking analysis",
        "construction_type" => "Building plans and specifications",
        "building_value" => "Construction cost estimate",
        "square_footage" => "Architectural plans",
        _ => "Additional documentation required",
    }
}

/// Illustrative value for a missing field, if one is defined
pub fn example_value(field_name: &str) -> Option<&'static str> {
    match field_name {
        "property_address" => Some("123 Main Street, Shady Cove, OR 97520"),
        "parcel_number" => Some("37-1W-25-1000"),
        "lot_size" => Some("0.25 acres (10,890 sq ft)"),
        "current_zoning" => Some("R-1 (Single Family Residential)"),
        "applicant_name" => Some("John Smith"),
        "applicant_phone" => Some("(541) 555-0123"),
        "applicant_email" => Some("john.smith@email.com"),
        "proposed_use" => Some("Single-family residence with detached garage"),
        "building_height" => Some("28 feet"),
        "building_footprint" => Some("2,400 square feet"),
        "setbacks" => Some("Front: 25ft, Rear: 20ft, Side: 10ft"),
        "parking_spaces" => Some("2 covered spaces in garage"),
        _ => None,
    }
}
