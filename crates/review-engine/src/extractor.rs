//! Field extraction from raw document text
//!
//! For each field the compiled patterns are tried in order; the first pattern
//! producing a non-empty value wins and no further patterns are consulted.
//! A match whose trimmed value is empty does not count, so an empty value is
//! never stored. Supplementary entity spans fill keys the patterns did not
//! claim; pattern output always takes precedence.

use crate::patterns::PatternSet;
use planning_types::{EntityMap, FieldValue, FoundInformation};

/// Run the pattern table over the text
pub fn extract(patterns: &PatternSet, text: &str) -> FoundInformation {
    let mut found = FoundInformation::new();

    for field in patterns.fields() {
        for regex in &field.patterns {
            let Some(caps) = regex.captures(text) else {
                continue;
            };
            // First capture group if the pattern has one, whole match otherwise
            let value = match caps.get(1) {
                Some(group) => group.as_str(),
                None => caps.get(0).map_or("", |whole| whole.as_str()),
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            found.insert(field.field.clone(), FieldValue::Text(value.to_string()));
            break;
        }
    }

    found
}

/// Merge entity spans from an external recognizer into found information
///
/// Only keys absent from the map are filled; empty groups are ignored.
pub fn merge_entities(found: &mut FoundInformation, entities: &EntityMap) {
    for (kind, values) in entities {
        if values.is_empty() {
            continue;
        }
        found
            .entry(kind.field_key().to_string())
            .or_insert_with(|| FieldValue::List(values.clone()));
    }
}
