//! Ordered extraction patterns per document field
//!
//! Pattern order is semantic: the most specific, labeled form comes first and
//! generic fallbacks come last. The extractor stops at the first pattern that
//! produces a non-empty value, so reordering a list changes behavior.
//!
//! All patterns compile case-insensitively. The regex engine matches in
//! linear time and every pattern is bounded (single-line captures, finite
//! repetition), so arbitrarily large inputs stay safe to scan.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Default extraction rules: field name and its ordered pattern sources
pub const DEFAULT_FIELD_RULES: &[(&str, &[&str])] = &[
    (
        "property_address",
        &[
            r"\b\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Way|Circle|Cir|Court|Ct)\b",
            r"(?:Property|Site|Location)(?:\s+Address)?:\s*([^\n]+)",
            r"Address:\s*([^\n]+)",
        ],
    ),
    (
        "parcel_number",
        &[
            r"(?:Parcel|Tax|Assessor)(?:\s+(?:Number|ID|#))?:\s*([A-Z0-9\-]+)",
            r"APN:\s*([A-Z0-9\-]+)",
            r"\b\d{2,3}-\d{2,3}-\d{2,3}\b",
        ],
    ),
    (
        "lot_size",
        &[
            r"(?:Lot|Site)\s+Size:\s*([\d,]+\.?\d*)\s*(?:sq\.?\s*ft\.?|square\s+feet|acres?)",
            r"([\d,]+\.?\d*)\s*(?:sq\.?\s*ft\.?|square\s+feet|acres?)",
            r"Area:\s*([\d,]+\.?\d*)\s*(?:sq\.?\s*ft\.?|square\s+feet|acres?)",
        ],
    ),
    (
        "current_zoning",
        &[
            r"(?:Current\s+)?Zoning:\s*([A-Z0-9\-]+)",
            r"Zone:\s*([A-Z0-9\-]+)",
            r"Zoned\s+([A-Z0-9\-]+)",
        ],
    ),
    (
        "applicant_name",
        &[
            r"Applicant:\s*([A-Za-z\s,\.]+)",
            r"Name:\s*([A-Za-z\s,\.]+)",
            r"Applied\s+by:\s*([A-Za-z\s,\.]+)",
        ],
    ),
    (
        "proposed_use",
        &[
            r"Proposed\s+Use:\s*([^\n]+)",
            r"Project\s+Description:\s*([^\n]+)",
            r"Use:\s*([^\n]+)",
        ],
    ),
    (
        "building_height",
        &[
            r"(?:Building\s+)?Height:\s*([\d\.]+)\s*(?:feet|ft\.?|')",
            r"([\d\.]+)\s*(?:feet|ft\.?|')\s*(?:high|height)",
            r"Maximum\s+Height:\s*([\d\.]+)\s*(?:feet|ft\.?|')",
        ],
    ),
    (
        "construction_type",
        &[
            r"Construction\s+Type:\s*([^\n]+)",
            r"Type\s+of\s+Construction:\s*([^\n]+)",
        ],
    ),
    (
        "building_value",
        &[
            r"(?:Building|Construction|Project)\s+Value:\s*\$?\s*([\d,]+\.?\d*)",
            r"(?:Estimated\s+(?:Cost|Value)|Valuation):\s*\$?\s*([\d,]+\.?\d*)",
        ],
    ),
    (
        "square_footage",
        &[
            r"(?:Total\s+)?Square\s+Footage:\s*([\d,]+\.?\d*)",
            r"Floor\s+Area:\s*([\d,]+\.?\d*)\s*(?:sq\.?\s*ft\.?|square\s+feet)",
        ],
    ),
    (
        "applicant_phone",
        &[
            r"(?:Phone|Telephone)(?:\s+(?:Number|No\.?))?:\s*([\(\)\d\s\-\.]{7,20})",
            r"\(\d{3}\)\s*\d{3}[\-\.]\d{4}",
        ],
    ),
    (
        "applicant_email",
        &[
            r"(?:E-?mail|Email\s+Address):\s*([A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})",
            r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b",
        ],
    ),
];

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled patterns for one field, in precedence order
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    pub field: String,
    pub patterns: Vec<Regex>,
}

/// Immutable, compiled extraction table
#[derive(Debug, Clone)]
pub struct PatternSet {
    fields: Vec<FieldPatterns>,
}

impl PatternSet {
    /// Compile a rule table, preserving field and pattern order
    pub fn compile(rules: &[(&str, &[&str])]) -> Result<Self, PatternError> {
        let mut fields = Vec::with_capacity(rules.len());
        for (field, sources) in rules {
            let mut patterns = Vec::with_capacity(sources.len());
            for source in *sources {
                let regex = RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| PatternError::InvalidPattern {
                        field: (*field).to_string(),
                        source: err,
                    })?;
                patterns.push(regex);
            }
            fields.push(FieldPatterns {
                field: (*field).to_string(),
                patterns,
            });
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldPatterns] {
        &self.fields
    }
}

lazy_static! {
    /// Default table, compiled once per process
    pub static ref DEFAULT_PATTERNS: PatternSet =
        PatternSet::compile(DEFAULT_FIELD_RULES).expect("default field patterns compile");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_compile() {
        let set = PatternSet::compile(DEFAULT_FIELD_RULES).unwrap();
        assert_eq!(set.fields().len(), DEFAULT_FIELD_RULES.len());
    }

    #[test]
    fn test_compile_preserves_field_and_pattern_order() {
        let rules: &[(&str, &[&str])] = &[("first", &[r"a", r"b"]), ("second", &[r"c"])];
        let set = PatternSet::compile(rules).unwrap();
        assert_eq!(set.fields()[0].field, "first");
        assert_eq!(set.fields()[0].patterns.len(), 2);
        assert_eq!(set.fields()[1].field, "second");
    }

    #[test]
    fn test_invalid_pattern_names_the_field() {
        let rules: &[(&str, &[&str])] = &[("broken", &[r"("])];
        let err = PatternSet::compile(rules).unwrap_err();
        match err {
            PatternError::InvalidPattern { field, .. } => assert_eq!(field, "broken"),
        }
    }

    #[test]
    fn test_default_patterns_are_case_insensitive() {
        let set = &*DEFAULT_PATTERNS;
        let zoning = set
            .fields()
            .iter()
            .find(|f| f.field == "current_zoning")
            .unwrap();
        assert!(zoning.patterns[0].is_match("CURRENT ZONING: r-1"));
    }
}
