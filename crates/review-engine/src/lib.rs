//! Requirements compliance engine for planning and zoning documents
//!
//! Takes the raw text of a planning document, determines what kind of
//! application it is, extracts the structured facts it can find, and reports
//! which required information is still missing, with a weighted compliance
//! score and prioritized guidance.
//!
//! The engine is a stateless, immutable service object: pattern tables are
//! compiled at construction and never mutated, so a single instance can be
//! shared freely across threads. Text extraction (PDF, OCR) and entity
//! recognition are external collaborators; the engine only consumes their
//! output.

pub mod catalog;
pub mod classifier;
pub mod extractor;
pub mod missing;
pub mod patterns;
pub mod recommend;
pub mod scoring;

use patterns::{PatternSet, DEFAULT_PATTERNS};
use planning_types::{AnalysisResult, DocumentType, EntityMap, FoundInformation};
use tracing::{debug, info, warn};

/// Characters of input carried into the result preview
const PREVIEW_CHARS: usize = 1000;

/// Document review engine
pub struct ReviewEngine {
    patterns: PatternSet,
}

impl ReviewEngine {
    /// Engine with the default pattern table
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Engine with a caller-supplied pattern table
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Review a document without supplementary entity input
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_with_entities(text, &EntityMap::new())
    }

    /// Review a document, folding in entity spans from an external recognizer
    pub fn analyze_with_entities(&self, text: &str, entities: &EntityMap) -> AnalysisResult {
        if text.trim().is_empty() {
            warn!("no text available for analysis");
            return empty_input_result();
        }

        let document_type = classifier::classify(text);
        info!(document_type = document_type.as_str(), "classified document");

        let mut found = extractor::extract(&self.patterns, text);
        extractor::merge_entities(&mut found, entities);
        debug!(found_fields = found.len(), "extraction complete");

        let missing_requirements = missing::identify(document_type, &found);
        let compliance_score = scoring::compliance_score(document_type, &found);
        let confidence_score = scoring::confidence_score(&found);
        debug!(
            missing = missing_requirements.len(),
            compliance_score, "scored document"
        );

        let recommendations = recommend::recommendations(&missing_requirements);
        let next_steps = recommend::next_steps(document_type, &missing_requirements);

        AnalysisResult {
            document_type,
            extracted_text_preview: preview(text),
            found_information: found,
            missing_requirements,
            compliance_score,
            confidence_score,
            recommendations,
            next_steps,
        }
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal result for empty or whitespace-only input
fn empty_input_result() -> AnalysisResult {
    AnalysisResult {
        document_type: DocumentType::Unknown,
        extracted_text_preview: String::new(),
        found_information: FoundInformation::new(),
        missing_requirements: Vec::new(),
        compliance_score: 0.0,
        confidence_score: 0.0,
        recommendations: vec!["Unable to extract text from document".to_string()],
        next_steps: vec!["Verify document format and try again".to_string()],
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
