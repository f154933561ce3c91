//! Review a plain-text planning document and print the findings
//!
//! Usage: cargo run -p review-engine --example review_document -- <document.txt>

use anyhow::{Context, Result};
use planning_types::FieldValue;
use review_engine::ReviewEngine;
use std::env;
use std::fs;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .context("Usage: review_document <document.txt>")?;

    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;

    let engine = ReviewEngine::new();
    let result = engine.analyze(&text);

    println!("Document type:    {}", result.document_type.as_str());
    println!("Compliance score: {:.1}", result.compliance_score);
    println!("Confidence score: {:.1}", result.confidence_score);

    println!("\nFound information:");
    for (field, value) in &result.found_information {
        match value {
            FieldValue::Text(text) => println!("  {field}: {text}"),
            FieldValue::List(items) => println!("  {field}: {}", items.join(", ")),
        }
    }

    println!("\nMissing requirements:");
    for req in &result.missing_requirements {
        println!(
            "  [{:?}] {}: {} (Source: {})",
            req.importance, req.field_name, req.description, req.suggested_source
        );
    }

    println!("\nRecommendations:");
    for line in &result.recommendations {
        println!("  {line}");
    }

    println!("\nNext steps:");
    for step in &result.next_steps {
        println!("  {step}");
    }

    Ok(())
}
