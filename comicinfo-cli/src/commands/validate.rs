//! Validate command implementation

use super::input::{load_document, validator};
use anyhow::{bail, Result};
use comicinfo_core::{RatingPrecision, Revision};
use serde::Serialize;

/// Validation report output
#[derive(Serialize)]
struct ValidationReport {
    input: String,
    revision: String,
    title: String,
    pages: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validate a JSON description against the rules of a revision
pub fn validate(
    input: &str,
    revision: Revision,
    draft_rating_digits: Option<RatingPrecision>,
    json: bool,
) -> Result<()> {
    let loaded = load_document(input, revision)?;
    let outcome = loaded.check(&validator(draft_rating_digits));
    let doc = &loaded.doc;

    let report = ValidationReport {
        input: input.to_string(),
        revision: revision.as_str().to_string(),
        title: doc.base().title.clone(),
        pages: doc.page_count(),
        valid: outcome.is_ok(),
        field: outcome.as_ref().err().map(|e| e.field()),
        value: outcome.as_ref().err().map(|e| e.value()),
        error: outcome.as_ref().err().map(|e| e.to_string()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Err(e) = &outcome {
        eprintln!("Invalid ComicInfo {} document: {}", revision, e);
    } else {
        println!("Valid ComicInfo {} document", revision);
        println!("  Title: {}", report.title);
        println!("  Pages: {}", report.pages);
    }

    if !report.valid {
        bail!("Validation failed for {}", input);
    }
    Ok(())
}
