//! Generate command implementation

use super::input::{load_document, validator};
use anyhow::{Context, Result};
use comicinfo_core::{
    encoder, write_comicinfo_file_with, ComicInfo, ComicInfoError, RatingPrecision, Revision,
};
use std::fs;
use std::io;
use std::path::Path;

/// Generate ComicInfo.xml from a JSON description
pub fn generate(
    input: &str,
    output: Option<&str>,
    revision: Revision,
    draft_rating_digits: Option<RatingPrecision>,
) -> Result<()> {
    let loaded = load_document(input, revision)?;
    let validator = validator(draft_rating_digits);
    loaded
        .check(&validator)
        .map_err(ComicInfoError::from)
        .with_context(|| format!("Failed to generate ComicInfo {} XML", revision))?;
    let doc = loaded.doc;

    let Some(output) = output else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        encoder::encode(&doc, &validator, &mut handle)
            .with_context(|| format!("Failed to generate ComicInfo {} XML", revision))?;
        return Ok(());
    };

    let output_path = Path::new(output);
    let written = if output_path.is_dir() {
        write_comicinfo_file_with(&doc, output_path, &validator)
            .with_context(|| format!("Failed to write ComicInfo.xml into {}", output))?
    } else {
        let xml = encoder::to_xml(&doc, &validator)
            .with_context(|| format!("Failed to generate ComicInfo {} XML", revision))?;
        fs::write(output_path, xml)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        output_path.to_path_buf()
    };

    tracing::info!(
        "Generated ComicInfo {} for '{}' -> {}",
        doc.revision(),
        doc.base().title,
        written.display()
    );

    Ok(())
}
