//! Loading JSON document descriptions
//!
//! Vocabulary fields are staged as raw strings before the document is
//! deserialized, so an unknown token is reported in rule order (after `Web`
//! and `LanguageISO`) instead of aborting the parse.

use anyhow::{Context, Result};
use comicinfo_core::{
    AgeRating, AnyComicInfo, ComicInfo, Manga, PageType, RatingPrecision, Revision,
    ValidationError, Validator, ValidatorConfig, YesNo,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A parsed document plus the vocabulary errors found while staging it
#[derive(Debug)]
pub struct LoadedDocument {
    pub doc: AnyComicInfo,
    vocabulary: Option<ValidationError>,
    page_types: Option<ValidationError>,
}

impl LoadedDocument {
    /// Parse a JSON description of a document of the given revision
    pub fn from_json(revision: Revision, json: &str) -> serde_json::Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;
        let mut vocabulary = None;
        let mut page_types = None;

        if let Value::Object(object) = &mut value {
            vocabulary = stage::<YesNo>(object, "black_and_white")
                .or(stage::<Manga>(object, "manga"));
            if revision != Revision::V1 {
                let age_rating = stage::<AgeRating>(object, "age_rating");
                vocabulary = vocabulary.or(age_rating);
                // Any legacy page already fails the document, whatever its type
                stage_page_types(object, "legacy_pages");
            }
            page_types = stage_page_types(object, "pages");
        }

        let doc = match revision {
            Revision::V1 => AnyComicInfo::V1(serde_json::from_value(value)?),
            Revision::V2 => AnyComicInfo::V2(serde_json::from_value(value)?),
            Revision::V2_1Draft => AnyComicInfo::V2_1(serde_json::from_value(value)?),
        };
        Ok(Self {
            doc,
            vocabulary,
            page_types,
        })
    }

    /// Check every rule, reporting the first failure in rule order
    pub fn check(&self, validator: &Validator) -> std::result::Result<(), ValidationError> {
        validator.check_base(self.doc.base())?;
        if let Some(err) = &self.vocabulary {
            return Err(err.clone());
        }
        match &self.doc {
            AnyComicInfo::V1(_) => {}
            AnyComicInfo::V2(doc) => validator.check_legacy_pages(&doc.legacy_pages)?,
            AnyComicInfo::V2_1(doc) => validator.check_legacy_pages(&doc.legacy_pages)?,
        }
        if let Some(err) = &self.page_types {
            return Err(err.clone());
        }
        self.doc.validate_with(validator)
    }
}

/// Blank out `key` when it holds an unknown token, returning the error
fn stage<T>(object: &mut Map<String, Value>, key: &str) -> Option<ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    let Some(Value::String(token)) = object.get(key) else {
        return None;
    };
    let err = token.parse::<T>().err()?;
    object.insert(key.to_string(), Value::String(String::new()));
    Some(err)
}

/// Reset unknown page roles to the default, returning the first error
fn stage_page_types(object: &mut Map<String, Value>, key: &str) -> Option<ValidationError> {
    let Some(Value::Array(pages)) = object.get_mut(key) else {
        return None;
    };
    let mut first = None;
    for page in pages.iter_mut() {
        let Value::Object(page) = page else {
            continue;
        };
        let Some(err) = stage::<PageType>(page, "type") else {
            continue;
        };
        page.insert("type".to_string(), Value::String(PageType::default().to_string()));
        first = first.or(Some(err));
    }
    first
}

/// Read a JSON description of a document of the given revision
pub fn load_document(input: &str, revision: Revision) -> Result<LoadedDocument> {
    let input_path = Path::new(input);
    let json = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to open input file: {}", input))?;

    let loaded = LoadedDocument::from_json(revision, &json)
        .with_context(|| format!("Failed to parse {} as a {} document", input, revision))?;

    tracing::debug!(
        "Loaded '{}' ({}, {} pages)",
        loaded.doc.base().title,
        loaded.doc.revision(),
        loaded.doc.page_count()
    );
    Ok(loaded)
}

/// Build a validator from the environment, with the command line taking precedence
pub fn validator(draft_rating_digits: Option<RatingPrecision>) -> Validator {
    let mut config = ValidatorConfig::from_env();
    if let Some(precision) = draft_rating_digits {
        config = config.with_draft_rating_precision(precision);
    }
    Validator::with_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_error(revision: Revision, json: &str) -> Option<ValidationError> {
        let loaded = LoadedDocument::from_json(revision, json).unwrap();
        loaded.check(&Validator::default()).err()
    }

    #[test]
    fn test_url_reported_before_vocabulary() {
        let err = first_error(
            Revision::V2,
            r#"{"title": "Bone", "web": "http://x.com:99999", "manga": "Sideways"}"#,
        )
        .unwrap();
        assert_eq!(err.field(), "Web");
    }

    #[test]
    fn test_language_reported_before_vocabulary() {
        let err = first_error(
            Revision::V1,
            r#"{"title": "Bone", "language_iso": "english", "black_and_white": "Grey"}"#,
        )
        .unwrap();
        assert_eq!(err.field(), "LanguageISO");
    }

    #[test]
    fn test_vocabulary_reported_before_pages_and_rating() {
        let err = first_error(
            Revision::V2,
            r#"{"age_rating": "Everyone 12+", "community_rating": 9.0,
                "pages": [{"key": "a"}, {"key": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(
            err,
            ValidationError::UnknownValue {
                field: "AgeRating",
                value: "Everyone 12+".to_string(),
            }
        );
    }

    #[test]
    fn test_black_and_white_checked_before_manga() {
        let err = first_error(
            Revision::V1,
            r#"{"black_and_white": "Grey", "manga": "Sideways"}"#,
        )
        .unwrap();
        assert_eq!(err.field(), "BlackAndWhite");
    }

    #[test]
    fn test_page_type_reported_with_pages() {
        let err = first_error(
            Revision::V2,
            r#"{"pages": [{"key": "a"}, {"key": "b", "type": "Poster"}], "community_rating": 9.0}"#,
        )
        .unwrap();
        assert_eq!(err.field(), "Type");
        assert_eq!(err.value(), "Poster");
    }

    #[test]
    fn test_valid_tokens_pass_through() {
        let json = r#"{"manga": "YesAndRightToLeft", "pages": [{"key": "a", "type": "FrontCover"}]}"#;
        let loaded = LoadedDocument::from_json(Revision::V2, json).unwrap();
        assert!(loaded.check(&Validator::default()).is_ok());
        assert!(loaded.doc.base().manga.is_right_to_left());
    }
}
