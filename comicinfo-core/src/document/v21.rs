//! Revision 2.1 draft document

use super::{BaseFields, ComicInfo, ComicInfoV2, Revision, Revision2Fields};
use crate::encoder::Field;
use crate::error::ValidationError;
use crate::types::PagesV1;
use crate::validate::Validator;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A ComicInfo 2.1 (draft) document
///
/// Revision 2 plus translator credit, tags, story arc ordering and GTIN. The
/// rating precision follows [`ValidatorConfig::draft_rating_precision`](crate::ValidatorConfig).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicInfoV21 {
    #[serde(flatten)]
    pub base: BaseFields,

    #[serde(flatten)]
    pub extended: Revision2Fields,

    /// Same rule as [`ComicInfoV2::legacy_pages`]
    #[serde(skip_serializing_if = "PagesV1::is_empty")]
    pub legacy_pages: PagesV1,

    pub translator: String,

    /// Comma-separated tags
    pub tags: String,

    /// Position of the book in each story arc of `StoryArc`, comma-separated
    pub story_arc_number: String,

    /// Global Trade Item Number (ISBN, EAN, UPC, ...)
    pub gtin: String,
}

impl ComicInfoV21 {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: BaseFields::new(title),
            ..Self::default()
        }
    }

    /// Set year, month and day from a date
    pub fn set_release_date(&mut self, date: &impl Datelike) {
        self.base.set_release_month(date);
        self.extended.day = date.day() as i32;
    }
}

impl ComicInfo for ComicInfoV21 {
    fn revision(&self) -> Revision {
        Revision::V2_1Draft
    }

    fn validate_with(&self, validator: &Validator) -> Result<(), ValidationError> {
        ComicInfoV2::validate_chain(
            &self.base,
            &self.legacy_pages,
            &self.extended,
            validator,
            validator.config().draft_rating_precision,
        )
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::with_capacity(45);
        self.base.push_heading(&mut fields);
        fields.push(Field::integer("Day", self.extended.day));
        self.base.push_creators(&mut fields);
        fields.push(Field::text("Translator", &self.translator));
        self.base.push_publishing(&mut fields);
        fields.push(Field::text("Tags", &self.tags));
        self.base.push_presentation("format", &mut fields);
        self.extended.push_cast(&mut fields);
        fields.push(Field::text("StoryArcNumber", &self.story_arc_number));
        self.extended.push_closing(&mut fields);
        fields.push(Field::text("GTIN", &self.gtin));
        fields
    }
}

impl From<ComicInfoV2> for ComicInfoV21 {
    fn from(doc: ComicInfoV2) -> Self {
        Self {
            base: doc.base,
            extended: doc.extended,
            legacy_pages: doc.legacy_pages,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::types::{CommunityRating, RatingPrecision};

    fn rated(value: f64) -> ComicInfoV21 {
        let mut doc = ComicInfoV21::new("Bone");
        doc.extended.community_rating = Some(CommunityRating::new(value));
        doc
    }

    #[test]
    fn test_default_precision_is_two_digits() {
        assert!(rated(4.55).validate().is_ok());
        assert!(rated(4.555).validate().is_err());
    }

    #[test]
    fn test_one_digit_precision_when_configured() {
        let validator = Validator::with_config(
            ValidatorConfig::default().with_draft_rating_precision(RatingPrecision::OneDigit),
        );
        assert!(rated(4.5).validate_with(&validator).is_ok());
        assert_eq!(
            rated(4.55).validate_with(&validator),
            Err(ValidationError::RatingPrecision {
                value: 4.55,
                digits: 1
            })
        );
    }

    #[test]
    fn test_additions_are_placed_by_schema_order() {
        let mut doc = ComicInfoV21::new("Bone");
        doc.base.editor = "E".to_string();
        doc.translator = "T".to_string();
        doc.base.genre = "Fantasy".to_string();
        doc.tags = "funny".to_string();
        doc.base.format = "HC".to_string();
        doc.extended.story_arc = "Arc".to_string();
        doc.story_arc_number = "1".to_string();
        doc.gtin = "9781888963144".to_string();

        let present: Vec<&str> = doc
            .fields()
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.name)
            .collect();
        assert_eq!(
            present,
            vec![
                "Title",
                "Editor",
                "Translator",
                "Genre",
                "Tags",
                "format",
                "StoryArc",
                "StoryArcNumber",
                "GTIN"
            ]
        );
    }

    #[test]
    fn test_upgrade_keeps_legacy_pages_rule() {
        let mut v2 = ComicInfoV2::new("Bone");
        v2.legacy_pages.push(crate::types::PageV1::new(0, "p"));
        let v21 = ComicInfoV21::from(v2);
        assert!(matches!(
            v21.validate(),
            Err(ValidationError::LegacyPages { count: 1 })
        ));
    }
}
