//! Revision 2.0 document

use super::{BaseFields, ComicInfo, ComicInfoV1, Revision};
use crate::encoder::Field;
use crate::error::ValidationError;
use crate::types::{AgeRating, CommunityRating, PagesV1, PagesV2, RatingPrecision};
use crate::validate::Validator;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Fields introduced by revision 2 and kept by 2.1
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision2Fields {
    /// Release day of month
    pub day: i32,

    /// Comma-separated characters appearing in the book
    pub characters: String,

    pub teams: String,

    pub locations: String,

    /// Free text about the scan, e.g. the scanning group
    pub scan_information: String,

    pub story_arc: String,

    /// Group of series, e.g. a publisher's collection line
    pub series_group: String,

    pub age_rating: AgeRating,

    pub pages: PagesV2,

    pub community_rating: Option<CommunityRating>,

    pub main_character_or_team: String,

    pub review: String,
}

impl Revision2Fields {
    /// Characters through StoryArc
    pub(crate) fn push_cast<'a>(&'a self, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("Characters", &self.characters),
            Field::text("Teams", &self.teams),
            Field::text("Locations", &self.locations),
            Field::text("ScanInformation", &self.scan_information),
            Field::text("StoryArc", &self.story_arc),
        ]);
    }

    /// SeriesGroup through Review
    pub(crate) fn push_closing<'a>(&'a self, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("SeriesGroup", &self.series_group),
            Field::text("AgeRating", self.age_rating.as_str()),
            Field::pages("Pages", &self.pages),
            Field::rating("CommunityRating", self.community_rating),
            Field::text("MainCharacterOrTeam", &self.main_character_or_team),
            Field::text("Review", &self.review),
        ]);
    }
}

/// A ComicInfo 2.0 document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicInfoV2 {
    #[serde(flatten)]
    pub base: BaseFields,

    #[serde(flatten)]
    pub extended: Revision2Fields,

    /// Pages in the revision 1 shape. Must stay empty: revision 2 pages go in
    /// `extended.pages`. Use `ComicInfoV2::from(v1)` to convert a revision 1
    /// document including its pages.
    #[serde(skip_serializing_if = "PagesV1::is_empty")]
    pub legacy_pages: PagesV1,
}

impl ComicInfoV2 {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: BaseFields::new(title),
            ..Self::default()
        }
    }

    /// Set year, month and day from a date
    pub fn set_release_date(&mut self, date: &impl Datelike) {
        self.base.set_release_month(date);
        // Datelike::day is 1..=31
        self.extended.day = date.day() as i32;
    }

    /// Validation shared with 2.1, which only differs in rating precision
    pub(crate) fn validate_chain(
        base: &BaseFields,
        legacy_pages: &PagesV1,
        extended: &Revision2Fields,
        validator: &Validator,
        rating_precision: RatingPrecision,
    ) -> Result<(), ValidationError> {
        validator.check_base(base)?;
        validator.check_legacy_pages(legacy_pages)?;
        validator.check_revision2(extended, rating_precision)?;
        Ok(())
    }
}

impl ComicInfo for ComicInfoV2 {
    fn revision(&self) -> Revision {
        Revision::V2
    }

    fn validate_with(&self, validator: &Validator) -> Result<(), ValidationError> {
        Self::validate_chain(
            &self.base,
            &self.legacy_pages,
            &self.extended,
            validator,
            RatingPrecision::TwoDigits,
        )
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::with_capacity(41);
        self.base.push_heading(&mut fields);
        fields.push(Field::integer("Day", self.extended.day));
        self.base.push_creators(&mut fields);
        self.base.push_publishing(&mut fields);
        self.base.push_presentation("Format", &mut fields);
        self.extended.push_cast(&mut fields);
        self.extended.push_closing(&mut fields);
        fields
    }
}

impl From<ComicInfoV1> for ComicInfoV2 {
    fn from(doc: ComicInfoV1) -> Self {
        Self {
            base: doc.base,
            extended: Revision2Fields {
                pages: doc.pages.into(),
                ..Revision2Fields::default()
            },
            legacy_pages: PagesV1::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageType, PageV1, PageV2};
    use chrono::NaiveDate;

    #[test]
    fn test_rating_precision() {
        let mut doc = ComicInfoV2::new("Bone");
        doc.extended.community_rating = Some(CommunityRating::new(4.567));
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::RatingPrecision { digits: 2, .. })
        ));

        doc.extended.community_rating = Some(CommunityRating::new(4.57));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_legacy_pages_must_not_be_set() {
        let mut doc = ComicInfoV2::new("Bone");
        doc.legacy_pages.push(PageV1::new(0, "p001"));
        let err = doc.validate().unwrap_err();
        assert_eq!(err, ValidationError::LegacyPages { count: 1 });
        assert!(err.to_string().contains("legacy pages must not be set"));
    }

    #[test]
    fn test_upgrade_from_v1_moves_pages() {
        let mut v1 = ComicInfoV1::new("Bone");
        v1.pages.push(PageV1::new(0, "cover.jpg").with_type(PageType::FrontCover));
        v1.pages.push(PageV1::new(1, "p001.jpg"));

        let v2 = ComicInfoV2::from(v1);
        assert!(v2.legacy_pages.is_empty());
        assert_eq!(v2.extended.pages.len(), 2);
        assert_eq!(v2.base.title, "Bone");
        assert!(v2.validate().is_ok());
    }

    #[test]
    fn test_release_date() {
        let mut doc = ComicInfoV2::new("Bone");
        doc.set_release_date(&NaiveDate::from_ymd_opt(2004, 2, 29).unwrap());
        assert_eq!((doc.base.year, doc.base.month, doc.extended.day), (2004, 2, 29));
    }

    #[test]
    fn test_field_order_follows_schema() {
        let mut doc = ComicInfoV2::new("Bone");
        doc.base.month = 7;
        doc.extended.day = 1;
        doc.base.writer = "Jeff Smith".to_string();
        doc.base.format = "Digital".to_string();
        doc.extended.pages.push(PageV2::new(0, "p"));
        doc.extended.community_rating = Some(CommunityRating::new(5.0));
        doc.extended.review = "Great".to_string();

        let present: Vec<&str> = doc
            .fields()
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.name)
            .collect();
        assert_eq!(
            present,
            vec!["Title", "Month", "Day", "Writer", "Format", "Pages", "CommunityRating", "Review"]
        );
    }

    #[test]
    fn test_json_document() {
        let doc: ComicInfoV2 = serde_json::from_str(
            r#"{
                "title": "Bone",
                "age_rating": "Everyone 10+",
                "community_rating": 4.5,
                "pages": [{"image": 0, "key": "p0", "bookmark": "Cover", "type": "FrontCover"}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.base.title, "Bone");
        assert_eq!(doc.extended.age_rating, AgeRating::Everyone10Plus);
        assert_eq!(doc.extended.community_rating, Some(CommunityRating::new(4.5)));
        assert_eq!(doc.extended.pages.len(), 1);
        assert!(doc.legacy_pages.is_empty());
    }
}
