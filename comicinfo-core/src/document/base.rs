//! Fields every ComicInfo revision carries

use crate::encoder::Field;
use crate::types::{Manga, YesNo};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Bibliographic fields common to revisions 1, 2 and 2.1
///
/// Zero numbers and empty strings mean "not set" and are left out of the
/// encoded document. Creator fields hold one name, or several separated by
/// commas, since the schema allows each creator element only once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseFields {
    /// Title of the book
    pub title: String,

    /// Title of the series the book is part of
    pub series: String,

    /// Number of the book in the series
    pub number: i32,

    /// Total number of books in the series
    pub count: i32,

    /// Volume containing the book, by number (1, 2, 3) or by year (2018, 2020)
    pub volume: i32,

    /// Alternate series for cross-over story arcs
    pub alternate_series: String,

    pub alternate_number: i32,

    pub alternate_count: i32,

    pub summary: String,

    /// Free text, usually the application that produced the file
    pub notes: String,

    /// Release year
    pub year: i32,

    /// Release month
    pub month: i32,

    pub writer: String,
    pub penciller: String,
    pub inker: String,
    pub colorist: String,
    pub letterer: String,
    pub cover_artist: String,
    pub editor: String,

    pub publisher: String,

    /// Group of publications under a publisher, e.g. Vertigo under DC Comics
    pub imprint: String,

    /// Comma-separated genres
    pub genre: String,

    /// Space-separated URLs
    pub web: String,

    pub page_count: i32,

    /// Language tag, e.g. [`LANGUAGE_ENGLISH`](crate::LANGUAGE_ENGLISH)
    pub language_iso: String,

    /// Binding or presentation format: "TBP", "HC", "Web", "Digital", ...
    pub format: String,

    pub black_and_white: YesNo,

    pub manga: Manga,
}

impl BaseFields {
    /// Create base fields with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the release year and month from a date
    pub fn set_release_month(&mut self, date: &impl Datelike) {
        self.year = date.year();
        // Datelike::month is 1..=12
        self.month = date.month() as i32;
    }

    pub(crate) fn push_heading<'a>(&'a self, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("Title", &self.title),
            Field::text("Series", &self.series),
            Field::integer("Number", self.number),
            Field::integer("Count", self.count),
            Field::integer("Volume", self.volume),
            Field::text("AlternateSeries", &self.alternate_series),
            Field::integer("AlternateNumber", self.alternate_number),
            Field::integer("AlternateCount", self.alternate_count),
            Field::text("Summary", &self.summary),
            Field::text("Notes", &self.notes),
            Field::integer("Year", self.year),
            Field::integer("Month", self.month),
        ]);
    }

    pub(crate) fn push_creators<'a>(&'a self, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("Writer", &self.writer),
            Field::text("Penciller", &self.penciller),
            Field::text("Inker", &self.inker),
            Field::text("Colorist", &self.colorist),
            Field::text("Letterer", &self.letterer),
            Field::text("CoverArtist", &self.cover_artist),
            Field::text("Editor", &self.editor),
        ]);
    }

    /// Publisher, Imprint and Genre
    pub(crate) fn push_publishing<'a>(&'a self, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("Publisher", &self.publisher),
            Field::text("Imprint", &self.imprint),
            Field::text("Genre", &self.genre),
        ]);
    }

    /// Web through Manga; `format_name` differs between revisions
    pub(crate) fn push_presentation<'a>(&'a self, format_name: &'static str, out: &mut Vec<Field<'a>>) {
        out.extend([
            Field::text("Web", &self.web),
            Field::integer("PageCount", self.page_count),
            Field::text("LanguageISO", &self.language_iso),
            Field::text(format_name, &self.format),
            Field::text("BlackAndWhite", self.black_and_white.as_str()),
            Field::text("Manga", self.manga.as_str()),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_release_month_from_date() {
        let mut base = BaseFields::new("Bone #1");
        let date = NaiveDate::from_ymd_opt(1991, 7, 15).unwrap();
        base.set_release_month(&date);
        assert_eq!(base.year, 1991);
        assert_eq!(base.month, 7);
    }

    #[test]
    fn test_json_uses_defaults_for_missing_fields() {
        let base: BaseFields =
            serde_json::from_str(r#"{"title": "Bone", "manga": "No"}"#).unwrap();
        assert_eq!(base.title, "Bone");
        assert_eq!(base.manga, Manga::No);
        assert_eq!(base.black_and_white, YesNo::Unspecified);
        assert_eq!(base.number, 0);
    }

    #[test]
    fn test_json_rejects_unknown_flag() {
        let err = serde_json::from_str::<BaseFields>(r#"{"black_and_white": "Grey"}"#).unwrap_err();
        assert!(err.to_string().contains("BlackAndWhite"));
    }
}
