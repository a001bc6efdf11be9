//! ComicInfo Core Library
//!
//! This crate builds `ComicInfo.xml` metadata documents for comic book
//! archives. Documents are typed per schema revision (1.0, 2.0 and the 2.1
//! draft), validated, and only then encoded to XML.

pub mod config;
pub mod document;
pub mod encoder;
pub mod error;
pub mod output;
pub mod types;
pub mod validate;

pub use config::ValidatorConfig;
pub use document::{
    AnyComicInfo, BaseFields, ComicInfo, ComicInfoV1, ComicInfoV2, ComicInfoV21, Revision,
    Revision2Fields, COMIC_INFO_FILE_NAME, LANGUAGE_ENGLISH,
};
pub use error::{ComicInfoError, PageError, PageFault, Result, SerializationError, ValidationError};
pub use output::{write_comicinfo_file, write_comicinfo_file_with};
pub use types::{
    AgeRating, CommunityRating, Manga, PageType, PageV1, PageV2, Pages, PagesV1, PagesV2,
    RatingPrecision, YesNo,
};
pub use validate::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = ComicInfoV2::new("Bone");
        assert_eq!(doc.base.title, "Bone");
        assert_eq!(doc.revision(), Revision::V2);
        assert!(doc.validate().is_ok());
    }
}
