//! Validate-then-serialize pipeline producing `ComicInfo.xml`
//!
//! Encoding moves through three states: nothing is written until the
//! document validates, then the XML declaration is written, then the element
//! tree. A failure while writing the tree can leave a partial document in the
//! sink.

mod xml;

use crate::document::{ComicInfo, Revision};
use crate::error::{Result, SerializationError};
use crate::types::{CommunityRating, PagesV1, PagesV2};
use crate::validate::Validator;
use std::io::Write;

/// Declaration line written before the root element
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// One child element of the root, as named by a revision's schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

/// Content of a [`Field`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i32),
    Rating(Option<CommunityRating>),
    LegacyPages(&'a PagesV1),
    Pages(&'a PagesV2),
}

impl<'a> Field<'a> {
    pub fn text(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: FieldValue::Text(value),
        }
    }

    pub fn integer(name: &'static str, value: i32) -> Self {
        Self {
            name,
            value: FieldValue::Integer(value),
        }
    }

    pub fn rating(name: &'static str, value: Option<CommunityRating>) -> Self {
        Self {
            name,
            value: FieldValue::Rating(value),
        }
    }

    pub fn legacy_pages(name: &'static str, pages: &'a PagesV1) -> Self {
        Self {
            name,
            value: FieldValue::LegacyPages(pages),
        }
    }

    pub fn pages(name: &'static str, pages: &'a PagesV2) -> Self {
        Self {
            name,
            value: FieldValue::Pages(pages),
        }
    }

    /// Empty fields are left out of the document
    pub fn is_empty(&self) -> bool {
        match self.value {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Integer(value) => value == 0,
            FieldValue::Rating(rating) => rating.is_none(),
            FieldValue::LegacyPages(pages) => pages.is_empty(),
            FieldValue::Pages(pages) => pages.is_empty(),
        }
    }
}

/// Validate `doc`, then write it to `output`
pub fn encode<D, W>(doc: &D, validator: &Validator, mut output: W) -> Result<()>
where
    D: ComicInfo + ?Sized,
    W: Write,
{
    let revision = doc.revision();
    doc.validate_with(validator)?;
    tracing::debug!(%revision, "ComicInfo validated");

    output
        .write_all(XML_HEADER.as_bytes())
        .map_err(SerializationError::Header)?;
    tracing::debug!(%revision, "XML header written");

    let fields = doc.fields();
    xml::write_document(&mut output, revision, &fields)
        .and_then(|()| output.flush().map_err(quick_xml::Error::from))
        .map_err(|source| SerializationError::Body { revision, source })?;
    tracing::debug!(%revision, fields = fields.len(), "ComicInfo encoded");

    Ok(())
}

/// Validate `doc` and render it to a string
pub fn to_xml<D>(doc: &D, validator: &Validator) -> Result<String>
where
    D: ComicInfo + ?Sized,
{
    let mut buffer = Vec::new();
    encode(doc, validator, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Root element attributes: namespace declaration and schema location
pub fn schema_attributes(revision: Revision) -> [(&'static str, &'static str); 2] {
    [
        ("xmlns:xsi", xml::XMLNS_XSI),
        ("xsi:schemaLocation", revision.schema_location()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ComicInfoV1, ComicInfoV2};
    use crate::error::{ComicInfoError, ValidationError};
    use std::io;

    /// Writer that fails once `limit` bytes have been accepted
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(io::Error::other("sink full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_fields() {
        assert!(Field::text("Title", "").is_empty());
        assert!(Field::integer("Number", 0).is_empty());
        assert!(!Field::integer("Number", -1).is_empty());
        assert!(Field::rating("CommunityRating", None).is_empty());
        assert!(!Field::rating("CommunityRating", Some(CommunityRating::new(0.0))).is_empty());
    }

    #[test]
    fn test_invalid_document_writes_nothing() {
        let mut doc = ComicInfoV2::new("Bone");
        doc.extended.community_rating = Some(CommunityRating::new(7.0));

        let mut output = Vec::new();
        let err = encode(&doc, &Validator::default(), &mut output).unwrap_err();
        assert!(matches!(
            err,
            ComicInfoError::Validation(ValidationError::RatingRange { .. })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_header_failure() {
        let doc = ComicInfoV1::new("Bone");
        let writer = FailingWriter {
            written: Vec::new(),
            limit: 0,
        };
        let err = encode(&doc, &Validator::default(), writer).unwrap_err();
        assert!(matches!(
            err,
            ComicInfoError::Serialization(SerializationError::Header(_))
        ));
    }

    #[test]
    fn test_body_failure_after_header() {
        let doc = ComicInfoV1::new("Bone");
        let mut writer = FailingWriter {
            written: Vec::new(),
            limit: XML_HEADER.len() + 10,
        };
        let err = encode(&doc, &Validator::default(), &mut writer).unwrap_err();
        assert!(matches!(
            err,
            ComicInfoError::Serialization(SerializationError::Body {
                revision: Revision::V1,
                ..
            })
        ));
        assert!(writer.written.starts_with(XML_HEADER.as_bytes()));
    }

    #[test]
    fn test_schema_attributes() {
        let [xsi, location] = schema_attributes(Revision::V2);
        assert_eq!(xsi, ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
        assert_eq!(location.1, Revision::V2.schema_location());
    }
}
