//! ComicInfo documents, one type per schema revision
//!
//! Revisions are composed rather than nested: [`BaseFields`] is shared by all
//! three, [`Revision2Fields`] by 2.0 and 2.1. Each type lists its elements in
//! the order of its own schema, under its own element names.

mod base;
mod v1;
mod v2;
mod v21;

pub use base::BaseFields;
pub use v1::ComicInfoV1;
pub use v2::{ComicInfoV2, Revision2Fields};
pub use v21::ComicInfoV21;

use crate::encoder::{self, Field};
use crate::error::{Result, ValidationError};
use crate::validate::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Name of the file inside a comic archive
pub const COMIC_INFO_FILE_NAME: &str = "ComicInfo.xml";

/// Language tag for English
pub const LANGUAGE_ENGLISH: &str = "en";

/// Schema generation a document conforms to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Revision {
    #[serde(rename = "1.0")]
    V1,
    #[serde(rename = "2.0")]
    V2,
    #[serde(rename = "2.1-draft")]
    V2_1Draft,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::V1, Revision::V2, Revision::V2_1Draft];

    /// URL of the XSD describing this revision
    pub fn schema_location(self) -> &'static str {
        match self {
            Revision::V1 => {
                "https://github.com/anansi-project/comicinfo/raw/refs/heads/main/schema/v1.0/ComicInfo.xsd"
            }
            Revision::V2 => {
                "https://raw.githubusercontent.com/anansi-project/comicinfo/refs/heads/main/schema/v2.0/ComicInfo.xsd"
            }
            Revision::V2_1Draft => {
                "https://github.com/anansi-project/comicinfo/raw/refs/heads/main/drafts/v2.1/ComicInfo.xsd"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Revision::V1 => "1.0",
            Revision::V2 => "2.0",
            Revision::V2_1Draft => "2.1-draft",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_str())
    }
}

impl FromStr for Revision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().trim_start_matches(&['v', 'V'][..]) {
            "1" | "1.0" => Ok(Revision::V1),
            "2" | "2.0" => Ok(Revision::V2),
            "2.1" | "2.1-draft" => Ok(Revision::V2_1Draft),
            _ => Err(format!("unknown ComicInfo revision: {s:?} (expected 1, 2 or 2.1)")),
        }
    }
}

/// Behaviour every ComicInfo revision provides
pub trait ComicInfo {
    /// Schema revision of this document type
    fn revision(&self) -> Revision;

    /// Check the document with a specific validator
    fn validate_with(&self, validator: &Validator) -> std::result::Result<(), ValidationError>;

    /// Elements in schema order, including empty ones
    fn fields(&self) -> Vec<Field<'_>>;

    /// Check the document with the default validator
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.validate_with(&Validator::default())
    }

    /// Validate, then write the XML document to `output`
    ///
    /// Nothing is written when validation fails. A write failure after the
    /// header may leave a partial document in `output`; encode into a buffer
    /// when that matters.
    fn encode<W: Write>(&self, output: W) -> Result<()>
    where
        Self: Sized,
    {
        encoder::encode(self, &Validator::default(), output)
    }

    /// Validate and render the XML document as a string
    fn to_xml(&self) -> Result<String>
    where
        Self: Sized,
    {
        encoder::to_xml(self, &Validator::default())
    }
}

/// A document of any revision, selected at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyComicInfo {
    V1(ComicInfoV1),
    V2(ComicInfoV2),
    V2_1(ComicInfoV21),
}

impl AnyComicInfo {
    /// Parse a JSON description of a document of the given revision
    pub fn from_json(revision: Revision, json: &str) -> serde_json::Result<Self> {
        Ok(match revision {
            Revision::V1 => AnyComicInfo::V1(serde_json::from_str(json)?),
            Revision::V2 => AnyComicInfo::V2(serde_json::from_str(json)?),
            Revision::V2_1Draft => AnyComicInfo::V2_1(serde_json::from_str(json)?),
        })
    }

    pub fn base(&self) -> &BaseFields {
        match self {
            AnyComicInfo::V1(doc) => &doc.base,
            AnyComicInfo::V2(doc) => &doc.base,
            AnyComicInfo::V2_1(doc) => &doc.base,
        }
    }

    pub fn page_count(&self) -> usize {
        match self {
            AnyComicInfo::V1(doc) => doc.pages.len(),
            AnyComicInfo::V2(doc) => doc.extended.pages.len(),
            AnyComicInfo::V2_1(doc) => doc.extended.pages.len(),
        }
    }
}

impl ComicInfo for AnyComicInfo {
    fn revision(&self) -> Revision {
        match self {
            AnyComicInfo::V1(doc) => doc.revision(),
            AnyComicInfo::V2(doc) => doc.revision(),
            AnyComicInfo::V2_1(doc) => doc.revision(),
        }
    }

    fn validate_with(&self, validator: &Validator) -> std::result::Result<(), ValidationError> {
        match self {
            AnyComicInfo::V1(doc) => doc.validate_with(validator),
            AnyComicInfo::V2(doc) => doc.validate_with(validator),
            AnyComicInfo::V2_1(doc) => doc.validate_with(validator),
        }
    }

    fn fields(&self) -> Vec<Field<'_>> {
        match self {
            AnyComicInfo::V1(doc) => doc.fields(),
            AnyComicInfo::V2(doc) => doc.fields(),
            AnyComicInfo::V2_1(doc) => doc.fields(),
        }
    }
}

impl From<ComicInfoV1> for AnyComicInfo {
    fn from(doc: ComicInfoV1) -> Self {
        AnyComicInfo::V1(doc)
    }
}

impl From<ComicInfoV2> for AnyComicInfo {
    fn from(doc: ComicInfoV2) -> Self {
        AnyComicInfo::V2(doc)
    }
}

impl From<ComicInfoV21> for AnyComicInfo {
    fn from(doc: ComicInfoV21) -> Self {
        AnyComicInfo::V2_1(doc)
    }
}
