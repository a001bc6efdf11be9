//! Error types for ComicInfo Core

use crate::document::Revision;
use thiserror::Error;

/// Result type alias using ComicInfoError
pub type Result<T> = std::result::Result<T, ComicInfoError>;

/// Top-level error type for all ComicInfo operations
#[derive(Debug, Error)]
pub enum ComicInfoError {
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A field that violates one of the document rules
///
/// Validation is fail-fast, so this always describes the first rule broken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("failed to validate URL #{index} {value:?}: {reason}")]
    Url {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("failed to validate Language: {value:?} is not a valid language tag")]
    Language { value: String },

    #[error("failed to validate {field}: unknown value {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("failed to validate Pages: {0}")]
    Pages(#[from] PageError),

    #[error("failed to validate Pages: legacy pages must not be set ({count} found)")]
    LegacyPages { count: usize },

    #[error("failed to validate CommunityRating: {value} is outside 0.0..=5.0")]
    RatingRange { value: f64 },

    #[error("failed to validate CommunityRating: {value} has more than {digits} decimal digit(s)")]
    RatingPrecision { value: f64, digits: u8 },
}

impl ValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Url { .. } => "Web",
            ValidationError::Language { .. } => "LanguageISO",
            ValidationError::UnknownValue { field, .. } => *field,
            ValidationError::Pages(_) | ValidationError::LegacyPages { .. } => "Pages",
            ValidationError::RatingRange { .. } | ValidationError::RatingPrecision { .. } => {
                "CommunityRating"
            }
        }
    }

    /// The offending value, rendered as text
    pub fn value(&self) -> String {
        match self {
            ValidationError::Url { value, .. }
            | ValidationError::Language { value }
            | ValidationError::UnknownValue { value, .. } => value.clone(),
            ValidationError::Pages(err) => err.value(),
            ValidationError::LegacyPages { count } => count.to_string(),
            ValidationError::RatingRange { value } | ValidationError::RatingPrecision { value, .. } => {
                value.to_string()
            }
        }
    }
}

/// Errors raised while checking a page collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// `position` is 1-based
    #[error("duplicate key found for page {position}: {key:?}")]
    DuplicateKey { position: usize, key: String },

    /// `position` is 1-based
    #[error("failed to validate page {position}: {fault}")]
    InvalidPage { position: usize, fault: PageFault },
}

impl PageError {
    fn value(&self) -> String {
        match self {
            PageError::DuplicateKey { key, .. } => key.clone(),
            PageError::InvalidPage { fault, .. } => match fault {
                PageFault::Width(v) | PageFault::Height(v) => v.to_string(),
            },
        }
    }
}

/// Rule broken by a single page descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageFault {
    #[error("image width must be greater than 0 or -1, got {0}")]
    Width(i32),

    #[error("image height must be greater than 0 or -1, got {0}")]
    Height(i32),
}

/// Errors that occur once validation has passed and bytes are being written
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to write XML header: {0}")]
    Header(#[source] std::io::Error),

    #[error("failed to encode ComicInfo {revision} XML: {source}")]
    Body {
        revision: Revision,
        #[source]
        source: quick_xml::Error,
    },
}
