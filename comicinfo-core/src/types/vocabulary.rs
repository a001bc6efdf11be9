//! Closed vocabularies used by ComicInfo fields
//!
//! Every vocabulary maps one-to-one onto the schema's string tokens. Fields
//! that may be left unspecified carry an `Unspecified` variant whose wire form
//! is the empty string, which the encoder omits.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a vocabulary enum together with its token mapping.
///
/// Parsing is the only way a string enters one of these types, so an unknown
/// token is reported as a validation failure for `$field`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member of the vocabulary, in schema order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire token for this value
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ValidationError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Tri-state flag used by `BlackAndWhite`
    pub enum YesNo for "BlackAndWhite" {
        #[default]
        Unspecified => "",
        Unknown => "Unknown",
        No => "No",
        Yes => "Yes",
    }
}

vocabulary! {
    /// Whether the book is a manga; `YesAndRightToLeft` also sets the reading
    /// direction to right-to-left
    pub enum Manga for "Manga" {
        #[default]
        Unspecified => "",
        Unknown => "Unknown",
        No => "No",
        Yes => "Yes",
        YesAndRightToLeft => "YesAndRightToLeft",
    }
}

vocabulary! {
    /// Audience rating of the book
    pub enum AgeRating for "AgeRating" {
        #[default]
        Unspecified => "",
        Unknown => "Unknown",
        AdultsOnly18Plus => "Adults Only 18+",
        EarlyChildhood => "Early Childhood",
        Everyone => "Everyone",
        Everyone10Plus => "Everyone 10+",
        G => "G",
        KidsToAdults => "Kids to Adults",
        M => "M",
        Ma15Plus => "MA15+",
        Mature17Plus => "Mature 17+",
        Pg => "PG",
        R18Plus => "R18+",
        RatingPending => "Rating Pending",
        Teen => "Teen",
        X18Plus => "X18+",
    }
}

vocabulary! {
    /// Role of a page within the book. Pages always carry a role.
    pub enum PageType for "Type" {
        FrontCover => "FrontCover",
        InnerCover => "InnerCover",
        Roundup => "Roundup",
        #[default]
        Story => "Story",
        Advertisement => "Advertisement",
        Editorial => "Editorial",
        Letters => "Letters",
        Preview => "Preview",
        BackCover => "BackCover",
        Other => "Other",
        Deleted => "Deleted",
    }
}

impl Manga {
    /// True when pages are meant to be read right-to-left
    pub fn is_right_to_left(self) -> bool {
        matches!(self, Manga::YesAndRightToLeft)
    }
}
