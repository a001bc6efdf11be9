//! Value types shared by every ComicInfo revision

mod page;
mod rating;
mod vocabulary;

pub use page::{PageDescriptor, PageV1, PageV2, Pages, PagesV1, PagesV2, UNKNOWN_DIMENSION};
pub use rating::{CommunityRating, RatingPrecision};
pub use vocabulary::{AgeRating, Manga, PageType, YesNo};
