//! Page descriptors and the ordered page collection

use super::PageType;
use crate::error::{PageError, PageFault};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Width/height value meaning "dimension unknown"
pub const UNKNOWN_DIMENSION: i32 = -1;

/// Behaviour shared by the page shapes of every revision
pub trait PageDescriptor {
    /// Key identifying the page, unique within a collection
    fn key(&self) -> &str;

    /// Check the rules that apply to a single page
    fn check(&self) -> Result<(), PageFault>;

    /// Attributes of the `<Page>` element, in wire order
    fn attributes(&self) -> Vec<(&'static str, String)>;
}

fn check_dimensions(width: i32, height: i32) -> Result<(), PageFault> {
    if !(width > 0 || width == UNKNOWN_DIMENSION) {
        return Err(PageFault::Width(width));
    }
    if !(height > 0 || height == UNKNOWN_DIMENSION) {
        return Err(PageFault::Height(height));
    }
    Ok(())
}

/// Page as described by revision 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageV1 {
    /// Index of the image in the archive; also the reading order
    pub image: u32,

    #[serde(rename = "type")]
    pub page_type: PageType,

    pub double_page: bool,

    /// Size of the image file in bytes
    pub image_size: u64,

    pub key: String,

    /// Positive width in pixels, or [`UNKNOWN_DIMENSION`]
    pub image_width: i32,

    /// Positive height in pixels, or [`UNKNOWN_DIMENSION`]
    pub image_height: i32,
}

impl Default for PageV1 {
    fn default() -> Self {
        Self {
            image: 0,
            page_type: PageType::default(),
            double_page: false,
            image_size: 0,
            key: String::new(),
            image_width: UNKNOWN_DIMENSION,
            image_height: UNKNOWN_DIMENSION,
        }
    }
}

impl PageV1 {
    /// Create a story page with unknown dimensions
    pub fn new(image: u32, key: impl Into<String>) -> Self {
        Self {
            image,
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set the page role
    pub fn with_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }

    /// Set width and height in pixels
    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the image size in bytes
    pub fn with_size(mut self, image_size: u64) -> Self {
        self.image_size = image_size;
        self
    }

    /// Mark the page as a double-page spread
    pub fn double_page(mut self) -> Self {
        self.double_page = true;
        self
    }
}

impl PageDescriptor for PageV1 {
    fn key(&self) -> &str {
        &self.key
    }

    fn check(&self) -> Result<(), PageFault> {
        check_dimensions(self.image_width, self.image_height)
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("Image", self.image.to_string()),
            ("Type", self.page_type.to_string()),
            ("DoublePage", self.double_page.to_string()),
            ("ImageSize", self.image_size.to_string()),
        ];
        if !self.key.is_empty() {
            attrs.push(("Key", self.key.clone()));
        }
        attrs.push(("ImageWidth", self.image_width.to_string()));
        attrs.push(("ImageHeight", self.image_height.to_string()));
        attrs
    }
}

/// Page as described by revision 2 and later: revision 1 plus a bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageV2 {
    pub image: u32,

    #[serde(rename = "type")]
    pub page_type: PageType,

    pub double_page: bool,

    pub image_size: u64,

    pub key: String,

    /// Label shown by readers in their bookmark list
    pub bookmark: String,

    pub image_width: i32,

    pub image_height: i32,
}

impl Default for PageV2 {
    fn default() -> Self {
        PageV1::default().into()
    }
}

impl PageV2 {
    /// Create a story page with unknown dimensions
    pub fn new(image: u32, key: impl Into<String>) -> Self {
        PageV1::new(image, key).into()
    }

    pub fn with_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }

    pub fn with_dimensions(mut self, width: i32, height: i32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    pub fn with_size(mut self, image_size: u64) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = bookmark.into();
        self
    }

    pub fn double_page(mut self) -> Self {
        self.double_page = true;
        self
    }
}

impl From<PageV1> for PageV2 {
    fn from(page: PageV1) -> Self {
        Self {
            image: page.image,
            page_type: page.page_type,
            double_page: page.double_page,
            image_size: page.image_size,
            key: page.key,
            bookmark: String::new(),
            image_width: page.image_width,
            image_height: page.image_height,
        }
    }
}

impl PageDescriptor for PageV2 {
    fn key(&self) -> &str {
        &self.key
    }

    fn check(&self) -> Result<(), PageFault> {
        check_dimensions(self.image_width, self.image_height)
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("Image", self.image.to_string()),
            ("Type", self.page_type.to_string()),
            ("DoublePage", self.double_page.to_string()),
            ("ImageSize", self.image_size.to_string()),
        ];
        if !self.key.is_empty() {
            attrs.push(("Key", self.key.clone()));
        }
        if !self.bookmark.is_empty() {
            attrs.push(("Bookmark", self.bookmark.clone()));
        }
        attrs.push(("ImageWidth", self.image_width.to_string()));
        attrs.push(("ImageHeight", self.image_height.to_string()));
        attrs
    }
}

/// Ordered page collection; order is the reading order and is kept verbatim
///
/// Duplicate keys can be pushed freely and are only rejected by
/// [`validate`](Pages::validate).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pages<P> {
    pages: Vec<P>,
}

/// Revision 1 page collection
pub type PagesV1 = Pages<PageV1>;

/// Revision 2 and 2.1 page collection
pub type PagesV2 = Pages<PageV2>;

impl<P> Pages<P> {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    pub fn push(&mut self, page: P) {
        self.pages.push(page);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.pages
    }
}

impl<P: PageDescriptor> Pages<P> {
    /// Check key uniqueness and every page, stopping at the first problem
    pub fn validate(&self) -> Result<(), PageError> {
        let mut keys = HashSet::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            let position = index + 1;
            if !keys.insert(page.key()) {
                return Err(PageError::DuplicateKey {
                    position,
                    key: page.key().to_string(),
                });
            }
            page.check()
                .map_err(|fault| PageError::InvalidPage { position, fault })?;
        }
        Ok(())
    }
}

impl<P> From<Vec<P>> for Pages<P> {
    fn from(pages: Vec<P>) -> Self {
        Self { pages }
    }
}

impl<P> FromIterator<P> for Pages<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl<P> IntoIterator for Pages<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Pages<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl From<PagesV1> for PagesV2 {
    fn from(pages: PagesV1) -> Self {
        pages.into_iter().map(PageV2::from).collect()
    }
}
