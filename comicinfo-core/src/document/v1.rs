//! Revision 1.0 document

use super::{BaseFields, ComicInfo, Revision};
use crate::encoder::Field;
use crate::error::ValidationError;
use crate::types::PagesV1;
use crate::validate::Validator;
use serde::{Deserialize, Serialize};

/// A ComicInfo 1.0 document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicInfoV1 {
    #[serde(flatten)]
    pub base: BaseFields,

    pub pages: PagesV1,
}

impl ComicInfoV1 {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: BaseFields::new(title),
            pages: PagesV1::new(),
        }
    }
}

impl ComicInfo for ComicInfoV1 {
    fn revision(&self) -> Revision {
        Revision::V1
    }

    fn validate_with(&self, validator: &Validator) -> Result<(), ValidationError> {
        validator.check_base(&self.base)?;
        self.pages.validate()?;
        Ok(())
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::with_capacity(29);
        self.base.push_heading(&mut fields);
        self.base.push_creators(&mut fields);
        self.base.push_publishing(&mut fields);
        self.base.push_presentation("format", &mut fields);
        fields.push(Field::legacy_pages("Pages", &self.pages));
        fields
    }
}
