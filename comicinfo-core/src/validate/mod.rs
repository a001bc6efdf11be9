//! Field and document rules checked before a document is encoded
//!
//! Every check is fail-fast: the first broken rule is returned and nothing
//! after it is evaluated. Revision-specific validators call
//! [`Validator::check_base`] before checking their own fields.

mod oracle;

pub use oracle::{Bcp47Registry, LanguageRegistry, StandardUrlSyntax, UrlSyntax};

use crate::config::ValidatorConfig;
use crate::document::{BaseFields, Revision2Fields};
use crate::error::ValidationError;
use crate::types::{CommunityRating, PagesV1, RatingPrecision};
use std::fmt;

/// Holds the URL and language oracles plus the tunable rules
pub struct Validator {
    urls: Box<dyn UrlSyntax>,
    languages: Box<dyn LanguageRegistry>,
    config: ValidatorConfig,
}

impl Validator {
    /// Validator backed by [`StandardUrlSyntax`] and [`Bcp47Registry`]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            urls: Box::new(StandardUrlSyntax),
            languages: Box::new(Bcp47Registry),
            config,
        }
    }

    /// Replace the URL oracle
    pub fn with_url_syntax(mut self, urls: impl UrlSyntax + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    /// Replace the language oracle
    pub fn with_language_registry(mut self, languages: impl LanguageRegistry + 'static) -> Self {
        self.languages = Box::new(languages);
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Each space-separated token of `web` must be a URL
    pub fn check_web(&self, web: &str) -> Result<(), ValidationError> {
        if web.is_empty() {
            return Ok(());
        }
        for (index, token) in web.split(' ').enumerate() {
            if let Err(reason) = self.urls.check(token) {
                return Err(ValidationError::Url {
                    index,
                    value: token.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Empty means unspecified and always passes
    pub fn check_language(&self, code: &str) -> Result<(), ValidationError> {
        if code.is_empty() || self.languages.is_valid(code) {
            Ok(())
        } else {
            Err(ValidationError::Language {
                value: code.to_string(),
            })
        }
    }

    /// An absent rating always passes
    pub fn check_rating(
        &self,
        rating: Option<CommunityRating>,
        precision: RatingPrecision,
    ) -> Result<(), ValidationError> {
        match rating {
            Some(rating) => rating.check(precision),
            None => Ok(()),
        }
    }

    /// Rules shared by every revision.
    ///
    /// `BlackAndWhite` and `Manga` are closed enums, so their vocabulary was
    /// already enforced when the values were parsed.
    pub fn check_base(&self, base: &BaseFields) -> Result<(), ValidationError> {
        self.check_web(&base.web)?;
        self.check_language(&base.language_iso)?;
        Ok(())
    }

    /// Revision 2 and later documents must not carry revision 1 pages
    pub fn check_legacy_pages(&self, pages: &PagesV1) -> Result<(), ValidationError> {
        if pages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::LegacyPages { count: pages.len() })
        }
    }

    /// Rules for the fields revision 2 adds, with the rating precision the
    /// calling revision allows
    pub fn check_revision2(
        &self,
        fields: &Revision2Fields,
        rating_precision: RatingPrecision,
    ) -> Result<(), ValidationError> {
        fields.pages.validate()?;
        self.check_rating(fields.community_rating, rating_precision)?;
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_ftp(token: &str) -> Result<(), String> {
        if token.starts_with("ftp:") {
            Err("ftp is not allowed".to_string())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_web_reports_zero_based_index() {
        let validator = Validator::new().with_url_syntax(reject_ftp);
        let err = validator
            .check_web("https://a.example ftp://b.example https://c.example")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Url {
                index: 1,
                value: "ftp://b.example".to_string(),
                reason: "ftp is not allowed".to_string(),
            }
        );
        assert_eq!(err.field(), "Web");
    }

    #[test]
    fn test_empty_web_is_not_checked() {
        let validator = Validator::new()
            .with_url_syntax(|_: &str| -> Result<(), String> { Err("never".to_string()) });
        assert!(validator.check_web("").is_ok());
    }

    #[test]
    fn test_language_uses_registry() {
        let validator = Validator::new().with_language_registry(|code: &str| code == "en");
        assert!(validator.check_language("en").is_ok());
        assert!(validator.check_language("").is_ok());
        assert_eq!(
            validator.check_language("de"),
            Err(ValidationError::Language {
                value: "de".to_string()
            })
        );
    }

    #[test]
    fn test_missing_rating_passes() {
        let validator = Validator::new();
        assert!(validator.check_rating(None, RatingPrecision::OneDigit).is_ok());
        assert!(validator
            .check_rating(Some(CommunityRating::new(9.0)), RatingPrecision::TwoDigits)
            .is_err());
    }

    #[test]
    fn test_base_checks_url_before_language() {
        let base = BaseFields {
            web: "http://example.com:99999".to_string(),
            language_iso: "not a tag".to_string(),
            ..Default::default()
        };
        let err = Validator::new().check_base(&base).unwrap_err();
        assert!(matches!(err, ValidationError::Url { index: 0, .. }));
    }
}
