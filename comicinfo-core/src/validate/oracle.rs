//! Collaborators the validator consults for URL and language checks

use language_tags::LanguageTag;
use url::Url;

/// Base used to resolve relative references such as `/issue/1`
const RELATIVE_BASE: &str = "http://localhost/";

/// Decides whether one token of the `Web` field is a syntactically valid URL
pub trait UrlSyntax: Send + Sync {
    /// Returns the parser's reason on rejection
    fn check(&self, token: &str) -> Result<(), String>;
}

/// Decides whether a `LanguageISO` value is a known language tag
pub trait LanguageRegistry: Send + Sync {
    fn is_valid(&self, code: &str) -> bool;
}

impl<F> UrlSyntax for F
where
    F: Fn(&str) -> Result<(), String> + Send + Sync,
{
    fn check(&self, token: &str) -> Result<(), String> {
        self(token)
    }
}

impl<F> LanguageRegistry for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}

/// WHATWG URL parsing; relative references are accepted
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUrlSyntax;

impl UrlSyntax for StandardUrlSyntax {
    fn check(&self, token: &str) -> Result<(), String> {
        match Url::parse(token) {
            Ok(_) => Ok(()),
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(token))
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// BCP 47 tags checked against the IANA subtag registry
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcp47Registry;

impl LanguageRegistry for Bcp47Registry {
    fn is_valid(&self, code: &str) -> bool {
        LanguageTag::parse(code)
            .map(|tag| tag.validate().is_ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        assert!(StandardUrlSyntax.check("https://example.com/comic/1").is_ok());
        assert!(StandardUrlSyntax.check("http://example.com:8080/?q=bone").is_ok());
    }

    #[test]
    fn test_relative_urls_are_accepted() {
        assert!(StandardUrlSyntax.check("/series/bone").is_ok());
        assert!(StandardUrlSyntax.check("").is_ok());
    }

    #[test]
    fn test_malformed_urls() {
        assert!(StandardUrlSyntax.check("http://example.com:99999").is_err());
        assert!(StandardUrlSyntax.check("http://[::1").is_err());
    }

    #[test]
    fn test_language_tags() {
        assert!(Bcp47Registry.is_valid("en"));
        assert!(Bcp47Registry.is_valid("fr-CA"));
        assert!(Bcp47Registry.is_valid("ja"));
        assert!(!Bcp47Registry.is_valid("english"));
        assert!(!Bcp47Registry.is_valid("en_US!"));
    }

    #[test]
    fn test_closures_act_as_oracles() {
        let only_en = |code: &str| code == "en";
        assert!(only_en.is_valid("en"));
        assert!(!only_en.is_valid("de"));
    }
}
