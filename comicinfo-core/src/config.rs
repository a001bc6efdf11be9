//! Validator configuration

use crate::types::RatingPrecision;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ValidatorConfig::draft_rating_precision`]
pub const DRAFT_RATING_DIGITS_ENV: &str = "COMICINFO_DRAFT_RATING_DIGITS";

/// Tunable validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Decimal digits allowed in a 2.1-draft `CommunityRating`.
    ///
    /// Drafts of the 2.1 schema disagree between one and two digits; two is
    /// the default until the schema is final.
    pub draft_rating_precision: RatingPrecision,
}

impl ValidatorConfig {
    /// Set the draft rating precision
    pub fn with_draft_rating_precision(mut self, precision: RatingPrecision) -> Self {
        self.draft_rating_precision = precision;
        self
    }

    /// Build a configuration from the process environment
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DRAFT_RATING_DIGITS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(raw) = value else {
            return config;
        };
        match raw.trim().parse::<u8>().ok().and_then(RatingPrecision::from_digits) {
            Some(precision) => config.draft_rating_precision = precision,
            None => {
                tracing::warn!(
                    "Ignoring {}={:?}: expected 1 or 2",
                    DRAFT_RATING_DIGITS_ENV,
                    raw
                );
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_digits() {
        assert_eq!(
            ValidatorConfig::default().draft_rating_precision,
            RatingPrecision::TwoDigits
        );
    }

    #[test]
    fn test_env_value_parsing() {
        assert_eq!(
            ValidatorConfig::from_env_value(Some("1")).draft_rating_precision,
            RatingPrecision::OneDigit
        );
        assert_eq!(
            ValidatorConfig::from_env_value(Some(" 2 ")).draft_rating_precision,
            RatingPrecision::TwoDigits
        );
        assert_eq!(ValidatorConfig::from_env_value(Some("7")), ValidatorConfig::default());
        assert_eq!(ValidatorConfig::from_env_value(Some("one")), ValidatorConfig::default());
        assert_eq!(ValidatorConfig::from_env_value(None), ValidatorConfig::default());
    }

    #[test]
    fn test_config_json() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"draft_rating_precision": 1}"#).unwrap();
        assert_eq!(config.draft_rating_precision, RatingPrecision::OneDigit);

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }
}
