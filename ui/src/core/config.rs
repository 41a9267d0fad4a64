//! Gallery/block configuration threaded through render calls.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::Currency;
use super::money::DiscountPolicy;
use super::theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything a block needs besides its own data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    pub theme: Theme,
    pub currency: Currency,
    pub discount_policy: DiscountPolicy,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency: Currency::usd(),
            discount_policy: DiscountPolicy::default(),
        }
    }
}

impl BlockConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = BlockConfig::from_json(r#"{ "theme": "amber" }"#).unwrap();
        assert_eq!(config.theme, Theme::Amber);
        assert_eq!(config.currency, Currency::usd());
        assert_eq!(config.discount_policy, DiscountPolicy::ClampToSubtotal);
    }

    #[test]
    fn full_document_parses() {
        let raw = r#"{
            "theme": "slate",
            "currency": { "code": "EUR", "symbol": "€", "symbol_after": true },
            "discount_policy": "permissive"
        }"#;
        let config = BlockConfig::from_json(raw).unwrap();
        assert_eq!(config.currency, Currency::eur());
        assert_eq!(config.discount_policy, DiscountPolicy::Permissive);
    }

    #[test]
    fn unknown_theme_is_a_parse_error() {
        let err = BlockConfig::from_json(r#"{ "theme": "sepia" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BlockConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
