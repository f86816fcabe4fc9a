//! `[validate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! duplicate_slugs = "warn"    # Failure level: error | warn
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "validate")]
pub struct ValidateConfig {
    /// How to treat a slug linked from more than one sidebar entry.
    #[config(default = "error", inline_doc = "error | warn")]
    pub duplicate_slugs: ValidateLevel,
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (load fails).
    #[default]
    Error,
    /// Treat validation failures as warnings (load continues).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_validate_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.validate.duplicate_slugs, ValidateLevel::Error);
    }

    #[test]
    fn test_validate_config_custom() {
        let config = test_parse_config("[validate]\nduplicate_slugs = \"warn\"");
        assert_eq!(config.validate.duplicate_slugs, ValidateLevel::Warn);
    }

    #[test]
    fn test_validate_unknown_field_detected() {
        let content = "nav = []\n[site]\nurl = \"https://example.org\"\ntitle = \"Test\"\n[validate]\nunknown = \"field\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
