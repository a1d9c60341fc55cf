//! # Price List Configuration
//!
//! Loads the catalog and discount rules the checkout prices against.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. --config <path> flag (highest priority)                            │
//! │                                                                         │
//! │  2. Environment Variable                                               │
//! │     CHECKOUT_CONFIG=/etc/checkout/pricing.toml                         │
//! │                                                                         │
//! │  3. TOML Config File in the platform config dir                        │
//! │     ~/.config/checkout/pricing.toml (Linux)                            │
//! │     ~/Library/Application Support/com.checkout.checkout/pricing.toml   │
//! │                                                                         │
//! │  4. Built-in price list (lowest priority)                              │
//! │     A 50, B 30, C 20, D 15; A 3-for-20-off, B 2-for-15-off             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A path given through 1 or 2 must exist; a missing file at 3 silently
//! falls back to 4.
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [prices]
//! A = 50
//! B = 30
//! C = 20
//! D = 15
//!
//! [rules.A]
//! kind = "bulk"
//! threshold = 3
//! discount = 20
//!
//! [rules.B]
//! kind = "bulk"
//! threshold = 2
//! discount = 15
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use checkout_core::{BulkDiscount, Checkout, DiscountRule, DiscountRules, ProductCatalog};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable naming the price list file.
pub const CONFIG_ENV_VAR: &str = "CHECKOUT_CONFIG";

/// Built-in unit prices, used when no price list file is found.
const DEFAULT_PRICES: [(&str, i64); 4] = [("A", 50), ("B", 30), ("C", 20), ("D", 15)];

/// Built-in bulk rules. Evaluated at compile time, so a bad literal fails the build.
const DEFAULT_RULES: [(&str, BulkDiscount); 2] = [
    ("A", BulkDiscount::from_const(3, 20)),
    ("B", BulkDiscount::from_const(2, 15)),
];

/// Price list as read from disk: unit prices plus discount rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Unit price in cents per product code.
    #[serde(default)]
    pub prices: BTreeMap<String, i64>,

    /// At most one rule per product code.
    #[serde(default)]
    pub rules: DiscountRules,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let prices = DEFAULT_PRICES
            .into_iter()
            .map(|(code, cents)| (code.to_string(), cents))
            .collect();

        let rules = DEFAULT_RULES
            .into_iter()
            .map(|(code, bulk)| (code, DiscountRule::Bulk(bulk)))
            .collect();

        PricingConfig { prices, rules }
    }
}

impl PricingConfig {
    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads the price list following the priority order above.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::ConfigNotFound(path));
            }
            return Self::load_from(&path);
        }

        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
            debug!(?path, "Price list not found, using built-in prices");
        }

        Ok(Self::default())
    }

    /// Reads and parses one price list file.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading price list from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a price list from TOML text.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Platform config location, e.g. `~/.config/checkout/pricing.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Turns the raw price list into a validated catalog and rule set.
    ///
    /// Runs every check a [`Checkout`] would, so a successful build
    /// guarantees checkouts can be opened against the result.
    pub fn build(&self) -> CliResult<(ProductCatalog, DiscountRules)> {
        let catalog = ProductCatalog::new(
            self.prices
                .iter()
                .map(|(code, cents)| (code.as_str(), *cents)),
        )?;
        let rules = self.rules.clone();

        Checkout::new(&catalog, &rules)?;

        debug!(
            products = catalog.len(),
            rules = rules.len(),
            "Price list validated"
        );
        Ok((catalog, rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{CoreError, ValidationError};
    use std::io::Write;

    const SAMPLE: &str = r#"
        [prices]
        A = 50
        B = 30
        C = 20
        D = 15

        [rules.A]
        kind = "bulk"
        threshold = 3
        discount = 20

        [rules.B]
        kind = "bulk"
        threshold = 2
        discount = 15
    "#;

    #[test]
    fn test_default_matches_sample_file() {
        let parsed = PricingConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(parsed, PricingConfig::default());
    }

    #[test]
    fn test_default_keeps_every_rule() {
        let config = PricingConfig::default();
        assert_eq!(config.prices.len(), DEFAULT_PRICES.len());
        assert_eq!(config.rules.len(), DEFAULT_RULES.len());
        assert_eq!(config.rules.rule_for("A"), Some(&DiscountRule::bulk(3, 20).unwrap()));
        assert_eq!(config.rules.rule_for("B"), Some(&DiscountRule::bulk(2, 15).unwrap()));
    }

    #[test]
    fn test_price_above_limit_fails_build() {
        let config = PricingConfig::from_toml_str("[prices]\nA = 9223372036854775807\n").unwrap();
        assert!(matches!(
            config.build().unwrap_err(),
            CliError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_build_prices_basket() {
        let (catalog, rules) = PricingConfig::default().build().unwrap();
        let mut checkout = Checkout::new(&catalog, &rules).unwrap();
        for code in ["A", "A", "A", "B", "B", "D"] {
            checkout.scan(code);
        }
        assert_eq!(checkout.total().cents(), 190);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = PricingConfig::from_toml_str("[prices]\nA = 50\n").unwrap();
        assert!(config.rules.is_empty());

        let config = PricingConfig::from_toml_str("").unwrap();
        assert!(config.prices.is_empty());
        let (catalog, _) = config.build().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rule_for_unpriced_product_fails_build() {
        let config = PricingConfig::from_toml_str(
            r#"
            [prices]
            A = 50

            [rules.E]
            kind = "bulk"
            threshold = 2
            discount = 10
            "#,
        )
        .unwrap();

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::RuleForUnknownProduct { ref code }) if code == "E"
        ));
    }

    #[test]
    fn test_negative_price_fails_build() {
        let config = PricingConfig::from_toml_str("[prices]\nA = -5\n").unwrap();
        assert!(matches!(
            config.build().unwrap_err(),
            CliError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_zero_threshold_fails_parse() {
        let err = PricingConfig::from_toml_str(
            r#"
            [prices]
            A = 50

            [rules.A]
            kind = "bulk"
            threshold = 0
            discount = 20
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_unknown_rule_kind_fails_parse() {
        let err = PricingConfig::from_toml_str(
            r#"
            [rules.A]
            kind = "buy_one_get_one"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&PricingConfig::default()).unwrap();
        assert!(toml_str.contains("[prices]"));
        assert!(toml_str.contains("kind = \"bulk\""));
        assert_eq!(
            PricingConfig::from_toml_str(&toml_str).unwrap(),
            PricingConfig::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[prices]\nX = 99\n").unwrap();

        let config = PricingConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.prices.get("X"), Some(&99));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let missing = PathBuf::from("/definitely/not/here/pricing.toml");
        let err = PricingConfig::load(Some(missing.clone())).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(path) if path == missing));
    }
}
