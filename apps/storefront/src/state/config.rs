//! # Configuration State
//!
//! Stores display configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MARU_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use maru_core::Money;
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// The demo currency is the Korean won: no minor unit, amounts rendered as
/// thousands-grouped integers with a trailing suffix ("10,000원").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the page header).
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Suffix appended to grouped amounts for display.
    pub currency_suffix: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "Maru Shop".to_string(),
            currency_code: "KRW".to_string(),
            currency_suffix: "원".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MARU_STORE_NAME`: Override store name
    /// - `MARU_CURRENCY_CODE`: Override currency code
    /// - `MARU_CURRENCY_SUFFIX`: Override display suffix
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("MARU_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(code) = std::env::var("MARU_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Ok(suffix) = std::env::var("MARU_CURRENCY_SUFFIX") {
            config.currency_suffix = suffix;
        }

        config
    }

    /// Formats an amount the way the UI displays prices: locale-grouped
    /// integer followed by the currency suffix.
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::Money;
    /// use maru_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_units(700_000)), "700,000원");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!("{}{}", amount.grouped(), self.currency_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigState::default();
        assert_eq!(config.currency_code, "KRW");
        assert_eq!(config.currency_suffix, "원");
    }

    #[test]
    fn test_format_money() {
        let config = ConfigState::default();
        assert_eq!(config.format_money(Money::from_units(0)), "0원");
        assert_eq!(config.format_money(Money::from_units(10_000)), "10,000원");
        assert_eq!(config.format_money(Money::from_units(700_000)), "700,000원");
    }

    #[test]
    fn test_format_money_custom_suffix() {
        let config = ConfigState {
            currency_suffix: " KRW".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_money(Money::from_units(5000)), "5,000 KRW");
    }
}
