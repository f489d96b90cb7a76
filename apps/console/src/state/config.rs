//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INLIN_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the portal greeting.
    pub company_name: String,

    /// Prefix for every formatted amount.
    pub currency_symbol: String,

    /// Placeholder password the demo quick-login fills in.
    /// Never checked against anything.
    pub demo_password: String,

    /// Start from the sample dataset (`true`) or an empty store.
    pub seed: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Company: "InlinTech"
    /// - Currency: $
    /// - Demo password: "demo123"
    /// - Seeded: yes
    fn default() -> Self {
        ConfigState {
            company_name: "InlinTech".to_string(),
            currency_symbol: "$".to_string(),
            demo_password: inlin_core::DEMO_PASSWORD.to_string(),
            seed: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INLIN_COMPANY_NAME`: Override company name
    /// - `INLIN_CURRENCY_SYMBOL`: Override currency symbol
    /// - `INLIN_DEMO_PASSWORD`: Override demo quick-login password
    /// - `INLIN_SEED`: `false`/`0`/`no` starts with an empty store
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("INLIN_COMPANY_NAME").filter(|v| !v.trim().is_empty()) {
            config.company_name = name;
        }

        if let Some(symbol) = lookup("INLIN_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(password) = lookup("INLIN_DEMO_PASSWORD").filter(|v| !v.trim().is_empty()) {
            config.demo_password = password;
        }

        if let Some(seed) = lookup("INLIN_SEED") {
            match seed.trim().to_ascii_lowercase().as_str() {
                "false" | "0" | "no" | "off" => config.seed = false,
                "true" | "1" | "yes" | "on" => config.seed = true,
                other => tracing::warn!(value = other, "Ignoring unrecognized INLIN_SEED"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ConfigState::from_lookup(lookup(&[])), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("INLIN_COMPANY_NAME", "Acme"),
            ("INLIN_CURRENCY_SYMBOL", "€"),
            ("INLIN_SEED", "false"),
        ]));

        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.currency_symbol, "€");
        assert!(!config.seed);
        assert_eq!(config.demo_password, "demo123");
    }

    #[test]
    fn test_unrecognized_seed_keeps_default() {
        let config = ConfigState::from_lookup(lookup(&[("INLIN_SEED", "maybe")]));
        assert!(config.seed);
    }
}
