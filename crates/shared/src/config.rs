//! Money configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Money configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoneyConfig {
    /// Currency given to amounts created without one.
    #[serde(default)]
    pub default_currency: Currency,
    /// Exchange bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
}

/// Exchange bank configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankConfig {
    /// Which bank to install.
    #[serde(default)]
    pub kind: BankKind,
    /// Rates registered on a variable bank.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

/// Available bank strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankKind {
    /// Refuses every cross-currency conversion.
    #[default]
    NoExchange,
    /// Converts through a table of pairwise rates.
    Variable,
}

/// A single directed exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
    /// 1 `from` = `rate` `to`.
    pub rate: Decimal,
}

impl MoneyConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CENTAVO").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid configuration.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
