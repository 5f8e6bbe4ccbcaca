//! Currency code type.
//!
//! Codes are free-form: no ISO 4217 list is enforced, so callers can use
//! any identifier their exchange rates know about.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "CAD";

/// A currency code (e.g., "CAD", "USD").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Canadian dollar.
    #[must_use]
    pub fn cad() -> Self {
        Self::new("CAD")
    }

    /// US dollar.
    #[must_use]
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Currency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim()))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Currency {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::cad().to_string(), "CAD");
        assert_eq!(Currency::usd().to_string(), "USD");
        assert_eq!(format!("{}", Currency::new("XBT")), "XBT");
    }

    #[test]
    fn test_currency_default_is_cad() {
        assert_eq!(Currency::default(), Currency::cad());
        assert_eq!(Currency::default(), DEFAULT_CURRENCY);
    }

    #[test]
    fn test_currency_from_str_keeps_code_verbatim() {
        assert_eq!(Currency::from_str(" USD ").unwrap(), Currency::usd());
        // No ISO validation and no case folding.
        assert_eq!(Currency::from_str("usd").unwrap().as_str(), "usd");
        assert_ne!(Currency::from("usd"), Currency::usd());
    }

    #[test]
    fn test_currency_serde_is_transparent() {
        let json = serde_json::to_string(&Currency::cad()).unwrap();
        assert_eq!(json, "\"CAD\"");

        let back: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(back, Currency::usd());
    }
}
