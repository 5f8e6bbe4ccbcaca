//! Human-readable money formatting.

use std::fmt::Write as _;
use std::str::FromStr;

use centavo_shared::MoneyError;
use rust_decimal::Decimal;

use super::value::Money;

/// Rendered in place of any zero amount.
pub const FREE: &str = "free";

/// A formatting rule. Rules combine freely and their order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatRule {
    /// Whole dollars only, truncated toward zero.
    NoCents,
    /// Append the currency code after the amount.
    WithCurrency,
    /// Wrap the currency code in a `<span class="currency">` element.
    Html,
}

impl FromStr for FormatRule {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no_cents" => Ok(Self::NoCents),
            "with_currency" => Ok(Self::WithCurrency),
            "html" => Ok(Self::Html),
            _ => Err(MoneyError::Parse(format!("unknown format rule: {s}"))),
        }
    }
}

impl Money {
    /// Formats the amount according to `rules`.
    ///
    /// ```
    /// use centavo_core::{FormatRule, Money};
    ///
    /// assert_eq!(Money::ca_dollar(0).format(&[]), "free");
    /// assert_eq!(Money::ca_dollar(100).format(&[]), "$1.00");
    /// assert_eq!(
    ///     Money::ca_dollar(570).format(&[FormatRule::NoCents, FormatRule::WithCurrency]),
    ///     "$5 CAD"
    /// );
    /// ```
    #[must_use]
    pub fn format(&self, rules: &[FormatRule]) -> String {
        if self.is_zero() {
            return FREE.to_string();
        }

        let mut formatted = if rules.contains(&FormatRule::NoCents) {
            format!("${}", self.cents() / 100)
        } else {
            format!("${}", Decimal::new(self.cents(), 2))
        };

        if rules.contains(&FormatRule::WithCurrency) {
            formatted.push(' ');
            if rules.contains(&FormatRule::Html) {
                let _ = write!(formatted, "<span class=\"currency\">{}</span>", self.currency());
            } else {
                formatted.push_str(self.currency().as_str());
            }
        }

        formatted
    }
}
