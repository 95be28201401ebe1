//! Type-safe price representation using decimal arithmetic.
//!
//! Cart lines carry prices as integer minor units (cents). [`Price`] turns
//! those into a decimal amount in the currency's standard unit for display.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when a currency code is not supported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyError(pub String);

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in minor units (e.g., cents).
    ///
    /// ```
    /// use vitrine_core::{CurrencyCode, Price};
    ///
    /// let price = Price::from_minor_units(1999, CurrencyCode::USD);
    /// assert_eq!(price.display(), "$19.99");
    /// ```
    #[must_use]
    pub fn from_minor_units(minor: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(minor, currency_code.minor_unit_exponent()),
            currency_code,
        }
    }

    /// Format for display (e.g., "$19.99", "-€5.00").
    #[must_use]
    pub fn display(&self) -> String {
        let places = self.currency_code.minor_unit_exponent() as usize;
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{:.places$}",
            self.currency_code.symbol(),
            self.amount.abs()
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    BRL,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::BRL => "R$",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::BRL => "BRL",
        }
    }

    /// Number of decimal places between the minor and standard unit.
    #[must_use]
    pub const fn minor_unit_exponent(&self) -> u32 {
        2
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "BRL" => Ok(Self::BRL),
            _ => Err(CurrencyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let price = Price::from_minor_units(10000, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(100, 0));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(
            Price::from_minor_units(500, CurrencyCode::EUR).display(),
            "€5.00"
        );
        assert_eq!(Price::from_minor_units(7, CurrencyCode::GBP).display(), "£0.07");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(
            Price::from_minor_units(-250, CurrencyCode::USD).display(),
            "-$2.50"
        );
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Price::from_minor_units(0, CurrencyCode::BRL).display(), "R$0.00");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" BRL ".parse::<CurrencyCode>().unwrap(), CurrencyCode::BRL);
        assert_eq!(
            "XYZ".parse::<CurrencyCode>(),
            Err(CurrencyError("XYZ".to_owned()))
        );
    }

    #[test]
    fn test_currency_display_is_code() {
        assert_eq!(CurrencyCode::CAD.to_string(), "CAD");
    }
}
