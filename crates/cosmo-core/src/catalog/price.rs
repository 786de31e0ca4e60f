//! Exact currency amounts.
//!
//! Catalog prices arrive as display text (`"$299.99"`) and the personalization
//! service sends them as JSON numbers (`299.99`). Both are normalized into
//! integer cents so that sums are exact.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CosmoError, Result};

/// Currency symbol used by the storefront when rendering prices.
pub const CURRENCY_SYMBOL: char = '$';

/// A non-negative currency amount stored as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    /// The zero amount, used as the total of an empty cart.
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Parses currency-formatted text such as `"$19.99"`, `"19.9"`, `"1,299"`.
    ///
    /// Extra fractional digits round half away from zero, the same way
    /// [`Price::from_f64`] treats numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || CosmoError::InvalidPrice(text.to_string());

        let trimmed = text.trim();
        let amount = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim()
            .replace(',', "");

        let (whole, fraction) = amount.split_once('.').unwrap_or((amount.as_str(), ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| u64::from(b - b'0'));
        let round_up = u64::from(digit(2) >= 5);
        let fraction_cents = digit(0) * 10 + digit(1) + round_up;

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    /// Converts a floating point amount (as sent over JSON) into cents,
    /// rounding half away from zero.
    pub fn from_f64(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 || amount > (u64::MAX / 100) as f64 {
            return Err(CosmoError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::from_cents((amount * 100.0).round() as u64))
    }

    /// Renders the amount with the storefront currency symbol, e.g. `"$79.99"`.
    pub fn display_with_symbol(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = CosmoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Sums saturate at the largest representable amount.
impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Wire forms a price may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match PriceRepr::deserialize(deserializer)? {
            PriceRepr::Number(amount) => Price::from_f64(amount),
            PriceRepr::Text(text) => Price::parse(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
