//! Currency display formatting.
//!
//! The format is an explicit value rather than process locale, so the same
//! inputs always render the same text.

use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use theater_core::Money;

const FRACTION_DIGITS_SCALE: u128 = 100;

/// How to display an amount of money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Minor units per major unit (100 cents to the dollar).
    pub minor_unit_factor: NonZeroU64,
}

impl CurrencyFormat {
    pub const DEFAULT_MINOR_UNIT_FACTOR: NonZeroU64 = match NonZeroU64::new(100) {
        Some(factor) => factor,
        None => unreachable!(),
    };

    /// US dollars: `$1,234.56`.
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ',',
            decimal_separator: '.',
            minor_unit_factor: Self::DEFAULT_MINOR_UNIT_FACTOR,
        }
    }

    /// Render `amount` with digit grouping and exactly two fraction digits.
    ///
    /// When the minor unit factor is not 100 the value is rounded half to even
    /// at the second fraction digit.
    pub fn format(&self, amount: Money) -> String {
        let hundredths = self.to_hundredths(amount);
        let whole = hundredths / FRACTION_DIGITS_SCALE;
        let fraction = hundredths % FRACTION_DIGITS_SCALE;

        format!(
            "{}{}{}{:02}",
            self.symbol,
            self.group_digits(whole),
            self.decimal_separator,
            fraction
        )
    }

    fn to_hundredths(&self, amount: Money) -> u128 {
        let scaled = u128::from(amount.minor_units()) * FRACTION_DIGITS_SCALE;
        let factor = u128::from(self.minor_unit_factor.get());
        let quotient = scaled / factor;
        let twice_remainder = (scaled % factor) * 2;

        match twice_remainder.cmp(&factor) {
            core::cmp::Ordering::Greater => quotient + 1,
            core::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
            _ => quotient,
        }
    }

    fn group_digits(&self, whole: u128) -> String {
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}
