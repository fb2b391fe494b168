use std::fmt;
use std::iter::Sum;

use thiserror::Error;

/// Symbol printed in front of every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Largest unit price accepted from the form or from storage (R$ 100.000.000,00).
pub const MAX_AMOUNT: Money = Money(10_000_000_000);

const NBSP: char = '\u{a0}';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("unexpected character '{0}' in amount")]
    InvalidCharacter(char),

    #[error("amount has no digits")]
    NoDigits,

    #[error("amount is too large")]
    TooLarge,
}

/// An amount of Brazilian reais, held in centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Line total for `quantity` units of this price.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Parse amount text the way the entry form reads it.
    ///
    /// Separators are dropped and the remaining digits are read as centavos,
    /// so `"2,50"`, `"250"` and `"R$ 2,50"` are all 250 centavos.
    pub fn parse(text: &str) -> Result<Money, AmountError> {
        let text = text.trim_matches(|c: char| c.is_whitespace() || c == NBSP);
        if text.is_empty() {
            return Err(AmountError::Empty);
        }

        let digits_part = text
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(text)
            .trim_start_matches(|c: char| c.is_whitespace() || c == NBSP);

        let mut centavos: i64 = 0;
        let mut seen_digit = false;
        for c in digits_part.chars() {
            match c {
                '.' | ',' => {}
                '0'..='9' => {
                    seen_digit = true;
                    centavos = centavos
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(c as u8 - b'0')))
                        .ok_or(AmountError::TooLarge)?;
                }
                other => return Err(AmountError::InvalidCharacter(other)),
            }
        }

        if !seen_digit {
            return Err(AmountError::NoDigits);
        }

        Ok(Money(centavos))
    }

    /// Whether the text carries the currency symbol, i.e. was produced by
    /// [`Money::formatted`] rather than typed into the form.
    pub fn is_formatted(text: &str) -> bool {
        text.trim_start_matches(|c: char| c.is_whitespace() || c == NBSP)
            .starts_with(CURRENCY_SYMBOL)
    }

    /// pt-BR currency rendering, e.g. `R$ 1.234,56` (NBSP after the symbol).
    pub fn formatted(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = group_thousands(abs / 100);
        format!("{sign}{CURRENCY_SYMBOL}{NBSP}{reais},{:02}", abs % 100)
    }

    /// Storage rendering: decimal comma, no symbol, no grouping, e.g. `1234,56`.
    pub fn plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{},{:02}", abs / 100, abs % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}
