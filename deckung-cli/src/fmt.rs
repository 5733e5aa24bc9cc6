use std::fmt::{Debug, Display, Formatter};

use deckung_quantities::money::Francs;
use itertools::Itertools;

/// Swiss-style amount: apostrophe as the thousands separator, for example `25'000.00`.
pub struct FormattedAmount {
    pub value: f64,
    pub precision: usize,
}

impl FormattedAmount {
    pub fn cents(amount: Francs) -> Self {
        Self { value: amount.into(), precision: 2 }
    }

    pub fn whole(amount: Francs) -> Self {
        Self { value: amount.into(), precision: 0 }
    }
}

impl Debug for FormattedAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits = format!("{:.*}", self.precision, self.value.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let grouped = integer
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| chunk.iter().copied().map(char::from).collect::<String>())
            .join("'");
        let is_zero = digits.bytes().all(|byte| matches!(byte, b'0' | b'.'));
        if self.value.is_sign_negative() && !is_zero {
            f.write_str("-")?;
        }
        f.write_str(&grouped)?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_ok() {
        assert_eq!(FormattedAmount::cents(Francs::from(25_000)).to_string(), "25'000.00");
        assert_eq!(FormattedAmount::cents(Francs::from(1_234_567.891)).to_string(), "1'234'567.89");
        assert_eq!(FormattedAmount::cents(Francs::from(350)).to_string(), "350.00");
        assert_eq!(FormattedAmount::cents(Francs::ZERO).to_string(), "0.00");
    }

    #[test]
    fn whole_ok() {
        assert_eq!(FormattedAmount::whole(Francs::from(100_000)).to_string(), "100'000");
        assert_eq!(FormattedAmount::whole(Francs::from(999.6)).to_string(), "1'000");
    }

    #[test]
    fn negative_ok() {
        assert_eq!(FormattedAmount::whole(Francs::from(-32_550)).to_string(), "-32'550");
        assert_eq!(FormattedAmount::cents(Francs::from(-0.001)).to_string(), "0.00");
    }
}
