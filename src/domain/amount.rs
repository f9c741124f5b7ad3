use std::fmt;
use std::ops::{Add, Sub};

/// Fixed-point money representation using i64 (multiply by 100)
/// Represents amounts in whole cents, matching the file formats' ×100 encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(i64);

impl Cents {
    const SCALE: i64 = 100;

    /// Create from raw scaled value (whole cents)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Truncating conversion from a float amount: `int(amount * 100)`.
    ///
    /// Truncation happens exactly once, at record generation time, so
    /// aggregate totals built from `Cents` match the per-record encoded
    /// fields with no drift.
    pub fn from_f64_truncated(amount: f64) -> Self {
        Self((amount * Self::SCALE as f64) as i64)
    }

    /// Get raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Checked addition, returns None on overflow
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Zero value
    pub fn zero() -> Self {
        Self(0)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_value = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs_value / Self::SCALE,
            abs_value % Self::SCALE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(Cents::from_f64_truncated(1.0), Cents(100));
        assert_eq!(Cents::from_f64_truncated(1.239), Cents(123));
        assert_eq!(Cents::from_f64_truncated(0.999), Cents(99));
        assert_eq!(Cents::from_f64_truncated(0.0), Cents(0));
    }

    #[test]
    fn raw_round_trips() {
        assert_eq!(Cents::from_raw(12_345).raw(), 12_345);
    }

    #[test]
    fn checked_add_works() {
        let a = Cents(100);
        let b = Cents(50);
        assert_eq!(a.checked_add(b), Some(Cents(150)));
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Cents(i64::MAX);
        let one = Cents(1);
        assert_eq!(max.checked_add(one), None);
    }

    #[test]
    fn add_operator() {
        assert_eq!(Cents(100) + Cents(50), Cents(150));
    }

    #[test]
    fn sub_operator() {
        assert_eq!(Cents(100) - Cents(50), Cents(50));
    }

    #[test]
    fn display_formats_as_decimal() {
        assert_eq!(Cents(12_345).to_string(), "123.45");
        assert_eq!(Cents(5).to_string(), "0.05");
        assert_eq!(Cents(-150).to_string(), "-1.50");
        assert_eq!(Cents(0).to_string(), "0.00");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Cents::default(), Cents::zero());
    }

    #[test]
    fn totals_match_per_record_truncation() {
        // Summing truncated values must equal the encoded field sum exactly
        let amounts = [1.005, 2.999, 10.101, 0.004];
        let total = amounts
            .iter()
            .map(|&a| Cents::from_f64_truncated(a))
            .fold(Cents::zero(), |acc, c| acc + c);
        assert_eq!(total, Cents(100 + 299 + 1_010 + 0));
    }
}
