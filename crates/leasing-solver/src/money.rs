use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Signed currency amount held in integer minor units (cents).
///
/// Rent deltas are compared for exact equality, so amounts never pass through
/// floating point once they are inside the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    /// Largest magnitude accepted from callers, one trillion dollars. Sums of a
    /// handful of amounts this size stay far inside `i64`.
    pub const LIMIT: Money = Money(100_000_000_000_000);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn within_limit(self) -> bool {
        self.0.unsigned_abs() <= Self::LIMIT.0.unsigned_abs()
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    fn from_major_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{raw}' is not a valid currency amount")]
pub struct MoneyParseError {
    raw: String,
}

impl MoneyParseError {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || fraction.len() > 2
            || !all_digits(whole)
            || !all_digits(fraction)
        {
            return Err(MoneyParseError::new(raw));
        }

        let whole_cents = if whole.is_empty() {
            Some(0)
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|value| value.checked_mul(100))
        };
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or_default() * 10,
            _ => fraction.parse::<i64>().unwrap_or_default(),
        };

        let cents = whole_cents
            .and_then(|value| value.checked_add(fraction_cents))
            .ok_or_else(|| MoneyParseError::new(raw))?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a currency amount as a number or decimal string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Money, E> {
        value
            .checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount {value} is out of range")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Money, E> {
        let signed = i64::try_from(value)
            .map_err(|_| E::custom(format!("amount {value} is out of range")))?;
        self.visit_i64(signed)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Money, E> {
        Money::from_major_f64(value)
            .ok_or_else(|| E::custom(format!("amount {value} is not a finite currency value")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
        value.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_currency_spellings() {
        assert_eq!("175".parse::<Money>(), Ok(Money::from_cents(17_500)));
        assert_eq!("-12.5".parse::<Money>(), Ok(Money::from_cents(-1_250)));
        assert_eq!("$1,200.00".parse::<Money>(), Ok(Money::from_cents(120_000)));
        assert_eq!("-$3.07".parse::<Money>(), Ok(Money::from_cents(-307)));
        assert_eq!(".75".parse::<Money>(), Ok(Money::from_cents(75)));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "-", "$", "12.345", "1.2.3", "abc", "12a", "--4"] {
            assert!(raw.parse::<Money>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn display_always_prints_two_decimals() {
        assert_eq!(Money::from_cents(-1_250).to_string(), "-12.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_dollars(200).to_string(), "200.00");
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: Vec<Money> =
            serde_json::from_str(r#"[200, -100, 12.34, "-$5.10"]"#).expect("amounts parse");
        assert_eq!(
            values,
            vec![
                Money::from_dollars(200),
                Money::from_dollars(-100),
                Money::from_cents(1_234),
                Money::from_cents(-510),
            ]
        );

        assert!(serde_json::from_str::<Money>(r#""twelve""#).is_err());
        assert!(serde_json::from_str::<Money>("true").is_err());
    }

    #[test]
    fn arithmetic_saturates_instead_of_wrapping() {
        let huge = Money::from_cents(i64::MAX - 5);
        assert_eq!(huge + Money::from_dollars(1), Money::from_cents(i64::MAX));
        assert_eq!(-huge - Money::from_dollars(1), Money::from_cents(i64::MIN));
        assert_eq!(Money::from_cents(i64::MIN).abs(), Money::from_cents(i64::MAX));
        assert!(!huge.within_limit());
        assert!(Money::LIMIT.within_limit());
        assert!((-Money::LIMIT).within_limit());
        assert!(!(Money::LIMIT + Money::from_cents(1)).within_limit());
    }

    #[test]
    fn serializes_in_major_units() {
        let json = serde_json::to_string(&Money::from_cents(-1_250)).expect("serializes");
        assert_eq!(json, "-12.5");
    }

    #[test]
    fn sums_borrowed_and_owned_amounts() {
        let amounts = [Money::from_dollars(120), Money::from_dollars(80)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_dollars(200));
        assert_eq!(
            amounts.into_iter().map(Neg::neg).sum::<Money>(),
            Money::from_dollars(-200)
        );
    }
}
