use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
///
/// Snapshots store amounts as plain JSON numbers (`12.99`), so the serde
/// representation is a float that is rounded to the nearest cent on the way
/// in. Parsed amounts are bounded by [`Cents::MAX`] so that they survive that
/// trip. Sums saturate instead of overflowing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    /// Largest magnitude accepted from user input or a snapshot. Every amount
    /// up to here round-trips through an `f64` count of units.
    pub const MAX: Self = Self(999_999_999_999_999);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let mut len = base::util::count_digits(self.0.unsigned_abs() / 100);
        len += 3; // decimal point and cents
        if self.0 < 0 {
            len += 1; // minus sign
        }
        len
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `self / total`, or zero if `total` is zero.
    pub fn ratio(self, total: Self) -> f64 {
        if total.0 == 0 {
            0.0
        } else {
            self.0 as f64 / total.0 as f64
        }
    }
}

impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with exactly two decimal places and no thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let s = format!("{}{}.{:02}", sign, n / 100, n % 100);
        f.pad(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is too large")]
    Overflow(String),
}

impl std::str::FromStr for Cents {
    type Err = ParseError;

    /// Parses a decimal quantity, which may contain comma thousands
    /// separators and any number of decimal places. Decimal places beyond the
    /// second are rounded half away from zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let cleaned = s.replace(',', "");
        let (negative, body) = match cleaned.as_bytes().first() {
            Some(b'-') => (true, &cleaned[1..]),
            Some(b'+') => (false, &cleaned[1..]),
            _ => (false, cleaned.as_str()),
        };
        let (int, frac) = body.split_once('.').unwrap_or((body, ""));
        let is_digits = |x: &str| x.bytes().all(|b| b.is_ascii_digit());
        if (int.is_empty() && frac.is_empty()) || !is_digits(int) || !is_digits(frac) {
            return Err(ParseError::NotANumber(s.to_string()));
        }

        let overflow = || ParseError::Overflow(s.to_string());
        let whole = match int.trim_start_matches('0') {
            "" => 0,
            digits => digits.parse::<i64>().map_err(|_| overflow())?,
        };
        let mut digits = frac.bytes().map(|b| (b - b'0') as i64);
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5) as i64;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + round_up))
            .filter(|&c| c <= Self::MAX.0)
            .ok_or_else(overflow)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl serde::Serialize for Cents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> serde::Deserialize<'de> for Cents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let x = <f64 as serde::Deserialize>::deserialize(deserializer)?;
        let cents = (x * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX.0 as f64 {
            return Err(serde::de::Error::custom(format!(
                "amount {} is out of range",
                x
            )));
        }
        Ok(Self(cents as i64))
    }
}
