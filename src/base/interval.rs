use crate::base;
use crate::base::date::Datepart;

/// Inclusive range of dates. Contains nothing when `start` is after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl Interval {
    /// Every representable date.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    #[cfg(test)]
    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    /// The whole calendar unit around `dt`.
    fn spanning(dt: base::Date, part: Datepart) -> Self {
        Self {
            start: dt.first_of(part),
            end: dt.last_of(part),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid start date")]
    Start(#[source] base::date::ParseError),
    #[error("invalid end date")]
    End(#[source] base::date::ParseError),
}

/// Parses one side of `A:B`, where blank means unbounded.
fn bound(s: &str, unbounded: base::Date) -> Result<base::Date, base::date::ParseError> {
    match s.trim() {
        "" => Ok(unbounded),
        s => s.parse(),
    }
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Parses `A:B` where either side is a date or blank. Without a colon, a
    /// relative year or month date expands to that whole year or month (`m`
    /// is the current month) and any other date to that single day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((left, right)) = s.split_once(':') {
            return Ok(Self {
                start: bound(left, base::Date::MIN).map_err(ParseError::Start)?,
                end: bound(right, base::Date::MAX).map_err(ParseError::End)?,
            });
        }
        let dt = s.parse::<base::Date>()?;
        let part = match s.trim_start().chars().next() {
            Some('y' | 'Y') => Datepart::Year,
            Some('m' | 'M') => Datepart::Month,
            _ => Datepart::Day,
        };
        Ok(Self::spanning(dt, part))
    }
}

impl TryFrom<&str> for Interval {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
