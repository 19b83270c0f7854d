/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
///
/// Serialized as `yyyy-mm-dd`. Deserialization accepts nothing else, while
/// [`str::parse`] also accepts relative dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(into = "String")]
pub struct Date(time::Date);

/// Calendar unit used by relative dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datepart {
    Year,
    Month,
    Day,
}

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000-01-01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999-12-31));

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| {
            log::debug!("local offset is indeterminate, falling back to UTC");
            time::OffsetDateTime::now_utc()
        });
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    /// Parses exactly `yyyy-mm-dd`, with no surrounding whitespace.
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        time::Date::parse(s, fmt)
            .map_err(ParseError::BadFormat)
            .and_then(|x| Self::new(x).ok_or(ParseError::OutOfRange))
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            2 if time::util::is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn first_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
            Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    pub fn last_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
            Datepart::Month => Self::from_ymd(
                self.year(),
                self.month(),
                Self::days_in_month(self.year(), self.month()),
            )
            .expect("final day of month should be computed correctly"),
        }
    }

    /// Offsets the given date by the given datepart, returning `None` if the
    /// resultant date is out of bounds.
    ///
    /// When shifting by years or months, clamps the resultant date's day to the
    /// resultant month's last-day-of-month. For example, if the original date
    /// is a Feb 29, shifting by 1 year will yield the next year's Feb 28.
    pub fn shift(self, part: Datepart, offset: i32) -> Option<Self> {
        let (y, m) = match part {
            Datepart::Day => {
                return self
                    .0
                    .checked_add(time::Duration::days(offset as i64))
                    .and_then(Self::new);
            }
            Datepart::Year => (self.year().checked_add(offset)?, self.month()),
            Datepart::Month => {
                let total = self.year() as i64 * 12 + (self.month() as i64 - 1) + offset as i64;
                (
                    i32::try_from(total.div_euclid(12)).ok()?,
                    total.rem_euclid(12) as u8 + 1,
                )
            }
        };
        if !(0..=9999).contains(&y) {
            return None;
        }
        Self::from_ymd(y, m, self.day().min(Self::days_in_month(y, m)))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{y, Y, m, M, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{y, Y, m, M, d, D}` and `n` is an optional
    ///   signed integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        let mut chars = s.chars();
        let first = chars.next().ok_or(Self::Err::Empty)?;
        let rest = chars.as_str();
        let offset = if rest.is_empty() {
            0
        } else {
            rest.parse::<i32>()?
        };
        let today = Self::today();
        match first {
            'd' | 'D' => today.shift(Datepart::Day, offset),
            'y' => today.first_of(Datepart::Year).shift(Datepart::Year, offset),
            'Y' => today.last_of(Datepart::Year).shift(Datepart::Year, offset),
            'm' => today
                .first_of(Datepart::Month)
                .shift(Datepart::Month, offset),
            'M' => today
                .shift(Datepart::Month, offset)
                .map(|dt| dt.last_of(Datepart::Month)),
            _ => return Err(Self::Err::InvalidFirstChar),
        }
        .ok_or(Self::Err::OutOfRange)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_iso(&s).map_err(|e| {
            serde::de::Error::custom(format_args!("invalid date {:?}: {}", s, e))
        })
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
