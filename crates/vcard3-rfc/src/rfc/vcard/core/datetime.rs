//! vCard date, time and timezone types (RFC 2426 §3.1.5, §3.4.1, §3.6.4).

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::error::BuildError;
use super::text::RawText;

/// Birth date (`BDAY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    /// Whether the entry carried an explicit `VALUE=date` marker.
    pub value_date: bool,
    pub date: NaiveDate,
}

impl Birthday {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            value_date: false,
            date,
        }
    }

    /// Creates a birthday printed with the `VALUE=date` marker.
    #[must_use]
    pub fn with_marker(date: NaiveDate) -> Self {
        Self {
            value_date: true,
            date,
        }
    }
}

/// Time component of a revision timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevTime {
    pub time: NaiveTime,
    /// Trailing `Z` designator.
    pub utc: bool,
}

/// Last revision timestamp (`REV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub date: NaiveDate,
    pub time: Option<RevTime>,
}

impl Revision {
    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    #[must_use]
    pub fn utc(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(RevTime { time, utc: true }),
        }
    }
}

/// Signed offset from UTC, e.g. `-05:00`.
///
/// The sign is kept separately so `-00:00` survives a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    negative: bool,
    hours: u8,
    minutes: u8,
}

impl UtcOffset {
    /// ## Errors
    /// Returns `BuildError::OffsetOutOfRange` if `hours > 23` or
    /// `minutes > 59`.
    pub fn new(negative: bool, hours: u8, minutes: u8) -> Result<Self, BuildError> {
        if hours > 23 || minutes > 59 {
            return Err(BuildError::OffsetOutOfRange { hours, minutes });
        }
        Ok(Self {
            negative,
            hours,
            minutes,
        })
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Returns the offset in seconds east of UTC.
    #[must_use]
    pub fn total_seconds(self) -> i32 {
        let magnitude = i32::from(self.hours) * 3600 + i32::from(self.minutes) * 60;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{sign}{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Time zone (`TZ`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZone {
    /// `TZ;VALUE=text:...`, kept verbatim.
    Text(RawText),
    /// `TZ:-05:00`.
    Offset(UtcOffset),
}
