//! Validated Gregorian birth date with hour, and the double-hour mapping.
//!
//! `GregorianDate` is the only external input to the chart pipeline. It is
//! checked once on construction; downstream code never re-validates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::sexagenary::EarthlyBranch;

/// Gregorian calendar date with the hour of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    date: NaiveDate,
    hour: u32,
}

impl GregorianDate {
    /// Validate and build a date. Rejects impossible days (e.g. Feb 30)
    /// and hours above 23.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CalendarError::InvalidInput(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            ))
        })?;
        Self::from_naive(date, hour)
    }

    /// Build from an already-valid `NaiveDate`.
    pub fn from_naive(date: NaiveDate, hour: u32) -> Result<Self, CalendarError> {
        check_hour(hour)?;
        Ok(Self { date, hour })
    }

    /// Parse a `YYYY-MM-DD` string and attach an hour.
    pub fn parse(date: &str, hour: u32) -> Result<Self, CalendarError> {
        let date = parse_ymd(date)?;
        Self::from_naive(date, hour)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The calendar day without the hour.
    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }

    /// Double-hour branch of the birth hour. Infallible because the hour
    /// was validated on construction.
    pub fn hour_branch(&self) -> EarthlyBranch {
        branch_for_valid_hour(self.hour)
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}h", self.date.format("%Y-%m-%d"), self.hour)
    }
}

/// A date-only `FromStr`, hour defaults to 0 (Zi).
impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 0)
    }
}

/// Map a clock hour to its double-hour (时辰) branch.
///
/// Zi spans 23:00–00:59, Chou 01:00–02:59, … Hai 21:00–22:59. The 23:00
/// hour keeps the civil date; it is not rolled into the next day.
pub fn hour_branch(hour: u32) -> Result<EarthlyBranch, CalendarError> {
    check_hour(hour)?;
    Ok(branch_for_valid_hour(hour))
}

fn branch_for_valid_hour(hour: u32) -> EarthlyBranch {
    if hour >= 23 {
        EarthlyBranch::Zi
    } else {
        EarthlyBranch::from_index(((hour + 1) / 2) as u8)
    }
}

fn check_hour(hour: u32) -> Result<(), CalendarError> {
    if hour > 23 {
        return Err(CalendarError::InvalidInput(format!(
            "hour {hour} outside 0..=23"
        )));
    }
    Ok(())
}

fn parse_ymd(s: &str) -> Result<NaiveDate, CalendarError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidInput(format!("date {s:?}: {e}")))
}
