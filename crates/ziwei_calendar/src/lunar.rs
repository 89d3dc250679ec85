//! Gregorian ↔ Chinese lunisolar date conversion.
//!
//! Table-driven: the day offset from lunar 1900-01-01 is consumed whole
//! lunar years at a time, then month by month in calendar order (leap month
//! right after its namesake). The remainder is the 0-based day in the month.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::lunar_data::{
    self, EPOCH_YMD, FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LunarMonthSpan, months_of, year_days,
};

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap: bool,
}

impl LunarDate {
    /// Validate against the month table.
    pub fn new(year: i32, month: u8, day: u8, is_leap: bool) -> Result<Self, CalendarError> {
        let days = month_length(year, month, is_leap)?;
        if day == 0 || day > days {
            return Err(CalendarError::InvalidInput(format!(
                "lunar day {day} outside 1..={days} for {year}-{}{month:02}",
                if is_leap { "leap " } else { "" }
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1..=12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// 1..=30, never beyond the month's real length.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// True only inside the year's intercalary month.
    pub fn is_leap(&self) -> bool {
        self.is_leap
    }

    /// Sort key of the month within its year; `false < true` puts a leap
    /// month after its namesake.
    fn ordinal_month(&self) -> (u8, bool) {
        (self.month, self.is_leap)
    }
}

/// Calendar order: year, then month, leap month after its namesake, then day.
impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.ordinal_month().cmp(&other.ordinal_month()))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_leap {
            write!(f, "{}-L{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

fn epoch() -> NaiveDate {
    let (y, m, d) = EPOCH_YMD;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn total_table_days() -> u64 {
    (FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR)
        .filter_map(year_days)
        .map(u64::from)
        .sum()
}

/// First and last Gregorian dates the converter covers (inclusive).
pub fn supported_range() -> (NaiveDate, NaiveDate) {
    let first = epoch();
    let last = first
        .checked_add_days(Days::new(total_table_days() - 1))
        .unwrap_or(first);
    (first, last)
}

fn out_of_range(date: NaiveDate) -> CalendarError {
    let (first, last) = supported_range();
    CalendarError::UnsupportedDateRange { date, first, last }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return Err(CalendarError::UnsupportedLunarYear {
            year,
            first: FIRST_LUNAR_YEAR,
            last: LAST_LUNAR_YEAR,
        });
    }
    Ok(())
}

/// Leap month of a lunar year, `None` when it has none.
pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
    check_year(year)?;
    Ok(lunar_data::leap_month(year).filter(|&m| m != 0))
}

/// Days in one lunar month (29 or 30).
pub fn month_length(year: i32, month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    check_year(year)?;
    months_of(year)
        .find(|span| span.month == month && span.is_leap == is_leap)
        .map(|span| span.days)
        .ok_or_else(|| {
            CalendarError::InvalidInput(format!(
                "lunar year {year} has no {}month {month}",
                if is_leap { "leap " } else { "" }
            ))
        })
}

/// Days in a lunar year, leap month included.
pub fn year_length(year: i32) -> Result<u32, CalendarError> {
    check_year(year)?;
    year_days(year).ok_or(CalendarError::UnsupportedLunarYear {
        year,
        first: FIRST_LUNAR_YEAR,
        last: LAST_LUNAR_YEAR,
    })
}

/// Convert a Gregorian date to its lunisolar date. The hour is ignored.
pub fn to_lunar(date: &GregorianDate) -> Result<LunarDate, CalendarError> {
    solar_to_lunar(date.naive_date())
}

/// Convert a bare `NaiveDate` to its lunisolar date.
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    let offset = date.signed_duration_since(epoch()).num_days();
    if offset < 0 {
        return Err(out_of_range(date));
    }
    let mut remaining = offset as u64;

    for year in FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR {
        let days = u64::from(year_days(year).unwrap_or(0));
        if remaining >= days {
            remaining -= days;
            continue;
        }
        for LunarMonthSpan {
            month,
            is_leap,
            days,
        } in months_of(year)
        {
            let days = u64::from(days);
            if remaining < days {
                let lunar = LunarDate {
                    year,
                    month,
                    day: remaining as u8 + 1,
                    is_leap,
                };
                trace!(%date, %lunar, "solar to lunar");
                return Ok(lunar);
            }
            remaining -= days;
        }
    }
    Err(out_of_range(date))
}

/// Convert a lunisolar date back to its Gregorian day.
pub fn to_solar(lunar: &LunarDate) -> Result<NaiveDate, CalendarError> {
    let mut offset: u64 = (FIRST_LUNAR_YEAR..lunar.year)
        .filter_map(year_days)
        .map(u64::from)
        .sum();
    offset += months_of(lunar.year)
        .take_while(|span| (span.month, span.is_leap) != (lunar.month, lunar.is_leap))
        .map(|span| u64::from(span.days))
        .sum::<u64>();
    offset += u64::from(lunar.day - 1);

    epoch()
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| CalendarError::InvalidInput(format!("lunar date {lunar} overflows")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunar_of(y: i32, m: u32, d: u32) -> LunarDate {
        solar_to_lunar(ymd(y, m, d)).unwrap()
    }

    #[test]
    fn epoch_is_first_day() {
        let l = lunar_of(1900, 1, 31);
        assert_eq!((l.year, l.month, l.day, l.is_leap), (1900, 1, 1, false));
    }

    #[test]
    fn day_before_epoch_unsupported() {
        let err = solar_to_lunar(ymd(1900, 1, 30)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedDateRange { .. }));
    }

    #[test]
    fn range_end() {
        let (first, last) = supported_range();
        assert_eq!(first, ymd(1900, 1, 31));
        assert_eq!(last, ymd(2050, 1, 22));
        let l = solar_to_lunar(last).unwrap();
        assert_eq!((l.year, l.month, l.day), (2049, 12, 29));
        assert!(solar_to_lunar(ymd(2050, 1, 23)).is_err());
    }

    #[test]
    fn last_day_of_lunar_year() {
        let l = lunar_of(1985, 1, 20);
        assert_eq!((l.year, l.month, l.day, l.is_leap), (1984, 11, 30, false));
    }

    #[test]
    fn new_moon_starts_new_month() {
        // 2020 leap 4th month begins 2020-05-23
        let before = lunar_of(2020, 5, 22);
        assert_eq!((before.month, before.is_leap), (4, false));
        let first = lunar_of(2020, 5, 23);
        assert_eq!((first.month, first.day, first.is_leap), (4, 1, true));
    }

    #[test]
    fn leap_month_then_regular() {
        let last_leap = lunar_of(2020, 6, 20);
        assert_eq!((last_leap.month, last_leap.day, last_leap.is_leap), (4, 29, true));
        let next = lunar_of(2020, 6, 21);
        assert_eq!((next.month, next.day, next.is_leap), (5, 1, false));
    }

    #[test]
    fn lunar_new_constructor_validates() {
        assert!(LunarDate::new(2020, 4, 29, true).is_ok());
        assert!(LunarDate::new(2020, 5, 1, true).is_err());
        assert!(LunarDate::new(2000, 1, 0, false).is_err());
        assert!(LunarDate::new(2000, 13, 1, false).is_err());
        assert!(LunarDate::new(1899, 1, 1, false).is_err());
    }

    #[test]
    fn to_solar_inverts() {
        for (y, m, d) in [(1990, 5, 15), (1985, 1, 20), (2020, 5, 23), (2023, 4, 19)] {
            let date = ymd(y, m, d);
            let lunar = solar_to_lunar(date).unwrap();
            assert_eq!(to_solar(&lunar).unwrap(), date);
        }
    }

    #[test]
    fn accessors_report_validated_fields() {
        let l = LunarDate::new(2023, 2, 29, true).unwrap();
        assert_eq!((l.year(), l.month(), l.day(), l.is_leap()), (2023, 2, 29, true));
        assert_eq!(to_solar(&l).unwrap(), ymd(2023, 4, 19));
    }

    #[test]
    fn ordering_puts_leap_after_namesake() {
        let regular = LunarDate::new(2020, 4, 29, false).unwrap();
        let leap = LunarDate::new(2020, 4, 1, true).unwrap();
        let fifth = LunarDate::new(2020, 5, 1, false).unwrap();
        assert!(regular < leap);
        assert!(leap < fifth);
    }

    #[test]
    fn leap_month_query() {
        assert_eq!(leap_month(2023).unwrap(), Some(2));
        assert_eq!(leap_month(2000).unwrap(), None);
        assert!(leap_month(2050).is_err());
    }

    #[test]
    fn display_marks_leap() {
        let l = LunarDate::new(2020, 4, 1, true).unwrap();
        assert_eq!(l.to_string(), "2020-L04-01");
        let r = LunarDate::new(1990, 4, 21, false).unwrap();
        assert_eq!(r.to_string(), "1990-04-21");
    }
}
