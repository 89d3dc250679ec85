//! Packed month-length table for Chinese lunar years 1900–2049.
//!
//! One 17-bit word per lunar year:
//! - bits 0..=3: leap month number (0 = no leap month)
//! - bits 15..=4: length of months 1..=12 (bit 15 = month 1); set = 30 days, clear = 29
//! - bit 16: length of the leap month; set = 30 days, clear = 29
//!
//! Lunar 1900-01-01 falls on Gregorian 1900-01-31.

/// First lunar year covered by the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last lunar year covered by the table.
pub const LAST_LUNAR_YEAR: i32 = 2049;

/// Gregorian (year, month, day) of lunar `FIRST_LUNAR_YEAR`-01-01.
pub const EPOCH_YMD: (i32, u32, u32) = (1900, 1, 31);

#[rustfmt::skip]
const LUNAR_INFO: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
];

/// Shortest lunar year: 12 months of 29 days.
const MIN_YEAR_DAYS: u32 = 12 * 29;

fn word(year: i32) -> Option<u32> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return None;
    }
    LUNAR_INFO.get((year - FIRST_LUNAR_YEAR) as usize).copied()
}

/// Leap month of `year` (1..=12), `Some(0)` when the year has none,
/// `None` outside the table.
pub fn leap_month(year: i32) -> Option<u8> {
    word(year).map(|w| (w & 0xf) as u8)
}

/// Length of regular month `month` (1..=12) of `year`.
pub fn regular_month_days(year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    word(year).map(|w| if w & (0x10000 >> month) != 0 { 30 } else { 29 })
}

/// Length of the leap month of `year`; `Some(0)` when there is none.
pub fn leap_month_days(year: i32) -> Option<u8> {
    let w = word(year)?;
    if w & 0xf == 0 {
        return Some(0);
    }
    Some(if w & 0x10000 != 0 { 30 } else { 29 })
}

/// Total days in lunar `year`, leap month included.
pub fn year_days(year: i32) -> Option<u32> {
    let w = word(year)?;
    let long_months = (w >> 4) & 0xfff;
    let leap = leap_month_days(year)? as u32;
    Some(MIN_YEAR_DAYS + long_months.count_ones() + leap)
}

/// One month of a lunar year in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthSpan {
    /// Month number, 1..=12. A leap month repeats the preceding number.
    pub month: u8,
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u8,
}

/// Months of `year` in order; the leap month directly follows the regular
/// month whose number it shares. Empty outside the table.
pub fn months_of(year: i32) -> impl Iterator<Item = LunarMonthSpan> {
    let leap = leap_month(year).unwrap_or(0);
    let leap_days = leap_month_days(year).unwrap_or(0);
    let covered = word(year).is_some();
    (1..=12u8)
        .filter(move |_| covered)
        .flat_map(move |month| {
            let regular = LunarMonthSpan {
                month,
                is_leap: false,
                days: regular_month_days(year, month).unwrap_or(29),
            };
            let intercalary = (leap == month).then_some(LunarMonthSpan {
                month,
                is_leap: true,
                days: leap_days,
            });
            std::iter::once(regular).chain(intercalary)
        })
}
