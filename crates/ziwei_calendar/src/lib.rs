//! Chinese lunisolar calendar primitives for Zi Wei Dou Shu charting.
//!
//! This crate provides:
//! - `GregorianDate`, a validated birth date with hour
//! - Double-hour (时辰) branch mapping
//! - Table-driven Gregorian ↔ lunisolar conversion for lunar years 1900–2049
//! - Heavenly stem / earthly branch types and the 60-term sexagenary cycle
//!
//! Everything here is pure and reads only `static` tables.

pub mod error;
pub mod gregorian;
pub mod lunar;
pub mod lunar_data;
pub mod sexagenary;

pub use error::CalendarError;
pub use gregorian::{GregorianDate, hour_branch};
pub use lunar::{
    LunarDate, leap_month, month_length, solar_to_lunar, supported_range, to_lunar, to_solar,
    year_length,
};
pub use lunar_data::{FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR};
pub use sexagenary::{
    ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, SEXAGENARY_EPOCH_YEAR, SexagenaryPair,
    stem_branch_of,
};

// Re-export so callers can build dates without a direct chrono dependency.
pub use chrono::NaiveDate;
