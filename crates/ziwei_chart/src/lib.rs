//! Zi Wei Dou Shu (紫微斗數) natal chart skeleton.
//!
//! Given a Gregorian birth date, hour, and gender, this crate computes:
//! - The lunisolar date and the year's stem-branch pillar
//! - Life (命) and Body (身) palace positions
//! - The five-element Bureau from the Life palace's Na-Yin
//! - Zi Wei and Tian Fu positions, and the major and auxiliary stars
//! - A 12-palace wheel with names, stems, and placed stars
//!
//! Positions are branch indices on the 12-palace ring, 0 = Zi through
//! 11 = Hai. Everything is pure; the only state is `static` lookup tables.

pub mod bureau;
pub mod chart;
pub mod config;
pub mod error;
pub mod palace;
pub mod ring;
pub mod stars;

pub use bureau::{ALL_BUREAUS, Bureau, Element, nayin_element, palace_stem, resolve_bureau};
pub use chart::{Chart, build_chart};
pub use config::{ChartConfig, Gender};
pub use error::{ChartError, ErrorKind};
pub use palace::{
    ALL_PALACE_NAMES, Palace, PalaceName, PalaceWheel, locate_life_and_body,
    locate_life_and_body_directed,
};
pub use stars::{ALL_STARS, Star, StarKind, place_stars, tian_fu_position, zi_wei_position};
