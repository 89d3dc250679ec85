//! Chart assembly: birth date in, Zi Wei Dou Shu skeleton out.

use tracing::debug;
use ziwei_calendar::{
    EarthlyBranch, GregorianDate, LunarDate, SexagenaryPair, stem_branch_of, to_lunar,
};

use crate::bureau::{Bureau, resolve_bureau};
use crate::config::{ChartConfig, Gender};
use crate::error::ChartError;
use crate::palace::{PalaceWheel, locate_life_and_body_directed};
use crate::stars::{StarInputs, place_all, place_stars};

/// A computed natal chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    birth: GregorianDate,
    gender: Gender,
    lunar: LunarDate,
    year: SexagenaryPair,
    hour_branch: EarthlyBranch,
    bureau: Bureau,
    ming_pos: u8,
    shen_pos: u8,
    zi_wei_pos: u8,
    tian_fu_pos: u8,
    wheel: PalaceWheel,
}

impl Chart {
    pub fn birth(&self) -> &GregorianDate {
        &self.birth
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn lunar(&self) -> &LunarDate {
        &self.lunar
    }

    /// Stem-branch of the lunar year.
    pub fn year_pillar(&self) -> SexagenaryPair {
        self.year
    }

    pub fn hour_branch(&self) -> EarthlyBranch {
        self.hour_branch
    }

    pub fn bureau(&self) -> Bureau {
        self.bureau
    }

    /// Life (命) palace, 0 = Zi.
    pub fn ming_pos(&self) -> u8 {
        self.ming_pos
    }

    /// Body (身) palace, 0 = Zi.
    pub fn shen_pos(&self) -> u8 {
        self.shen_pos
    }

    pub fn zi_wei_pos(&self) -> u8 {
        self.zi_wei_pos
    }

    pub fn tian_fu_pos(&self) -> u8 {
        self.tian_fu_pos
    }

    pub fn wheel(&self) -> &PalaceWheel {
        &self.wheel
    }
}

/// Build a chart for a birth date, hour, and gender.
///
/// Fails with a calendar error for dates outside the lunar table and with
/// `InternalTableLookupFailure` only if a static table misses a key.
pub fn build_chart(
    birth: &GregorianDate,
    gender: Gender,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let lunar = to_lunar(birth)?;
    let year = stem_branch_of(lunar.year());
    let hour_branch = birth.hour_branch();

    let reversed = config.reverses(gender);
    let (ming_pos, shen_pos) = locate_life_and_body_directed(lunar.month(), hour_branch, reversed);
    let bureau = resolve_bureau(year.stem(), EarthlyBranch::from_index(ming_pos));
    let (zi_wei_pos, tian_fu_pos) = place_stars(bureau, lunar.day())?;

    let placed = place_all(&StarInputs {
        zi_wei_pos,
        tian_fu_pos,
        lunar_month: lunar.month(),
        hour_branch,
        year_stem: year.stem(),
        year_branch: year.branch(),
    });
    let wheel = PalaceWheel::new(ming_pos, shen_pos, year.stem()).with_stars(placed);

    debug!(
        %birth,
        %gender,
        %lunar,
        year = %year.name(),
        bureau = bureau.number(),
        ming_pos,
        shen_pos,
        zi_wei_pos,
        tian_fu_pos,
        reversed,
        "chart built"
    );

    Ok(Chart {
        birth: *birth,
        gender,
        lunar,
        year,
        hour_branch,
        bureau,
        ming_pos,
        shen_pos,
        zi_wei_pos,
        tian_fu_pos,
        wheel,
    })
}
