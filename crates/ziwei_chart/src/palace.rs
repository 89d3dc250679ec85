//! The 12-palace wheel and the Life (命) / Body (身) anchors.
//!
//! Palace slots are indexed by earthly branch (0 = Zi). Month counting
//! starts at Yin: the first lunar month sits on Yin, the second on Mao, and
//! so on. From the month palace, Ming moves back by the hour branch and
//! Shen moves forward by it.

use std::collections::BTreeSet;

use ziwei_calendar::{ALL_BRANCHES, EarthlyBranch, HeavenlyStem};

use crate::bureau::palace_stem;
use crate::ring::{RING_SIZE, YIN, step};
use crate::stars::Star;

/// The 12 life-area palaces, in counter-clockwise order from Ming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palace names, Ming first.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Traditional Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "財帛",
            Self::Health => "疾厄",
            Self::Travel => "遷移",
            Self::Friends => "交友",
            Self::Career => "官祿",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// 0-based order counter-clockwise from Ming.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Month palace: the first lunar month on Yin, one step per month after.
fn month_palace(lunar_month: u8) -> u8 {
    step(YIN, lunar_month as i32 - 1)
}

/// Ming and Shen positions for a lunar month (1..=12) and hour branch.
///
/// The month is reduced modulo 12; callers pass a validated `LunarDate`
/// month. At the Zi and Wu hours the two positions coincide.
pub fn locate_life_and_body(lunar_month: u8, hour_branch: EarthlyBranch) -> (u8, u8) {
    locate_life_and_body_directed(lunar_month, hour_branch, false)
}

/// As [`locate_life_and_body`], with both hour directions swapped when
/// `reversed` is true (Ming forward, Shen back).
pub fn locate_life_and_body_directed(
    lunar_month: u8,
    hour_branch: EarthlyBranch,
    reversed: bool,
) -> (u8, u8) {
    let base = month_palace(lunar_month);
    let hour = hour_branch.index() as i32;
    let (ming_dir, shen_dir) = if reversed { (1, -1) } else { (-1, 1) };
    (step(base, ming_dir * hour), step(base, shen_dir * hour))
}

/// One palace of the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palace {
    pub branch: EarthlyBranch,
    /// Stem by the Five Tigers rule for the chart's year stem.
    pub stem: HeavenlyStem,
    pub name: PalaceName,
    pub is_ming: bool,
    pub is_shen: bool,
    pub stars: BTreeSet<Star>,
}

/// The 12 palaces; slot `i` holds branch `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalaceWheel {
    palaces: [Palace; 12],
    ming: u8,
}

impl PalaceWheel {
    /// Lay out names, stems, and anchor flags. Stars start empty.
    pub fn new(ming_pos: u8, shen_pos: u8, year_stem: HeavenlyStem) -> Self {
        let ming = ming_pos % RING_SIZE;
        let shen = shen_pos % RING_SIZE;
        let palaces = ALL_BRANCHES.map(|branch| {
            let pos = branch.index();
            // Names run counter-clockwise from Ming.
            let order = step(ming, -(pos as i32));
            Palace {
                branch,
                stem: palace_stem(year_stem, branch),
                name: ALL_PALACE_NAMES[order as usize],
                is_ming: pos == ming,
                is_shen: pos == shen,
                stars: BTreeSet::new(),
            }
        });
        Self { palaces, ming }
    }

    /// Put each `(star, position)` into its palace.
    pub fn with_stars(mut self, placed: impl IntoIterator<Item = (Star, u8)>) -> Self {
        for (star, pos) in placed {
            self.palaces[(pos % RING_SIZE) as usize].stars.insert(star);
        }
        self
    }

    /// Palace on a branch.
    pub fn palace(&self, branch: EarthlyBranch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    /// Palace with a given life-area name, `name.index()` steps
    /// counter-clockwise from Ming.
    pub fn named(&self, name: PalaceName) -> &Palace {
        &self.palaces[step(self.ming, -(name.index() as i32)) as usize]
    }

    /// Palaces in branch order, Zi first.
    pub fn iter(&self) -> impl Iterator<Item = &Palace> {
        self.palaces.iter()
    }

    /// Palaces in traditional chart order, Yin first.
    pub fn iter_from_yin(&self) -> impl Iterator<Item = &Palace> {
        self.palaces[YIN as usize..]
            .iter()
            .chain(self.palaces[..YIN as usize].iter())
    }

    /// Position of a star, if placed.
    pub fn position_of(&self, star: Star) -> Option<u8> {
        self.palaces
            .iter()
            .position(|p| p.stars.contains(&star))
            .map(|i| i as u8)
    }
}
