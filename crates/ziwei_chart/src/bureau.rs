//! Five-element Bureau (五行局) from the Na-Yin (纳音) of the Life palace.
//!
//! Each palace carries a stem assigned by the "Five Tigers" rule (五虎遁):
//! the year stem fixes the stem of the Yin palace and stems then run
//! clockwise one per branch. The Life palace's stem-branch pair is looked up
//! in the 30-entry Na-Yin table (one element per consecutive pair of the
//! sexagenary cycle) and the element selects the Bureau.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem, SexagenaryPair};

use crate::ring::{YIN, distance_forward};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Water,
    Wood,
    Metal,
    Earth,
    Fire,
}

impl Element {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "水",
            Self::Wood => "木",
            Self::Metal => "金",
            Self::Earth => "土",
            Self::Fire => "火",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Wood => "Wood",
            Self::Metal => "Metal",
            Self::Earth => "Earth",
            Self::Fire => "Fire",
        }
    }

    /// Bureau governed by this element.
    pub const fn bureau(self) -> Bureau {
        match self {
            Self::Water => Bureau::Water2,
            Self::Wood => Bureau::Wood3,
            Self::Metal => Bureau::Metal4,
            Self::Earth => Bureau::Earth5,
            Self::Fire => Bureau::Fire6,
        }
    }
}

/// The five Bureaus, numbered 2..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// All five Bureaus in numeric order.
pub const ALL_BUREAUS: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    /// Bureau number, 2..=6.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Bureau for a number in 2..=6.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Chinese label, e.g. "土五局".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }
}

use Element::{Earth, Fire, Metal, Water, Wood};

/// Na-Yin element per pair of cycle positions: entry `i` covers cycle
/// indices `2i` and `2i + 1` (甲子乙丑 海中金, 丙寅丁卯 炉中火, …).
#[rustfmt::skip]
const NA_YIN: [Element; 30] = [
    Metal, Fire,  Wood,  Earth, Metal, Fire,  Water, Earth, Metal, Wood,  // 甲子 .. 癸未
    Water, Earth, Fire,  Wood,  Water, Metal, Fire,  Wood,  Earth, Metal, // 甲申 .. 癸卯
    Fire,  Water, Earth, Metal, Wood,  Water, Earth, Fire,  Wood,  Water, // 甲辰 .. 癸亥
];

/// Na-Yin element of a stem-branch pair.
pub fn nayin_element(pair: SexagenaryPair) -> Element {
    NA_YIN[(pair.cycle_index() / 2) as usize]
}

/// Stem-branch pair of the Yin palace for a year stem (五虎遁: 甲己→丙寅,
/// 乙庚→戊寅, 丙辛→庚寅, 丁壬→壬寅, 戊癸→甲寅). Consecutive entries sit
/// 12 positions apart in the cycle, starting from 丙寅 at 2.
fn yin_palace_pair(year_stem: HeavenlyStem) -> SexagenaryPair {
    SexagenaryPair::from_cycle_index((year_stem.index() % 5) * 12 + 2)
}

/// Stem of the Yin palace for a year stem.
pub fn yin_palace_stem(year_stem: HeavenlyStem) -> HeavenlyStem {
    yin_palace_pair(year_stem).stem()
}

/// Stem-branch pair of the palace on `branch`: stem and branch both run
/// clockwise from the Yin palace.
pub fn palace_pair(year_stem: HeavenlyStem, branch: EarthlyBranch) -> SexagenaryPair {
    let dist = distance_forward(YIN, branch.index());
    yin_palace_pair(year_stem).advance(dist as i32)
}

/// Stem carried by the palace on `branch` in a year with `year_stem`.
pub fn palace_stem(year_stem: HeavenlyStem, branch: EarthlyBranch) -> HeavenlyStem {
    palace_pair(year_stem, branch).stem()
}

/// Bureau of a chart whose Life palace sits on `ming_branch`.
pub fn resolve_bureau(year_stem: HeavenlyStem, ming_branch: EarthlyBranch) -> Bureau {
    nayin_element(palace_pair(year_stem, ming_branch)).bureau()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::{ALL_BRANCHES, ALL_STEMS};

    fn pair(stem: u8, branch: u8) -> SexagenaryPair {
        SexagenaryPair::new(HeavenlyStem::from_index(stem), EarthlyBranch::from_index(branch))
            .unwrap()
    }

    #[test]
    fn bureau_numbers() {
        for (i, b) in ALL_BUREAUS.iter().enumerate() {
            assert_eq!(b.number() as usize, i + 2);
            assert_eq!(Bureau::from_number(b.number()), Some(*b));
        }
        assert_eq!(Bureau::from_number(1), None);
        assert_eq!(Bureau::from_number(7), None);
    }

    #[test]
    fn bureau_names() {
        assert_eq!(Bureau::Water2.name(), "水二局");
        assert_eq!(Bureau::Earth5.name(), "土五局");
        assert_eq!(Bureau::Fire6.element(), Element::Fire);
    }

    #[test]
    fn nayin_known_pairs() {
        assert_eq!(nayin_element(pair(0, 0)), Element::Metal); // 甲子 海中金
        assert_eq!(nayin_element(pair(2, 2)), Element::Fire); // 丙寅 炉中火
        assert_eq!(nayin_element(pair(6, 6)), Element::Earth); // 庚午 路旁土
        assert_eq!(nayin_element(pair(2, 0)), Element::Water); // 丙子 涧下水
        assert_eq!(nayin_element(pair(5, 1)), Element::Fire); // 己丑 霹雳火
        assert_eq!(nayin_element(pair(8, 6)), Element::Wood); // 壬午 杨柳木
        assert_eq!(nayin_element(pair(9, 11)), Element::Water); // 癸亥 大海水
    }

    #[test]
    fn nayin_each_element_covers_twelve_pairs() {
        for element in [
            Element::Water,
            Element::Wood,
            Element::Metal,
            Element::Earth,
            Element::Fire,
        ] {
            let n = (0..60u8)
                .filter(|&i| nayin_element(SexagenaryPair::from_cycle_index(i)) == element)
                .count();
            assert_eq!(n, 12, "{}", element.english_name());
        }
    }

    #[test]
    fn five_tigers() {
        assert_eq!(yin_palace_stem(HeavenlyStem::Jia), HeavenlyStem::Bing);
        assert_eq!(yin_palace_stem(HeavenlyStem::Ji), HeavenlyStem::Bing);
        assert_eq!(yin_palace_stem(HeavenlyStem::Yi), HeavenlyStem::Wu);
        assert_eq!(yin_palace_stem(HeavenlyStem::Geng), HeavenlyStem::Wu);
        assert_eq!(yin_palace_stem(HeavenlyStem::Bing), HeavenlyStem::Geng);
        assert_eq!(yin_palace_stem(HeavenlyStem::Ding), HeavenlyStem::Ren);
        assert_eq!(yin_palace_stem(HeavenlyStem::Gui), HeavenlyStem::Jia);
    }

    #[test]
    fn palace_stems_wrap_past_hai() {
        // 甲 year: 丙寅 … 乙亥, then 丙子 丁丑
        assert_eq!(palace_stem(HeavenlyStem::Jia, EarthlyBranch::Hai), HeavenlyStem::Yi);
        assert_eq!(palace_stem(HeavenlyStem::Jia, EarthlyBranch::Zi), HeavenlyStem::Bing);
        assert_eq!(palace_stem(HeavenlyStem::Jia, EarthlyBranch::Chou), HeavenlyStem::Ding);
    }

    #[test]
    fn palace_pairs_keep_parity() {
        for stem in ALL_STEMS {
            for branch in ALL_BRANCHES {
                let p = palace_pair(stem, branch);
                assert_eq!(p.branch(), branch);
                assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
            }
        }
    }

    #[test]
    fn resolve_reference_cases() {
        // 庚 year, Ming on 戌 → 丙戌 屋上土
        assert_eq!(
            resolve_bureau(HeavenlyStem::Geng, EarthlyBranch::Xu),
            Bureau::Earth5
        );
        // 甲 year, Ming on 子 → 丙子 涧下水
        assert_eq!(
            resolve_bureau(HeavenlyStem::Jia, EarthlyBranch::Zi),
            Bureau::Water2
        );
        // 乙 year, Ming on 丑 → 己丑 霹雳火
        assert_eq!(
            resolve_bureau(HeavenlyStem::Yi, EarthlyBranch::Chou),
            Bureau::Fire6
        );
    }
}
