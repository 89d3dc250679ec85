//! Heavenly stems, earthly branches, and the 60-term sexagenary cycle.
//!
//! A stem (10) and a branch (12) advance together; their pairing repeats
//! every lcm(10, 12) = 60 steps. The epoch is CE 1984 = 甲子 (Jia-Zi,
//! cycle index 0). Years before the epoch wrap via `rem_euclid`.

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl HeavenlyStem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for any index, reduced modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Chinese character.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Pinyin romanization.
    pub fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Stem `steps` positions later in the cycle (negative steps go back).
    pub fn advance(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(10) as u8)
    }
}

/// The 12 earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl EarthlyBranch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for any index, reduced modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Chinese character.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Pinyin romanization.
    pub fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Branch `steps` positions later around the ring (negative steps go back).
    pub fn advance(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(12) as u8)
    }
}

/// A stem paired with a branch of the same parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPair {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl SexagenaryPair {
    /// Pair a stem with a branch. `None` when their parities differ,
    /// since such a pair never occurs in the cycle (e.g. 甲丑).
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair at a given position of the cycle, reduced modulo 60.
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: HeavenlyStem::from_index(i % 10),
            branch: EarthlyBranch::from_index(i % 12),
        }
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    ///
    /// Solves `k ≡ stem (mod 10)`, `k ≡ branch (mod 12)`: stepping the stem
    /// back to 甲 moves the branch back by the same amount, and each 甲-led
    /// decade starts two branches earlier than the one before it.
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        let decade_branch = (b - s).rem_euclid(12);
        let decade = ((12 - decade_branch) % 12) / 2;
        (decade * 10 + s) as u8
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Pair `steps` positions later in the cycle (negative steps go back).
    pub fn advance(self, steps: i32) -> Self {
        Self::from_cycle_index((self.cycle_index() as i32 + steps).rem_euclid(60) as u8)
    }

    /// Two-character Chinese name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

/// Reference epoch: CE 1984 = 甲子 (cycle index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 1984;

/// Stem and branch of a lunar year.
pub fn stem_branch_of(lunar_year: i32) -> SexagenaryPair {
    let offset = (lunar_year - SEXAGENARY_EPOCH_YEAR).rem_euclid(60) as u8;
    SexagenaryPair::from_cycle_index(offset)
}
