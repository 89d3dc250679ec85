//! Star catalogue and placement.
//!
//! Zi Wei's palace depends only on the Bureau and the lunar day and is read
//! from a table built at compile time. Tian Fu is Zi Wei mirrored across the
//! Yin–Shen axis. The two major-star groups hang off those anchors at fixed
//! offsets; the auxiliary stars follow the month, hour, year stem, and year
//! branch.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem};

use crate::bureau::Bureau;
use crate::error::ChartError;
use crate::ring::{CHEN, HAI, RING_SIZE, XU, YIN, mirror, step};

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    /// The 14 primary stars (主星).
    Major,
    /// Auxiliary auspicious stars (六吉星 and 禄存).
    Lucky,
    /// Auxiliary malefic stars (六煞星).
    Ominous,
}

/// Stars placed on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Star {
    // Zi Wei group
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    // Tian Fu group
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // Lucky
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
    TianKui,
    TianYue,
    LuCun,
    // Ominous
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
}

/// Every star in catalogue order.
pub const ALL_STARS: [Star; 27] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
    Star::ZuoFu,
    Star::YouBi,
    Star::WenChang,
    Star::WenQu,
    Star::TianKui,
    Star::TianYue,
    Star::LuCun,
    Star::QingYang,
    Star::TuoLuo,
    Star::HuoXing,
    Star::LingXing,
    Star::DiKong,
    Star::DiJie,
];

impl Star {
    /// Traditional Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天機",
            Self::TaiYang => "太陽",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉貞",
            Self::TianFu => "天府",
            Self::TaiYin => "太陰",
            Self::TanLang => "貪狼",
            Self::JuMen => "巨門",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七殺",
            Self::PoJun => "破軍",
            Self::ZuoFu => "左輔",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::TianKui => "天魁",
            Self::TianYue => "天鉞",
            Self::LuCun => "祿存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀羅",
            Self::HuoXing => "火星",
            Self::LingXing => "鈴星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
        }
    }

    /// Stable identifier, e.g. "ZiWei".
    pub const fn id(self) -> &'static str {
        match self {
            Self::ZiWei => "ZiWei",
            Self::TianJi => "TianJi",
            Self::TaiYang => "TaiYang",
            Self::WuQu => "WuQu",
            Self::TianTong => "TianTong",
            Self::LianZhen => "LianZhen",
            Self::TianFu => "TianFu",
            Self::TaiYin => "TaiYin",
            Self::TanLang => "TanLang",
            Self::JuMen => "JuMen",
            Self::TianXiang => "TianXiang",
            Self::TianLiang => "TianLiang",
            Self::QiSha => "QiSha",
            Self::PoJun => "PoJun",
            Self::ZuoFu => "ZuoFu",
            Self::YouBi => "YouBi",
            Self::WenChang => "WenChang",
            Self::WenQu => "WenQu",
            Self::TianKui => "TianKui",
            Self::TianYue => "TianYue",
            Self::LuCun => "LuCun",
            Self::QingYang => "QingYang",
            Self::TuoLuo => "TuoLuo",
            Self::HuoXing => "HuoXing",
            Self::LingXing => "LingXing",
            Self::DiKong => "DiKong",
            Self::DiJie => "DiJie",
        }
    }

    pub const fn kind(self) -> StarKind {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarKind::Major,
            Self::ZuoFu
            | Self::YouBi
            | Self::WenChang
            | Self::WenQu
            | Self::TianKui
            | Self::TianYue
            | Self::LuCun => StarKind::Lucky,
            Self::QingYang
            | Self::TuoLuo
            | Self::HuoXing
            | Self::LingXing
            | Self::DiKong
            | Self::DiJie => StarKind::Ominous,
        }
    }
}

/// Counter-clockwise offsets from Zi Wei.
const ZI_WEI_GROUP: [(Star, i32); 6] = [
    (Star::ZiWei, 0),
    (Star::TianJi, -1),
    (Star::TaiYang, -3),
    (Star::WuQu, -4),
    (Star::TianTong, -5),
    (Star::LianZhen, -8),
];

/// Clockwise offsets from Tian Fu.
const TIAN_FU_GROUP: [(Star, i32); 8] = [
    (Star::TianFu, 0),
    (Star::TaiYin, 1),
    (Star::TanLang, 2),
    (Star::JuMen, 3),
    (Star::TianXiang, 4),
    (Star::TianLiang, 5),
    (Star::QiSha, 6),
    (Star::PoJun, 10),
];

/// Longest lunar month.
pub const MAX_LUNAR_DAY: u8 = 30;

/// Zi Wei position for one (Bureau, day). `n` is the Bureau number.
///
/// Find the smallest `q` with `q·n ≥ day`; `r = q·n − day` is the shortfall.
/// Count `q` palaces from Yin (Yin itself is 1), then move `r` further
/// forward when `r` is even or `r` back when it is odd.
const fn zi_wei_cell(n: u8, day: u8) -> u8 {
    let q = day.div_ceil(n) as i32;
    let r = q * n as i32 - day as i32;
    let offset = if r % 2 == 0 { q + r } else { q - r };
    (YIN as i32 + offset - 1).rem_euclid(RING_SIZE as i32) as u8
}

const fn build_zi_wei_table() -> [[u8; MAX_LUNAR_DAY as usize]; 5] {
    let mut table = [[0u8; MAX_LUNAR_DAY as usize]; 5];
    let mut row = 0;
    while row < 5 {
        let mut col = 0;
        while col < MAX_LUNAR_DAY as usize {
            table[row][col] = zi_wei_cell(row as u8 + 2, col as u8 + 1);
            col += 1;
        }
        row += 1;
    }
    table
}

/// Zi Wei palace by Bureau (row, Bureau 2..=6) and lunar day (column, 1..=30).
pub static ZI_WEI_TABLE: [[u8; MAX_LUNAR_DAY as usize]; 5] = build_zi_wei_table();

/// Zi Wei's palace for a Bureau and lunar day.
pub fn zi_wei_position(bureau: Bureau, lunar_day: u8) -> Result<u8, ChartError> {
    let row = (bureau.number() - 2) as usize;
    let col = (lunar_day as usize)
        .checked_sub(1)
        .ok_or(ChartError::InternalTableLookupFailure("lunar day 0"))?;
    ZI_WEI_TABLE
        .get(row)
        .and_then(|days| days.get(col))
        .copied()
        .ok_or(ChartError::InternalTableLookupFailure(
            "lunar day beyond zi wei table",
        ))
}

/// Tian Fu's palace: Zi Wei reflected across the Yin–Shen axis.
pub fn tian_fu_position(zi_wei_pos: u8) -> u8 {
    mirror(zi_wei_pos)
}

/// Zi Wei and Tian Fu palaces for a Bureau and lunar day.
pub fn place_stars(bureau: Bureau, lunar_day: u8) -> Result<(u8, u8), ChartError> {
    let zi_wei = zi_wei_position(bureau, lunar_day)?;
    Ok((zi_wei, tian_fu_position(zi_wei)))
}

/// Inputs for auxiliary star placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarInputs {
    pub zi_wei_pos: u8,
    pub tian_fu_pos: u8,
    /// Lunar month, 1..=12.
    pub lunar_month: u8,
    pub hour_branch: EarthlyBranch,
    pub year_stem: HeavenlyStem,
    pub year_branch: EarthlyBranch,
}

/// Tian Kui and Tian Yue palaces by year stem.
fn kui_yue(year_stem: HeavenlyStem) -> (u8, u8) {
    use HeavenlyStem::*;
    match year_stem {
        Jia | Wu | Geng => (1, 7),
        Yi | Ji => (0, 8),
        Bing | Ding => (11, 9),
        Ren | Gui => (5, 3),
        Xin => (6, 2),
    }
}

/// Lu Cun palace by year stem (甲寅 乙卯 丙戊巳 丁己午 庚申 辛酉 壬亥 癸子).
const LU_CUN: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// Huo Xing starting palace by year-branch triad.
fn huo_xing_start(year_branch: EarthlyBranch) -> u8 {
    use EarthlyBranch::*;
    match year_branch {
        Yin | Wu | Xu | Shen | Zi | Chen => YIN,
        Si | You | Chou => 3,
        Hai | Mao | Wei => 9,
    }
}

/// Every star with its palace position, in catalogue order.
pub fn place_all(inputs: &StarInputs) -> Vec<(Star, u8)> {
    let month_steps = inputs.lunar_month as i32 - 1;
    let hour = inputs.hour_branch.index() as i32;

    let mut placed = Vec::with_capacity(ALL_STARS.len());
    placed.extend(
        ZI_WEI_GROUP
            .iter()
            .map(|&(star, offset)| (star, step(inputs.zi_wei_pos, offset))),
    );
    placed.extend(
        TIAN_FU_GROUP
            .iter()
            .map(|&(star, offset)| (star, step(inputs.tian_fu_pos, offset))),
    );

    placed.push((Star::ZuoFu, step(CHEN, month_steps)));
    placed.push((Star::YouBi, step(XU, -month_steps)));
    placed.push((Star::WenChang, step(XU, -hour)));
    placed.push((Star::WenQu, step(CHEN, hour)));

    let (kui, yue) = kui_yue(inputs.year_stem);
    placed.push((Star::TianKui, kui));
    placed.push((Star::TianYue, yue));

    let lu_cun = LU_CUN[inputs.year_stem.index() as usize];
    placed.push((Star::LuCun, lu_cun));
    placed.push((Star::QingYang, step(lu_cun, 1)));
    placed.push((Star::TuoLuo, step(lu_cun, -1)));

    placed.push((Star::HuoXing, step(huo_xing_start(inputs.year_branch), hour)));
    placed.push((Star::LingXing, step(XU, hour)));
    placed.push((Star::DiKong, step(HAI, -hour)));
    placed.push((Star::DiJie, step(HAI, hour)));

    placed
}
