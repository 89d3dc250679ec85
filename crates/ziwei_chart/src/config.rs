//! Chart construction options and the gender input.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ChartError;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(ChartError::InvalidInput(format!(
                "gender {other:?}, expected \"male\" or \"female\""
            ))),
        }
    }
}

/// Options that change chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    /// Reverse the Ming/Shen counting directions for female charts.
    ///
    /// Off by default: Ming counts back by the hour and Shen forward for
    /// every chart. Some lineages swap the two for women; enabling this
    /// follows them.
    pub gender_reversal: bool,
}

impl ChartConfig {
    pub const fn new(gender_reversal: bool) -> Self {
        Self { gender_reversal }
    }

    /// Whether Ming/Shen counting runs reversed for this gender.
    pub const fn reverses(&self, gender: Gender) -> bool {
        self.gender_reversal && matches!(gender, Gender::Female)
    }
}
