//! Wire types for the line protocol.
//!
//! One JSON object per line in each direction. Field names are camelCase on
//! the wire; the chart types stay serde-free and are mapped here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ziwei_chart::{Chart, Palace};

use crate::error::BridgeError;

/// A chart request. `id` is read separately so that it can be echoed even
/// when the rest of the object fails to deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Clock hour, 0..=23.
    pub hour: u32,
    /// `"male"` or `"female"`.
    pub gender: String,
}

/// One response line: exactly one of `result` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ChartResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChartResponse {
    pub fn success(id: Value, result: ChartResult) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error line formatted as `"<Kind>: <message>"`.
    pub fn failure(id: Value, error: &BridgeError) -> Self {
        Self {
            id,
            result: None,
            error: Some(format!("{}: {}", error.kind().as_str(), error)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDto {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub lunar: LunarDto,
    pub bureau: u8,
    pub bureau_name: String,
    pub ming_pos: u8,
    pub shen_pos: u8,
    pub zi_wei_pos: u8,
    pub tian_fu_pos: u8,
    pub year_stem: u8,
    pub year_branch: u8,
    /// Present only when the bridge runs with palace output enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palaces: Option<Vec<PalaceDto>>,
}

impl ChartResult {
    pub fn from_chart(chart: &Chart, with_palaces: bool) -> Self {
        let lunar = chart.lunar();
        let year = chart.year_pillar();
        Self {
            lunar: LunarDto {
                year: lunar.year(),
                month: lunar.month(),
                day: lunar.day(),
                is_leap: lunar.is_leap(),
            },
            bureau: chart.bureau().number(),
            bureau_name: chart.bureau().name().to_string(),
            ming_pos: chart.ming_pos(),
            shen_pos: chart.shen_pos(),
            zi_wei_pos: chart.zi_wei_pos(),
            tian_fu_pos: chart.tian_fu_pos(),
            year_stem: year.stem().index(),
            year_branch: year.branch().index(),
            palaces: with_palaces.then(|| chart.wheel().iter().map(PalaceDto::from).collect()),
        }
    }
}

/// One palace of the wheel, branch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalaceDto {
    pub branch: u8,
    pub stem: u8,
    /// Stem-branch label, e.g. "丙戌".
    pub label: String,
    pub name: String,
    pub is_ming: bool,
    pub is_shen: bool,
    /// Chinese star names in catalogue order.
    pub stars: Vec<String>,
}

impl From<&Palace> for PalaceDto {
    fn from(p: &Palace) -> Self {
        Self {
            branch: p.branch.index(),
            stem: p.stem.index(),
            label: format!("{}{}", p.stem.name(), p.branch.name()),
            name: p.name.name().to_string(),
            is_ming: p.is_ming,
            is_shen: p.is_shen,
            stars: p.stars.iter().map(|s| s.name().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_result() {
        let err = BridgeError::Request("missing field `hour`".into());
        let line = serde_json::to_value(ChartResponse::failure(json!(7), &err)).unwrap();
        assert_eq!(
            line,
            json!({"id": 7, "error": "InvalidInput: malformed request: missing field `hour`"})
        );
    }

    #[test]
    fn request_ignores_extra_fields() {
        let req: ChartRequest = serde_json::from_value(json!({
            "id": "a", "date": "1990-05-15", "hour": 14, "gender": "male", "note": 1
        }))
        .unwrap();
        assert_eq!(req.hour, 14);
    }

    #[test]
    fn negative_hour_rejected_by_type() {
        let res = serde_json::from_value::<ChartRequest>(json!({
            "date": "1990-05-15", "hour": -1, "gender": "male"
        }));
        assert!(res.is_err());
    }
}
