//! Per-line request handling. Pure: one line in, one response out.

use serde_json::Value;
use tracing::{debug, warn};
use ziwei_calendar::GregorianDate;
use ziwei_chart::{ChartError, Gender, build_chart};

use crate::BridgeConfig;
use crate::error::BridgeError;
use crate::protocol::{ChartRequest, ChartResponse, ChartResult};

/// Answer one request line. Never fails: every problem becomes an error
/// response carrying the request id (`null` when the line is not JSON).
pub fn handle_line(line: &str, config: &BridgeConfig) -> ChartResponse {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            let err = BridgeError::Parse(e.to_string());
            warn!(error = %err, "request rejected");
            return ChartResponse::failure(Value::Null, &err);
        }
    };
    let id = value.get("id").cloned().unwrap_or(Value::Null);

    match handle_value(value, config) {
        Ok(result) => {
            debug!(%id, "chart sent");
            ChartResponse::success(id, result)
        }
        Err(err) => {
            warn!(%id, kind = err.kind().as_str(), error = %err, "request rejected");
            ChartResponse::failure(id, &err)
        }
    }
}

fn handle_value(value: Value, config: &BridgeConfig) -> Result<ChartResult, BridgeError> {
    let request: ChartRequest =
        serde_json::from_value(value).map_err(|e| BridgeError::Request(e.to_string()))?;
    let birth = GregorianDate::parse(&request.date, request.hour).map_err(ChartError::from)?;
    let gender: Gender = request.gender.parse()?;
    let chart = build_chart(&birth, gender, &config.chart)?;
    Ok(ChartResult::from_chart(&chart, config.emit_palaces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_of(line: &str) -> (Value, String) {
        let r = handle_line(line, &BridgeConfig::default());
        (r.id, r.error.unwrap())
    }

    #[test]
    fn success_echoes_id() {
        let r = handle_line(
            r#"{"id":"abc","date":"1990-05-15","hour":14,"gender":"male"}"#,
            &BridgeConfig::default(),
        );
        assert_eq!(r.id, json!("abc"));
        let result = r.result.unwrap();
        assert_eq!(result.bureau, 5);
        assert!(result.palaces.is_none());
    }

    #[test]
    fn hour_24_is_invalid_input() {
        let (id, err) = error_of(r#"{"id":1,"date":"1990-05-15","hour":24,"gender":"male"}"#);
        assert_eq!(id, json!(1));
        assert!(err.starts_with("InvalidInput: "), "{err}");
    }

    #[test]
    fn fractional_and_negative_hours_are_invalid_input() {
        for hour in ["-1", "14.5", "\"14\""] {
            let line = format!(r#"{{"id":2,"date":"1990-05-15","hour":{hour},"gender":"male"}}"#);
            let (_, err) = error_of(&line);
            assert!(err.starts_with("InvalidInput: "), "{hour}: {err}");
        }
    }

    #[test]
    fn bad_date_and_gender() {
        let (_, err) = error_of(r#"{"id":3,"date":"1990-02-30","hour":1,"gender":"male"}"#);
        assert!(err.starts_with("InvalidInput: "), "{err}");
        let (_, err) = error_of(r#"{"id":4,"date":"1990-05-15","hour":1,"gender":"x"}"#);
        assert!(err.starts_with("InvalidInput: "), "{err}");
    }

    #[test]
    fn gender_outside_wire_labels() {
        for gender in ["m", "F", "Male"] {
            let line = format!(r#"{{"id":6,"date":"1990-05-15","hour":1,"gender":"{gender}"}}"#);
            let (id, err) = error_of(&line);
            assert_eq!(id, json!(6));
            assert!(err.starts_with("InvalidInput: "), "{gender}: {err}");
        }
    }

    #[test]
    fn out_of_table_date() {
        let (id, err) = error_of(r#"{"id":5,"date":"1850-01-01","hour":1,"gender":"female"}"#);
        assert_eq!(id, json!(5));
        assert!(err.starts_with("UnsupportedDateRange: "), "{err}");
    }

    #[test]
    fn garbage_line_gets_null_id() {
        let (id, err) = error_of("{not json");
        assert_eq!(id, Value::Null);
        assert!(err.starts_with("InvalidInput: "), "{err}");
    }

    #[test]
    fn missing_id_is_null() {
        let r = handle_line(
            r#"{"date":"1985-01-20","hour":0,"gender":"female"}"#,
            &BridgeConfig::default(),
        );
        assert_eq!(r.id, Value::Null);
        assert!(r.result.is_some());
    }

    #[test]
    fn palaces_on_request() {
        let config = BridgeConfig {
            emit_palaces: true,
            ..BridgeConfig::default()
        };
        let r = handle_line(
            r#"{"id":0,"date":"1990-05-15","hour":14,"gender":"male"}"#,
            &config,
        );
        let palaces = r.result.unwrap().palaces.unwrap();
        assert_eq!(palaces.len(), 12);
        let life = palaces.iter().find(|p| p.is_ming).unwrap();
        assert_eq!(life.branch, 10);
        assert_eq!(life.name, "命宮");
        assert_eq!(life.label, "丙戌");
        assert!(life.stars.iter().any(|s| s == "紫微"));
    }
}
