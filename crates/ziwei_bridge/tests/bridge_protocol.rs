//! End-to-end tests of the line protocol over in-memory streams.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use ziwei_bridge::{BridgeConfig, ChartResponse, ServeStats, serve};
use ziwei_chart::ChartConfig;

fn run(input: &str, config: &BridgeConfig) -> (Vec<ChartResponse>, ServeStats) {
    let mut out = Vec::new();
    let stats = serve(input.as_bytes(), &mut out, config).unwrap();
    let text = String::from_utf8(out).unwrap();
    let responses = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (responses, stats)
}

fn raw_lines(input: &str) -> Vec<Value> {
    let mut out = Vec::new();
    serve(input.as_bytes(), &mut out, &BridgeConfig::default()).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn first_reference_scenario() {
    let lines = raw_lines(r#"{"id":1,"date":"1990-05-15","hour":14,"gender":"male"}"#);
    assert_eq!(
        lines,
        vec![json!({
            "id": 1,
            "result": {
                "lunar": {"year": 1990, "month": 4, "day": 21, "isLeap": false},
                "bureau": 5,
                "bureauName": "土五局",
                "mingPos": 10,
                "shenPos": 0,
                "ziWeiPos": 10,
                "tianFuPos": 6,
                "yearStem": 6,
                "yearBranch": 6
            }
        })]
    );
}

#[test]
fn second_reference_scenario() {
    let lines = raw_lines(r#"{"id":"b","date":"1985-01-20","hour":0,"gender":"female"}"#);
    assert_eq!(
        lines,
        vec![json!({
            "id": "b",
            "result": {
                "lunar": {"year": 1984, "month": 11, "day": 30, "isLeap": false},
                "bureau": 2,
                "bureauName": "水二局",
                "mingPos": 0,
                "shenPos": 0,
                "ziWeiPos": 4,
                "tianFuPos": 0,
                "yearStem": 0,
                "yearBranch": 0
            }
        })]
    );
}

#[test]
fn batch_with_one_invalid_request() {
    let input = [
        r#"{"id":1,"date":"1990-05-15","hour":14,"gender":"male"}"#,
        r#"{"id":2,"date":"1995-06-10","hour":10,"gender":"male"}"#,
        r#"{"id":3,"date":"2000-08-25","hour":24,"gender":"female"}"#,
        r#"{"id":4,"date":"1978-11-03","hour":20,"gender":"male"}"#,
        r#"{"id":5,"date":"1950-10-18","hour":8,"gender":"male"}"#,
    ]
    .join("\n");
    let (responses, stats) = run(&input, &BridgeConfig::default());

    assert_eq!(stats, ServeStats { requests: 5, failures: 1 });
    let ids: Vec<Value> = responses.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);

    for r in &responses {
        let failed = r.id == json!(3);
        assert_eq!(r.error.is_some(), failed, "id {}", r.id);
        assert_eq!(r.result.is_some(), !failed, "id {}", r.id);
    }
    let err = responses[2].error.as_deref().unwrap();
    assert!(err.starts_with("InvalidInput: "), "{err}");

    assert_eq!(responses[1].result.as_ref().unwrap().bureau, 6);
    assert_eq!(responses[3].result.as_ref().unwrap().bureau, 4);
    assert_eq!(responses[4].result.as_ref().unwrap().ming_pos, 6);
}

#[test]
fn garbage_between_requests_does_not_stop_loop() {
    let input =
        "not json\n\n{\"id\":[1,2],\"date\":\"1959-10-06\",\"hour\":2,\"gender\":\"male\"}\n";
    let (responses, stats) = run(input, &BridgeConfig::default());
    assert_eq!(stats, ServeStats { requests: 2, failures: 1 });
    assert_eq!(responses[0].id, Value::Null);
    assert!(responses[0].error.is_some());
    assert_eq!(responses[1].id, json!([1, 2]));
    assert_eq!(responses[1].result.as_ref().unwrap().zi_wei_pos, 0);
}

#[test]
fn out_of_range_reports_kind() {
    let (responses, _) = run(
        r#"{"id":9,"date":"2051-03-01","hour":5,"gender":"male"}"#,
        &BridgeConfig::default(),
    );
    let err = responses[0].error.as_deref().unwrap();
    assert!(err.starts_with("UnsupportedDateRange: "), "{err}");
}

#[test]
fn palace_output_and_reversal() {
    let config = BridgeConfig {
        chart: ChartConfig::new(true),
        emit_palaces: true,
    };
    let (responses, _) = run(
        r#"{"id":1,"date":"1978-11-03","hour":20,"gender":"female"}"#,
        &config,
    );
    let result = responses[0].result.as_ref().unwrap();
    assert_eq!((result.ming_pos, result.shen_pos), (9, 1));

    let palaces = result.palaces.as_ref().unwrap();
    assert_eq!(palaces.len(), 12);
    let branches: Vec<u8> = palaces.iter().map(|p| p.branch).collect();
    assert_eq!(branches, (0..12).collect::<Vec<u8>>());
    assert!(palaces[9].is_ming);
    assert!(palaces[1].is_shen);
    assert_eq!(palaces[9].name, "命宮");
    let placed: usize = palaces.iter().map(|p| p.stars.len()).sum();
    assert_eq!(placed, 27);
}

#[test]
fn non_utf8_line_gets_error_and_loop_continues() {
    let mut input = Vec::new();
    input.extend_from_slice(br#"{"id":1,"date":"1990-05-15","hour":14,"gender":"male"}"#);
    input.push(b'\n');
    input.extend_from_slice(b"{\"id\":2,\"date\":\"\xff\xfe\",\"hour\":1,\"gender\":\"male\"}\n");
    input.extend_from_slice(br#"{"id":3,"date":"1985-01-20","hour":0,"gender":"female"}"#);
    input.push(b'\n');

    let mut out = Vec::new();
    let stats = serve(&input[..], &mut out, &BridgeConfig::default()).unwrap();
    assert_eq!(stats, ServeStats { requests: 3, failures: 1 });

    let responses: Vec<ChartResponse> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].id, json!(1));
    assert!(responses[0].result.is_some());
    assert_eq!(responses[1].id, Value::Null);
    let err = responses[1].error.as_deref().unwrap();
    assert!(err.starts_with("InvalidInput: "), "{err}");
    assert_eq!(responses[2].id, json!(3));
    assert_eq!(responses[2].result.as_ref().unwrap().bureau, 2);
}
