use ae_pulse::data::openfda::EventRecord;
use ae_pulse::summary::{aggregate, Metrics};

fn record(json: serde_json::Value) -> EventRecord {
    serde_json::from_value(json).expect("valid record")
}

#[test]
fn counts_overlapping_flag_categories() {
    let events = vec![
        record(serde_json::json!({"receivedate": "20210304", "seriousnessdeath": "1"})),
        record(serde_json::json!({"receivedate": "20210101", "seriousnessdeath": "1"})),
        record(serde_json::json!({"receivedate": "20220101", "seriousnesshospitalization": "1"})),
    ];
    let metrics = aggregate(&events);
    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.deaths, 2);
    assert_eq!(metrics.hospitalizations, 1);
}

#[test]
fn empty_list_yields_identity_metrics() {
    assert_eq!(aggregate(&[]), Metrics::default());
}

#[test]
fn serious_non_dh_excludes_death_and_hospitalization() {
    let events = vec![
        record(serde_json::json!({"serious": "1"})),
        record(serde_json::json!({"serious": "1", "seriousnessdeath": "1"})),
        record(serde_json::json!({"serious": "1", "seriousnesshospitalization": "1"})),
    ];
    let metrics = aggregate(&events);
    assert_eq!(metrics.serious_non_dh, 1);
    assert_eq!(metrics.deaths, 1);
    assert_eq!(metrics.hospitalizations, 1);
}

#[test]
fn one_record_can_feed_several_flag_counters() {
    let events = vec![record(serde_json::json!({
        "seriousnessdeath": "1",
        "seriousnesslifethreatening": "1"
    }))];
    let metrics = aggregate(&events);
    assert_eq!(metrics.deaths, 1);
    assert_eq!(metrics.life_threatening, 1);
    assert_eq!(metrics.total, 1);
}

#[test]
fn non_one_flag_values_count_as_false() {
    let events = vec![
        record(serde_json::json!({"seriousnessdeath": "2"})),
        record(serde_json::json!({"seriousnessdeath": "true"})),
        record(serde_json::json!({})),
    ];
    let metrics = aggregate(&events);
    assert_eq!(metrics.deaths, 0);
    assert_eq!(metrics.total, 3);
}

#[test]
fn sex_breakdown_partitions_the_list() {
    let events = vec![
        record(serde_json::json!({"patient": {"patientsex": "1"}})),
        record(serde_json::json!({"patient": {"patientsex": "2"}})),
        record(serde_json::json!({"patient": {"patientsex": "0"}})),
        record(serde_json::json!({"patient": {}})),
        record(serde_json::json!({})),
    ];
    let metrics = aggregate(&events);
    assert_eq!(metrics.by_sex.male, 1);
    assert_eq!(metrics.by_sex.female, 1);
    assert_eq!(metrics.by_sex.unknown, 3);
    assert_eq!(metrics.total, 5);
}

#[test]
fn metrics_serialize_with_dashboard_field_names() {
    let metrics = aggregate(&[record(serde_json::json!({
        "serious": "1",
        "seriousnesslifethreatening": "1",
        "patient": {"patientsex": "2"}
    }))]);
    let value = serde_json::to_value(&metrics).unwrap();
    assert_eq!(value["lifeThreatening"], 1);
    assert_eq!(value["seriousNonDH"], 1);
    assert_eq!(value["bySex"]["female"], 1);
}
