use rstest::rstest;
use serde_json::json;
use syslog_emitter::{EventPayload, SyslogFormatter, Timestamp};

fn formatter() -> SyslogFormatter {
    SyslogFormatter::new("rack-mgmt-01", false)
}

#[test]
fn door_event_scenario() {
    let body = EventPayload::new("opened", "42", 0)
        .with_message("front door opened")
        .with_cabinet(json!({
            "id": 1,
            "name": "C1",
            "frontLock": 5,
            "backLock": 6,
            "extra": "x",
        }));
    let line = formatter().format("door", &body).expect("format");

    assert!(line.starts_with("<13>1 1970-01-01T00:00:00.000Z rack-mgmt-01 TANlockManager PID"));
    assert!(line.contains(" DOOR "));
    assert!(line.contains("[event@61208 event=\"opened\" eventId=\"42\"]"));
    assert!(
        line.contains("[cabinet@61208 id=\"1\" name=\"C1\" frontLock=\"5\" backLock=\"6\"]")
    );
    assert!(!line.contains("extra"));
    assert!(line.ends_with(" \u{feff}front door opened"));
}

#[test]
fn no_message_means_no_tail() {
    let body = EventPayload::new("opened", "42", 0);
    let line = formatter().format("door", &body).expect("format");
    assert!(line.ends_with("eventId=\"42\"]"));
    assert!(!line.ends_with(' '));
}

#[test]
fn only_event_element_without_domain_refs() {
    let body = EventPayload::new("opened", "42", 0);
    let line = formatter().format("door", &body).expect("format");
    assert_eq!(line.matches("@61208").count(), 1);
    assert_eq!(line.matches("[event@61208").count(), 1);
}

#[rstest]
#[case(json!({ "id": 3, "secretKey": "k" }), "tanlock")]
#[case(json!({ "id": 1, "credentials": {"user": "u"} }), "cabinet")]
#[case(json!({ "id": 2, "internalNotes": "n" }), "row")]
#[case(json!({ "id": 9, "accessCodes": [1, 2] }), "cage")]
fn sensitive_fields_never_reach_the_wire(#[case] obj: serde_json::Value, #[case] name: &str) {
    let body = match name {
        "tanlock" => EventPayload::new("opened", "1", 0).with_lock(obj),
        "cabinet" => EventPayload::new("opened", "1", 0).with_cabinet(obj),
        "row" => EventPayload::new("opened", "1", 0).with_row(obj),
        _ => EventPayload::new("opened", "1", 0).with_cage(obj),
    };
    let line = formatter().format("door", &body).expect("format");
    assert!(line.contains(&format!("[{name}@61208 id=\"")));
    for leaked in ["secretKey", "credentials", "internalNotes", "accessCodes"] {
        assert!(!line.contains(leaked), "{leaked} leaked into {line}");
    }
}

#[rstest]
#[case(0, "1970-01-01T00:00:00.000Z")]
#[case(1_709_296_200_250, "2024-03-01T12:30:00.250Z")]
fn epoch_timestamps_render_with_millisecond_precision(
    #[case] millis: i64,
    #[case] expected: &str,
) {
    let body = EventPayload::new("opened", "1", millis);
    let line = formatter().format("door", &body).expect("format");
    assert!(line.contains(expected), "{expected} not in {line}");
}

#[test]
fn text_timestamps_normalise_to_utc() {
    let mut body = EventPayload::new("opened", "1", 0);
    body.timestamp = Timestamp::Text("2024-03-01T13:30:00.250+01:00".into());
    let line = formatter().format("door", &body).expect("format");
    assert!(line.contains("2024-03-01T12:30:00.250Z"));
}

#[test]
fn unparseable_timestamp_is_an_error_not_a_nil_value() {
    let mut body = EventPayload::new("opened", "1", 0);
    body.timestamp = Timestamp::Text("yesterday-ish".into());
    let err = formatter().format("door", &body).expect_err("must fail");
    assert!(err.to_string().contains("timestamp"));
}

#[test]
fn sd_param_escaping_is_opt_in() {
    let body = EventPayload::new(r#"contains "quotes""#, "1", 0);
    let plain = SyslogFormatter::new("h", false)
        .format("door", &body)
        .expect("format");
    let escaped = SyslogFormatter::new("h", true)
        .format("door", &body)
        .expect("format");
    assert!(plain.contains(r#"event="contains "quotes"""#));
    assert!(escaped.contains(r#"event="contains \"quotes\"""#));
}
