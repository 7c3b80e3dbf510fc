mod common;
use common::{d, t, turnstile_csv};
use rpunchlog::ingest::api::{parse_api_payload, parse_local_timestamp};
use rpunchlog::ingest::turnstile::parse_turnstile;
use rpunchlog::models::punch::PunchSource;

#[test]
fn turnstile_lines_become_bare_punches() {
    let csv = turnstile_csv(&["12/03/2025 08:01", "12/03/2025 17:59"]);
    let batch = parse_turnstile(&csv).expect("parse");

    assert_eq!(batch.punches.len(), 2);
    assert_eq!(batch.skipped, 0);
    assert_eq!(batch.punches[0].date(), d("2025-03-12"));
    assert_eq!(batch.punches[0].time(), t("08:01"));
    assert_eq!(batch.punches[1].time(), t("17:59"));
    assert!(batch.punches.iter().all(|p| p.kind().is_none()));
    assert!(batch.punches.iter().all(|p| p.source() == PunchSource::Csv));
}

#[test]
fn turnstile_ignores_lines_without_timestamp() {
    let csv = "Relatorio de acessos\n\n;;;\nTotal: 2\n12/03/2025 08:00 entrada\n";
    let batch = parse_turnstile(csv).expect("parse");
    assert_eq!(batch.punches.len(), 1);
    assert_eq!(batch.skipped, 0);
}

#[test]
fn turnstile_skips_impossible_dates_and_times() {
    let csv = "31/02/2025 08:00\n12/03/2025 24:10\n12/03/2025 09:00\n";
    let batch = parse_turnstile(csv).expect("parse");
    assert_eq!(batch.punches.len(), 1);
    assert_eq!(batch.skipped, 2);
}

#[test]
fn turnstile_takes_every_match_on_a_line() {
    let batch = parse_turnstile("12/03/2025 08:00 ; 12/03/2025 12:00").expect("parse");
    assert_eq!(batch.punches.len(), 2);
}

#[test]
fn api_envelope_is_unwrapped() {
    let json = r#"{"data":{"data":[
        {"time":"2025-03-12T08:00:00","personName":"X"},
        {"time":"2025-03-12T17:45:30-03:00"},
        {"time":null},
        {"time":"yesterday"}
    ]}}"#;
    let batch = parse_api_payload(json).expect("parse");

    assert_eq!(batch.punches.len(), 2);
    assert_eq!(batch.skipped, 2);
    assert_eq!(batch.punches[1].date(), d("2025-03-12"));
    // offset dropped, seconds truncated
    assert_eq!(batch.punches[1].time(), t("17:45"));
    assert!(batch.punches.iter().all(|p| p.source() == PunchSource::Api));
}

#[test]
fn api_bare_array_and_empty_envelope() {
    let bare = parse_api_payload(r#"[{"time":"2025-03-12 08:00"}]"#).expect("parse");
    assert_eq!(bare.punches.len(), 1);

    let empty = parse_api_payload(r#"{"data":null}"#).expect("parse");
    assert!(empty.is_empty());
}

#[test]
fn api_payload_must_be_json() {
    assert!(parse_api_payload("not json").is_err());
}

#[test]
fn local_timestamp_keeps_wall_clock() {
    let dt = parse_local_timestamp("2025-01-01T00:30:00+05:00").expect("timestamp");
    assert_eq!(dt.date(), d("2025-01-01"));
    assert_eq!(dt.time(), t("00:30"));
}
