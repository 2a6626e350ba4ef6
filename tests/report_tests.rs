//! Integration tests for report queries and document output.
//!
//! These tests verify the `{ processes, lostRam }` document shape that
//! downstream tooling consumes.

use android_meminfo::{CompactMemInfoParser, MemInfoReport, ReportDocument};
use serde_json::Value;

/// Input from a typical cached-app heavy device.
fn sample_report() -> MemInfoReport {
    CompactMemInfoParser::new().parse([
        "oom,cached,141357",
        "proc,cached,com.google.android.youtube,2964,19345,N/A,e",
        "proc,cached,com.google.android.apps.plus,2877,9604,50,e",
        "proc,cached,com.google.android.apps.magazines,2009,20111,100,e",
        "proc,cached,com.google.android.apps.walletnfcrel,10790,11164,0,e",
        "proc,cached,com.google.android.incallui,3410,9491,500,e",
        "lostram,1005",
        "cat,Native,63169",
    ])
}

#[test]
fn test_json_document() {
    let json = sample_report().to_json_value().unwrap();

    let processes = json["processes"].as_array().expect("processes array");
    assert_eq!(processes.len(), 5);
    assert_eq!(json["lostRam"].as_u64(), Some(1005));
}

#[test]
fn test_document_entries_carry_all_fields() {
    let json = sample_report().to_json_value().unwrap();

    for entry in json["processes"].as_array().unwrap() {
        let obj = entry.as_object().unwrap();
        assert_eq!(obj.len(), 6, "unexpected fields in {entry}");
        assert!(obj["pid"].is_u64());
        assert!(obj["name"].is_string());
        assert!(obj["type"].is_string());
        assert!(obj["pss"].is_u64());
        assert!(obj["swapPss"].is_u64());
        assert!(obj["hasActivities"].is_boolean());
    }
}

#[test]
fn test_document_preserves_first_seen_order() {
    let doc = sample_report().to_document();
    let pids: Vec<u32> = doc.processes.iter().map(|p| p.pid()).collect();
    assert_eq!(pids, vec![2964, 2877, 2009, 10790, 3410]);
}

#[test]
fn test_document_is_repeatable() {
    let report = sample_report();

    assert_eq!(report.to_document(), report.to_document());
    assert_eq!(report.to_json_value().unwrap(), report.to_json_value().unwrap());
    assert_eq!(
        report.to_json_string(false).unwrap(),
        report.to_json_string(false).unwrap()
    );
}

#[test]
fn test_json_string_decodes_to_document() {
    let report = sample_report();
    let text = report.to_json_string(true).unwrap();

    let doc: ReportDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(doc, report.to_document());

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, report.to_json_value().unwrap());
}

#[test]
fn test_empty_report_document() {
    let report = CompactMemInfoParser::new().parse(["proc,cached,x,a,b,e", "lostram,a,1000"]);
    let json = report.to_json_value().unwrap();

    assert_eq!(json["processes"], Value::Array(Vec::new()));
    assert_eq!(json["lostRam"], 0);
}

#[test]
fn test_record_lookup() {
    let report = sample_report();

    let record = report.get(10790).expect("walletnfcrel recorded");
    assert_eq!(record.name(), "com.google.android.apps.walletnfcrel");
    assert_eq!(record.pss_kb(), 11164);
    assert_eq!(record.swap_pss_kb(), 0);
    assert!(report.get(1).is_none());
}

#[test]
fn test_report_shared_across_threads() {
    let report = std::sync::Arc::new(sample_report());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let report = std::sync::Arc::clone(&report);
            std::thread::spawn(move || report.pss_of(2964).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 19345);
    }
}
