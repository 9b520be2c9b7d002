//! Integration tests for shifting displayed timestamps.

use predicates::prelude::*;

use crate::droidcol;

const LINE: &str = "12-14 15:40:35.103  1923  1923 E CarEvSettingAdapter: onChangeEvent beanId is empty!";

#[test]
fn positive_offset_shifts_time() {
    droidcol()
        .arg("--color=never")
        .arg("--year=2025")
        .arg("--offset-ms=5500")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("12-14 15:40:40.603 "));
}

#[test]
fn negative_offset_shifts_back() {
    droidcol()
        .arg("--color=never")
        .arg("--year=2025")
        .arg("--offset-ms")
        .arg("-35103")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("12-14 15:40:00.000 "));
}

#[test]
fn offset_applies_to_json_timestamp() {
    let output = droidcol()
        .arg("--format=json")
        .arg("--year=2025")
        .arg("--offset-ms=1000")
        .write_stdin(LINE)
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["timestamp"], "2025-12-14T15:40:36.103");
    assert_eq!(value["time"], "15:40:36.103");
}

#[test]
fn message_text_is_untouched_by_offset() {
    droidcol()
        .arg("--color=never")
        .arg("--offset-ms=60000")
        .write_stdin(LINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("onChangeEvent beanId is empty!"));
}
