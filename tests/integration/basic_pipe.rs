//! Integration tests for basic stdin->stdout piping.

use predicates::prelude::*;

use crate::{LOGCAT, droidcol};

#[test]
fn empty_stdin_exits_zero() {
    droidcol().write_stdin("").assert().success().stdout("");
}

#[test]
fn single_line_outputs_columns() {
    let input = "12-14 15:40:35.103  1923  1923 E CarEvSettingAdapter: onChangeEvent beanId is empty!";
    droidcol()
        .arg("--color=never")
        .arg("--year=2025")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(format!("{input}\n"));
}

#[test]
fn banners_pass_through() {
    droidcol()
        .arg("--color=never")
        .write_stdin(LOGCAT)
        .assert()
        .success()
        .stdout(predicate::str::contains("--------- beginning of main\n"))
        .stdout(predicate::str::contains("--------- beginning of crash\n"));
}

#[test]
fn every_input_line_produces_output() {
    let output = droidcol()
        .arg("--color=never")
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), LOGCAT.lines().count());
}

#[test]
fn tsv_format_splits_seven_fields() {
    let output = droidcol()
        .arg("--format=tsv")
        .arg("--color=never")
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let fatal = stdout
        .lines()
        .find(|l| l.contains("SIGSEGV"))
        .expect("fatal line present");
    let fields: Vec<&str> = fatal.split('\t').collect();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[4], "F");
    assert_eq!(fields[5], "libc    ");
    assert_eq!(fields[6], "Fatal signal 11 (SIGSEGV)");
}

#[test]
fn json_format_drops_banners() {
    let output = droidcol()
        .arg("--format=json")
        .arg("--year=2025")
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("beginning of"));
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["level"], "E");
    assert_eq!(records[0]["timestamp"], "2025-12-14T15:40:35.103");
    assert_eq!(records[2]["pid"], "611");
}

#[test]
fn oversized_line_is_truncated() {
    let input = "x".repeat(20_000);
    let output = droidcol()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().len(), 10_240);
}

#[test]
fn completions_are_generated() {
    droidcol()
        .arg("--completions=bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("droidcol"));
}
