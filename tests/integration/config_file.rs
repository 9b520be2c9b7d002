//! Integration tests for the TOML config file and its precedence.

use std::io::Write;

use predicates::prelude::*;

use crate::{LOGCAT, droidcol};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_sets_format_and_level() {
    let file = config_file(
        r#"
format = "tsv"
level = "E"
"#,
    );
    let output = droidcol()
        .arg("--color=never")
        .arg(format!("--config={}", file.path().display()))
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("E\tCarEvSettingAdapter\tonChangeEvent beanId is empty!"));
    assert!(!stdout.contains("Slow operation"));
}

#[test]
fn config_file_offset_and_year() {
    let file = config_file(
        r#"
time_offset_ms = 2000
year = 2024
format = "json"
"#,
    );
    let output = droidcol()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("12-14 15:40:35.103  1  1 I T: x")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["timestamp"], "2024-12-14T15:40:37.103");
}

#[test]
fn cli_overrides_config_file() {
    let file = config_file(
        r#"
format = "json"
time_offset_ms = 2000
"#,
    );
    droidcol()
        .arg("--color=never")
        .arg("--format=text")
        .arg("--offset-ms=0")
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("12-14 15:40:35.103  1  1 I T: x")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("12-14 15:40:35.103 "));
}

#[test]
fn highlight_colors_from_config() {
    let file = config_file(
        r##"
[highlight.E]
foreground = "#010203"
background = "#040506"
"##,
    );
    let output = droidcol()
        .arg("--color=always")
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("12-14 15:40:35.103  1  1 E T: x")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("38;2;1;2;3"), "custom foreground expected: {stdout:?}");
    assert!(stdout.contains("48;2;4;5;6"), "custom background expected: {stdout:?}");
}

#[test]
fn invalid_config_exits_one() {
    let file = config_file("format = [not toml");
    droidcol()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn bad_color_in_config_exits_one() {
    let file = config_file(
        r#"
[highlight.W]
foreground = "chartreuse"
"#,
    );
    droidcol()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("chartreuse"));
}

#[test]
fn missing_explicit_config_exits_one() {
    droidcol()
        .arg("--config=/nonexistent/droidcol.toml")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}
