//! Integration tests for minimum-level filtering.

use crate::{LOGCAT, droidcol};

#[test]
fn level_warn_shows_warn_error_fatal() {
    let output = droidcol()
        .arg("--color=never")
        .arg("--level=W")
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("refresh"), "debug should be filtered");
    assert!(!stdout.contains("Start proc"), "info should be filtered");
    assert!(!stdout.contains("frame"), "verbose should be filtered");
    assert!(stdout.contains("Slow operation"), "warn should pass");
    assert!(stdout.contains("beanId is empty"), "error should pass");
    assert!(stdout.contains("SIGSEGV"), "fatal should pass");
    assert!(stdout.contains("beginning of crash"), "banners always pass");
}

#[test]
fn level_accepts_full_names() {
    let output = droidcol()
        .arg("--color=never")
        .arg("--level=error")
        .write_stdin(LOGCAT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Slow operation"));
    assert!(stdout.contains("beanId is empty"));
}

#[test]
fn invalid_level_is_rejected() {
    droidcol().arg("--level=trace").assert().failure();
}
