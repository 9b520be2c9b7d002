//! Integration tests for `--score`.

use crate::{LOGCAT, droidcol};

#[test]
fn logcat_is_well_supported() {
    droidcol()
        .arg("--score")
        .write_stdin(LOGCAT)
        .assert()
        .success()
        .stdout("well-supported\n");
}

#[test]
fn json_logs_are_not_supported() {
    let input = r#"{"level":"info","msg":"hello"}
{"level":"warn","msg":"disk low"}"#;
    droidcol()
        .arg("--score")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("not-supported\n");
}

#[test]
fn tie_is_not_supported() {
    let input = "12-14 15:40:35.103  1  1 I T: a\nplain text\n";
    droidcol()
        .arg("--score")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("not-supported\n");
}

#[test]
fn sample_size_limits_lines_read() {
    // The first two lines are banners, so a sample of two has no logcat records.
    let input = format!("banner one\nbanner two\n{LOGCAT}");
    droidcol()
        .arg("--score")
        .arg("--sample-size=2")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("not-supported\n");
}

#[test]
fn empty_input_is_not_supported() {
    droidcol()
        .arg("--score")
        .write_stdin("")
        .assert()
        .success()
        .stdout("not-supported\n");
}
