//! Integration tests for color control: `NO_COLOR`, --color flag, `TERM`.

use crate::droidcol;

const LINE: &str = "12-14 15:40:35.103  1923  1923 E CarEvSettingAdapter: onChangeEvent beanId is empty!";

#[test]
fn color_never_disables_ansi() {
    let output = droidcol()
        .arg("--color=never")
        .write_stdin(LINE)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
}

#[test]
fn color_always_enables_ansi() {
    let output = droidcol()
        .arg("--color=always")
        .write_stdin(LINE)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\x1b["),
        "Should contain ANSI escapes with --color=always"
    );
}

#[test]
fn piped_auto_mode_has_no_color() {
    let output = droidcol().write_stdin(LINE).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\x1b["), "piped stdout should not be colored");
}

#[test]
fn color_always_overrides_no_color() {
    let output = droidcol()
        .env("NO_COLOR", "1")
        .arg("--color=always")
        .write_stdin(LINE)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b["), "--color=always should win over NO_COLOR");
}

#[test]
fn unparsed_lines_never_colored() {
    let output = droidcol()
        .arg("--color=always")
        .write_stdin("--------- beginning of main")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "--------- beginning of main\n");
}
