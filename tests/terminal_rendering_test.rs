use assert_cmd::cargo;
use predicates::prelude::*;

const THREAD: &str = r#"[{"role": "user", "content": [{"text": {"value": "Colors?"}}]}]"#;

#[test]
fn test_show_with_no_color() {
    cargo::cargo_bin_cmd!("threadprint")
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .args(["show", "--mode", "plain", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("👤 USER"));
}

#[test]
fn test_show_with_clicolor_force() {
    cargo::cargo_bin_cmd!("threadprint")
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["show", "--mode", "markdown", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("USER"));
}

#[test]
fn test_show_piped_output_is_plain() {
    cargo::cargo_bin_cmd!("threadprint")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("CLICOLOR")
        .args(["show", "--mode", "plain", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_color_flag_overrides_env() {
    cargo::cargo_bin_cmd!("threadprint")
        .env("NO_COLOR", "1")
        .args(["show", "--mode", "plain", "--color", "always", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));

    cargo::cargo_bin_cmd!("threadprint")
        .env("CLICOLOR_FORCE", "1")
        .args(["show", "--mode", "markdown", "--color", "never", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
