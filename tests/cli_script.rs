use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;
use tempfile::TempDir;

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("form_session_cli").expect("binary exists");
    cmd.env("FORM_SESSION_CLI_SCRIPT", "1")
        .env("FORM_SESSION_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}

const WALKTHROUGH: &str = "\
enter Al
enter Alice Smith
enter 5551234567
enter alice@example.com
enter Porto
enter Basketball
enter Celtics
enter Larry Bird
";

#[test]
fn script_mode_walks_the_wizard_to_display() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin(format!("{WALKTHROUGH}exit\n"))
        .assert()
        .success()
        .stdout(contains("Step 1 of 7"))
        .stdout(contains("Please enter a valid full name."))
        .stdout(contains("*** Form submitted successfully! ***"))
        .stdout(contains("Submitted Data"))
        .stdout(contains("Larry Bird"));
}

#[test]
fn script_mode_edit_save_and_cancel() {
    let home = TempDir::new().unwrap();
    let input = format!(
        "{WALKTHROUGH}wait 3000\nedit\nset phone 123\nsave\ncancel\njson\nexit\n"
    );
    let output = script_cmd(&home).write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Please enter a valid phone."), "{stdout}");
    assert!(stdout.contains("1 field(s) need attention"), "{stdout}");
    assert!(stdout.contains("\"mode\": \"display\""), "{stdout}");
    // The cancelled edit leaves the typed value in place.
    assert!(stdout.contains("\"value\": \"123\""), "{stdout}");
    assert!(stdout.contains("\"submitted\": \"5551234567\""), "{stdout}");
    // The banner expired during `wait`.
    assert!(!stdout.contains("\"transient_message\""), "{stdout}");
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("sav\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sav`"))
        .stdout(contains("Did you mean `save`?"));
}

#[test]
fn actions_outside_their_mode_print_a_hint() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("save\nexit\n")
        .assert()
        .success()
        .stdout(contains("not available in wizard mode"))
        .stdout(contains("enter <value>"));
}

#[test]
fn json_view_reports_session_identity() {
    let home = TempDir::new().unwrap();
    let output = script_cmd(&home)
        .write_stdin("json\nexit\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let uuid = Regex::new(r#""session_id": "[0-9a-f-]{36}""#).unwrap();
    assert!(uuid.is_match(&stdout), "{stdout}");
    assert!(stdout.contains("\"advance_label\": \"Next\""), "{stdout}");
}

#[test]
fn version_prints_build_metadata() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("form_session").and(contains("rustc:")));
}
