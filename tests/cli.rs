use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn roster(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn add(home: &Path, name: &str, id: &str, email: &str, contact: &str) {
    roster(home)
        .args(["add", "--name", name, "--id", id, "--email", email, "--contact", contact])
        .assert()
        .success();
}

fn stored(home: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(home.join("students.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn empty_roster_lists_placeholder() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No students yet."));
}

#[test]
fn add_persists_and_lists() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args([
            "add", "--name", "Ann Lee", "--id", "123", "--email", "a@b.com", "--contact",
            "1234567890",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added (1): Ann Lee"));

    assert_eq!(
        stored(home.path()),
        serde_json::json!([
            {"name": "Ann Lee", "id": "123", "email": "a@b.com", "contact": "1234567890"}
        ])
    );

    roster(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.").and(predicate::str::contains("a@b.com")));
}

#[test]
fn invalid_add_fails_without_writing() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args([
            "add", "--name", "Ann", "--id", "1", "--email", "a@b.com", "--contact", "123456789",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 10 digits"));

    assert!(!home.path().join("students.json").exists());
}

#[test]
fn missing_flag_is_missing_field() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args(["add", "--name", "Ann", "--id", "1", "--contact", "1234567890"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing email"));
}

#[test]
fn duplicate_add_is_refused() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");

    roster(home.path())
        .args([
            "add", "--name", "Ann", "--id", "1", "--email", "a@b.com", "--contact", "1234567890",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(stored(home.path()).as_array().unwrap().len(), 1);
}

#[test]
fn edit_changes_only_given_fields() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann Lee", "123", "a@b.com", "1234567890");
    add(home.path(), "Bob", "456", "b@b.com", "0987654321");

    roster(home.path())
        .args(["edit", "1", "--contact", "9999999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated (1): Ann Lee"));

    assert_eq!(
        stored(home.path()),
        serde_json::json!([
            {"name": "Ann Lee", "id": "123", "email": "a@b.com", "contact": "9999999999"},
            {"name": "Bob", "id": "456", "email": "b@b.com", "contact": "0987654321"}
        ])
    );
}

#[test]
fn rejected_edit_keeps_record() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann Lee", "123", "a@b.com", "1234567890");

    roster(home.path())
        .args(["edit", "1", "--contact", "555"])
        .assert()
        .failure();

    assert_eq!(stored(home.path())[0]["contact"], "1234567890");
}

#[test]
fn delete_asks_and_honours_no() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");

    roster(home.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete student 1: Ann?"));
    assert_eq!(stored(home.path()).as_array().unwrap().len(), 1);

    roster(home.path())
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted (1): Ann"));
    assert_eq!(stored(home.path()), serde_json::json!([]));
}

#[test]
fn delete_shifts_positions() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");
    add(home.path(), "Bob", "2", "b@b.com", "1234567890");
    add(home.path(), "Cy", "3", "c@b.com", "1234567890");

    roster(home.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success();

    let names: Vec<_> = stored(home.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Bob", "Cy"]);
}

#[test]
fn unknown_position_fails() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args(["delete", "3", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No student at position 3"));
}

#[test]
fn corrupt_slot_is_treated_as_empty() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("students.json"), "definitely not json").unwrap();

    roster(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students yet."));
}

#[test]
fn config_slot_key_switches_roster() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args(["config", "slot-key", "class_b"])
        .assert()
        .success();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");

    assert!(home.path().join("class_b.json").exists());
    assert!(!home.path().join("students.json").exists());

    roster(home.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("class_b.json"));
}

#[test]
fn config_confirm_delete_off_skips_prompt() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");
    roster(home.path())
        .args(["config", "confirm-delete", "false"])
        .assert()
        .success();

    roster(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete student").not());
    assert_eq!(stored(home.path()), serde_json::json!([]));
}

#[test]
fn interactive_form_add_then_edit() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
name Ann-Lee
name Ann Lee
id 12x3
email a@b.com
contact 12345 67890
submit
edit 1
contact 555
submit
contact 9999999999
submit
quit
";

    roster(home.path())
        .arg("form")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Removed characters not allowed in student ID")
                .and(predicate::str::contains("Student added (1): Ann Lee"))
                .and(predicate::str::contains("update> "))
                .and(predicate::str::contains("Student updated (1): Ann Lee")),
        )
        .stderr(predicate::str::contains("at least 10 digits"));

    assert_eq!(
        stored(home.path()),
        serde_json::json!([
            {"name": "Ann Lee", "id": "123", "email": "a@b.com", "contact": "9999999999"}
        ])
    );
}

#[test]
fn interactive_delete_reads_confirmation_from_session() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Ann", "1", "a@b.com", "1234567890");
    add(home.path(), "Bob", "2", "b@b.com", "1234567890");

    roster(home.path())
        .arg("form")
        .write_stdin("delete 1\nno\ndelete 2\nyes\n")
        .assert()
        .success();

    let names: Vec<_> = stored(home.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ann"]);
}

#[test]
fn verbose_commands_write_the_log_file() {
    let home = tempfile::tempdir().unwrap();
    roster(home.path())
        .args([
            "-v", "add", "--name", "Ann Lee", "--id", "123", "--email", "a@b.com", "--contact",
            "1234567890",
        ])
        .assert()
        .success();
    // A refused add exits early; its records must reach the file too.
    roster(home.path())
        .args([
            "-v", "add", "--name", "Ann Lee", "--id", "123", "--email", "a@b.com", "--contact",
            "1234567890",
        ])
        .assert()
        .code(1);

    let log = std::fs::read_to_string(home.path().join("logs").join("roster_rCURRENT.log"))
        .unwrap();
    assert!(log.contains("event=app_start"), "{}", log);
    assert!(log.contains("event=add position=1"), "{}", log);
    assert!(log.contains("event=add status=duplicate"), "{}", log);
}
