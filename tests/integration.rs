// Integration testing exercises the CLI as a subprocess. Runs that reach the
// installer need yarn on PATH, so these stick to the validation paths.
use assert_cmd::Command;

#[test]
fn missing_project_name_fails() {
    let mut cmd = Command::cargo_bin("fabrika").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to create new project"));
}

#[test]
fn blank_project_name_fails() {
    let mut cmd = Command::cargo_bin("fabrika").unwrap();

    cmd.arg("  ");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid project name"));
}

#[test]
fn missing_project_name_writes_nothing() {
    let scratch = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("fabrika").unwrap();

    cmd.current_dir(scratch.path());

    cmd.assert().failure();

    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[test]
fn help_documents_the_flags() {
    let mut cmd = Command::cargo_bin("fabrika").unwrap();

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("--dirname"))
        .stdout(predicates::str::contains("--factorio-version"));
}
