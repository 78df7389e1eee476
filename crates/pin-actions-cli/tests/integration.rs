use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHA: &str = "8f4b7f84864484a7bf31766abe9204da3cbe65b3";

fn gh_pin_actions() -> Command {
    Command::cargo_bin("gh-pin-actions").unwrap()
}

fn write_workflow(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

// ---------------------------------------------------------------------------
// pin
// ---------------------------------------------------------------------------

#[test]
fn pin_requires_repository() {
    gh_pin_actions()
        .arg("pin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repository"));
}

#[test]
fn pin_rejects_malformed_version_and_recommends_branch() {
    gh_pin_actions()
        .args(["pin", "-R", "owner/repo", "-v", "not-a-version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use --branch"));
}

// ---------------------------------------------------------------------------
// workflows
// ---------------------------------------------------------------------------

#[test]
fn workflows_fails_on_missing_directory() {
    let dir = TempDir::new().unwrap();
    gh_pin_actions()
        .args(["workflows", "--dir"])
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn workflows_reports_empty_directory() {
    let dir = TempDir::new().unwrap();
    gh_pin_actions()
        .args(["workflows", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflow files found"));
}

#[test]
fn workflows_copies_fully_pinned_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let content =
        format!("jobs:\n  build:\n    steps:\n      - uses: actions/checkout@{SHA}\n");
    write_workflow(&dir, "ci.yml", &content);

    gh_pin_actions()
        .args(["workflows", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done! Review the changes in:"));

    let output = dir.path().join("ci-pin.yml");
    assert_eq!(std::fs::read_to_string(output).unwrap(), content);
    // Original untouched.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("ci.yml")).unwrap(),
        content
    );
}

#[test]
fn workflows_skips_malformed_yaml_and_continues() {
    let dir = TempDir::new().unwrap();
    write_workflow(&dir, "broken.yml", "jobs: [unclosed");
    let pinned = format!("jobs:\n  build:\n    steps:\n      - uses: actions/checkout@{SHA}\n");
    write_workflow(&dir, "good.yml", &pinned);

    gh_pin_actions()
        .args(["workflows", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("good-pin.yml"));

    assert!(!dir.path().join("broken-pin.yml").exists());
    assert!(dir.path().join("good-pin.yml").exists());
}

#[test]
fn workflows_warns_on_unresolvable_reference_but_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_workflow(
        &dir,
        "ci.yml",
        "jobs:\n  build:\n    steps:\n      - uses: ./local/action\n",
    );

    gh_pin_actions()
        .args(["--debug", "workflows", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unrecognized action reference"));

    // Text preserved verbatim in the output file.
    let out = std::fs::read_to_string(dir.path().join("ci-pin.yml")).unwrap();
    assert!(out.contains("./local/action"));
}

#[test]
fn workflows_directory_from_env_var() {
    let dir = TempDir::new().unwrap();
    gh_pin_actions()
        .arg("workflows")
        .env("PIN_ACTIONS_DIR", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflow files found"));
}

#[test]
fn second_run_ignores_prior_pin_output() {
    let dir = TempDir::new().unwrap();
    let content =
        format!("jobs:\n  build:\n    steps:\n      - uses: actions/checkout@{SHA}\n");
    write_workflow(&dir, "ci.yml", &content);

    for _ in 0..2 {
        gh_pin_actions()
            .args(["workflows", "--dir"])
            .arg(dir.path())
            .assert()
            .success();
    }

    // Only ci.yml and ci-pin.yml — no ci-pin-pin.yml from re-ingesting output.
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["ci-pin.yml", "ci.yml"]);
}
