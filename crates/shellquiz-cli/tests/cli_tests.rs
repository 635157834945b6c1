//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = "../../catalogs/linux-basics.json";

fn shellquiz() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("shellquiz").unwrap();
    cmd.env_remove("HOME")
        .env_remove("SHELLQUIZ_QUESTIONS")
        .env_remove("SHELLQUIZ_STATS")
        .env_remove("RUST_LOG");
    cmd
}

/// A command pointed at the bundled catalog and a private ledger.
fn quiz(dir: &TempDir) -> Command {
    let mut cmd = shellquiz();
    cmd.arg("--questions")
        .arg(CATALOG)
        .arg("--stats")
        .arg(dir.path().join("stats.json"));
    cmd
}

fn turn_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn read_ledger(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn validate_bundled_catalog() {
    shellquiz()
        .arg("validate")
        .arg("--questions")
        .arg(CATALOG)
        .assert()
        .success()
        .stdout(predicate::str::contains("24 questions"))
        .stdout(predicate::str::contains("5 categories"))
        .stdout(predicate::str::contains("3 difficulties"))
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn validate_missing_catalog() {
    shellquiz()
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("cannot start without a question catalog"));
}

#[test]
fn corrupt_catalog_is_fatal() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("questions.json");
    std::fs::write(&catalog, "[{\"question\": \"pwd?\"").unwrap();

    shellquiz()
        .arg("turn")
        .arg("--questions")
        .arg(&catalog)
        .arg("--stats")
        .arg(dir.path().join("stats.json"))
        .arg("--state")
        .arg(dir.path().join("session.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse catalog"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("questions.json");
    std::fs::write(
        &catalog,
        r#"[
            {"question": "Print the working directory", "answer": ["pwd"], "category": "Files", "difficulty": "Easy"},
            {"question": "Print the working directory", "answer": ["pwd", "pwd"], "category": "Files", "difficulty": "Easy"}
        ]"#,
    )
    .unwrap();

    shellquiz()
        .arg("validate")
        .arg("--questions")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#1] WARNING: duplicate question"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn categories_lists_labels_with_counts() {
    shellquiz()
        .arg("categories")
        .arg("--questions")
        .arg(CATALOG)
        .assert()
        .success()
        .stdout(predicate::str::contains("Networking (5 questions)"))
        .stdout(predicate::str::contains("Permissions (3 questions)"))
        .stdout(predicate::str::contains("Easy (10 questions)"));
}

#[test]
fn turn_flow_grades_and_persists() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("session.json");
    let stats = dir.path().join("stats.json");

    let shown = turn_json(
        quiz(&dir)
            .arg("turn")
            .arg("--state")
            .arg(&state)
            .arg("--category")
            .arg("Files")
            .arg("--difficulty")
            .arg("Hard"),
    );
    assert!(shown["question"]["question"]
        .as_str()
        .unwrap()
        .starts_with("Find all files under /var/log"));
    assert_eq!(shown["selected_category"], "Files");
    assert!(shown["result"].is_null());
    assert!(shown["question"].get("answer").is_none());
    assert!(!stats.exists());

    let correct = turn_json(
        quiz(&dir)
            .arg("turn")
            .arg("--state")
            .arg(&state)
            .arg("--action")
            .arg("check")
            .arg("--answer")
            .arg("  find /var/log  -mtime +7 -name '*.gz' "),
    );
    assert_eq!(correct["result"], "Correct ✅");
    assert_eq!(correct["outcome"], "correct");
    assert_eq!(correct["score"], 1);
    assert_eq!(correct["total"], 1);

    let wrong = turn_json(
        quiz(&dir)
            .arg("turn")
            .arg("--state")
            .arg(&state)
            .arg("--action")
            .arg("check")
            .arg("--answer")
            .arg("locate '*.gz'"),
    );
    assert_eq!(
        wrong["result"],
        "Wrong ❌ | Correct: find /var/log -name '*.gz' -mtime +7"
    );
    assert_eq!(wrong["score"], 1);
    assert_eq!(wrong["total"], 2);

    let ledger = read_ledger(&stats);
    assert_eq!(ledger["Files_Hard"]["correct"], 1);
    assert_eq!(ledger["Files_Hard"]["wrong"], 1);
}

#[test]
fn turn_apply_with_no_matches() {
    let dir = TempDir::new().unwrap();
    let view = turn_json(
        quiz(&dir)
            .arg("turn")
            .arg("--state")
            .arg(dir.path().join("session.json"))
            .arg("--action")
            .arg("apply")
            .arg("--category")
            .arg("Databases"),
    );
    assert!(view["question"].is_null());
    assert_eq!(view["selected_category"], "Databases");
    assert_eq!(view["selected_difficulty"], "All");
    assert_eq!(view["categories"].as_array().unwrap().len(), 5);
}

#[test]
fn turn_check_requires_answer() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .arg("turn")
        .arg("--state")
        .arg(dir.path().join("session.json"))
        .arg("--action")
        .arg("check")
        .assert()
        .failure();
}

#[test]
fn play_records_answers_and_stats_reports_them() {
    let dir = TempDir::new().unwrap();

    quiz(&dir)
        .arg("play")
        .arg("--category")
        .arg("Permissions")
        .arg("--difficulty")
        .arg("Easy")
        .write_stdin("chmod   +x deploy.sh\nchmod 777 deploy.sh\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Make deploy.sh executable"))
        .stdout(predicate::str::contains("Correct ✅"))
        .stdout(predicate::str::contains("Wrong ❌ | Correct: chmod +x deploy.sh"))
        .stdout(predicate::str::contains("Final score: 1/2"));

    let ledger = read_ledger(&dir.path().join("stats.json"));
    assert_eq!(ledger["Permissions_Easy"]["correct"], 1);
    assert_eq!(ledger["Permissions_Easy"]["wrong"], 1);

    quiz(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Permissions_Easy"))
        .stdout(predicate::str::contains("50.0%"));
}

#[test]
fn corrupt_ledger_does_not_block_play() {
    let dir = TempDir::new().unwrap();
    let stats = dir.path().join("stats.json");
    std::fs::write(&stats, "{ definitely not json").unwrap();

    quiz(&dir)
        .arg("play")
        .arg("--category")
        .arg("Files")
        .arg("--difficulty")
        .arg("Hard")
        .write_stdin("ls\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 0/1"));

    let ledger = read_ledger(&stats);
    assert_eq!(ledger["Files_Hard"]["wrong"], 1);
    assert_eq!(ledger.as_object().unwrap().len(), 1);
}

#[test]
fn stats_on_empty_ledger() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No answers recorded yet."));

    quiz(&dir)
        .arg("stats")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    shellquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created shellquiz.toml"))
        .stdout(predicate::str::contains("Created questions.json"));

    assert!(dir.path().join("shellquiz.toml").exists());
    assert!(dir.path().join("questions.json").exists());

    // The generated setup works out of the box.
    shellquiz()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    shellquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    shellquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    shellquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adaptive Linux command trainer"));
}

#[test]
fn version_output() {
    shellquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shellquiz"));
}
