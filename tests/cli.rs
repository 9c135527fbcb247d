//! End-to-end tests for the docharvest binary

use assert_cmd::Command;
use predicates::prelude::*;

fn docharvest() -> Command {
    Command::cargo_bin("docharvest").expect("binary builds")
}

#[test]
fn test_extract_prints_comment_text() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.py");
    std::fs::write(&file, "# explains foo\ndef foo():\n    return 1\n").unwrap();

    docharvest()
        .arg("extract")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("explains foo"))
        .stdout(predicate::str::contains("function foo"));
}

#[test]
fn test_extract_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.py");
    std::fs::write(&file, "# first\n# second\ndef foo():\n    return 1\n").unwrap();

    let output = docharvest()
        .arg("--format")
        .arg("json")
        .arg("extract")
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let comments = reports[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "first second");
    assert_eq!(comments[0]["start_line"], 1);
    assert_eq!(comments[0]["end_line"], 2);
    assert_eq!(comments[0]["function_name"], "foo");
}

#[test]
fn test_extract_directory_walks_supported_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.py"), "# note a\nx = 1\n").unwrap();
    std::fs::write(dir.path().join("b.rs"), "// note b\nfn main() {}\n").unwrap();
    std::fs::write(dir.path().join("skip.txt"), "# not source\n").unwrap();

    docharvest()
        .arg("extract")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("note a"))
        .stdout(predicate::str::contains("note b"))
        .stdout(predicate::str::contains("skip.txt").not());
}

#[test]
fn test_unterminated_comment_warns_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.java");
    std::fs::write(&bad, "class A {}\n/* never closed\n").unwrap();
    let good = dir.path().join("good.py");
    std::fs::write(&good, "# fine\nx = 1\n").unwrap();

    docharvest()
        .arg("extract")
        .arg(&bad)
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("fine"))
        .stderr(predicate::str::contains("unterminated block comment"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_inspect_reports_association_details() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.py");
    std::fs::write(&file, "# explains foo\ndef foo():\n    return 1\n").unwrap();

    docharvest()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Function: foo"))
        .stdout(predicate::str::contains("lines 1-1"));
}

#[test]
fn test_languages_lists_tables() {
    docharvest()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("java"))
        .stdout(predicate::str::contains("rust"));
}

#[test]
fn test_forced_language_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("script.txt");
    std::fs::write(&file, "# shell-style note\nx = 1\n").unwrap();

    docharvest()
        .arg("extract")
        .arg("--language")
        .arg("python")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("shell-style note"));
}
