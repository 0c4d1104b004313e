mod common;

use assert_cmd::Command;
use common::create_fixture;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help_flag() {
    Command::cargo_bin("treelist")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("flat list of relative paths"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--interactive"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("treelist")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treelist"));
}

#[test]
fn test_defaults_write_tree_txt_in_working_dir() {
    let tree = create_fixture(&["sub/", "sub/inner.txt", "b.txt", "A.txt"]);

    Command::cargo_bin("treelist")
        .unwrap()
        .current_dir(tree.path())
        .assert()
        .success();

    // The output file itself is created after the walk, so it is not listed.
    let text = fs::read_to_string(tree.path().join("tree.txt")).unwrap();
    assert_eq!(text, ".\nsub\nsub/inner.txt\nA.txt\nb.txt");
}

#[test]
fn test_level_and_output_flags() {
    let tree = create_fixture(&["sub/", "sub/inner.txt", "top.txt"]);
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("flat.txt");

    Command::cargo_bin("treelist")
        .unwrap()
        .arg(tree.path())
        .arg("-o")
        .arg(&out)
        .args(["-L", "0"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out).unwrap(), ".\nsub\ntop.txt");
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("tree.txt");

    Command::cargo_bin("treelist")
        .unwrap()
        .arg("/this/path/does/not/exist")
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to resolve path"));
    assert!(!out.exists());
}

#[test]
fn test_file_path_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("afile.txt");
    fs::write(&file, "hello").unwrap();
    let out = tmp.path().join("tree.txt");

    Command::cargo_bin("treelist")
        .unwrap()
        .arg(&file)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
    assert!(!out.exists());
}

#[test]
fn test_missing_output_parent_exits_with_error() {
    let tree = create_fixture(&["a.txt"]);

    Command::cargo_bin("treelist")
        .unwrap()
        .arg(tree.path())
        .arg("-o")
        .arg(tree.path().join("missing/dir/tree.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write path list"));
}

#[test]
fn test_negative_level_rejected_by_parser() {
    Command::cargo_bin("treelist")
        .unwrap()
        .args(["-L", "-1"])
        .assert()
        .failure();
}

#[test]
fn test_interactive_conflicts_with_path() {
    Command::cargo_bin("treelist")
        .unwrap()
        .args(["--interactive", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let tree = create_fixture(&["sub/", "sub/inner.txt", "top.txt"]);
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("answers");

    Command::cargo_bin("treelist")
        .unwrap()
        .arg("-i")
        .write_stdin(format!("{}\n{}\n1\n", out.display(), tree.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Output file name [tree.txt]"))
        .stdout(predicate::str::contains("Saved 4 paths"));

    let text = fs::read_to_string(out_dir.path().join("answers.txt")).unwrap();
    assert_eq!(text, ".\nsub\nsub/inner.txt\ntop.txt");
}

#[test]
fn test_verbose_reports_written_file() {
    let tree = create_fixture(&["a.txt"]);
    let out_dir = TempDir::new().unwrap();

    Command::cargo_bin("treelist")
        .unwrap()
        .env_remove("TREELIST_LOG")
        .arg(tree.path())
        .arg("-o")
        .arg(out_dir.path().join("t.txt"))
        .args(["-v", "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote 2 paths"));
}

#[test]
fn test_quiet_run_is_silent() {
    let tree = create_fixture(&["a.txt"]);
    let out_dir = TempDir::new().unwrap();

    Command::cargo_bin("treelist")
        .unwrap()
        .env_remove("TREELIST_LOG")
        .arg(tree.path())
        .arg("-o")
        .arg(out_dir.path().join("t.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
#[cfg(unix)]
fn test_no_follow_flag_keeps_links_unexpanded() {
    let tree = create_fixture(&["real/", "real/inside.txt"]);
    std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("link")).unwrap();
    let out_dir = TempDir::new().unwrap();
    let followed = out_dir.path().join("followed.txt");
    let plain = out_dir.path().join("plain.txt");

    Command::cargo_bin("treelist")
        .unwrap()
        .arg(tree.path())
        .arg("-o")
        .arg(&followed)
        .assert()
        .success();
    Command::cargo_bin("treelist")
        .unwrap()
        .arg(tree.path())
        .arg("-o")
        .arg(&plain)
        .arg("--no-follow")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(followed).unwrap(),
        ".\nlink\nlink/inside.txt\nreal\nreal/inside.txt"
    );
    assert_eq!(
        fs::read_to_string(plain).unwrap(),
        ".\nreal\nreal/inside.txt\nlink"
    );
}
