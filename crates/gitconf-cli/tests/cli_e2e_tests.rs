//! CLI end-to-end tests that invoke the compiled `gitconf` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn gitconf_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gitconf"))
}

/// Run `gitconf --file <config> <args>` with a clean environment.
fn run(config: &Path, args: &[&str]) -> Output {
    command(config, args)
        .output()
        .expect("failed to execute gitconf binary")
}

fn command(config: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(gitconf_bin());
    cmd.arg("--file")
        .arg(config)
        .args(args)
        .env_remove("GITCONF_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn setup(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".gitconfig");
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_help_exits_zero() {
    let out = Command::new(gitconf_bin()).arg("--help").output().unwrap();
    assert!(out.status.success());
    assert!(stdout(&out).contains("toggle"));
}

#[test]
fn test_path_honors_git_config_global() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("global.gitconfig");
    let out = Command::new(gitconf_bin())
        .arg("path")
        .env_remove("GITCONF_FILE")
        .env("GIT_CONFIG_GLOBAL", &target)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), target.display().to_string());
}

#[test]
fn test_read_missing_file() {
    let temp = TempDir::new().unwrap();
    let out = run(&temp.path().join("missing"), &["read"]);
    assert!(out.status.success());
    assert_eq!(
        json(&out),
        serde_json::json!({"success": true, "entries": [], "rawContent": ""})
    );
}

#[test]
fn test_read_reports_entries() {
    let (_temp, path) = setup("[user]\n\tname = Bob\n# [core]");
    let out = run(&path, &["read"]);
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["success"], true);
    assert_eq!(value["rawContent"], "[user]\n\tname = Bob\n# [core]");
    assert_eq!(value["entries"][1]["key"], "name");
    assert_eq!(value["entries"][1]["section"], "user");
    assert_eq!(value["entries"][2]["disabled"], true);
}

#[test]
fn test_read_failure_still_exits_zero() {
    let (_temp, path) = setup("");
    fs::write(&path, [0xff, 0xfe]).unwrap();
    let out = run(&path, &["read"]);
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("UTF-8"));
}

#[test]
fn test_write_from_stdin() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sub").join(".gitconfig");

    let mut child = command(&path, &["write"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"type": "section", "section": "core"}, {"type": "config", "key": "editor", "value": "vim"}]"#)
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    assert_eq!(json(&out), serde_json::json!({"success": true}));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[core]\n    editor = vim");
}

#[test]
fn test_read_then_write_round_trip() {
    let (temp, path) = setup("# keep\n[alias]\n\tst=status\n");
    let read = run(&path, &["read"]);
    let input = temp.path().join("entries.json");
    fs::write(&input, &read.stdout).unwrap();

    let out = run(&path, &["write", "--input", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# keep\n[alias]\n    st = status\n"
    );
}

#[test]
fn test_write_rejects_invalid_json() {
    let (temp, path) = setup("[core]");
    let input = temp.path().join("bad.json");
    fs::write(&input, "not json").unwrap();

    let out = run(&path, &["write", "--input", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[core]");
}

#[test]
fn test_toggle_line() {
    let (_temp, path) = setup("[core]\n\teditor = vim\n#\tpager = less");

    let out = run(&path, &["toggle", "3"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("Enabled line 3: pager = less"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[core]\n    editor = vim\n    pager = less"
    );

    let out = run(&path, &["toggle", "1"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Disabled line 1: # [core]"));
}

#[test]
fn test_toggle_comment_fails() {
    let (_temp, path) = setup("# a note\n[core]");
    let out = run(&path, &["toggle", "1"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot be enabled or disabled"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# a note\n[core]");
}

#[test]
fn test_set_creates_and_updates() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".gitconfig");

    assert!(run(&path, &["set", "user.name", "Bob"]).status.success());
    assert!(run(&path, &["set", "remote.origin.url", "git@x:y.git"]).status.success());
    assert!(run(&path, &["set", "user.name", "Alice"]).status.success());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[user]\n    name = Alice\n[remote \"origin\"]\n    url = git@x:y.git"
    );
}

#[test]
fn test_set_keeps_trailing_newline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".gitconfig");
    fs::write(&path, "[core]\n\tbare = false\n").unwrap();

    assert!(run(&path, &["set", "user.name", "Bob"]).status.success());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[core]\n    bare = false\n[user]\n    name = Bob\n"
    );
}

#[test]
fn test_set_rejects_bad_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".gitconfig");
    let out = run(&path, &["set", "nodot", "x"]);
    assert!(!out.status.success());
    assert!(!path.exists());
}

#[test]
fn test_show_lists_entries() {
    let (_temp, path) = setup("[remote \"origin\"]\n\turl = x\n# old = 1");
    let out = run(&path, &["show"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("[remote \"origin\"]"));
    assert!(text.contains("remote.origin.url = x"));
    assert!(text.contains("remote.origin.old = 1"));
    assert!(text.contains("(disabled)"));
}

#[test]
fn test_show_raw_is_verbatim() {
    let content = "[core]\n\teditor=vim\n";
    let (_temp, path) = setup(content);
    let out = run(&path, &["show", "--raw"]);
    assert_eq!(stdout(&out), content);
}

#[test]
fn test_diff_previews_normalization() {
    let (_temp, path) = setup("[core]\n\teditor=vim\n# note");
    let out = run(&path, &["diff", "--json"]);
    assert!(out.status.success());
    let value = json(&out);
    assert_eq!(value["is_equivalent"], false);
    assert_eq!(
        value["changes"],
        serde_json::json!([
            {"change": "removed", "line": "\teditor=vim"},
            {"change": "added", "line": "    editor = vim"}
        ])
    );
    // Preview only
    assert_eq!(fs::read_to_string(&path).unwrap(), "[core]\n\teditor=vim\n# note");
}

#[test]
fn test_diff_canonical_file() {
    let (_temp, path) = setup("[core]\n    editor = vim");
    let out = run(&path, &["diff"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("No changes"));
}
