//! Tests for rendering entries back to text

use gitconf_content::{Document, Entry, render};
use pretty_assertions::assert_eq;

#[test]
fn test_canonical_config_formatting() {
    let entry = Entry::Config {
        line_number: 7,
        section: Some("x".into()),
        subsection: None,
        key: "a".into(),
        value: "b".into(),
        disabled: false,
        raw: "\t\ta=b".into(),
    };
    assert_eq!(render(&[entry]), "    a = b");
}

#[test]
fn test_reparsed_config_is_reindented() {
    for line in ["a=b", "\ta = b", "a   =    b", "        a= b"] {
        assert_eq!(Document::parse(line).render(), "    a = b", "input {line:?}");
    }
}

#[test]
fn test_disabled_entries_render_with_marker() {
    let doc = Document::parse("#[core]\n#editor=vim");
    assert_eq!(doc.render(), "# [core]\n    # editor = vim");
}

#[test]
fn test_comments_and_unknown_lines_are_verbatim() {
    let text = "  #   odd   spacing\n; other comment style\n\tjunk line";
    assert_eq!(Document::parse(text).render(), text);
}

#[test]
fn test_blank_lines_lose_whitespace() {
    assert_eq!(Document::parse("[a]\n   \n[b]").render(), "[a]\n\n[b]");
}

#[test]
fn test_no_trailing_newline_added() {
    assert_eq!(Document::parse("[core]").render(), "[core]");
    assert_eq!(Document::parse("[core]\n").render(), "[core]\n");
}

#[test]
fn test_missing_fields_render_as_empty_strings() {
    let entries: Vec<Entry> = serde_json::from_str(
        r#"[
            {"type": "section"},
            {"type": "config", "value": "x"},
            {"type": "config", "key": "k"},
            {"type": "comment"},
            {"type": "unknown"},
            {"type": "empty"}
        ]"#,
    )
    .unwrap();
    assert_eq!(render(&entries), "[]\n     = x\n    k = \n\n\n");
}

#[test]
fn test_full_document() {
    let text = "\
# global settings
[user]
\tname = Bob
\temail=bob@example.com

[remote \"origin\"]
\turl = git@example.com:bob/repo.git
#\tfetch = +refs/heads/*:refs/remotes/origin/*
; not ours";
    let expected = "\
# global settings
[user]
    name = Bob
    email = bob@example.com

[remote \"origin\"]
    url = git@example.com:bob/repo.git
    # fetch = +refs/heads/*:refs/remotes/origin/*
; not ours";
    assert_eq!(Document::parse(text).render(), expected);
}
