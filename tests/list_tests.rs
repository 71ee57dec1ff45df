//! Integration tests for list and search

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{demo_site, post_source, posttag_cmd, write_post};

fn stdout_lines(output: std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_list() {
    let site = demo_site();

    let output = posttag_cmd()
        .current_dir(site.path())
        .arg("list")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_lines(output), vec!["blog", "demo", "nikola", "python"]);
}

#[test]
fn test_list_count_sorted() {
    let site = demo_site();
    write_post(site.path(), "posts/2.rst", &post_source("2", "python", "Second."));

    let output = posttag_cmd()
        .current_dir(site.path())
        .args(["list", "-s", "count"])
        .output()
        .unwrap();

    let lines = stdout_lines(output);
    assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["2", "python"]);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_list_draft_post_tags() {
    let site = demo_site();
    write_post(site.path(), "posts/2.rst", &post_source("2", "ruby, draft", "Draft."));

    posttag_cmd()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("draft"))
        .stdout(predicate::str::contains("ruby"));
}

#[test]
fn test_list_markdown_posts_in_subdirectories() {
    let site = demo_site();
    std::fs::create_dir_all(site.path().join("posts/2024")).unwrap();
    write_post(
        site.path(),
        "posts/2024/md.md",
        "<!--\n.. title: md\n.. tags: markdown\n-->\n\nText.\n",
    );

    posttag_cmd()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_selected_posts_only() {
    let site = demo_site();
    write_post(site.path(), "posts/2.rst", &post_source("2", "ruby, draft", "Draft."));

    let output = posttag_cmd()
        .current_dir(site.path())
        .args(["list", "posts/2.rst"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(output), vec!["draft", "ruby"]);

    let output = posttag_cmd()
        .current_dir(site.path())
        .args(["list", "-s", "count", "all"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(output).len(), 6);
}

#[test]
fn test_list_invalid_mode() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .args(["list", "--sort", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid modes: alpha, count"));
}

#[test]
fn test_list_reports_unreadable_posts() {
    let site = demo_site();
    write_post(site.path(), "posts/notes.txt", "not a post\n");

    posttag_cmd()
        .current_dir(site.path())
        .arg("list")
        .assert()
        .failure()
        .stdout(predicate::str::contains("nikola"))
        .stderr(predicate::str::contains("posts/notes.txt"));
}

#[test]
fn test_search() {
    let site = demo_site();
    let cases = [
        ("l", vec!["blog", "nikola"]),
        (".*", vec!["blog", "demo", "nikola", "python"]),
        ("^ni.*", vec!["nikola"]),
    ];

    for (pattern, expected) in cases {
        let output = posttag_cmd()
            .current_dir(site.path())
            .args(["search", pattern])
            .output()
            .unwrap();
        assert_eq!(stdout_lines(output), expected, "pattern {}", pattern);
    }
}

#[test]
fn test_search_selected_posts_only() {
    let site = demo_site();
    write_post(site.path(), "posts/2.rst", &post_source("2", "ruby, draft", "Draft."));

    let output = posttag_cmd()
        .current_dir(site.path())
        .args(["search", "a", "posts/2.rst"])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(output), vec!["draft"]);
}

#[test]
fn test_search_no_match() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .args(["search", "^zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_search_invalid_pattern() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .args(["search", "(unclosed"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Invalid search pattern"));
}
