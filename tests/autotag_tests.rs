//! Integration tests for autotag

#![allow(deprecated)]

use predicates::prelude::*;
use regex::Regex;

mod common;
use common::{demo_site, parsed_tags, posttag_cmd, read_post, DEMO_TAGS};

#[test]
fn test_autotag_adds_valid_candidates() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .arg("autotag")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 post(s)."));

    let tags = parsed_tags(site.path(), "posts/1.rst");
    assert_eq!(&tags[..4], DEMO_TAGS);
    assert!(tags.contains(&"generator".to_string()));
    assert!(tags.contains(&"templates".to_string()));

    let pattern = Regex::new(r"^[A-Za-z][A-Za-z-]*$").unwrap();
    let added: Vec<&String> = tags[4..].iter().collect();
    assert!(!added.is_empty() && added.len() <= 5);
    assert!(added.iter().all(|t| pattern.is_match(t)));
}

#[test]
fn test_autotag_dry_run() {
    let site = demo_site();
    let before = read_post(site.path(), "posts/1.rst");

    posttag_cmd()
        .current_dir(site.path())
        .args(["autotag", "--dry-run", "posts/1.rst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generator"));

    assert_eq!(read_post(site.path(), "posts/1.rst"), before);
}

#[test]
fn test_autotag_respects_configured_maximum() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .args(["config", "autotag.max_candidates", "2"])
        .assert()
        .success();

    posttag_cmd()
        .current_dir(site.path())
        .arg("autotag")
        .assert()
        .success();

    let tags = parsed_tags(site.path(), "posts/1.rst");
    assert_eq!(tags, vec!["python", "demo", "nikola", "blog", "generator"]);
}

#[test]
fn test_autotag_linguistic_without_toolkit_falls_back() {
    let site = demo_site();

    posttag_cmd()
        .current_dir(site.path())
        .args(["config", "autotag.strategy", "linguistic"])
        .assert()
        .success();

    posttag_cmd()
        .current_dir(site.path())
        .args(["autotag", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generator"));
}
