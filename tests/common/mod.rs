#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const DEMO_TAGS: [&str; 4] = ["python", "demo", "nikola", "blog"];

pub fn posttag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("posttag").unwrap();
    cmd.env_remove("POSTTAG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn post_source(title: &str, tags: &str, body: &str) -> String {
    format!(
        ".. title: {title}\n.. slug: {title}\n.. date: 2012-03-30 23:00:00 UTC-03:00\n.. tags: {tags}\n.. link:\n.. description:\n\n{body}\n"
    )
}

/// Initialized site with one demo post at posts/1.rst
pub fn demo_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    posttag_cmd().arg("init").arg(temp.path()).assert().success();
    fs::create_dir_all(temp.path().join("posts")).unwrap();
    write_post(
        temp.path(),
        "posts/1.rst",
        &post_source(
            "welcome",
            &DEMO_TAGS.join(", "),
            "Nikola is a static site generator. Nikola renders posts with templates,\n\
             themes change how templates look, and plugins extend the generator.\n\
             Themes, templates and plugins make Nikola a flexible generator.",
        ),
    );
    temp
}

pub fn write_post(root: &Path, post: &str, source: &str) {
    fs::write(root.join(post), source).unwrap();
}

pub fn read_post(root: &Path, post: &str) -> String {
    fs::read_to_string(root.join(post)).unwrap()
}

/// Tags as written in the post's `.. tags:` line
pub fn parsed_tags(root: &Path, post: &str) -> Vec<String> {
    read_post(root, post)
        .lines()
        .find_map(|line| line.strip_prefix(".. tags:"))
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
