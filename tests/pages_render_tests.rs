//! Integration tests for pages and render commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{seoinject_cmd, write_site};

const MINIMAL_CONFIG: &str = r#"
[site]
domain = "https://example.org"
site_name = "Example"
og_image = "/og.png"
instagram_username = "example"
registration_url = "https://example.org/register"
support_email = "hi@example.org"
keywords = "example"
author = "Example Org"

[site.geo]
region = "IN-KA"
placename = "Bengaluru"
position = "12.9716;77.5946"
icbm = "12.9716, 77.5946"

[event]
name = "Example Fest"
description = "A fest"
start_date = "2026-02-19T09:00:00+05:30"
end_date = "2026-02-20T09:00:00+05:30"
organizer = "Example Org"
currency = "INR"
valid_from = "2025-12-01T00:00:00+05:30"

[[event.locations]]
name = "Bengaluru"
region = "KA"
country = "IN"

[[pages]]
path = "index.html"
title = "Home"
description = "Home page"
canonical = "/"
structured_data = true

[[pages]]
path = "blog/page.html"
title = "Blog"
description = "Posts & notes"
canonical = "/blog"
"#;

#[test]
fn test_pages_lists_builtin_table() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd()
        .arg("pages")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Config: built-in"))
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("[primary, json-ld]"))
        .stdout(predicate::str::contains("terms-and-conditions/page.html  /terms-and-conditions"));
}

#[test]
fn test_pages_prefers_site_config() {
    let temp = TempDir::new().unwrap();
    write_site(temp.path(), &[("seo.toml", MINIMAL_CONFIG)]);

    seoinject_cmd()
        .arg("pages")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("seo.toml"))
        .stdout(predicate::str::contains("blog/page.html  /blog"))
        .stdout(predicate::str::contains("agenda").not());
}

#[test]
fn test_pages_explicit_config_missing() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd()
        .arg("pages")
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_render_from_input_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("contact.html");
    fs::write(&input, "<html><head><meta charset=\"utf-8\"></head><body></body></html>").unwrap();

    seoinject_cmd()
        .arg("render")
        .arg("contact/page.html")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<link rel=\"canonical\" href=\"https://rift.pwioi.club/contact\">",
        ))
        .stdout(predicate::str::contains(
            "<title>Contact Us - RIFT '26 Pan India Hackathon</title>",
        ))
        .stdout(predicate::str::contains("ld+json").not());

    // render never writes
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "<html><head><meta charset=\"utf-8\"></head><body></body></html>"
    );
}

#[test]
fn test_render_page_under_root() {
    let temp = TempDir::new().unwrap();
    write_site(
        temp.path(),
        &[
            ("seo.toml", MINIMAL_CONFIG),
            ("blog/page.html", "<head>\n<title>Old</title>\n</head>\n"),
        ],
    );

    seoinject_cmd()
        .arg("render")
        .arg("blog/page.html")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Blog</title>"))
        .stdout(predicate::str::contains("content=\"Posts &amp; notes\""))
        .stdout(predicate::str::contains("Old").not());
}

#[test]
fn test_render_unknown_page() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd()
        .arg("render")
        .arg("blog/page.html")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No page configured for 'blog/page.html'"));
}
