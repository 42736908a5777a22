//! Integration tests for the local convert command

mod common;

use common::{crosspost_cmd, expected_output, fixture_path};
use predicates::prelude::*;

#[test]
fn test_single_platform_to_stdout_matches_fixture() {
    let post = fixture_path("posts/code-review.mdx");

    let output = crosspost_cmd()
        .arg("convert")
        .arg(&post)
        .args(["--platform", "hashnode"])
        .output()
        .expect("crosspost convert");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert_eq!(stdout, expected_output("code-review", "hashnode"));
}

#[test]
fn test_medium_to_stdout_matches_fixture() {
    let post = fixture_path("posts/git-rebase.mdx");

    let output = crosspost_cmd()
        .arg("convert")
        .arg(&post)
        .args(["--platform", "medium"])
        .output()
        .expect("crosspost convert");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert_eq!(stdout, expected_output("git-rebase", "medium"));
}

#[test]
fn test_stdout_needs_single_platform() {
    crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exactly one platform"));
}

#[test]
fn test_unknown_platform_rejected() {
    crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .args(["--platform", "substack"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown platform: substack"));
}

#[test]
fn test_out_dir_writes_all_platform_variants() {
    let temp = tempfile::tempdir().expect("temp dir");

    crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .arg("--out-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("code-review.medium.md"));

    for platform in ["hashnode", "devto", "medium"] {
        let written = std::fs::read_to_string(temp.path().join(format!("code-review.{platform}.md")))
            .unwrap_or_else(|e| panic!("missing {platform} variant: {e}"));
        assert_eq!(written, expected_output("code-review", platform));
    }
}

#[test]
fn test_directory_input_converts_every_post() {
    let temp = tempfile::tempdir().expect("temp dir");

    crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts"))
        .arg("--out-dir")
        .arg(temp.path())
        .assert()
        .success();

    for post in ["code-review", "git-rebase"] {
        for platform in ["hashnode", "devto", "medium"] {
            let path = temp.path().join(format!("{post}.{platform}.md"));
            assert!(path.exists(), "missing {post}.{platform}.md");
        }
    }
}

#[test]
fn test_json_output_single_file() {
    let output = crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .arg("--json")
        .output()
        .expect("crosspost convert --json");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let hashnode = parsed["hashnode"].as_str().expect("hashnode output");
    assert_eq!(
        format!("{hashnode}\n"),
        expected_output("code-review", "hashnode")
    );
    assert!(parsed["medium"].as_str().expect("medium output").starts_with("---\n"));
}

#[test]
fn test_json_output_multiple_files_keyed_by_path() {
    let output = crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .arg(fixture_path("posts/git-rebase.mdx"))
        .arg("--json")
        .args(["--platform", "devto"])
        .output()
        .expect("crosspost convert --json");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let object = parsed.as_object().expect("JSON object");

    assert_eq!(object.len(), 2);
    for (path, outputs) in object {
        assert!(path.ends_with(".mdx"), "key should be a path: {path}");
        assert!(outputs["devto"].is_string());
    }
}

#[test]
fn test_custom_base_url_flag() {
    let output = crosspost_cmd()
        .arg("convert")
        .arg(fixture_path("posts/code-review.mdx"))
        .args(["--platform", "devto"])
        .args(["--base-url", "https://cdn.example.com/img"])
        .output()
        .expect("crosspost convert");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    // the missing trailing slash is added before substitution
    assert!(stdout.contains("![Reviewer flow](https://cdn.example.com/img/code-review/flow.png)"));
    assert!(!stdout.contains("./assets/"));
}

#[test]
fn test_medium_requires_properties_block() {
    let temp = tempfile::tempdir().expect("temp dir");
    let post_path = temp.path().join("bare.md");
    std::fs::write(&post_path, "# Bare post\n\nNo metadata here.\n").expect("write post");

    crosspost_cmd()
        .arg("convert")
        .arg(&post_path)
        .args(["--platform", "medium"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no properties block"));
}

#[test]
fn test_missing_input_file() {
    crosspost_cmd()
        .arg("convert")
        .arg("does-not-exist.mdx")
        .args(["--platform", "devto"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}
