//! Common test utilities for crosspost integration tests

use std::path::PathBuf;

use assert_cmd::Command;

/// Command for the REAL crosspost binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
#[allow(dead_code)]
pub fn crosspost_cmd() -> Command {
    Command::cargo_bin("crosspost").expect("crosspost binary builds")
}

/// Path to a fixture under tests/common/fixtures
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(relative)
}

/// Source text of a fixture post
#[allow(dead_code)]
pub fn fixture_post(name: &str) -> String {
    let path = fixture_path(&format!("posts/{name}.mdx"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture post {}: {e}", path.display()))
}

/// Expected output of a fixture post for one platform
#[allow(dead_code)]
pub fn expected_output(name: &str, platform: &str) -> String {
    let path = fixture_path(&format!("expected/{name}/{platform}.md"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read expected fixture {}: {e}", path.display()))
}

/// Recover one platform's value from combined `crosspost run` stdout.
///
/// Mirrors the original fixture harness: split on `<platform>::`, truncate
/// the segment at the first double newline (harmless for the last-emitted
/// platform), percent-decode, then normalize trailing whitespace.
#[allow(dead_code)]
pub fn extract_platform_output(stdout: &str, platform: &str) -> String {
    let marker = format!("{platform}::");
    let segment = stdout
        .split(&marker)
        .nth(1)
        .unwrap_or_else(|| panic!("stdout has no segment for platform {platform}"));
    let segment = segment.split("\n\n").next().unwrap_or(segment);
    let decoded = decode_command_data(segment);
    format!("{}\n", decoded.trim_end())
}

/// Reverse the Actions-toolkit data escaping (`%25` last, so literal
/// percent-encoded text survives the round trip)
#[allow(dead_code)]
pub fn decode_command_data(value: &str) -> String {
    value
        .replace("%0A", "\n")
        .replace("%0D", "\r")
        .replace("%25", "%")
}
