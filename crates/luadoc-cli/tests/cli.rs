//! CLI tests for luadoc.
//!
//! These run the binary against a pre-generated doc.json so no language
//! server is needed.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn luadoc_cmd() -> Command {
    cargo_bin_cmd!("luadoc")
}

const DOC_JSON: &str = r#"[
    {"name": "Shape", "defines": [{"desc": "A geometric shape."}],
     "fields": [{"name": "kind", "start": 1, "view": "string", "desc": "shape kind"}]}
]"#;

const CONFIG: &str = r#"
title = "Shapes"
relevant = ["Shape"]
"#;

/// Create a project directory with a config and a doc.json.
fn temp_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("luadoc.toml"), CONFIG).unwrap();
    std::fs::write(temp.path().join("doc.json"), DOC_JSON).unwrap();
    temp
}

#[test]
fn help_flag_works() {
    luadoc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn writes_default_asciidoc_path() {
    let temp = temp_project();

    luadoc_cmd()
        .arg("--project")
        .arg(temp.path())
        .arg("--input")
        .arg(temp.path().join("doc.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated:"));

    let output = std::fs::read_to_string(temp.path().join("doc").join("api.adoc")).unwrap();
    assert!(output.starts_with("= Shapes\n:!sectids:\n\n[#Shape]\n== Shape\n"));
    assert!(output.contains("@__field__ `kind` string — shape kind"));
}

#[test]
fn markdown_to_stdout() {
    let temp = temp_project();

    luadoc_cmd()
        .arg("-")
        .arg("--project")
        .arg(temp.path())
        .arg("--input")
        .arg(temp.path().join("doc.json"))
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Shapes\n\n<a id=\"Shape\"></a>\n## Shape"))
        .stdout(predicate::str::contains("@*field* `kind` string — shape kind"));
}

#[test]
fn explicit_output_path() {
    let temp = temp_project();
    let output = temp.path().join("out").join("reference.md");

    luadoc_cmd()
        .arg(&output)
        .arg("--project")
        .arg(temp.path())
        .arg("--input")
        .arg(temp.path().join("doc.json"))
        .arg("-f")
        .arg("md")
        .assert()
        .success();

    assert!(std::fs::read_to_string(&output).unwrap().contains("## Shape"));
}

#[test]
fn verbose_logs_input_and_output() {
    let temp = temp_project();

    luadoc_cmd()
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg("--project")
        .arg(temp.path())
        .arg("--input")
        .arg(temp.path().join("doc.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("using existing API description"))
        .stderr(predicate::str::contains("writing document"));
}

#[test]
fn unknown_object_writes_nothing() {
    let temp = temp_project();
    std::fs::write(
        temp.path().join("luadoc.toml"),
        "relevant = [\"Shape\", \"Circle\"]\n",
    )
    .unwrap();

    luadoc_cmd()
        .arg("--project")
        .arg(temp.path())
        .arg("--input")
        .arg(temp.path().join("doc.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circle"));

    assert!(!temp.path().join("doc").join("api.adoc").exists());
}

#[test]
fn invalid_format_rejected() {
    let temp = temp_project();

    luadoc_cmd()
        .arg("--project")
        .arg(temp.path())
        .arg("--format")
        .arg("html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn missing_language_server_fails() {
    let temp = temp_project();

    luadoc_cmd()
        .arg("--project")
        .arg(temp.path())
        .arg("--server")
        .arg("luadoc-test-no-such-language-server")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start"));

    assert!(!temp.path().join("doc").join("api.adoc").exists());
}
