use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const MARKED_DOC: &str = "\
# Ocean Currents

- ![Gulf Stream](https://example.com/1x1.png)
  - ![Eddies](1x1.gif)
- ![Kuroshio](1x1.png)
";

const PLAIN_DOC: &str = "\
# Ocean Currents

- Gulf Stream
- Kuroshio
";

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn cli_generates_spider_text_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", MARKED_DOC);
    let out = tmp.path().join("out.mmd");

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args([
            "generate",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read diagram");
    assert!(text.starts_with("mindmap\n"), "not mindmap text: {text}");
    assert!(text.contains("  root)Ocean Currents(\n"));
    assert!(text.contains("      Eddies\n"));
}

#[test]
fn cli_layout_flag_switches_to_flowchart() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", MARKED_DOC);
    let out = tmp.path().join("out.mmd");

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args([
            "generate",
            "--layout",
            "tree-down",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read diagram");
    assert!(text.starts_with("flowchart TD\n"), "not top-down: {text}");
}

#[test]
fn cli_config_file_selects_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", MARKED_DOC);
    let config = write_fixture(&tmp, "viewer.json", r#"{"mindmap":{"type":"tree-right"}}"#);
    let out = tmp.path().join("out.mmd");

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args([
            "generate",
            "--config",
            config.to_string_lossy().as_ref(),
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read diagram");
    assert!(text.starts_with("flowchart LR\n"), "not left-right: {text}");
}

#[test]
fn cli_detect_names_the_diagram() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", MARKED_DOC);

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args(["detect", input.to_string_lossy().as_ref()])
        .assert()
        .success()
        .stdout("mindmap\n");
}

#[test]
fn cli_exits_three_when_nothing_is_marked() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", PLAIN_DOC);

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args(["generate", input.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn cli_extract_emits_forest_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", MARKED_DOC);

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    let output = Command::new(exe)
        .args(["extract", input.to_string_lossy().as_ref()])
        .output()
        .expect("run extract");
    assert!(output.status.success());

    let forest: serde_json::Value = serde_json::from_slice(&output.stdout).expect("forest JSON");
    let roots = forest.as_array().expect("array of roots");
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["label"], "Gulf Stream");
    assert_eq!(roots[0]["children"][0]["label"], "Eddies");
}

#[test]
fn cli_toc_lists_headings() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&tmp, "doc.md", "# One\n\n## Two\n");

    let exe = assert_cmd::cargo_bin!("selkie-cli");
    let output = Command::new(exe)
        .args(["toc", input.to_string_lossy().as_ref()])
        .output()
        .expect("run toc");
    assert!(output.status.success());

    let toc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("toc JSON");
    assert_eq!(toc[0]["anchor"], "heading-0");
    assert_eq!(toc[1]["text"], "Two");
    assert_eq!(toc[1]["level"], 2);
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("selkie-cli");
    Command::new(exe)
        .args(["generate", "--nope"])
        .assert()
        .failure()
        .code(2);
}
