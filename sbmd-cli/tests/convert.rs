use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn convert_markdown_file_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "# Title\n- **item**\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("scrapbox");

    cmd.assert()
        .success()
        .stdout("[**** Title]\n[* item]\n");
}

#[test]
fn convert_is_the_default_subcommand() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.sb");
    fs::write(&input, "[*** Title]\n[https://openai.com OpenAI]\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path()).arg(&input).arg("--to").arg("md");

    cmd.assert()
        .success()
        .stdout("## Title\n- [OpenAI](https://openai.com)\n");
}

#[test]
fn convert_stdin_infers_source_from_target() {
    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.arg("convert")
        .arg("--to")
        .arg("markdown")
        .write_stdin("code:a.py\nx=1\n");

    cmd.assert().success().stdout("```py\nx=1\n```\n");
}

#[test]
fn convert_writes_output_file_and_reports() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.sb");
    fs::write(&input, "```python\nx=1\n```\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("sb")
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Markdown → Scrapbox done!"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "code:python\nx=1\n\n");
}

#[test]
fn quiet_suppresses_status_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.sb");
    fs::write(&input, "plain\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("sb")
        .arg("-o")
        .arg(&output)
        .arg("--quiet");

    cmd.assert().success().stdout("");
    assert_eq!(fs::read_to_string(&output).unwrap(), "plain\n");
}

#[test]
fn empty_stdin_exits_with_warning() {
    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.arg("convert").arg("--to").arg("sb").write_stdin("");

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Standard input is empty"));
}

#[test]
fn empty_input_file_is_not_written() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.md");
    let output = dir.path().join("out.sb");
    fs::write(&input, "").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("sb")
        .arg("-o")
        .arg(&output);

    cmd.assert().failure().code(1);
    assert!(!output.exists());
}

#[test]
fn unknown_dialect_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.arg("convert").arg("--to").arg("html").write_stdin("text");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'html'"));
}

#[test]
fn unknown_dialect_after_bare_file_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "text").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path()).arg(&input).arg("--to").arg("html");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'html'"));
}

#[test]
fn missing_target_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.arg("convert").write_stdin("text");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn same_dialect_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "text").unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("markdown");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No converter from 'markdown' to 'markdown'"));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg("absent.md")
        .arg("--to")
        .arg("sb");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error reading file 'absent.md'"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("sbmd");
    cmd.arg("--list-formats");

    let output_pred = predicate::str::contains("markdown")
        .and(predicate::str::contains("scrapbox"))
        .and(predicate::str::contains("markdown-to-scrapbox"))
        .and(predicate::str::contains("scrapbox-to-markdown"));

    cmd.assert().success().stdout(output_pred);
}
