//! CLI integration tests for the page-template binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("page-template"))
}

fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SIMPLE_TEMPLATE: &str = r#"{
    "name": "Simple",
    "blocks": [
        { "id": "title", "label": "Title", "path": ["title"], "type": "field" },
        {
            "id": "hidden",
            "label": "Hidden",
            "path": ["hidden"],
            "type": "field",
            "visible": false,
            "generationId": "hiddenNotes"
        },
        { "id": "summary", "label": "Summary", "path": ["summary"], "type": "field",
          "generationId": "summaryText" }
    ]
}"#;

mod render_command {
    use super::*;

    #[test]
    fn renders_with_explicit_template() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", SIMPLE_TEMPLATE);
        let data = write_temp_file(
            &dir,
            "data.json",
            r#"{"title": "Aspirin", "hidden": "never shown"}"#,
        );

        cmd()
            .args([
                "render",
                data.to_str().unwrap(),
                "--template",
                template.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""value":"Aspirin""#))
            .stdout(predicate::str::contains("never shown").not());
    }

    #[test]
    fn renders_to_output_file() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", SIMPLE_TEMPLATE);
        let data = write_temp_file(&dir, "data.json", r#"{"title": "Thing"}"#);
        let output = dir.path().join("out.json");

        cmd()
            .args([
                "render",
                data.to_str().unwrap(),
                "--template",
                template.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
                "--pretty",
            ])
            .assert()
            .success();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("Thing"));
    }

    #[test]
    fn renders_with_snapshot() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(
            &dir,
            "template.json",
            r#"{
                "name": "Snap",
                "blocks": [
                    { "id": "api", "label": "API", "type": "snapshot",
                      "dataSource": "snapshot" }
                ]
            }"#,
        );
        let data = write_temp_file(&dir, "data.json", r#"{}"#);
        let snapshot = write_temp_file(&dir, "snapshot.json", r#"{"version": "9.9"}"#);

        cmd()
            .args([
                "render",
                data.to_str().unwrap(),
                "--template",
                template.to_str().unwrap(),
                "--snapshot",
                snapshot.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""version":"9.9""#));
    }

    #[test]
    fn uses_default_template_when_none_given() {
        let dir = TempDir::new().unwrap();
        let data = write_temp_file(&dir, "data.json", r#"{"hero": {"title": "Fallback"}}"#);

        cmd()
            .args(["render", data.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Fallback"));
    }

    #[test]
    fn missing_data_file_exits_3() {
        cmd()
            .args(["render", "/nonexistent/data.json"])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("cannot read"));
    }

    #[test]
    fn invalid_data_json_exits_2() {
        let dir = TempDir::new().unwrap();
        let data = write_temp_file(&dir, "data.json", "not json");

        cmd()
            .args(["render", data.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn invalid_template_exits_2() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", "{broken");
        let data = write_temp_file(&dir, "data.json", "{}");

        cmd()
            .args([
                "render",
                data.to_str().unwrap(),
                "--template",
                template.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .code(2);
    }
}

mod flags_command {
    use super::*;

    #[test]
    fn shows_full_flag_map() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", SIMPLE_TEMPLATE);

        cmd()
            .args(["flags", "--template", template.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""summaryText": true"#))
            .stdout(predicate::str::contains(r#""hiddenNotes": false"#));
    }

    #[test]
    fn enabled_lists_only_live_slots() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", SIMPLE_TEMPLATE);

        cmd()
            .args([
                "flags",
                "--template",
                template.to_str().unwrap(),
                "--enabled",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("summaryText"))
            .stdout(predicate::str::contains("hiddenNotes").not());
    }

    #[test]
    fn invalid_template_exits_2() {
        let dir = TempDir::new().unwrap();
        let template = write_temp_file(&dir, "template.json", "{broken");

        cmd()
            .args(["flags", "--template", template.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn default_template_has_flags() {
        cmd()
            .args(["flags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("overviewSummary"));
    }
}

mod export_default_command {
    use super::*;

    #[test]
    fn writes_loadable_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/default.json");

        cmd()
            .args(["export-default", path.to_str().unwrap()])
            .assert()
            .success();

        // The exported file round-trips through the library loader.
        let content = fs::read_to_string(&path).unwrap();
        let template = page_template::load_template_str(&content).unwrap();
        assert_eq!(&template, page_template::default_template());
    }
}
