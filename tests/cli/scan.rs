use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const GREETING_CATALOG: &str = r#"{
  "greeting.hello": "Hi",
  "unused.key": "Nope"
}"#;

fn setup_config(test: &CliTest, extra: &str) -> Result<()> {
    test.write_file(
        ".keysweeprc.json",
        &format!(
            r#"{{
            "translationFile": "i18n/en-us.json",
            "searchedFolders": ["src"],
            "searchedFileExtensions": ["js", "py", "html"]{}
        }}"#,
            extra
        ),
    )
}

#[test]
fn test_scan_reports_unused_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Found 1 unused translation (of 2):\n  unused.key\n\
         \u{2713} Checked 1 source file against 2 translations\n"
    );
    // Reporting alone never touches the catalog.
    assert_eq!(test.read_file("i18n/en-us.json")?, GREETING_CATALOG);
    Ok(())
}

#[test]
fn test_scan_skips_disallowed_extension() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;
    test.write_file("src/app.pyc", "unused.key")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  unused.key"));
    assert!(stdout(&output).contains("Checked 1 source file"));
    Ok(())
}

#[test]
fn test_scan_skips_ignored_folders_and_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(
        &test,
        r#", "ignoreFolderPatterns": ["(^|/)vendor$"], "ignoreFilePatterns": ["\\.min\\."]"#,
    )?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/vendor/lib.js", "greeting.hello")?;
    test.write_file("src/bundle.min.js", "greeting.hello")?;
    test.write_file("src/app.js", "nothing")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Found 2 unused translations (of 2)"));
    assert!(stdout(&output).contains("Checked 1 source file"));
    Ok(())
}

#[test]
fn test_scan_warns_about_files_without_extension() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/Makefile", "greeting.hello")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Skipping file without extension: Makefile"));
    assert!(stdout(&output).contains("Found 2 unused translations"));
    Ok(())
}

#[test]
fn test_scan_fail_on_unused() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().arg("--fail-on-unused").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("\u{2718} Unused translations found (--fail-on-unused)"));

    test.write_file("src/other.js", "t('unused.key')")?;
    let output = test.scan_command().arg("--fail-on-unused").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No unused translations (2 checked)"));
    Ok(())
}

#[test]
fn test_scan_apply_rewrites_catalog_with_backup() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file(
        "i18n/en-us.json",
        r#"{"zeta": "Z", "unused.key": "Nope", "Alpha": "A", "greeting.hello": "Hi"}"#,
    )?;
    test.write_file("src/app.js", "t('greeting.hello'); t('zeta'); t('Alpha')")?;

    let output = test.scan_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Removed 1 unused translation from"));
    assert!(stdout(&output).contains("Backup written to"));
    assert_snapshot!(test.read_file("i18n/en-us.json")?, @r#"
    {
      "Alpha": "A",
      "greeting.hello": "Hi",
      "zeta": "Z"
    }
    "#);
    assert_snapshot!(test.read_file("i18n/en-us.json.bak")?, @r#"
    {
      "Alpha": "A",
      "greeting.hello": "Hi",
      "unused.key": "Nope",
      "zeta": "Z"
    }
    "#);
    Ok(())
}

#[test]
fn test_scan_update_translation_from_config_without_backup() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#", "updateTranslation": true, "makeBackups": false"#)?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("i18n/en-us.json.bak").exists());
    let parsed: Value = serde_json::from_str(&test.read_file("i18n/en-us.json")?)?;
    assert_eq!(parsed, serde_json::json!({ "greeting.hello": "Hi" }));
    Ok(())
}

#[test]
fn test_scan_writes_unused_report() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test
        .scan_command()
        .args(["--output", "reports/unused.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let parsed: Value = serde_json::from_str(&test.read_file("reports/unused.json")?)?;
    assert_eq!(parsed, serde_json::json!(["unused.key"]));
    Ok(())
}

#[test]
fn test_scan_writes_found_report_from_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(
        &test,
        r#", "writeToFile": true, "writeToConsole": false, "outputPath": "found.json", "outputMode": "found""#,
    )?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("unused.key"));
    let parsed: Value = serde_json::from_str(&test.read_file("found.json")?)?;
    assert_eq!(parsed, serde_json::json!({ "greeting.hello": "Hi" }));
    Ok(())
}

#[test]
fn test_scan_cli_overrides_folders_and_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("locales/en.json", r#"{"nav.home": "Home"}"#)?;
    test.write_file("web/index.html", "<a>{{ t('nav.home') }}</a>")?;

    let output = test
        .scan_command()
        .args([
            "--translation-file",
            "locales/en.json",
            "--folder",
            "web",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No unused translations (1 checked)"));
    Ok(())
}

#[test]
fn test_scan_missing_folder_is_not_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keysweeprc.json",
        r#"{ "searchedFolders": ["src", "missing"], "searchedFileExtensions": ["js"] }"#,
    )?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Cannot access path"));
    assert!(stdout(&output).contains("1 path(s) could not be read"));
    assert!(stdout(&output).contains("  unused.key"));
    Ok(())
}

#[test]
fn test_scan_missing_catalog_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read translation file"));
    Ok(())
}

#[test]
fn test_scan_malformed_catalog_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#", "updateTranslation": true"#)?;
    test.write_file("i18n/en-us.json", r#"{"greeting.hello": "Hi",}"#)?;
    test.write_file("src/app.js", "t('greeting.hello')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to parse translation file"));
    assert_eq!(
        test.read_file("i18n/en-us.json")?,
        r#"{"greeting.hello": "Hi",}"#
    );
    assert!(!test.root().join("i18n/en-us.json.bak").exists());
    Ok(())
}

#[test]
fn test_scan_nested_catalog_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", r#"{"Common": {"submit": "Submit"}}"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must be a string"));
    Ok(())
}

#[test]
fn test_scan_invalid_config_regex_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, r#", "ignoreFilePatterns": ["(unclosed"]"#)?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignoreFilePatterns"));
    Ok(())
}

#[test]
fn test_scan_verbose_shows_match_locations() -> Result<()> {
    let test = CliTest::new()?;
    setup_config(&test, "")?;
    test.write_file("i18n/en-us.json", GREETING_CATALOG)?;
    test.write_file("src/app.js", "// header\n\nt('greeting.hello')\n")?;

    let output = test.scan_command().arg("-v").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("greeting.hello found at"));
    assert!(stderr(&output).contains("app.js:3"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}
