use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway project directory with its own store.
struct RegenTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl RegenTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    fn with_config(yaml: &str) -> Result<Self> {
        let env = Self::new()?;
        fs::write(env.root.join("regenchoice.yaml"), yaml)?;
        Ok(env)
    }

    fn regenchoice(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("regenchoice"));
        cmd.current_dir(&self.root)
            .env_remove("REGENCHOICE_PROJECT_DIR")
            .env_remove("REGENCHOICE_DATA_DIR")
            .env_remove("REGENCHOICE_DEFAULT_LANGUAGE")
            .env_remove("RUST_LOG");
        cmd
    }

    fn store_file(&self) -> PathBuf {
        self.root.join("data").join("questions.json")
    }

    fn stored(&self) -> Result<Vec<Value>> {
        let content = fs::read_to_string(self.store_file())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Creates a question and returns its id.
    fn create(&self, args: &[&str]) -> Result<u64> {
        let before = if self.store_file().exists() {
            self.stored()?.len()
        } else {
            0
        };
        self.regenchoice().arg("new").args(args).assert().success();

        let questions = self.stored()?;
        assert_eq!(questions.len(), before + 1);
        questions
            .last()
            .and_then(|q| q["id"].as_u64())
            .context("new question has no id")
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

#[test]
fn test_types_lists_every_code() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let mut assert = env.regenchoice().arg("types").assert().success();
    for code in ["AORBQ", "FACTQ", "LEVLQ", "LIKSQ", "OPTSQ", "RANGQ", "TRIPQ"] {
        assert = assert.stdout(predicate::str::contains(code));
    }
    Ok(())
}

#[test]
fn test_new_question_is_saved_and_valid() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["levlq"])?;

    let questions = env.stored()?;
    assert_eq!(questions[0]["type"], "LEVLQ");
    assert_eq!(questions[0]["itemCount"], 5);
    assert_eq!(questions[0]["defaultLanguage"], "en");
    assert!(id >= 1 && id <= i32::MAX as u64);

    env.regenchoice()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 questions are valid"));
    Ok(())
}

#[test]
fn test_new_applies_assignments() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["AORBQ", "--set", "title=Transport", "--set", "pref1=Car"])?;

    env.regenchoice()
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Transport\""))
        .stdout(predicate::str::contains("\"pref1\": \"Car\""));
    Ok(())
}

#[test]
fn test_invalid_edit_is_refused() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["TRIPQ"])?;

    env.regenchoice()
        .args(["set", &id.to_string(), "title="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[en] title is empty"));

    // The stored question still has its title
    let questions = env.stored()?;
    assert_eq!(questions[0]["translations"]["en"]["title"], "New TRIPQ question");
    Ok(())
}

#[test]
fn test_blank_translation_needs_its_texts() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["AORBQ"])?;

    env.regenchoice()
        .args(["add-lang", &id.to_string(), "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[fr] title is empty"))
        .stderr(predicate::str::contains("[fr] pref1 is required"));
    assert!(env.stored()?[0]["translations"].get("fr").is_none());

    env.regenchoice()
        .args(["add-lang", &id.to_string(), "fr"])
        .args(["--set", "title=Déplacements", "--set", "pref1=Voiture", "--set", "pref2=Vélo"])
        .assert()
        .success();
    assert_eq!(env.stored()?[0]["translations"]["fr"]["details"]["pref2"], "Vélo");
    Ok(())
}

#[test]
fn test_translation_lifecycle() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["FACTQ"])?.to_string();

    env.regenchoice()
        .args(["add-lang", &id, "de", "--copy-from", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deutsch"));

    env.regenchoice()
        .args(["add-lang", &id, "de", "--copy-from", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Language 'de' already exists"));

    env.regenchoice()
        .args(["remove-lang", &id, "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default language is now 'de'"));

    env.regenchoice()
        .args(["remove-lang", &id, "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the only language 'de'"));

    let questions = env.stored()?;
    assert_eq!(questions[0]["defaultLanguage"], "de");
    Ok(())
}

#[test]
fn test_strict_validation_fails_on_warnings() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["AORBQ", "--set", "prefer1Desc=Faster"])?.to_string();

    env.regenchoice()
        .args(["add-lang", &id, "fr", "--copy-from", "en"])
        .assert()
        .success();
    env.regenchoice()
        .args(["set", &id, "--lang", "fr", "prefer1Desc="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language 'fr' missing from: prefer1Desc"));

    env.regenchoice().arg("validate").assert().success();
    env.regenchoice()
        .args(["validate", "--strict"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_validate_json_report_for_broken_file() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let file = env.root.join("broken.json");
    write_file(
        &file,
        r#"[{"id": 0, "type": "RANGQ", "relational": "no", "defaultLanguage": "en", "translations": {}}]"#,
    )?;

    let output = env
        .regenchoice()
        .args(["validate", "--json", "--file"])
        .arg(&file)
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let report: Value = serde_json::from_slice(&output.stdout)?;
    let entry = &report["questions"][0];
    assert_eq!(entry["valid"], false);
    let errors = entry["errors"].as_array().context("errors array")?;
    assert!(errors.iter().any(|e| e == "relational must be boolean"));
    Ok(())
}

#[test]
fn test_validate_rejects_non_array_file() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let file = env.root.join("single.json");
    write_file(&file, r#"{"id": 1}"#)?;

    env.regenchoice()
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain an array of questions"));
    Ok(())
}

#[test]
fn test_items_can_be_added_and_removed() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["OPTSQ"])?.to_string();

    env.regenchoice()
        .args(["add-item", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("now has 6 items"));
    env.regenchoice()
        .args(["remove-item", &id, "1"])
        .assert()
        .success();
    env.regenchoice()
        .args(["remove-item", &id, "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item index 9"));

    let questions = env.stored()?;
    assert_eq!(questions[0]["itemCount"], 5);
    let items = &questions[0]["translations"]["en"]["details"]["items"];
    assert_eq!(items[0]["shortText"], "Option 2");

    let fact = env.create(&["FACTQ"])?.to_string();
    env.regenchoice()
        .args(["add-item", &fact])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can only manage items"));
    Ok(())
}

#[test]
fn test_delete_and_unknown_ids() -> Result<()> {
    let env = RegenTestEnv::new()?;
    let id = env.create(&["LIKSQ"])?.to_string();

    env.regenchoice().args(["delete", &id]).assert().success();
    assert!(env.stored()?.is_empty());

    env.regenchoice()
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn test_saves_keep_backups() -> Result<()> {
    let env = RegenTestEnv::with_config("store:\n  backup-keep: 2\n")?;
    for _ in 0..4 {
        env.create(&["RANGQ"])?;
    }

    let backups = fs::read_dir(env.root.join("data"))?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("questions.json.backup."))
        .count();
    assert_eq!(backups, 2);

    env.regenchoice()
        .args(["info", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fileExists\": true"));
    Ok(())
}

#[test]
fn test_config_sets_default_language_and_payload_cap() -> Result<()> {
    let env = RegenTestEnv::with_config("default-language: fr\n")?;
    env.create(&["FACTQ"])?;
    assert_eq!(env.stored()?[0]["defaultLanguage"], "fr");

    let small = RegenTestEnv::with_config("store:\n  max-payload-bytes: 64\n")?;
    small
        .regenchoice()
        .args(["new", "LEVLQ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload too large"));
    assert!(!small.store_file().exists());
    Ok(())
}

#[test]
fn test_env_overrides_win_over_config_file() -> Result<()> {
    let env = RegenTestEnv::with_config("default-language: fr\nstore:\n  data-dir: data\n")?;
    env.regenchoice()
        .args(["new", "FACTQ"])
        .env("REGENCHOICE_DEFAULT_LANGUAGE", "de")
        .env("REGENCHOICE_DATA_DIR", "shared")
        .assert()
        .success();

    assert!(!env.store_file().exists());
    let content = fs::read_to_string(env.root.join("shared").join("questions.json"))?;
    let questions: Vec<Value> = serde_json::from_str(&content)?;
    assert_eq!(questions[0]["defaultLanguage"], "de");

    env.regenchoice()
        .arg("list")
        .env("REGENCHOICE_DEFAULT_LANGUAGE", "English")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn test_export_then_import_into_another_project() -> Result<()> {
    let source = RegenTestEnv::new()?;
    source.create(&["AORBQ"])?;
    source.create(&["TRIPQ"])?;
    let export = source.root.join("out.json");

    source
        .regenchoice()
        .arg("export")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 question(s)"));

    let target = RegenTestEnv::new()?;
    target
        .regenchoice()
        .arg("import")
        .arg(&export)
        .assert()
        .success();
    assert_eq!(target.stored()?, source.stored()?);

    // Same ids again: refused, store untouched
    target
        .regenchoice()
        .arg("import")
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already used"));
    assert_eq!(target.stored()?.len(), 2);

    target
        .regenchoice()
        .args(["import", "--replace"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced the store"));
    Ok(())
}
