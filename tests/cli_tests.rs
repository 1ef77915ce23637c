//! End-to-end tests for the `hymnal-dedup` binary.
//!
//! Each test writes a small catalog and candidate files to a temporary
//! directory and checks the command output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "version": "1.0.0",
    "created_at": "2026-01-01T00:00:00Z",
    "hymnals": [
        {
            "id": "cruzeiro",
            "name": "O Cruzeiro",
            "owner_name": "Mestre Irineu",
            "hymns": [
                {"number": 1, "title": "Lua Branca", "text": "Da luz serena\nDo mar sagrado"}
            ]
        },
        {
            "id": "universal",
            "name": "Cruzeiro Universal",
            "owner_name": "Outro"
        },
        {
            "id": "padrinho",
            "name": "Hinário do Padrinho",
            "owner_name": "Padrinho Sebastião"
        }
    ]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = write(dir.path(), "catalog.json", CATALOG);
    (dir, catalog)
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("hymnal-dedup").expect("binary should build");
    cmd.env_remove("HYMNAL_CATALOG");
    cmd
}

#[test]
fn test_check_exact_match_json() {
    let (dir, catalog) = setup();
    let candidate = write(dir.path(), "upload.json", r#"{"name": "o  CRUZEIRO"}"#);

    let output = cmd()
        .args(["--format", "json", "check"])
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report"]["exact_match"]["id"], "cruzeiro");
    assert_eq!(json["report"]["high_confidence"].as_array().unwrap().len(), 0);
    assert_eq!(json["report"]["low_confidence"].as_array().unwrap().len(), 0);
    assert_eq!(json["needs_disambiguation"], true);
    assert_eq!(json["best_confidence"], "exact");
}

#[test]
fn test_check_identical_content_from_yaml() {
    let (dir, catalog) = setup();
    let candidate = write(
        dir.path(),
        "upload.yaml",
        "hymn_book:\n  name: Cruzeiro\n  hymns:\n    - number: 1\n      title: Lua Branca\n      text: \"Da luz serena\\nDo mar sagrado\"\n",
    );

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Medium confidence (1)"))
        .stdout(predicate::str::contains("content 100%"));
}

#[test]
fn test_check_lists_short_names() {
    let dir = TempDir::new().unwrap();
    let catalog = write(
        dir.path(),
        "catalog.json",
        r#"{"version": "1.0.0", "created_at": "2026-01-01T00:00:00Z", "hymnals": [
            {"id": "cruzeiro", "name": "O Cruzeiro", "intro_name": "Cruzeiro do Mestre"}
        ]}"#,
    );
    let candidate = write(dir.path(), "upload.json", r#"{"name": "Cruzeiro"}"#);

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Low confidence (1)"))
        .stdout(predicate::str::contains("Cruzeiro do Mestre"));
}

#[test]
fn test_check_no_duplicates_tsv() {
    let (dir, catalog) = setup();
    let candidate = write(
        dir.path(),
        "upload.json",
        r#"{"hymn_book": {"name": "Hinário Totalmente Diferente", "hymns": []}}"#,
    );

    cmd()
        .args(["--format", "tsv", "check"])
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "confidence\tid\tname\tname_score\tcontent_score\n",
        ));
}

#[test]
fn test_check_warns_on_duplicate_numbers() {
    let (dir, catalog) = setup();
    let candidate = write(
        dir.path(),
        "upload.json",
        r#"{"name": "Novo", "hymns": [{"number": 2}, {"number": 2}, {"number": 1}]}"#,
    );

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stderr(predicate::str::contains("duplicate hymn numbers in candidate: 2"));
}

#[test]
fn test_check_reports_nested_parse_errors() {
    let (dir, catalog) = setup();
    let candidate = write(
        dir.path(),
        "upload.json",
        r#"{"hymn_book": {"name": "O Cruzeiro", "hymns": [{"number": "um"}]}}"#,
    );

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse candidate JSON"));
}

#[test]
fn test_check_rejects_candidate_without_name() {
    let (dir, catalog) = setup();
    let candidate = write(dir.path(), "upload.json", r#"{"hymns": []}"#);

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty 'name'"));
}

#[test]
fn test_check_rejects_out_of_range_threshold() {
    let (dir, catalog) = setup();
    let candidate = write(dir.path(), "upload.json", r#"{"name": "Cruzeiro"}"#);

    cmd()
        .arg("check")
        .arg(&candidate)
        .arg("--catalog")
        .arg(&catalog)
        .args(["--name-threshold", "1.5"])
        .assert()
        .failure();
}

#[test]
fn test_catalog_required() {
    let dir = TempDir::new().unwrap();
    let candidate = write(dir.path(), "upload.json", r#"{"name": "Cruzeiro"}"#);

    cmd()
        .arg("check")
        .arg(&candidate)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--catalog"));
}

#[test]
fn test_catalog_from_environment() {
    let (dir, catalog) = setup();
    let candidate = write(dir.path(), "upload.json", r#"{"name": "O Cruzeiro"}"#);

    cmd()
        .env("HYMNAL_CATALOG", &catalog)
        .arg("check")
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exact match: O Cruzeiro"));
}

#[test]
fn test_similar_orders_by_score() {
    let (_dir, catalog) = setup();

    let output = cmd()
        .args(["--format", "tsv", "similar", "O Cruzeiro", "--threshold", "0.5"])
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(ids, vec!["cruzeiro", "universal"]);
}

#[test]
fn test_compare_identical_files() {
    let dir = TempDir::new().unwrap();
    let body = r#"{"name": "NAME", "hymns": [
        {"number": 1, "title": "Lua Branca", "text": "Da luz serena"},
        {"number": 2, "title": "Tuperci", "text": "Eu canto é na altura"}
    ]}"#;
    let a = write(dir.path(), "a.json", &body.replace("NAME", "O Cruzeiro"));
    let b = write(dir.path(), "b.json", &body.replace("NAME", "O Cruzeiro"));

    cmd()
        .args(["--format", "tsv", "compare"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000\t1.0000"));
}

#[test]
fn test_catalog_list_and_show() {
    let (_dir, catalog) = setup();

    cmd()
        .args(["catalog", "list", "--owner", "irineu"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("O Cruzeiro"))
        .stdout(predicate::str::contains("Total: 1 hymnals"));

    cmd()
        .args(["catalog", "show", "cruzeiro", "--full-text"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lua Branca"))
        .stdout(predicate::str::contains("Do mar sagrado"));

    cmd()
        .args(["catalog", "show", "missing"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_catalog_export_reloads() {
    let (dir, catalog) = setup();
    let exported = dir.path().join("exported.json");

    cmd()
        .args(["catalog", "export"])
        .arg(&exported)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 hymnals"));

    cmd()
        .args(["--format", "tsv", "catalog", "list"])
        .arg("--catalog")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("cruzeiro\tO Cruzeiro\tMestre Irineu\t1"));
}

#[test]
fn test_suggest_degrades_when_search_unreachable() {
    let (_dir, catalog) = setup();

    cmd()
        .args(["suggest", "cruzero"])
        .arg("--catalog")
        .arg(&catalog)
        .args([
            "--search-host",
            "127.0.0.1",
            "--search-port",
            "1",
            "--search-api-key",
            "test-key",
            "--search-timeout-ms",
            "200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for 'cruzero'."));
}

#[test]
fn test_suggest_without_api_key_yields_no_suggestions() {
    let (_dir, catalog) = setup();

    cmd()
        .env_remove("TYPESENSE_API_KEY")
        .args(["suggest", "cruzero"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for 'cruzero'."))
        .stderr(predicate::str::contains("API key is not configured"));
}
