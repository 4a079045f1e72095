//! Integration tests for the rostrum binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

const PETSTORE: &str = r#"
[info]
title = "Swagger Petstore"
api_version = "1.0.0"
host = "petstore.swagger.io"
base_path = "/v2"

[[resources]]
path = "/pet"

[[resources.operations]]
method = "post"
nickname = "addPet"
produces = ["application/json"]
parameters = [{ name = "body", param_type = "body", required = true, type = "Pet" }]
responses = [{ status = "405", description = "Invalid input" }]

[[resources]]
path = "/pet/{petId}"

[[resources.operations]]
method = "get"
nickname = "getPetById"
responses = [
    { status = "200", description = "successful operation" },
    { status = "default", description = "Unexpected error" },
]
"#;

fn rostrum() -> Command {
    let mut cmd = Command::cargo_bin("rostrum").unwrap();
    cmd.env_remove("ROSTRUM_HOST")
        .env_remove("ROSTRUM_BASE_PATH")
        .env_remove("ROSTRUM_API_VERSION")
        .env("ROSTRUM_LOG_COLOR", "false");
    cmd
}

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_generate_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);

    let output = rostrum()
        .arg("generate")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["swaggerVersion"], "1.2");
    assert_eq!(doc["basePath"], "http://petstore.swagger.io/v2");
    assert_eq!(doc["apis"][0]["operations"][0]["method"], "POST");
    assert_eq!(doc["apis"][0]["operations"][0]["parameters"][0]["paramType"], "body");
    assert_eq!(
        doc["apis"][1]["operations"][0]["responseMessages"],
        serde_json::json!([{ "code": 200, "message": "successful operation" }])
    );
}

#[test]
fn test_generate_yaml_file_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);
    let out = dir.path().join("swagger.yaml");

    rostrum()
        .arg("generate")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let yaml = fs::read_to_string(&out).unwrap();
    assert!(yaml.starts_with("swaggerVersion:"));
    assert!(yaml.contains("basePath:"));
    assert!(yaml.contains("http://petstore.swagger.io/v2"));
}

#[test]
fn test_generate_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);

    rostrum()
        .env("ROSTRUM_HOST", "localhost:8080")
        .env("ROSTRUM_API_VERSION", "2.0.0")
        .arg("generate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""basePath": "http://localhost:8080/v2""#,
        ))
        .stdout(predicate::str::contains(r#""apiVersion": "2.0.0""#));
}

#[test]
fn test_generate_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);

    rostrum()
        .args(["generate", "--format", "xml"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("unknown format 'xml'"));
}

#[test]
fn test_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);

    rostrum()
        .arg("--no-color")
        .arg("paths")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("/pet\n  POST    addPet\n"))
        .stdout(predicate::str::contains("/pet/{petId}\n  GET     getPetById\n"))
        .stdout(predicate::str::contains("2 paths, 2 operations"));
}

#[test]
fn test_check_reports_bad_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "broken.toml",
        &PETSTORE.replace(r#"status = "405""#, r#"status = "4xx""#),
    );

    rostrum()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "path '/pet': operation 'addPet' has invalid response status '4xx'",
        ));
}

#[test]
fn test_check_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "petstore.toml", PETSTORE);

    rostrum()
        .args(["--no-color", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK Swagger Petstore 1.0.0"));
}

#[test]
fn test_missing_description() {
    rostrum()
        .args(["check", "/nonexistent/rostrum/api.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
