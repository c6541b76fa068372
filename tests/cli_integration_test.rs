//! End-to-end tests driving the `debug-decoders` binary.
//!
//! The extractor is never installed in CI, so these run against the saved
//! interface fixture via `--interface`, or against a stub extractor script.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fixtures")
        .join(name)
}

fn debug_decoders(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_debug-decoders"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute debug-decoders")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("debug-decoders exited with {:?}", output.status.code());
    }
}

#[test]
fn test_generate_writes_module_next_to_manifest() {
    let temp = TempDir::new().unwrap();
    let interface = fixture("interface.json");

    let output = debug_decoders(
        &[
            "generate",
            "--path",
            temp.path().to_str().unwrap(),
            "--interface",
            interface.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Creating a file at"));
    assert!(stdout.contains("Open it with elm-reactor!"));

    let source = fs::read_to_string(temp.path().join("DebugDecoders.elm")).unwrap();
    assert!(source.starts_with("module DebugDecoders exposing (main)"));
    assert!(source.contains("import Api.User"));
    assert!(source.contains("import Api.Tags"));
    assert!(source.contains("import View.User"));
    assert!(!source.contains("import Main"));
    assert!(source.contains("( \"Api.User.decodeUser\", \"View.User.viewUser\" )"));
    assert!(source.contains("( \"Api.User.decodeAge\", \"View.User.viewAge\" )"));
    assert!(source.contains("( \"Api.Tags.decodeTags\", \"viewAsText\" )"));
}

#[test]
fn test_generate_to_stdout_keeps_logs_off_stdout() {
    let temp = TempDir::new().unwrap();
    let interface = fixture("interface.json");

    let output = debug_decoders(
        &[
            "generate",
            "--stdout",
            "-vv",
            "--interface",
            interface.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("module DebugDecoders exposing (main)"));
    assert!(stdout.ends_with("}\n"));
    assert!(!temp.path().join("DebugDecoders.elm").exists());
}

#[test]
fn test_identical_decoder_types_share_one_constructor() {
    let temp = TempDir::new().unwrap();
    let interface = fixture("interface.json");

    let output = debug_decoders(
        &["generate", "--stdout", "--interface", interface.to_str().unwrap()],
        temp.path(),
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("IntPayload Int").count(), 1);
    // One branch in viewDecoded, one in summarizeDecoded.
    assert_eq!(stdout.matches("IntPayload value ->").count(), 2);
    assert!(stdout.contains("Json.Decode.map IntPayload Api.User.decodeAge"));
    assert!(stdout.contains("Json.Decode.map IntPayload Api.Tags.decodeCount"));
}

#[test]
fn test_inspect_json_report() {
    let temp = TempDir::new().unwrap();
    let interface = fixture("interface.json");

    let output = debug_decoders(
        &[
            "inspect",
            "--format",
            "json",
            "--interface",
            interface.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output);

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["summary"]["decoders"], 4);
    assert_eq!(json["summary"]["matched"], 3);
    assert_eq!(json["summary"]["fallbacks"], 1);
    assert_eq!(json["views"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_manifest_reported_before_missing_extractor() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".debug-decoders.toml"),
        "extractor = \"definitely-not-an-installed-extractor\"\n",
    )
    .unwrap();

    let output = debug_decoders(
        &["generate", "--path", temp.path().to_str().unwrap()],
        temp.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("elm-package.json did not exist at"));
    assert!(!stderr.contains("npm install"));
}

#[test]
fn test_missing_extractor_suggests_install() {
    let temp = TempDir::new().unwrap();
    fs::copy(
        fixture("sample_project/elm-package.json"),
        temp.path().join("elm-package.json"),
    )
    .unwrap();
    fs::write(
        temp.path().join(".debug-decoders.toml"),
        "extractor = \"definitely-not-an-installed-extractor\"\n",
    )
    .unwrap();

    let output = debug_decoders(
        &["generate", "--path", temp.path().to_str().unwrap()],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("npm install -g definitely-not-an-installed-extractor"));
}

#[cfg(unix)]
#[test]
fn test_extractor_failure_propagates_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::copy(
        fixture("sample_project/elm-package.json"),
        project.join("elm-package.json"),
    )
    .unwrap();

    let script = temp.path().join("failing-extractor");
    fs::write(&script, "#!/bin/sh\necho 'elm-stuff is missing' >&2\nexit 4\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    let config = temp.path().join("settings.toml");
    fs::write(&config, format!("extractor = {:?}\n", script.to_str().unwrap())).unwrap();

    let output = debug_decoders(
        &[
            "generate",
            "--path",
            project.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("elm-stuff is missing"));
    assert!(!project.join("DebugDecoders.elm").exists());
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();

    assert_success(&debug_decoders(&["init"], temp.path()));
    assert!(temp.path().join(".debug-decoders.toml").exists());

    let second = debug_decoders(&["init"], temp.path());
    assert!(!second.status.success());

    assert_success(&debug_decoders(&["init", "--force"], temp.path()));
}
