use std::fs;
use std::path::{Path, PathBuf};

use create_mcp_server::{
    config::GenerationConfig,
    error::Error,
    processor::{get_output_dir, materialize, resolve_target_path},
    renderer::MiniJinjaRenderer,
};
use serde_json::json;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name).join("basic")
}

fn weather_context() -> serde_json::Value {
    GenerationConfig {
        name: "weather".to_string(),
        description: "Weather forecasts".to_string(),
        tool: "echo".to_string(),
        install_for_host: false,
    }
    .to_context()
    .unwrap()
}

#[test]
fn test_get_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    let new_dir = temp_dir.path().join("new_dir");
    assert_eq!(get_output_dir(&new_dir).unwrap(), new_dir);

    match get_output_dir(temp_dir.path()) {
        Err(Error::OutputDirectoryExistsError { .. }) => (),
        other => panic!("Expected OutputDirectoryExistsError, got {:?}", other),
    }
}

#[test]
fn test_resolve_target_path() {
    assert_eq!(resolve_target_path("dotfile-gitignore.ejs"), PathBuf::from(".gitignore"));
    assert_eq!(resolve_target_path("src/index.ts.ejs"), PathBuf::from("src/index.ts"));
    assert_eq!(resolve_target_path("tsconfig.json"), PathBuf::from("tsconfig.json"));
}

#[test_log::test]
fn test_materialize_matches_expected_tree() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("weather");
    let engine = MiniJinjaRenderer::new().unwrap();

    let written =
        materialize(&engine, &fixture("templates"), &output, &weather_context()).unwrap();

    assert_eq!(written.len(), 5);
    assert!(!dir_diff::is_different(&output, fixture("expected")).unwrap());
}

#[test]
fn test_dotfile_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir(&template).unwrap();
    fs::write(template.join("dotfile-gitignore.ejs"), "node_modules/\n<%= tool %>.log").unwrap();

    let output = temp_dir.path().join("out");
    let engine = MiniJinjaRenderer::new().unwrap();
    materialize(&engine, &template, &output, &json!({"tool": "echo"})).unwrap();

    let entries: Vec<_> = fs::read_dir(&output).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(".gitignore")]);
    assert_eq!(fs::read_to_string(output.join(".gitignore")).unwrap(), "node_modules/\necho.log");
}

#[test]
fn test_content_without_placeholders_is_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir(&template).unwrap();
    let content = "{\n  \"compilerOptions\": { \"strict\": true }\n}\n\n";
    fs::write(template.join("tsconfig.json"), content).unwrap();
    fs::write(template.join("LICENSE.ejs"), "MIT\n").unwrap();

    let output = temp_dir.path().join("out");
    let engine = MiniJinjaRenderer::new().unwrap();
    materialize(&engine, &template, &output, &weather_context()).unwrap();

    assert_eq!(fs::read_to_string(output.join("tsconfig.json")).unwrap(), content);
    assert_eq!(fs::read_to_string(output.join("LICENSE")).unwrap(), "MIT\n");
}

#[test]
fn test_existing_output_dir_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("existing");
    fs::create_dir(&output).unwrap();
    let engine = MiniJinjaRenderer::new().unwrap();

    let result = materialize(&engine, &fixture("templates"), &output, &weather_context());

    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_render_failure_leaves_partial_output() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir(&template).unwrap();
    fs::write(template.join("a.txt"), "fine\n").unwrap();
    fs::write(template.join("b.txt.ejs"), "<%= broken(( %>").unwrap();

    let output = temp_dir.path().join("out");
    let engine = MiniJinjaRenderer::new().unwrap();
    let result = materialize(&engine, &template, &output, &weather_context());

    assert!(matches!(result, Err(Error::MinijinjaError(_))));
    // Files are processed in name order, so a.txt was already written.
    assert_eq!(fs::read_to_string(output.join("a.txt")).unwrap(), "fine\n");
    assert!(!output.join("b.txt").exists());
}

#[test]
fn test_bundled_template_renders() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("weather");
    let template = create_mcp_server::loader::bundled_template_dir();
    let engine = MiniJinjaRenderer::new().unwrap();

    let context = GenerationConfig {
        name: "weather".to_string(),
        description: "Says \"hi\"".to_string(),
        tool: "forecast".to_string(),
        install_for_host: true,
    }
    .to_context()
    .unwrap();
    materialize(&engine, &template, &output, &context).unwrap();

    let package: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], json!("weather"));
    assert_eq!(package["description"], json!("Says \"hi\""));
    assert!(output.join(".gitignore").is_file());
    assert!(output.join("tsconfig.json").is_file());
    let index = fs::read_to_string(output.join("src").join("index.ts")).unwrap();
    assert!(index.contains("case \"forecast\":"));
}
