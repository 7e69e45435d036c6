use std::fs;

use tempfile::tempdir;

use gantry_cli::{Args, run};

/// Arguments for a bare-invocation run redirected to a test output path.
fn default_args(output: &str, format: &str) -> Args {
    Args {
        output: output.to_string(),
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
        no_state_storage: false,
        no_runtime_node: false,
        title: None,
        resource_group: None,
    }
}

#[test]
fn e2e_smoke_test_default_pipeline() {
    // DOT output exercises the whole run without needing the Graphviz binary
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.dot");
    let args = default_args(&output_path.to_string_lossy(), "dot");

    run(&args).expect("Default invocation should succeed");

    let metadata = fs::metadata(&output_path).expect("Output file should exist");
    assert!(metadata.len() > 0, "Output file should not be empty");

    // Second run overwrites the same path without error
    run(&args).expect("Second run should overwrite cleanly");
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn e2e_smoke_test_minimal_variant() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("minimal.dot");

    let mut args = default_args(&output_path.to_string_lossy(), "dot");
    args.no_state_storage = true;
    args.no_runtime_node = true;

    run(&args).expect("Minimal variant should succeed");

    let dot = fs::read_to_string(&output_path).unwrap();
    assert!(!dot.contains("Terraform"));
    assert!(!dot.contains("Runtime"));
    assert!(dot.contains("Deploy"));
}

#[test]
fn e2e_smoke_test_overrides_flow_into_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("staging.dot");

    let mut args = default_args(&output_path.to_string_lossy(), "dot");
    args.title = Some("Staging Pipeline".to_string());
    args.resource_group = Some("staging-rg".to_string());

    run(&args).expect("Run with overrides should succeed");

    let dot = fs::read_to_string(&output_path).unwrap();
    assert!(dot.contains("Staging Pipeline"));
    assert!(dot.contains("staging-rg"));
}

#[test]
fn e2e_smoke_test_unsupported_format_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.gif");

    let args = default_args(&output_path.to_string_lossy(), "gif");

    assert!(run(&args).is_err(), "Unsupported format must be rejected");
    assert!(!output_path.exists());
}

#[test]
fn e2e_smoke_test_missing_output_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing").join("architecture.dot");

    let args = default_args(&output_path.to_string_lossy(), "dot");

    assert!(
        run(&args).is_err(),
        "Missing output directory must surface an error"
    );
}
