use std::{fs, path::PathBuf};

use tempfile::tempdir;

use flowscribe_cli::{Args, run};

/// Collects all .toml flowchart documents from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn args_for(input: &PathBuf, output: &PathBuf, config: Option<String>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_fixtures = collect_toml_files(fixtures_path());

    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in tests/fixtures/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let output_filename = format!(
            "{}.mmd",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(fixture_path, &output_path, None)) {
            Ok(summary) => {
                let text = fs::read_to_string(&output_path).expect("Output was not written");
                assert!(text.contains("flowchart "), "{}: {text}", fixture_path.display());
                assert_eq!(summary.bytes, text.len());
            }
            Err(e) => failed_fixtures.push((fixture_path.clone(), e)),
        }
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }

    println!("✅ All {} valid fixtures passed", valid_fixtures.len());
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_fixtures = collect_toml_files(fixtures_path().join("errors"));

    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let output_filename = format!(
            "error_{}.mmd",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(fixture_path, &output_path, None)).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error fixtures failed as expected",
        error_fixtures.len()
    );
}

#[test]
fn e2e_call_graph_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_path().join("call_graph.toml");
    let output = temp_dir.path().join("call_graph.mmd");

    run(&args_for(&input, &output, None)).expect("call graph should render");

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "flowchart TB;
    Main;
    FunctionA;
    FunctionB;
    FunctionC;
    FunctionD;
    FunctionE;
    FunctionA --> FunctionB;
    FunctionB --> FunctionC;
    FunctionC --> FunctionD;
    Main --> FunctionA;
    Main --> FunctionE;
"
    );
}

#[test]
fn e2e_strict_config_rejects_nesting() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[render]\nsanitize = false\n").unwrap();

    let input = fixtures_path().join("order_pipeline.toml");
    let output = temp_dir.path().join("order_pipeline.mmd");
    let config = Some(config_path.to_string_lossy().to_string());

    let err = run(&args_for(&input, &output, config)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "flowchart contains violations: contains invalid mermaid names, contains nested subgraphs"
    );
    assert!(!output.exists());
}
