//! CLI logic for the Flowscribe flowchart tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use flowscribe::{FlowscribeError, MermaidBuilder};

/// Exit status for a document the tool could not turn into a diagram.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Exit status for failures outside the document, such as I/O or configuration.
pub const EXIT_FAILURE: i32 = 1;

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Path of the written Mermaid file.
    pub output: String,
    /// Size of the rendered text in bytes.
    pub bytes: usize,
    /// Whether the flowchart was made Mermaid friendly before rendering.
    pub sanitized: bool,
}

/// Run the Flowscribe CLI application
///
/// Reads the flowchart document named by `args`, renders it as Mermaid text
/// and writes the text to the output file.
///
/// # Errors
///
/// Returns `FlowscribeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid flowchart documents
/// - Validation and rendering errors
pub fn run(args: &Args) -> Result<RunSummary, FlowscribeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing flowchart"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let sanitized = app_config.render().sanitize();

    let source = fs::read_to_string(&args.input)?;

    let builder = MermaidBuilder::new(app_config);
    let chart = builder.load(&source)?;
    let text = builder.render(&chart)?;

    fs::write(&args.output, &text)?;

    Ok(RunSummary {
        output: args.output.clone(),
        bytes: text.len(),
        sanitized,
    })
}

/// Maps a failed run to the process exit status.
///
/// Problems with the flowchart itself exit with [`EXIT_INVALID_INPUT`] so
/// scripts can tell a bad diagram apart from a broken environment.
pub fn exit_code(err: &FlowscribeError) -> i32 {
    match err {
        FlowscribeError::Document { .. }
        | FlowscribeError::Model(_)
        | FlowscribeError::Render(_) => EXIT_INVALID_INPUT,
        FlowscribeError::Io(_) | FlowscribeError::Config(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use tempfile::tempdir;

    use flowscribe::RenderError;

    use super::*;

    fn args(input: String, output: String, config: Option<String>) -> Args {
        Args {
            input,
            output,
            config,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_run_reports_written_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chart.toml");
        let output = dir.path().join("chart.mmd");
        fs::write(&input, "[[node]]\nname = \"Solo\"\n").unwrap();

        let summary = run(&args(
            input.to_string_lossy().to_string(),
            output.to_string_lossy().to_string(),
            None,
        ))
        .unwrap();

        let expected = "flowchart TB;\n    Solo;\n";
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
        assert_eq!(summary.output, output.to_string_lossy());
        assert_eq!(summary.bytes, expected.len());
        assert!(summary.sanitized);
    }

    #[test]
    fn test_run_summary_follows_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chart.toml");
        let config = dir.path().join("config.toml");
        fs::write(&input, "[[node]]\nname = \"Solo\"\n").unwrap();
        fs::write(&config, "[render]\nsanitize = false\n").unwrap();

        let summary = run(&args(
            input.to_string_lossy().to_string(),
            dir.path().join("chart.mmd").to_string_lossy().to_string(),
            Some(config.to_string_lossy().to_string()),
        ))
        .unwrap();
        assert!(!summary.sanitized);
    }

    #[test]
    fn test_missing_input_exits_with_failure() {
        let dir = tempdir().unwrap();
        let err = run(&args(
            dir.path().join("absent.toml").to_string_lossy().to_string(),
            dir.path().join("out.mmd").to_string_lossy().to_string(),
            None,
        ))
        .unwrap_err();

        assert!(matches!(err, FlowscribeError::Io(_)));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_codes() {
        let validation = MermaidBuilder::default()
            .load("[[node]]\nname = \"Twice\"\n\n[[node]]\nname = \"Twice\"\n")
            .and_then(|chart| MermaidBuilder::default().render(&chart))
            .unwrap_err();
        assert_eq!(exit_code(&validation), EXIT_INVALID_INPUT);

        let document = MermaidBuilder::default().load("[[node]").unwrap_err();
        assert_eq!(exit_code(&document), EXIT_INVALID_INPUT);

        let untitled = FlowscribeError::Render(RenderError::UntitledGroup);
        assert_eq!(exit_code(&untitled), EXIT_INVALID_INPUT);

        let io = FlowscribeError::Io(io::Error::other("disk full"));
        assert_eq!(exit_code(&io), EXIT_FAILURE);

        let config = FlowscribeError::Config("bad".to_string());
        assert_eq!(exit_code(&config), EXIT_FAILURE);
    }
}
