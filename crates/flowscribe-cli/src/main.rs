//! Flowscribe CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use flowscribe::FlowscribeError;
use flowscribe_cli::{Args, error_adapter::to_reportables, exit_code};

fn init_logging(level: &str) -> LevelFilter {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    log_level
}

/// Logs one rendered report per violation or document error.
fn report(err: &FlowscribeError) {
    let reporter = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logging(&args.log_level);

    info!(log_level:?; "Starting Flowscribe");
    debug!(args:?; "Parsed arguments");

    match flowscribe_cli::run(&args) {
        Ok(summary) => info!(
            output_file = summary.output,
            bytes = summary.bytes,
            sanitized = summary.sanitized;
            "Mermaid flowchart written"
        ),
        Err(err) => {
            report(&err);
            let code = exit_code(&err);
            debug!(code; "Exiting with failure");
            process::exit(code);
        }
    }
}
