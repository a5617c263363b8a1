//! Tradeoff Engine binary.
//!
//! Reads a `RunAnalysisCommand` JSON document on stdin and writes the rendered
//! report on stdout. Behaviour is driven entirely by `TRADEOFF_ENGINE__*`
//! environment variables.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{debug, error};

use tradeoff_engine::adapters::renderer_for;
use tradeoff_engine::application::{RunAnalysisCommand, RunAnalysisHandler};
use tradeoff_engine::config::{AppConfig, ConfigError};
use tradeoff_engine::domain::foundation::AnalysisError;
use tradeoff_engine::ports::RenderError;
use tradeoff_engine::telemetry;

/// Failures after logging is up.
#[derive(Debug, Error)]
enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("Analysis failed [{code}]: {0}", code = .0.code())]
    Analysis(#[from] AnalysisError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<(), RunError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    debug!(bytes = input.len(), "Read request");

    let command: RunAnalysisCommand = serde_json::from_str(&input)?;
    let report = RunAnalysisHandler::new(config.analysis.clone()).handle(command)?;

    let renderer = renderer_for(config.output.format, config.output.precision);
    let rendered = renderer.render(&report)?;
    debug!(
        format = %renderer.format(),
        content_type = renderer.format().content_type(),
        bytes = rendered.len(),
        "Rendered report"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tradeoff-engine: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = telemetry::init_tracing(&config.logging) {
        eprintln!("tradeoff-engine: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Request failed");
            ExitCode::FAILURE
        }
    }
}
