//! ifs-topsis - rank the alternatives of one problem file.
//!
//! Configuration is read from the environment (see [`AppConfig::load`]).
//! The report goes to stdout, logs to stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use ifs_topsis::adapters::{FileProblemReader, ReportFormat, StreamReportWriter};
use ifs_topsis::application::{RunRankingCommand, RunRankingHandler};
use ifs_topsis::config::AppConfig;
use ifs_topsis::domain::foundation::DomainError;
use ifs_topsis::ports::ReportWriter;

/// Rank alternatives with intuitionistic fuzzy TOPSIS
#[derive(Parser)]
#[command(name = "ifs-topsis")]
#[command(version)]
struct Cli {
    /// Problem description (YAML for .yaml/.yml, JSON otherwise)
    problem: PathBuf,

    /// Override the configured report format
    #[arg(long, value_parser = parse_format)]
    format: Option<ReportFormat>,
}

fn parse_format(value: &str) -> Result<ReportFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "json" => Ok(ReportFormat::Json),
        "yaml" | "yml" => Ok(ReportFormat::Yaml),
        other => Err(format!("unknown format '{}', expected json or yaml", other)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ifs-topsis: {}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = config.logging.init() {
        eprintln!("ifs-topsis: {}", err);
        return ExitCode::from(2);
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = %err.code, details = ?err.details, "{}", err.message);
            eprintln!("ifs-topsis: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), DomainError> {
    let handler = RunRankingHandler::new(Arc::new(FileProblemReader::new()), config.analysis.pipeline());
    let report = handler.handle(RunRankingCommand::new(cli.problem.to_string_lossy()))?;

    let format = cli.format.unwrap_or(config.output.format);
    let mut writer = StreamReportWriter::new(io::stdout().lock(), format).with_pretty(config.output.pretty);
    writer.write_report(&report)?;
    Ok(())
}
