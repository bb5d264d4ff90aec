//! End-to-end runs: problem file on disk → handler → written report.

use std::fs;
use std::sync::Arc;

use ifs_topsis::adapters::{FileProblemReader, ReportFormat, StreamReportWriter};
use ifs_topsis::application::{RunRankingCommand, RunRankingHandler};
use ifs_topsis::config::AnalysisConfig;
use ifs_topsis::domain::analysis::{RankingPipeline, TiePolicy};
use ifs_topsis::domain::foundation::{DomainError, ErrorCode};
use ifs_topsis::domain::report::RankingReport;
use ifs_topsis::ports::ReportWriter;
use tempfile::TempDir;

const PROBLEM: &str = r#"
name: office move
vocabularies:
  decision_maker:
    Imp: [0.75, 0.2]
    Med: [0.45, 0.45]
  criterion:
    Imp: [0.8, 0.15]
    Fair: [0.5, 0.4]
  alternative:
    Good: [0.9, 0.05]
    Med: [0.5, 0.5]
    Low: [0.25, 0.7]
decision_makers:
  - { name: facilities, importance: Imp }
  - { name: finance, importance: Med }
criteria:
  - { name: commute, direction: benefit }
  - { name: rent, direction: cost }
alternatives: [downtown, suburb, riverside]
criteria_importance:
  - [Imp, Fair]
  - [Fair, Imp]
ratings:
  - - [Good, Good]
    - [Low, Low]
    - [Med, Med]
  - - [Good, Med]
    - [Med, Low]
    - [Med, Med]
sweep:
  formulas: [v1, v4]
  sigmas: [[1, 0], [0.5, 0.5]]
  lambdas: [1, 2]
"#;

fn write_problem(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn handler(dir: &TempDir, pipeline: RankingPipeline) -> RunRankingHandler {
    RunRankingHandler::new(Arc::new(FileProblemReader::rooted_at(dir.path())), pipeline)
}

fn run_err(contents: &str) -> DomainError {
    let dir = TempDir::new().unwrap();
    write_problem(&dir, "problem.yaml", contents);
    handler(&dir, RankingPipeline::default())
        .handle(RunRankingCommand::new("problem.yaml"))
        .unwrap_err()
        .into()
}

#[test]
fn yaml_problem_to_json_report() {
    let dir = TempDir::new().unwrap();
    write_problem(&dir, "office.yaml", PROBLEM);

    let report = handler(&dir, AnalysisConfig::default().pipeline())
        .handle(RunRankingCommand::new("office.yaml"))
        .unwrap();

    let mut writer = StreamReportWriter::new(Vec::new(), ReportFormat::Json);
    writer.write_report(&report).unwrap();
    let parsed: RankingReport = serde_json::from_slice(&writer.into_inner()).unwrap();

    assert_eq!(parsed.problem_name.as_deref(), Some("office move"));
    assert_eq!(parsed.standings.len(), 3);
    assert_eq!(parsed.summary.entries, 4);
    assert_eq!(parsed.outcome.baseline, report.outcome.baseline);
    assert_eq!(parsed.run_id, report.run_id);
}

#[test]
fn yaml_report_round_trips() {
    let dir = TempDir::new().unwrap();
    write_problem(&dir, "office.yml", PROBLEM);

    let report = handler(&dir, RankingPipeline::default())
        .handle(RunRankingCommand::new("office.yml"))
        .unwrap();

    let mut writer = StreamReportWriter::new(Vec::new(), ReportFormat::Yaml);
    writer.write_report(&report).unwrap();
    let parsed: RankingReport = serde_yaml::from_slice(&writer.into_inner()).unwrap();

    assert_eq!(parsed.leader(), report.leader());
    assert_eq!(parsed.summary, report.summary);
}

#[test]
fn json_problem_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let problem: serde_json::Value = serde_yaml::from_str(PROBLEM).unwrap();
    write_problem(&dir, "office.json", &serde_json::to_string(&problem).unwrap());

    let report = handler(&dir, RankingPipeline::default())
        .handle(RunRankingCommand::new("office.json"))
        .unwrap();

    assert_eq!(report.alternatives, vec!["downtown", "suburb", "riverside"]);
}

#[test]
fn ordinal_policy_always_yields_permutations() {
    let dir = TempDir::new().unwrap();
    write_problem(&dir, "office.yaml", PROBLEM);
    let config = AnalysisConfig {
        tie_policy: TiePolicy::Ordinal,
        ..AnalysisConfig::default()
    };

    let report = handler(&dir, config.pipeline())
        .handle(RunRankingCommand::new("office.yaml"))
        .unwrap();

    assert!(report.outcome.baseline.is_permutation());
    assert!(report
        .outcome
        .sensitivity
        .outcomes
        .iter()
        .all(|o| o.ranking.is_permutation()));
}

#[test]
fn missing_file_reports_problem_not_found() {
    let dir = TempDir::new().unwrap();

    let err: DomainError = handler(&dir, RankingPipeline::default())
        .handle(RunRankingCommand::new("nowhere.yaml"))
        .unwrap_err()
        .into();

    assert_eq!(err.code, ErrorCode::ProblemNotFound);
}

#[test]
fn degenerate_importance_aborts_run() {
    let contents = PROBLEM.replace("Med: [0.45, 0.45]", "Med: [0, 0]");

    let err = run_err(&contents);

    assert_eq!(err.code, ErrorCode::DegenerateWeight);
    assert_eq!(err.details.get("decision_maker"), Some(&"1".to_string()));
}

#[test]
fn invalid_term_reports_its_location() {
    let contents = PROBLEM.replace("Low: [0.25, 0.7]", "Low: [0.25, 0.9]");

    let err = run_err(&contents);

    assert_eq!(err.code, ErrorCode::InvalidFuzzyNumber);
    assert_eq!(
        err.details.get("location"),
        Some(&"vocabularies.alternative.Low".to_string())
    );
}

#[test]
fn unknown_label_is_reported() {
    let contents = PROBLEM.replace("- [Low, Low]", "- [Low, Awful]");

    let err = run_err(&contents);

    assert_eq!(err.code, ErrorCode::UnknownTerm);
    assert_eq!(err.details.get("term"), Some(&"Awful".to_string()));
}

#[test]
fn ragged_ratings_are_a_shape_mismatch() {
    let contents = PROBLEM.replace("    - [Med, Med]\n  - - [Good, Med]", "  - - [Good, Med]");

    let err = run_err(&contents);

    assert_eq!(err.code, ErrorCode::ShapeMismatch);
    assert_eq!(err.details.get("table"), Some(&"ratings".to_string()));
}

#[test]
fn negative_lambda_is_rejected() {
    let contents = PROBLEM.replace("lambdas: [1, 2]", "lambdas: [1, -2]");

    let err = run_err(&contents);

    assert_eq!(err.code, ErrorCode::InvalidSweepParameter);
    assert_eq!(err.details.get("location"), Some(&"sweep.lambdas[1]".to_string()));
}
