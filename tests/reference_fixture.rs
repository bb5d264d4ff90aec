//! Reference run: four decision makers, four alternatives, five criteria.
//!
//! Pins every intermediate stage of the bundled fixture to 1e-6.

use std::path::PathBuf;

use ifs_topsis::adapters::FileProblemReader;
use ifs_topsis::domain::analysis::{
    DecisionInputs, PipelineOutcome, RankingPipeline, ScoringFormula, SweepParameter,
};
use ifs_topsis::domain::foundation::{Ifn, IFN_TOLERANCE};
use ifs_topsis::domain::problem::DecisionProblem;
use ifs_topsis::ports::ProblemReader;

const TOLERANCE: f64 = 1e-6;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn reference_problem() -> DecisionProblem {
    FileProblemReader::rooted_at(fixture_dir())
        .read("reference_problem.yaml")
        .expect("fixture should parse")
}

fn reference_inputs() -> DecisionInputs {
    reference_problem().resolve().expect("fixture should resolve")
}

fn run(inputs: &DecisionInputs) -> PipelineOutcome {
    RankingPipeline::default()
        .run(inputs)
        .expect("reference run should succeed")
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < TOLERANCE, "index {}: {} vs {}", i, a, e);
    }
}

fn assert_ifns_close(actual: &[Ifn], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (j, (ifn, (mu, nu))) in actual.iter().zip(expected).enumerate() {
        assert!(
            (ifn.membership() - mu).abs() < TOLERANCE && (ifn.non_membership() - nu).abs() < TOLERANCE,
            "index {}: {} vs ({}, {})",
            j,
            ifn,
            mu,
            nu
        );
    }
}

#[test]
fn fixture_declares_reference_dimensions() {
    let problem = reference_problem();

    assert_eq!(problem.decision_maker_names(), vec!["DM1", "DM2", "DM3", "DM4"]);
    assert_eq!(problem.alternative_names(), vec!["A1", "A2", "A3", "A4"]);
    assert_eq!(problem.criterion_names(), vec!["C1", "C2", "C3", "C4", "C5"]);
}

#[test]
fn decision_maker_weights_match_reference() {
    let outcome = run(&reference_inputs());

    assert_close(
        outcome.decision_maker_weights.as_slice(),
        &[0.276923, 0.313846, 0.233846, 0.175385],
    );
    assert!((outcome.decision_maker_weights.total() - 1.0).abs() < IFN_TOLERANCE);
}

#[test]
fn criteria_weights_match_reference() {
    let outcome = run(&reference_inputs());

    assert_ifns_close(
        &outcome.criteria_weights,
        &[
            (0.651096, 0.248183),
            (0.557269, 0.358640),
            (0.526592, 0.370564),
            (0.602727, 0.312965),
            (0.737698, 0.182100),
        ],
    );
}

#[test]
fn weighted_row_of_first_alternative_matches_reference() {
    let outcome = run(&reference_inputs());

    assert_ifns_close(
        &outcome.weighted_matrix.rows()[0],
        &[
            (0.451318, 0.424689),
            (0.191332, 0.764179),
            (0.212320, 0.710544),
            (0.602727, 0.312965),
            (0.480581, 0.407098),
        ],
    );
}

#[test]
fn ideal_solutions_match_reference() {
    let outcome = run(&reference_inputs());

    assert_ifns_close(
        &outcome.ideal_solutions.positive,
        &[
            (0.651096, 0.248183),
            (0.191332, 0.764179),
            (0.526592, 0.370564),
            (0.088476, 0.875362),
            (0.737698, 0.182100),
        ],
    );
    assert_ifns_close(
        &outcome.ideal_solutions.negative,
        &[
            (0.198368, 0.754935),
            (0.557269, 0.358640),
            (0.166268, 0.786000),
            (0.602727, 0.312965),
            (0.268510, 0.686315),
        ],
    );
}

#[test]
fn separation_and_closeness_match_reference() {
    let outcome = run(&reference_inputs());

    assert_close(
        &outcome.separation.to_positive,
        &[0.314237, 0.291780, 0.308467, 0.261132],
    );
    assert_close(
        &outcome.separation.to_negative,
        &[0.248009, 0.271292, 0.295384, 0.343234],
    );
    assert_close(
        &outcome.closeness.scores,
        &[0.441104, 0.481807, 0.489167, 0.567924],
    );
    assert!(outcome.closeness.degenerate.is_empty());
}

#[test]
fn baseline_ranking_matches_reference() {
    let outcome = run(&reference_inputs());

    assert_eq!(outcome.baseline.ranks, vec![4, 3, 2, 1]);
    assert_eq!(outcome.baseline.order, vec![3, 2, 1, 0]);
}

#[test]
fn sensitivity_sweep_matches_reference() {
    let outcome = run(&reference_inputs());
    let sweep = &outcome.sensitivity;

    assert_eq!(sweep.outcomes.len(), 57);
    assert_eq!(sweep.stable_count(), 34);

    let v1_full_positive = sweep
        .for_formula(ScoringFormula::NormalizedDifference)
        .find(|o| {
            o.parameter
                == SweepParameter::Sigma {
                    positive: 1.0,
                    negative: 0.0,
                }
        })
        .expect("default sweep contains σ = (1, 0)");
    assert!(v1_full_positive.stable);

    let v4: Vec<bool> = sweep
        .for_formula(ScoringFormula::PenalizedDifference)
        .map(|o| o.stable)
        .collect();
    assert_eq!(v4, vec![true, true, false, false, false]);

    let swapped = sweep
        .for_formula(ScoringFormula::WeightedDifference)
        .last()
        .expect("default sweep contains σ = (0, 1)");
    assert_eq!(swapped.ranking.ranks, vec![4, 2, 3, 1]);

    let v2_ties: Vec<&SweepParameter> = sweep
        .for_formula(ScoringFormula::WeightedRatio)
        .filter(|o| o.ranking.ranks == vec![1, 1, 1, 1])
        .map(|o| &o.parameter)
        .collect();
    assert_eq!(v2_ties.len(), 2);
}

#[test]
fn scaling_decision_maker_importance_leaves_results_unchanged() {
    let inputs = reference_inputs();
    let baseline = run(&inputs);

    for k in [0.25, 0.5, 0.9] {
        let mut scaled = inputs.clone();
        scaled.decision_maker_importance = inputs
            .decision_maker_importance
            .iter()
            .map(|ifn| Ifn::try_new(ifn.membership() * k, ifn.non_membership() * k).unwrap())
            .collect();

        let outcome = run(&scaled);

        assert_close(
            outcome.decision_maker_weights.as_slice(),
            baseline.decision_maker_weights.as_slice(),
        );
        assert_close(&outcome.closeness.scores, &baseline.closeness.scores);
        assert_eq!(outcome.baseline, baseline.baseline);
    }
}

#[test]
fn parallel_sweep_matches_sequential_sweep() {
    let inputs = reference_inputs();

    let sequential = RankingPipeline::default().run(&inputs).unwrap();
    let parallel = RankingPipeline::default()
        .with_parallel_sweep(true)
        .run(&inputs)
        .unwrap();

    assert_eq!(sequential.sensitivity, parallel.sensitivity);
}

#[test]
fn fixture_round_trips_through_json() {
    let problem = reference_problem();
    let json = serde_json::to_string(&problem).unwrap();
    let reparsed: DecisionProblem = serde_json::from_str(&json).unwrap();

    assert_eq!(run(&reparsed.resolve().unwrap()).baseline.ranks, vec![4, 3, 2, 1]);
}
