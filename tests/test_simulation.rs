//! End-to-end checks of the harness through the public API.

use threes::config::{configure, ExecutionMode, SimulationOptions};
use threes::constants::NEUTRAL_VALUE;
use threes::report::format_text;
use threes::simulation::{run_simulation, run_simulation_with, simulate_trial};
use threes::ThreesError;

#[test]
fn invalid_configuration_is_reported() {
    for (dice, sims) in [(0, 10), (-3, 10), (5, 0), (5, -1)] {
        match configure(dice, sims) {
            Err(ThreesError::InvalidConfiguration { .. }) => {}
            other => panic!("expected InvalidConfiguration for ({dice}, {sims}), got {other:?}"),
        }
    }
}

#[test]
fn single_simulation_fills_one_bucket() {
    let cfg = configure(5, 1).unwrap();
    let result = run_simulation(&cfg);
    let buckets: Vec<_> = result.histogram.iter_nonzero().collect();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].1, 1);
}

#[test]
fn single_die_never_scores_neutral_face() {
    // One die: the opening roll either busts (score 0) or scores its face.
    let cfg = configure(1, 20_000).unwrap();
    let result = run_simulation_with(&cfg, &SimulationOptions::new(11, ExecutionMode::Parallel));
    let h = &result.histogram;
    assert_eq!(h.count(NEUTRAL_VALUE as u32), 0);
    for score in [0, 1, 2, 4, 5, 6] {
        let share = h.percentage(score);
        assert!(
            (share - 100.0 / 6.0).abs() < 1.5,
            "score {score} has share {share:.2}%"
        );
    }
}

#[test]
fn parallel_matches_sequential_repeatedly() {
    let cfg = configure(6, 20_000).unwrap();
    let reference =
        run_simulation_with(&cfg, &SimulationOptions::new(2024, ExecutionMode::Sequential));
    for _ in 0..10 {
        for mode in [ExecutionMode::Parallel, ExecutionMode::Sharded] {
            let run = run_simulation_with(&cfg, &SimulationOptions::new(2024, mode));
            assert_eq!(run.histogram.total(), 20_000);
            assert_eq!(run.histogram, reference.histogram, "mode {mode:?}");
        }
    }
}

#[test]
fn unseeded_runs_differ() {
    let cfg = configure(5, 2_000).unwrap();
    let a = run_simulation(&cfg);
    let b = run_simulation(&cfg);
    assert_eq!(a.histogram.total(), 2_000);
    assert_eq!(b.histogram.total(), 2_000);
    assert_ne!(a.seed, b.seed);
    assert_ne!(a.histogram, b.histogram);
}

#[test]
fn trial_depends_only_on_seed_and_index() {
    let scores: Vec<u32> = (0..50).map(|i| simulate_trial(5, 99, i)).collect();
    let again: Vec<u32> = (0..50).map(|i| simulate_trial(5, 99, i)).collect();
    assert_eq!(scores, again);
}

#[test]
fn text_report_lists_nonzero_buckets_in_order() {
    let cfg = configure(3, 500).unwrap();
    let result = run_simulation_with(&cfg, &SimulationOptions::new(5, ExecutionMode::Sequential));
    let text = format_text(&result);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Number of simulations was 500 using 3 dice.");
    assert!(lines.last().unwrap().starts_with("Total simulation took "));

    let body = &lines[1..lines.len() - 1];
    assert_eq!(body.len(), result.histogram.iter_nonzero().count());
    let scores: Vec<u32> = body
        .iter()
        .map(|l| l.split_whitespace().nth(1).unwrap().parse().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] < w[1]));
}
