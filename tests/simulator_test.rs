//! Integration tests for the headless balance simulator.
//!
//! These run small seeded batches end to end and check reproducibility,
//! policy ordering, and the report surfaces.

use lanedodge::simulator::{run_simulation, LanePolicy, SimConfig};

fn batch(policy: LanePolicy, runs: u32, ticks: u64, seed: u64) -> SimConfig {
    SimConfig {
        num_runs: runs,
        seed: Some(seed),
        max_ticks_per_run: ticks,
        policy,
        verbosity: 0,
    }
}

#[test]
fn test_same_seed_reproduces_whole_report() {
    let config = batch(LanePolicy::Random, 4, 5_000, 7);

    let a = run_simulation(&config);
    let b = run_simulation(&config);

    assert_eq!(a.to_json(), b.to_json());
}

#[test]
fn test_parked_runs_always_crash() {
    let config = batch(LanePolicy::Stay, 3, 30_000, 11);

    let report = run_simulation(&config);

    assert_eq!(report.num_runs, 3);
    assert_eq!(report.runs_crashed, 3);
    assert!(report.longest_run < 30_000);
}

#[test]
fn test_dodging_beats_parking() {
    let stay = run_simulation(&batch(LanePolicy::Stay, 3, 10_000, 42));
    let dodge = run_simulation(&batch(LanePolicy::Dodge, 3, 10_000, 42));

    assert!(dodge.avg_ticks_survived >= stay.avg_ticks_survived);
    assert!(dodge.avg_lane_changes > 0.0);
}

#[test]
fn test_report_surfaces_are_complete() {
    let report = run_simulation(&batch(LanePolicy::Dodge, 2, 2_000, 5));

    let text = report.to_text();
    assert!(text.contains("SIMULATION REPORT"));
    assert!(text.contains("Policy: dodge"));
    assert!(text.contains("── SURVIVAL"));
    assert!(text.contains("── PACING"));
    assert!(text.contains("── BALANCE ASSESSMENT"));

    let json = report.to_json();
    assert!(json.contains("\"num_runs\": 2"));
    assert!(json.contains("\"policy\": \"dodge\""));
    assert!(json.contains("\"crash_rate\""));
}
