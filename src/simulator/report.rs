//! Simulation report generation.

use super::config::LanePolicy;

/// Raw statistics from a single simulated run.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Cars dodged (the in-game score).
    pub score: u32,
    /// Ticks executed before the crash or the tick limit.
    pub ticks_survived: u64,
    /// True when the run ended in a collision rather than the tick limit.
    pub crashed: bool,
    /// Shared obstacle speed when the run ended.
    pub final_speed: f64,
    /// Cars spawned over the whole run (dodged plus still on the track).
    pub obstacles_spawned: u32,
    /// Lane switches the policy actually performed.
    pub lane_changes: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_survived: u32,
    pub policy: LanePolicy,

    // Aggregated stats
    pub avg_score: f64,
    pub best_score: u32,
    pub avg_ticks_survived: f64,
    pub shortest_run: u64,
    pub median_run: u64,
    pub longest_run: u64,

    // Pacing
    pub avg_final_speed: f64,
    pub top_speed: f64,
    pub avg_obstacles_spawned: f64,
    pub avg_lane_changes: f64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, policy: LanePolicy) -> Self {
        let num_runs = runs.len() as u32;
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;
        let runs_survived = num_runs - runs_crashed;
        let denom = num_runs.max(1) as f64;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / denom;
        let best_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_ticks_survived =
            runs.iter().map(|r| r.ticks_survived as f64).sum::<f64>() / denom;

        let (shortest_run, median_run, longest_run) = {
            let mut sorted: Vec<u64> = runs.iter().map(|r| r.ticks_survived).collect();
            sorted.sort_unstable();
            (
                sorted.first().copied().unwrap_or(0),
                sorted.get(sorted.len() / 2).copied().unwrap_or(0),
                sorted.last().copied().unwrap_or(0),
            )
        };

        let avg_final_speed = runs.iter().map(|r| r.final_speed).sum::<f64>() / denom;
        let top_speed = runs.iter().map(|r| r.final_speed).fold(0.0, f64::max);
        let avg_obstacles_spawned =
            runs.iter().map(|r| r.obstacles_spawned as f64).sum::<f64>() / denom;
        let avg_lane_changes =
            runs.iter().map(|r| r.lane_changes as f64).sum::<f64>() / denom;

        Self {
            num_runs,
            runs_crashed,
            runs_survived,
            policy,
            avg_score,
            best_score,
            avg_ticks_survived,
            shortest_run,
            median_run,
            longest_run,
            avg_final_speed,
            top_speed,
            avg_obstacles_spawned,
            avg_lane_changes,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("                  (Real Tick Engine)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Policy: {}\nRuns: {} total, {} crashed, {} survived to the tick limit\n\n",
            self.policy.name(),
            self.num_runs,
            self.runs_crashed,
            self.runs_survived
        ));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.best_score));
        report.push_str(&format!(
            "  Avg Ticks Survived:  {:.0}\n",
            self.avg_ticks_survived
        ));
        report.push_str(&format!("  Shortest Run:        {} ticks\n", self.shortest_run));
        report.push_str(&format!("  Median Run:          {} ticks\n", self.median_run));
        report.push_str(&format!("  Longest Run:         {} ticks\n\n", self.longest_run));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Speed:     {:.1}\n",
            self.avg_final_speed
        ));
        report.push_str(&format!("  Top Speed:           {:.1}\n", self.top_speed));
        report.push_str(&format!(
            "  Avg Cars Spawned:    {:.1}\n",
            self.avg_obstacles_spawned
        ));
        report.push_str(&format!(
            "  Avg Lane Changes:    {:.1}\n\n",
            self.avg_lane_changes
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let crash_rate = (self.runs_crashed as f64 / self.num_runs.max(1) as f64) * 100.0;
        let rating = if crash_rate >= 100.0 {
            "WALL - no run outlasts the tick limit"
        } else if crash_rate >= 75.0 {
            "HARSH - most runs end in a crash"
        } else if crash_rate >= 25.0 {
            "FAIR - crashes are common but survivable"
        } else {
            "SOFT - most runs outlast the tick limit"
        };

        report.push_str(&format!("  Crash Rate:      {:.1}%\n", crash_rate));
        report.push_str(&format!("  Rating:          {}\n", rating));

        if self.policy == LanePolicy::Stay && self.runs_survived > 0 {
            report.push_str(
                "  ⚠️  Parked runs outlasting the limit - raise the tick cap for a full picture\n",
            );
        }
        if self.avg_final_speed > 10.0 {
            report.push_str("  ⚠️  Speed ramps past 10.0 - late game may be unreactable\n");
        }
        if self.best_score == 0 && self.num_runs > 0 {
            report.push_str("  ⚠️  No run dodged a single car - tick limit too short?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 15)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_crashed", &self.runs_crashed)?;
        state.serialize_field("runs_survived", &self.runs_survived)?;
        state.serialize_field("policy", self.policy.name())?;
        state.serialize_field("avg_score", &self.avg_score)?;
        state.serialize_field("best_score", &self.best_score)?;
        state.serialize_field("avg_ticks_survived", &self.avg_ticks_survived)?;
        state.serialize_field("shortest_run", &self.shortest_run)?;
        state.serialize_field("median_run", &self.median_run)?;
        state.serialize_field("longest_run", &self.longest_run)?;
        state.serialize_field("avg_final_speed", &self.avg_final_speed)?;
        state.serialize_field("top_speed", &self.top_speed)?;
        state.serialize_field("avg_obstacles_spawned", &self.avg_obstacles_spawned)?;
        state.serialize_field("avg_lane_changes", &self.avg_lane_changes)?;
        state.serialize_field(
            "crash_rate",
            &((self.runs_crashed as f64 / self.num_runs.max(1) as f64) * 100.0),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, crashed: bool) -> RunStats {
        RunStats {
            score,
            ticks_survived: ticks,
            crashed,
            final_speed: 2.0 + score as f64 * 0.1,
            obstacles_spawned: score + 2,
            lane_changes: score as u64,
        }
    }

    #[test]
    fn test_report_aggregates_runs() {
        let report = SimReport::from_runs(
            vec![run(4, 500, true), run(8, 900, true), run(12, 2000, false)],
            LanePolicy::Dodge,
        );

        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_crashed, 2);
        assert_eq!(report.runs_survived, 1);
        assert!((report.avg_score - 8.0).abs() < 1e-9);
        assert_eq!(report.best_score, 12);
        assert_eq!(report.shortest_run, 500);
        assert_eq!(report.median_run, 900);
        assert_eq!(report.longest_run, 2000);
    }

    #[test]
    fn test_text_report_names_the_policy() {
        let report = SimReport::from_runs(vec![run(1, 300, true)], LanePolicy::Stay);
        let text = report.to_text();

        assert!(text.contains("Policy: stay"));
        assert!(text.contains("1 total, 1 crashed"));
    }

    #[test]
    fn test_json_report_has_crash_rate() {
        let report = SimReport::from_runs(
            vec![run(2, 400, true), run(3, 600, false)],
            LanePolicy::Random,
        );
        let json = report.to_json();

        assert!(json.contains("\"crash_rate\": 50.0"));
        assert!(json.contains("\"policy\": \"random\""));
    }

    #[test]
    fn test_empty_batch_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), LanePolicy::Dodge);

        assert_eq!(report.num_runs, 0);
        assert_eq!(report.best_score, 0);
        assert!((report.avg_score).abs() < 1e-9);
    }
}
