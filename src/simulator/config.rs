//! Simulation configuration.

/// How the simulated player steers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePolicy {
    /// Never leave the starting lane.
    Stay,
    /// Drift to a random neighboring lane now and then.
    Random,
    /// Watch the lanes and swerve away from incoming cars.
    Dodge,
}

impl LanePolicy {
    /// Parse a CLI policy name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stay" => Some(LanePolicy::Stay),
            "random" => Some(LanePolicy::Random),
            "dodge" => Some(LanePolicy::Dodge),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LanePolicy::Stay => "stay",
            LanePolicy::Random => "random",
            LanePolicy::Dodge => "dodge",
        }
    }
}

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks per run before the run is cut off
    pub max_ticks_per_run: u64,

    /// Steering policy for the simulated player
    pub policy: LanePolicy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 100_000,
            policy: LanePolicy::Dodge,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check.
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_ticks_per_run: 20_000,
            ..Default::default()
        }
    }
}
