//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 dodge runs
//!   cargo run --bin simulate -- -n 100 -p stay   # 100 runs parked in lane 1
//!   cargo run --bin simulate -- --seed 42        # Reproducible batch

use lanedodge::simulator::{run_simulation, LanePolicy, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║             LANE DODGE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:       {}", config.num_runs);
    println!("  Policy:     {}", config.policy.name());
    println!("  Max Ticks:  {}", config.max_ticks_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-p" | "--policy" => {
                if i + 1 < args.len() {
                    match LanePolicy::parse(&args[i + 1]) {
                        Some(policy) => config.policy = policy,
                        None => {
                            eprintln!(
                                "Unknown policy: {} (expected stay, random, or dodge)",
                                args[i + 1]
                            );
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Lane Dodge Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -t, --ticks <T>     Max ticks per run (default: 100,000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -p, --policy <P>    Steering policy: stay, random, dodge (default: dodge)");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs, 20k ticks)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 100 -p stay   # How long does parking last?");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- --quick --json   # Fast check, saved to JSON");
}
