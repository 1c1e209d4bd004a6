//! Command-line driver for the M/M/1 queue simulator
//!
//! - `queue-sim run` simulates one scenario and prints a report
//! - `queue-sim sweep` simulates several utilizations and compares the
//!   waiting time against the closed-form M/M/1 value

mod report;
mod scenario;

use clap::{ArgAction, Args, Parser, Subcommand};
use queue_simulator_core_rs::{Mm1Theory, Simulation, SimulationConfig, SimulationError};
use report::SweepRow;
use scenario::Scenario;
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "queue-sim", version, about = "Discrete-event M/M/1 queue simulator")]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate one scenario and print its statistics
    Run(RunArgs),
    /// Simulate a set of utilizations and compare Wq with theory
    Sweep(SweepArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Arrival rate λ (customers per time unit)
    #[arg(long, default_value_t = 10.0)]
    arrival_rate: f64,

    /// Service rate μ (customers per time unit)
    #[arg(long, default_value_t = 12.0)]
    service_rate: f64,

    /// Simulated duration
    #[arg(long, default_value_t = 10_000.0)]
    horizon: f64,

    #[command(flatten)]
    seed: SeedArgs,

    /// Add a comparison against M/M/1 closed-form results
    #[arg(long)]
    compare: bool,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SweepArgs {
    /// Service rate μ shared by the generated scenarios
    #[arg(long, default_value_t = 12.0)]
    service_rate: f64,

    /// Utilizations to simulate (comma separated)
    #[arg(long = "rho", value_delimiter = ',', default_values_t = [0.5, 0.8, 0.9])]
    rhos: Vec<f64>,

    /// JSON scenario file; replaces --rho/--service-rate
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Simulated duration per scenario
    #[arg(long, default_value_t = 20_000.0)]
    horizon: f64,

    #[command(flatten)]
    seed: SeedArgs,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Draw a fresh seed instead of using --seed
    #[arg(long, conflicts_with = "seed")]
    random_seed: bool,
}

impl SeedArgs {
    fn resolve(&self) -> Option<u64> {
        (!self.random_seed).then_some(self.seed)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => run(args),
        Command::Sweep(args) => sweep(args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig {
        arrival_rate: args.arrival_rate,
        service_rate: args.service_rate,
        horizon: args.horizon,
        seed: args.seed.resolve(),
        record_events: false,
    };

    let outcome = Simulation::new(config.clone())?.finish();
    let fingerprint = outcome.result.fingerprint()?;
    info!(
        seed = ?outcome.seed,
        events = outcome.events_processed,
        %fingerprint,
        "run complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }

    let comparison = if args.compare {
        Some(Mm1Theory::new(config.arrival_rate, config.service_rate)?.compare(&outcome.result))
    } else {
        None
    };
    print!(
        "{}",
        report::format_run(&config, outcome.seed, &outcome.result, comparison.as_deref())
    );
    Ok(())
}

fn sweep(args: SweepArgs) -> Result<(), Box<dyn Error>> {
    let scenarios = match &args.scenarios {
        Some(path) => scenario::load(path)?,
        None => scenario::from_utilizations(args.service_rate, &args.rhos),
    };
    let seed = args.seed.resolve();

    // Runs share nothing, so each scenario gets its own thread
    let rows = thread::scope(|scope| {
        let handles: Vec<_> = scenarios
            .iter()
            .map(|scenario| scope.spawn(move || sweep_row(scenario, args.horizon, seed)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(row) => row.map_err(Box::<dyn Error>::from),
                Err(_) => Err("simulation thread panicked".into()),
            })
            .collect::<Result<Vec<_>, Box<dyn Error>>>()
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", report::format_sweep(&rows));
    }
    Ok(())
}

fn sweep_row(scenario: &Scenario, horizon: f64, seed: Option<u64>) -> Result<SweepRow, SimulationError> {
    let mut config = SimulationConfig::new(scenario.arrival_rate, scenario.service_rate, horizon);
    config.seed = seed;

    let theory = Mm1Theory::new(scenario.arrival_rate, scenario.service_rate)?;
    let result = Simulation::new(config)?.finish().result;
    info!(
        scenario = %scenario.display_label(),
        wq = result.average_queue_time,
        "scenario complete"
    );

    Ok(SweepRow {
        label: scenario.display_label(),
        arrival_rate: scenario.arrival_rate,
        service_rate: scenario.service_rate,
        rho: theory.utilization(),
        server_utilization: result.server_utilization,
        simulated_queue_time: result.average_queue_time,
        theoretical_queue_time: theory.average_queue_time(),
        simulated_queue_length: result.average_queue_length,
        theoretical_queue_length: theory.average_queue_length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sweep_defaults_match_utilization_study() {
        let cli = Cli::parse_from(["queue-sim", "sweep"]);
        match cli.command {
            Command::Sweep(args) => {
                assert_eq!(args.rhos, vec![0.5, 0.8, 0.9]);
                assert_eq!(args.service_rate, 12.0);
                assert_eq!(args.horizon, 20_000.0);
                assert_eq!(args.seed.resolve(), Some(42));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_random_seed_flag() {
        let cli = Cli::parse_from(["queue-sim", "run", "--random-seed"]);
        match cli.command {
            Command::Run(args) => assert_eq!(args.seed.resolve(), None),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_sweep_row_reports_theory() {
        let scenario = Scenario {
            label: None,
            arrival_rate: 6.0,
            service_rate: 12.0,
        };
        let row = sweep_row(&scenario, 2_000.0, Some(42)).unwrap();

        assert_eq!(row.rho, 0.5);
        assert!((row.theoretical_queue_time.unwrap() - 1.0 / 12.0).abs() < 1e-12);
        assert!(row.simulated_queue_time > 0.0);
    }
}
