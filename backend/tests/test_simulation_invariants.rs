//! Invariants that must hold for every run, regardless of parameters.

use queue_simulator_core_rs::{
    simulate, Simulation, SimulationConfig, SimulationError, SimulationOutcome,
};

fn run(arrival_rate: f64, service_rate: f64, horizon: f64, seed: u64) -> SimulationOutcome {
    let config = SimulationConfig::new(arrival_rate, service_rate, horizon).with_seed(seed);
    Simulation::new(config).expect("valid config").finish()
}

#[test]
fn test_ledger_sums_to_horizon() {
    for (lambda, mu, horizon) in [(6.0, 12.0, 5_000.0), (11.0, 12.0, 3_000.0), (15.0, 12.0, 500.0)] {
        let outcome = run(lambda, mu, horizon, 42);
        let total = outcome.trace.ledger().total_time();
        assert!(
            ((total - horizon) / horizon).abs() < 1e-9,
            "ledger total {} != horizon {} for λ={} μ={}",
            total,
            horizon,
            lambda,
            mu
        );
    }
}

#[test]
fn test_state_probabilities_form_distribution() {
    let result = simulate(9.6, 12.0, 5_000.0, Some(7)).unwrap();

    let total: f64 = result.state_probabilities.values().sum();
    assert!((total - 1.0).abs() < 1e-9, "probabilities sum to {}", total);

    for (level, p) in &result.state_probabilities {
        assert!((0.0..=1.0).contains(p), "p[{}] = {} out of range", level, p);
    }
}

#[test]
fn test_customer_records_are_ordered_and_fifo() {
    let outcome = run(10.0, 12.0, 2_000.0, 99);
    let horizon = 2_000.0;

    let customers = outcome.trace.customers();
    assert!(!customers.is_empty());

    for record in customers.iter().filter(|r| r.completed_by(horizon)) {
        assert!(record.queue_time() >= 0.0);
        assert!(record.system_time() >= record.queue_time());
    }

    // Single FIFO server: arrivals, starts and departures are all non-decreasing
    for pair in customers.windows(2) {
        assert!(pair[0].arrival_time() <= pair[1].arrival_time());
        assert!(pair[0].departure_time() <= pair[1].service_start_time());
    }
}

#[test]
fn test_identical_inputs_identical_results() {
    let a = simulate(6.0, 12.0, 5_000.0, Some(42)).unwrap();
    let b = simulate(6.0, 12.0, 5_000.0, Some(42)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    assert_eq!(a.server_busy_time.to_bits(), b.server_busy_time.to_bits());
}

#[test]
fn test_different_seeds_diverge() {
    let a = simulate(6.0, 12.0, 1_000.0, Some(1)).unwrap();
    let b = simulate(6.0, 12.0, 1_000.0, Some(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_utilization_bounded() {
    for (lambda, mu) in [(1.0, 12.0), (6.0, 12.0), (12.0, 12.0), (30.0, 12.0)] {
        let result = simulate(lambda, mu, 1_000.0, Some(5)).unwrap();
        assert!(
            result.server_utilization >= 0.0 && result.server_utilization <= 1.0 + 1e-12,
            "utilization {} out of bounds for λ={}",
            result.server_utilization,
            lambda
        );
    }
}

#[test]
fn test_zero_arrivals_within_horizon() {
    // Mean interarrival of 1e9 against a horizon of 1: nobody arrives in time
    let result = simulate(1e-9, 1.0, 1.0, Some(42)).unwrap();

    assert_eq!(result.completed_customers, 0);
    assert_eq!(result.total_system_time, 0.0);
    assert_eq!(result.total_queue_time, 0.0);
    assert_eq!(result.average_system_time, 0.0);
    assert_eq!(result.average_queue_time, 0.0);
    assert_eq!(result.server_utilization, 0.0);
    assert_eq!(result.average_system_length, 0.0);
    assert_eq!(result.average_queue_length, 0.0);
    assert_eq!(result.state_probability(0), 1.0);
}

#[test]
fn test_counts_consistent() {
    let result = simulate(8.0, 12.0, 3_000.0, Some(11)).unwrap();

    assert!(result.completed_customers <= result.total_customers);
    // The customer in service at the horizon, plus at most one started by
    // the final overshooting departure
    assert!(result.total_customers - result.completed_customers <= 2);

    let n = result.completed_customers as f64;
    assert!((result.average_system_time - result.total_system_time / n).abs() < 1e-12);
    assert!((result.average_queue_time - result.total_queue_time / n).abs() < 1e-12);
}

#[test]
fn test_invalid_parameters_fail_fast() {
    assert!(matches!(
        simulate(-1.0, 12.0, 100.0, Some(1)),
        Err(SimulationError::InvalidParameter { parameter: "arrival_rate", .. })
    ));
    assert!(matches!(
        simulate(6.0, 0.0, 100.0, Some(1)),
        Err(SimulationError::InvalidParameter { parameter: "service_rate", .. })
    ));
    assert!(matches!(
        simulate(6.0, 12.0, -5.0, Some(1)),
        Err(SimulationError::InvalidParameter { parameter: "horizon", .. })
    ));
}

#[test]
fn test_event_log_mirrors_trace() {
    let config = SimulationConfig::new(6.0, 12.0, 200.0)
        .with_seed(42)
        .with_event_log();
    let outcome = Simulation::new(config).unwrap().finish();

    let starts = outcome.events.events_of_type("service_start").len();
    assert_eq!(starts, outcome.result.total_customers);

    let arrivals = outcome.events.events_of_type("arrival").len();
    let departures = outcome.events.events_of_type("departure").len();
    assert_eq!(arrivals + departures, outcome.events_processed);

    let times: Vec<f64> = outcome.events.events().iter().map(|e| e.time()).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "events out of time order");
}
