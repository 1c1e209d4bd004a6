//! Property tests: invariants over random rates, horizons and seeds.

use proptest::prelude::*;
use queue_simulator_core_rs::{Simulation, SimulationConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_run_invariants(
        arrival_rate in 0.1f64..5.0,
        service_rate in 0.1f64..5.0,
        horizon in 0.5f64..200.0,
        seed in any::<u64>(),
    ) {
        let config = SimulationConfig::new(arrival_rate, service_rate, horizon).with_seed(seed);
        let outcome = Simulation::new(config).unwrap().finish();
        let result = &outcome.result;

        // Ledger covers exactly the horizon
        let ledger_total = outcome.trace.ledger().total_time();
        prop_assert!(((ledger_total - horizon) / horizon).abs() < 1e-9);

        // Probabilities form a distribution
        let p_total: f64 = result.state_probabilities.values().sum();
        prop_assert!((p_total - 1.0).abs() < 1e-9);
        prop_assert!(result.state_probabilities.values().all(|p| *p >= 0.0));

        prop_assert!(result.server_utilization >= 0.0);
        prop_assert!(result.server_utilization <= 1.0 + 1e-9);

        prop_assert!(result.completed_customers <= result.total_customers);
        prop_assert!(result.average_queue_time >= 0.0);
        prop_assert!(result.average_system_time >= result.average_queue_time);
        prop_assert!(result.average_queue_length <= result.average_system_length);

        for record in outcome.trace.completed_by(horizon) {
            prop_assert!(record.queue_time() >= 0.0);
            prop_assert!(record.system_time() >= record.queue_time());
        }
    }

    #[test]
    fn prop_same_seed_same_result(
        arrival_rate in 0.1f64..5.0,
        service_rate in 0.1f64..5.0,
        horizon in 0.5f64..100.0,
        seed in any::<u64>(),
    ) {
        let config = SimulationConfig::new(arrival_rate, service_rate, horizon).with_seed(seed);
        let first = Simulation::new(config.clone()).unwrap().finish();
        let second = Simulation::new(config).unwrap().finish();

        prop_assert_eq!(&first.result, &second.result);
        prop_assert_eq!(first.trace, second.trace);
        prop_assert_eq!(first.events_processed, second.events_processed);
    }
}
