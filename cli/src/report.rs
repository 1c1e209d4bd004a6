//! Console rendering of run and sweep results.

use queue_simulator_core_rs::{SimulationConfig, SimulationResult, TheoryComparison};
use serde::Serialize;
use std::fmt::Write;

/// One scenario of a utilization sweep, simulated and analytic.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub label: String,
    pub arrival_rate: f64,
    pub service_rate: f64,
    pub rho: f64,
    pub server_utilization: f64,
    pub simulated_queue_time: f64,
    /// `None` when ρ >= 1
    pub theoretical_queue_time: Option<f64>,
    pub simulated_queue_length: f64,
    pub theoretical_queue_length: Option<f64>,
}

pub fn format_run(
    config: &SimulationConfig,
    seed: Option<u64>,
    result: &SimulationResult,
    comparison: Option<&[TheoryComparison]>,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_run(&mut out, config, seed, result, comparison);
    out
}

fn write_run(
    out: &mut String,
    config: &SimulationConfig,
    seed: Option<u64>,
    result: &SimulationResult,
    comparison: Option<&[TheoryComparison]>,
) -> std::fmt::Result {
    writeln!(out, "M/M/1 Queue Simulation Results")?;
    writeln!(out, "==============================")?;
    writeln!(out, "Parameters:")?;
    writeln!(out, "  λ (arrival rate): {} customers/unit time", config.arrival_rate)?;
    writeln!(out, "  μ (service rate): {} customers/unit time", config.service_rate)?;
    writeln!(
        out,
        "  ρ (traffic intensity): {:.4}",
        config.arrival_rate / config.service_rate
    )?;
    writeln!(out, "  Simulation duration: {} time units", config.horizon)?;
    match seed {
        Some(seed) => writeln!(out, "  Random seed: {}", seed)?,
        None => writeln!(out, "  Random seed: (custom source)")?,
    }
    writeln!(out)?;

    writeln!(out, "Results:")?;
    writeln!(out, "  Total customers served or in service: {}", result.total_customers)?;
    writeln!(out, "  Customers completed: {}", result.completed_customers)?;
    writeln!(out, "  Total time spent in system: {:.2}", result.total_system_time)?;
    writeln!(out, "  Total time spent in queue: {:.2}", result.total_queue_time)?;
    writeln!(out, "  Total server busy time: {:.2}", result.server_busy_time)?;
    writeln!(out, "  Average time in system (W): {:.6}", result.average_system_time)?;
    writeln!(out, "  Average time in queue (Wq): {:.6}", result.average_queue_time)?;
    writeln!(out, "  Server utilization: {:.4}", result.server_utilization)?;
    writeln!(
        out,
        "  Time-averaged number in system (L): {:.4}",
        result.average_system_length
    )?;
    writeln!(
        out,
        "  Time-averaged number in queue (Lq): {:.4}",
        result.average_queue_length
    )?;

    writeln!(out)?;
    writeln!(out, "Proportion of time with n customers in system:")?;
    for n in 0..=result.max_population() {
        writeln!(out, "  n = {}: {:.4}", n, result.state_probability(n))?;
    }

    if let Some(rows) = comparison {
        writeln!(out)?;
        writeln!(out, "Comparison with M/M/1 theory:")?;
        writeln!(
            out,
            "  {:<24} {:>12} {:>12} {:>9}",
            "metric", "simulated", "theoretical", "rel.err"
        )?;
        for row in rows {
            writeln!(
                out,
                "  {:<24} {:>12.6} {:>12.6} {:>8.2}%",
                row.metric,
                row.simulated,
                row.theoretical,
                row.relative_error() * 100.0
            )?;
        }
    }
    Ok(())
}

pub fn format_sweep(rows: &[SweepRow]) -> String {
    let mut out = String::new();
    let _ = write_sweep(&mut out, rows);
    out
}

fn write_sweep(out: &mut String, rows: &[SweepRow]) -> std::fmt::Result {
    writeln!(out, "M/M/1 Queue: Simulated vs Theoretical Wq")?;
    writeln!(
        out,
        "{:<12} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12}",
        "scenario", "rho", "util", "Wq (sim)", "Wq (theory)", "Lq (sim)", "Lq (theory)"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<12} {:>8.3} {:>8.4} {:>12.6} {:>12} {:>12.4} {:>12}",
            row.label,
            row.rho,
            row.server_utilization,
            row.simulated_queue_time,
            format_optional(row.theoretical_queue_time, 6),
            row.simulated_queue_length,
            format_optional(row.theoretical_queue_length, 4),
        )?;
    }
    Ok(())
}

fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "unstable".to_string(),
    }
}
