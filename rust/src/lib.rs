//! Rust implementation of the critpath schedule analysis engine.
//!
//! Computes Critical Path Method (CPM) schedules for task graphs with
//! precedence constraints: earliest and latest start times, slack, critical
//! path membership, and total project length.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod analysis;
pub mod backward_pass;
mod config;
pub mod forward_pass;
pub mod graph;
pub mod logging;
mod models;
pub mod report;

pub use analysis::{analyze, classify, CpmError};
pub use backward_pass::{backward_pass, BackwardPassResult};
pub use config::CpmConfig;
pub use forward_pass::{forward_pass, ForwardPassError, ForwardPassResult};
pub use graph::{GraphBuildError, ScheduleGraph};
pub use models::{CpmResult, NodeTiming};
pub use report::format_report;

/// Run a full CPM analysis over an adjacency matrix and task durations.
///
/// # Arguments
/// * `n` - Number of tasks
/// * `adjacency` - n x n matrix; entry (i, j) == 1 means task i must finish
///   before task j can start
/// * `durations` - n non-negative task durations
/// * `config` - Analysis configuration (verbosity); defaults when omitted
///
/// # Returns
/// * CpmResult with project length, critical path, slack vector and per-task
///   timings
///
/// # Raises
/// * ValueError on malformed input or a cyclic precedence relation
#[pyfunction]
#[pyo3(signature = (n, adjacency, durations, config=None))]
fn run_cpm(
    n: usize,
    adjacency: Vec<Vec<u8>>,
    durations: Vec<i64>,
    config: Option<CpmConfig>,
) -> PyResult<CpmResult> {
    let config = config.unwrap_or_default();

    match analyze(n, &adjacency, &durations, &config) {
        Ok(result) => Ok(result),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Format an analysis result as a plain-text report.
#[pyfunction]
fn format_cpm_report(result: CpmResult) -> String {
    report::format_report(&result)
}

/// The critpath.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<NodeTiming>()?;
    m.add_class::<CpmResult>()?;

    // Config types
    m.add_class::<CpmConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_cpm, m)?)?;
    m.add_function(wrap_pyfunction!(format_cpm_report, m)?)?;

    Ok(())
}
