//! Result data types exposed across the Python boundary.

use pyo3::prelude::*;

/// Timing row for one task, filled in by the forward and backward passes.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTiming {
    /// Earliest possible start time (from the forward pass).
    #[pyo3(get, set)]
    pub earliest_start: i64,
    /// Earliest possible finish time (from the forward pass).
    #[pyo3(get, set)]
    pub earliest_finish: i64,
    /// Latest allowable start time (from the backward pass).
    #[pyo3(get, set)]
    pub latest_start: i64,
    /// Latest allowable finish time (from the backward pass).
    #[pyo3(get, set)]
    pub latest_finish: i64,
    /// Slack = latest_start - earliest_start.
    #[pyo3(get, set)]
    pub slack: i64,
}

#[pymethods]
impl NodeTiming {
    #[new]
    fn new(
        earliest_start: i64,
        earliest_finish: i64,
        latest_start: i64,
        latest_finish: i64,
        slack: i64,
    ) -> Self {
        Self {
            earliest_start,
            earliest_finish,
            latest_start,
            latest_finish,
            slack,
        }
    }

    /// A task is on the critical path when it has no slack.
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }

    fn __repr__(&self) -> String {
        format!(
            "NodeTiming(es={}, ef={}, ls={}, lf={}, slack={})",
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack
        )
    }
}

/// Full result of a CPM analysis.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpmResult {
    /// Total project length (longest path through any component).
    #[pyo3(get, set)]
    pub project_length: i64,
    /// Task ids with zero slack, in ascending order.
    #[pyo3(get, set)]
    pub critical_path: Vec<usize>,
    /// Slack per task, indexed by task id (0 for critical tasks).
    #[pyo3(get, set)]
    pub slack: Vec<i64>,
    /// Per-task timing table, indexed by task id.
    #[pyo3(get, set)]
    pub timings: Vec<NodeTiming>,
}

#[pymethods]
impl CpmResult {
    #[new]
    #[pyo3(signature = (project_length, critical_path, slack, timings=None))]
    fn new(
        project_length: i64,
        critical_path: Vec<usize>,
        slack: Vec<i64>,
        timings: Option<Vec<NodeTiming>>,
    ) -> Self {
        Self {
            project_length,
            critical_path,
            slack,
            timings: timings.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmResult(project_length={}, critical_tasks={}, tasks={})",
            self.project_length,
            self.critical_path.len(),
            self.slack.len()
        )
    }
}
