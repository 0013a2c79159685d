//! Slack classification and the end-to-end analysis pipeline.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::backward_pass::{backward_pass, BackwardPassResult};
use crate::config::CpmConfig;
use crate::forward_pass::{forward_pass, ForwardPassError, ForwardPassResult};
use crate::graph::{GraphBuildError, ScheduleGraph};
use crate::models::{CpmResult, NodeTiming};

/// Errors surfaced by the analysis pipeline.
///
/// Every failure is a permanent rejection of the input; nothing here is
/// transient or retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpmError {
    /// Input failed validation before any computation ran.
    #[error("invalid input: {0}")]
    Input(#[from] GraphBuildError),
    /// The precedence relation is not acyclic.
    #[error("{0}")]
    Cycle(#[from] ForwardPassError),
}

/// Derive slack and critical-path membership from the two passes.
pub fn classify(
    graph: &ScheduleGraph,
    forward: &ForwardPassResult,
    backward: &BackwardPassResult,
) -> CpmResult {
    let n = graph.len();
    let mut critical: FxHashSet<usize> = FxHashSet::default();
    let mut slack = Vec::with_capacity(n);
    let mut timings = Vec::with_capacity(n);

    for task in 0..n {
        let earliest_start = forward.earliest_start[task];
        let latest_start = backward.latest_start[task];
        let duration = graph.durations[task];
        let task_slack = latest_start - earliest_start;

        if task_slack == 0 {
            critical.insert(task);
        }
        slack.push(task_slack);
        timings.push(NodeTiming {
            earliest_start,
            earliest_finish: earliest_start + duration,
            latest_start,
            latest_finish: latest_start + duration,
            slack: task_slack,
        });
    }

    let critical_path: Vec<usize> = (0..n).filter(|task| critical.contains(task)).collect();

    CpmResult {
        project_length: backward.project_length,
        critical_path,
        slack,
        timings,
    }
}

/// Run the full pipeline: build graph, forward pass, backward pass, classify.
///
/// Each phase is a pure function over explicit arguments; this is just the
/// linear plumbing between them.
pub fn analyze(
    n: usize,
    adjacency: &[Vec<u8>],
    durations: &[i64],
    config: &CpmConfig,
) -> Result<CpmResult, CpmError> {
    let graph = ScheduleGraph::from_adjacency(n, adjacency, durations)?;
    let forward = forward_pass(&graph, config.verbosity)?;
    let backward = backward_pass(&graph, &forward, config.verbosity);
    Ok(classify(&graph, &forward, &backward))
}
