//! Forward pass: earliest-start propagation over a topological order.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph::ScheduleGraph;
use crate::{log_phases, log_trace, log_updates};

/// Error types for the forward pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForwardPassError {
    /// The precedence relation contains a cycle, so no topological order
    /// covers every task and earliest starts are undefined.
    #[error("dependency cycle detected: only {emitted} of {expected} tasks could be ordered")]
    CircularDependency { emitted: usize, expected: usize },
}

/// Result of the forward pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardPassResult {
    /// Earliest start time per task, respecting every predecessor.
    pub earliest_start: Vec<i64>,
    /// Tasks in worklist emission order (a topological order of the graph).
    pub topo_order: Vec<usize>,
}

/// Compute earliest start times with a Kahn-style worklist sweep.
///
/// The worklist is seeded with all zero-in-degree tasks in ascending id order
/// and processed FIFO, so the emitted order is deterministic. Each dequeued
/// task relaxes every successor's earliest start, whether or not that
/// successor is released into the queue yet: the earliest start is a running
/// maximum over all predecessors, not just the final releasing one.
///
/// Returns `CircularDependency` when fewer than `n` tasks were emitted.
pub fn forward_pass(
    graph: &ScheduleGraph,
    verbosity: u8,
) -> Result<ForwardPassResult, ForwardPassError> {
    let n = graph.len();
    let mut in_degree = graph.in_degree.clone();
    let mut earliest_start = vec![0i64; n];
    let mut topo_order: Vec<usize> = Vec::with_capacity(n);

    let mut queue: VecDeque<usize> = (0..n).filter(|&task| in_degree[task] == 0).collect();

    while let Some(u) = queue.pop_front() {
        log_trace!(verbosity, "forward: emit task {}", u);
        topo_order.push(u);
        let finish = earliest_start[u] + graph.durations[u];

        for &v in &graph.successors[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
            if finish > earliest_start[v] {
                log_updates!(
                    verbosity,
                    "forward: task {} earliest start {} -> {} (via task {})",
                    v,
                    earliest_start[v],
                    finish,
                    u
                );
                earliest_start[v] = finish;
            }
        }
    }

    if topo_order.len() != n {
        return Err(ForwardPassError::CircularDependency {
            emitted: topo_order.len(),
            expected: n,
        });
    }

    log_phases!(verbosity, "forward pass: ordered {} tasks", n);

    Ok(ForwardPassResult {
        earliest_start,
        topo_order,
    })
}
