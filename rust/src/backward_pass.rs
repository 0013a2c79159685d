//! Backward pass: latest-start propagation in reverse topological order.

use std::collections::VecDeque;

use crate::forward_pass::ForwardPassResult;
use crate::graph::ScheduleGraph;
use crate::{log_phases, log_updates};

/// Result of the backward pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackwardPassResult {
    /// Latest start time per task that keeps its component on schedule.
    pub latest_start: Vec<i64>,
    /// Overall project length: the maximum component length (0 when empty).
    pub project_length: i64,
}

/// Label weakly connected components by BFS over the undirected edge relation.
///
/// Returns the component id per task and the component count.
fn label_components(graph: &ScheduleGraph) -> (Vec<usize>, usize) {
    let n = graph.len();
    let mut component = vec![usize::MAX; n];
    let mut count = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();

    for start in 0..n {
        if component[start] != usize::MAX {
            continue;
        }
        component[start] = count;
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for &v in graph.successors[u].iter().chain(&graph.predecessors[u]) {
                if component[v] == usize::MAX {
                    component[v] = count;
                    queue.push_back(v);
                }
            }
        }
        count += 1;
    }

    (component, count)
}

/// Compute latest start times and the project length.
///
/// Tasks are visited in exact reverse of the forward pass's emission order,
/// which guarantees every successor is finalized before the tasks preceding
/// it. Each task's latest finish is the minimum latest start over its
/// successors; a task with no successors is a sink and is anchored to its own
/// component's length, so slack in one component never leaks into another.
///
/// Infallible: the forward pass has already established that the graph is
/// acyclic and `topo_order` covers every task.
pub fn backward_pass(
    graph: &ScheduleGraph,
    forward: &ForwardPassResult,
    verbosity: u8,
) -> BackwardPassResult {
    let n = graph.len();
    let (component, component_count) = label_components(graph);

    // Component length = maximum earliest finish, always attained at a sink.
    let mut component_length = vec![0i64; component_count];
    for task in 0..n {
        let finish = forward.earliest_start[task] + graph.durations[task];
        let c = component[task];
        if finish > component_length[c] {
            component_length[c] = finish;
        }
    }

    let mut latest_start = vec![0i64; n];

    for &u in forward.topo_order.iter().rev() {
        let latest_finish = graph.successors[u]
            .iter()
            .map(|&v| latest_start[v])
            .min()
            .unwrap_or(component_length[component[u]]);
        latest_start[u] = latest_finish - graph.durations[u];

        if graph.is_sink(u) {
            log_updates!(
                verbosity,
                "backward: sink task {} anchored to component length {}",
                u,
                latest_finish
            );
        }
    }

    let project_length = component_length.iter().copied().max().unwrap_or(0);

    log_phases!(
        verbosity,
        "backward pass: project length {} across {} components",
        project_length,
        component_count
    );

    BackwardPassResult {
        latest_start,
        project_length,
    }
}
