//! Task graph construction from an adjacency matrix.

use thiserror::Error;

/// Errors raised while building a schedule graph from raw input.
///
/// All of these are detected before any computation runs; a graph is never
/// built from partially validated data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    #[error("adjacency matrix has {actual} rows, expected {expected}")]
    AdjacencyRowCount { actual: usize, expected: usize },
    #[error("adjacency row {row} has {actual} entries, expected {expected}")]
    AdjacencyRowLength {
        row: usize,
        actual: usize,
        expected: usize,
    },
    #[error("got {actual} durations for {expected} tasks")]
    DurationCount { actual: usize, expected: usize },
    #[error("task {task} has negative duration {duration}")]
    NegativeDuration { task: usize, duration: i64 },
}

/// Precedence graph over tasks `0..n` with one duration per task.
///
/// Successor and predecessor lists are mutual inverses. `in_degree` holds the
/// predecessor counts at build time; the graph itself stays immutable and the
/// forward pass decrements its own copy.
#[derive(Clone, Debug)]
pub struct ScheduleGraph {
    /// Task durations indexed by task id (validated non-negative).
    pub durations: Vec<i64>,
    /// Direct successors per task: edge i -> j means i must finish before j starts.
    pub successors: Vec<Vec<usize>>,
    /// Direct predecessors per task (inverse of `successors`).
    pub predecessors: Vec<Vec<usize>>,
    /// Number of predecessors per task at build time.
    pub in_degree: Vec<usize>,
}

impl ScheduleGraph {
    /// Build a graph from an n x n adjacency matrix and n task durations.
    ///
    /// Entry (i, j) == 1 adds the precedence edge i -> j; any other value is
    /// treated as no edge. Shape and duration sign are validated up front.
    /// Acyclicity is NOT checked here - the forward pass detects cycles when
    /// its topological order comes up short.
    pub fn from_adjacency(
        n: usize,
        adjacency: &[Vec<u8>],
        durations: &[i64],
    ) -> Result<Self, GraphBuildError> {
        if adjacency.len() != n {
            return Err(GraphBuildError::AdjacencyRowCount {
                actual: adjacency.len(),
                expected: n,
            });
        }
        for (row, entries) in adjacency.iter().enumerate() {
            if entries.len() != n {
                return Err(GraphBuildError::AdjacencyRowLength {
                    row,
                    actual: entries.len(),
                    expected: n,
                });
            }
        }
        if durations.len() != n {
            return Err(GraphBuildError::DurationCount {
                actual: durations.len(),
                expected: n,
            });
        }
        for (task, &duration) in durations.iter().enumerate() {
            if duration < 0 {
                return Err(GraphBuildError::NegativeDuration { task, duration });
            }
        }

        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];

        for (i, row) in adjacency.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                if entry == 1 {
                    successors[i].push(j);
                    predecessors[j].push(i);
                    in_degree[j] += 1;
                }
            }
        }

        Ok(Self {
            durations: durations.to_vec(),
            successors,
            predecessors,
            in_degree,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Check if the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// A sink has no successors; the project ends when its sinks finish.
    pub fn is_sink(&self, task: usize) -> bool {
        self.successors[task].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_diamond() {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
        let adjacency = vec![
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ];
        let graph = ScheduleGraph::from_adjacency(4, &adjacency, &[2, 5, 1, 3]).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.successors[0], vec![1, 2]);
        assert_eq!(graph.successors[3], Vec::<usize>::new());
        assert_eq!(graph.predecessors[3], vec![1, 2]);
        assert_eq!(graph.in_degree, vec![0, 1, 1, 2]);
        assert!(graph.is_sink(3));
        assert!(!graph.is_sink(0));
    }

    #[test]
    fn test_successors_predecessors_are_inverses() {
        let adjacency = vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]];
        let graph = ScheduleGraph::from_adjacency(3, &adjacency, &[1, 1, 1]).unwrap();

        for (i, succs) in graph.successors.iter().enumerate() {
            for &j in succs {
                assert!(graph.predecessors[j].contains(&i));
            }
        }
        for (j, preds) in graph.predecessors.iter().enumerate() {
            for &i in preds {
                assert!(graph.successors[i].contains(&j));
            }
        }
    }

    #[test]
    fn test_non_one_entries_are_not_edges() {
        let adjacency = vec![vec![0, 2], vec![0, 0]];
        let graph = ScheduleGraph::from_adjacency(2, &adjacency, &[1, 1]).unwrap();
        assert!(graph.successors[0].is_empty());
        assert_eq!(graph.in_degree, vec![0, 0]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = ScheduleGraph::from_adjacency(0, &[], &[]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_row_count_mismatch() {
        let adjacency = vec![vec![0, 0]];
        let err = ScheduleGraph::from_adjacency(2, &adjacency, &[1, 1]).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::AdjacencyRowCount {
                actual: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_row_length_mismatch() {
        let adjacency = vec![vec![0, 0], vec![0]];
        let err = ScheduleGraph::from_adjacency(2, &adjacency, &[1, 1]).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::AdjacencyRowLength {
                row: 1,
                actual: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_duration_count_mismatch() {
        let adjacency = vec![vec![0, 0], vec![0, 0]];
        let err = ScheduleGraph::from_adjacency(2, &adjacency, &[1]).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::DurationCount {
                actual: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_negative_duration_rejected() {
        let adjacency = vec![vec![0, 0], vec![0, 0]];
        let err = ScheduleGraph::from_adjacency(2, &adjacency, &[3, -4]).unwrap_err();
        assert_eq!(
            err,
            GraphBuildError::NegativeDuration {
                task: 1,
                duration: -4
            }
        );
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = GraphBuildError::DurationCount {
            actual: 3,
            expected: 5,
        };
        assert_eq!(err.to_string(), "got 3 durations for 5 tasks");
    }
}
