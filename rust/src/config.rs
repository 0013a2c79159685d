//! Configuration types for the analysis pipeline.

use pyo3::prelude::*;

/// Configuration for a CPM analysis run.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct CpmConfig {
    /// Verbosity level: 0=silent, 1=phases, 2=updates, 3=trace.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

#[pymethods]
impl CpmConfig {
    #[new]
    #[pyo3(signature = (verbosity=0))]
    fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn __repr__(&self) -> String {
        format!("CpmConfig(verbosity={})", self.verbosity)
    }
}
