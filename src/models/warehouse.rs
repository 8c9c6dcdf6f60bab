//! Warehouse model, the root of the composition tree.

use serde::Serialize;

use super::{sum_costs, Costed, IndustrialProcess};

/// A facility running an ordered set of industrial processes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warehouse {
    name: String,
    processes: Vec<IndustrialProcess>,
}

impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            processes: Vec::new(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: IndustrialProcess) -> Self {
        self.processes.push(process);
        self
    }

    /// Appends a process.
    pub fn add_process(&mut self, process: IndustrialProcess) {
        self.processes.push(process);
    }

    /// Warehouse name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Processes, in insertion order.
    pub fn processes(&self) -> &[IndustrialProcess] {
        &self.processes
    }

    /// Sum of process totals.
    pub fn calculate_total_cost(&self) -> f64 {
        sum_costs(&self.processes)
    }
}

impl Costed for Warehouse {
    fn cost(&self) -> f64 {
        self.calculate_total_cost()
    }
}
