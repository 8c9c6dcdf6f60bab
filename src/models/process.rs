//! Industrial process model.
//!
//! A process is an ordered workflow of operations. It runs them in the
//! order they were added and its cost is the sum of theirs.

use serde::Serialize;

use super::{sum_costs, Costed, Operation};

/// A named, ordered collection of operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustrialProcess {
    name: String,
    operations: Vec<Operation>,
}

impl IndustrialProcess {
    /// Creates an empty process.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Adds an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends an operation.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Process name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operations, in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Sum of operation costs.
    pub fn total_cost(&self) -> f64 {
        sum_costs(&self.operations)
    }
}

impl Costed for IndustrialProcess {
    fn cost(&self) -> f64 {
        self.total_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Agv, Resource};

    fn packaging_process() -> IndustrialProcess {
        let loader = Agv::new("A01", "Loader AGV", 12.0, 10.0).unwrap();
        IndustrialProcess::new("Packaging Process")
            .with_operation(
                Operation::loading("Loading Operation")
                    .with_resource(Resource::new("Electricity", 100.0, 0.5).unwrap())
                    .with_agv(loader.clone()),
            )
            .with_operation(
                Operation::sorting("Sorting Operation")
                    .with_resource(Resource::new("Packaging material", 30.0, 2.0).unwrap())
                    .with_agv(loader),
            )
    }

    #[test]
    fn test_process_total_cost() {
        let p = packaging_process();
        assert_eq!(p.name(), "Packaging Process");
        assert_eq!(p.operation_count(), 2);
        assert!((p.total_cost() - 350.0).abs() < 1e-10);
    }

    #[test]
    fn test_process_total_is_sum_of_operations() {
        let p = packaging_process();
        let sum: f64 = p.operations().iter().map(|op| op.calculate_cost()).sum();
        assert_eq!(p.total_cost(), sum);
        assert_eq!(p.total_cost(), Costed::cost(&p));
    }

    #[test]
    fn test_process_preserves_order() {
        let mut p = IndustrialProcess::new("P");
        p.add_operation(Operation::sorting("second"));
        p.add_operation(Operation::loading("first"));

        let names: Vec<&str> = p.operations().iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_process_empty() {
        let p = IndustrialProcess::new("empty");
        assert_eq!(p.total_cost(), 0.0);
        assert!(p.total_cost().is_sign_positive());
        assert_eq!(p.operation_count(), 0);
    }
}
