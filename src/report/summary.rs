//! Serializable cost breakdown.
//!
//! Captures every cost of a warehouse in one nested structure, suitable
//! for JSON output or for comparing runs.
//!
//! # Levels
//!
//! | Level | Fields |
//! |-------|--------|
//! | Warehouse | name, total, processes |
//! | Process | name, total, operations |
//! | Operation | name, kind, cost, resources, AGVs |
//! | Line item | name or id, cost |

use serde::Serialize;

use crate::models::{Agv, IndustrialProcess, Operation, OperationKind, Resource, Warehouse};

/// Cost breakdown of a whole warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    /// Warehouse name.
    pub warehouse: String,
    /// Sum of process totals.
    pub total_cost: f64,
    /// Per-process breakdown, in insertion order.
    pub processes: Vec<ProcessSummary>,
}

/// Cost breakdown of one process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSummary {
    /// Process name.
    pub name: String,
    /// Sum of operation costs.
    pub total_cost: f64,
    /// Per-operation breakdown, in insertion order.
    pub operations: Vec<OperationSummary>,
}

/// Cost breakdown of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSummary {
    /// Operation name.
    pub name: String,
    /// Operation kind.
    pub kind: OperationKind,
    /// Resource costs plus AGV costs.
    pub cost: f64,
    /// Resource line items.
    pub resources: Vec<LineItem>,
    /// AGV line items.
    pub agvs: Vec<LineItem>,
}

/// A single costed entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Resource name or AGV id.
    pub name: String,
    /// Cost of the entity.
    pub cost: f64,
}

impl CostSummary {
    /// Computes the breakdown of a warehouse.
    pub fn calculate(warehouse: &Warehouse) -> Self {
        let processes: Vec<ProcessSummary> = warehouse
            .processes()
            .iter()
            .map(ProcessSummary::calculate)
            .collect();

        Self {
            warehouse: warehouse.name().to_string(),
            total_cost: warehouse.calculate_total_cost(),
            processes,
        }
    }

    /// Finds a process by name.
    pub fn process(&self, name: &str) -> Option<&ProcessSummary> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// The most expensive operation across all processes.
    ///
    /// Returns the first one on ties and `None` if there are no operations.
    pub fn costliest_operation(&self) -> Option<&OperationSummary> {
        self.processes
            .iter()
            .flat_map(|p| p.operations.iter())
            .fold(None, |best: Option<&OperationSummary>, op| match best {
                Some(b) if b.cost >= op.cost => Some(b),
                _ => Some(op),
            })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ProcessSummary {
    fn calculate(process: &IndustrialProcess) -> Self {
        Self {
            name: process.name().to_string(),
            total_cost: process.total_cost(),
            operations: process
                .operations()
                .iter()
                .map(OperationSummary::calculate)
                .collect(),
        }
    }
}

impl OperationSummary {
    fn calculate(operation: &Operation) -> Self {
        Self {
            name: operation.name().to_string(),
            kind: operation.kind(),
            cost: operation.calculate_cost(),
            resources: operation.resources().iter().map(LineItem::resource).collect(),
            agvs: operation.agvs().iter().map(LineItem::agv).collect(),
        }
    }
}

impl LineItem {
    fn resource(resource: &Resource) -> Self {
        Self {
            name: resource.name().to_string(),
            cost: resource.cost(),
        }
    }

    fn agv(agv: &Agv) -> Self {
        Self {
            name: agv.id().to_string(),
            cost: agv.cost(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_warehouse;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_demo_summary() {
        let summary = CostSummary::calculate(&demo_warehouse().unwrap());

        assert_eq!(summary.warehouse, "Central Distribution Center");
        assert!((summary.total_cost - 800.0).abs() < 1e-10);

        let packaging = summary.process("Packaging Process").unwrap();
        assert!((packaging.total_cost - 350.0).abs() < 1e-10);
        assert_eq!(packaging.operations[1].kind, OperationKind::Sorting);
        assert_eq!(packaging.operations[1].agvs[0].name, "A01");

        assert!(summary.process("Shipping").is_none());
    }

    #[test]
    fn test_costliest_operation() {
        let summary = CostSummary::calculate(&demo_warehouse().unwrap());
        let op = summary.costliest_operation().unwrap();
        assert_eq!(op.name, "Transport Operation");

        let empty = CostSummary::calculate(&Warehouse::new("Empty"));
        assert!(empty.costliest_operation().is_none());
    }

    #[test]
    fn test_empty_totals_serialize_as_zero() {
        let idle = IndustrialProcess::new("Idle").with_operation(Operation::loading("Wait"));
        let warehouse = Warehouse::new("Empty").with_process(idle);
        let json = CostSummary::calculate(&warehouse).to_json().unwrap();
        assert!(json.contains(r#""total_cost": 0.0"#));
        assert!(json.contains(r#""cost": 0.0"#));
        assert!(!json.contains("-0.0"));
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = CostSummary::calculate(&demo_warehouse().unwrap());
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(value["warehouse"], "Central Distribution Center");
        assert_eq!(value["total_cost"], 800.0);
        assert_eq!(value["processes"][1]["operations"][0]["kind"], "transport");
        assert_eq!(value["processes"][1]["operations"][0]["resources"][0]["cost"], 300.0);
    }

    /// Builds a random warehouse; every amount is a multiple of 0.25 so the
    /// sums below are exact regardless of addition order.
    fn random_warehouse(rng: &mut StdRng) -> Warehouse {
        let mut warehouse = Warehouse::new("Random");
        for p in 0..rng.random_range(1..4u32) {
            let mut process = IndustrialProcess::new(format!("P{p}"));
            for o in 0..rng.random_range(0..4u32) {
                let kind = OperationKind::ALL[rng.random_range(0..OperationKind::ALL.len())];
                let mut op = Operation::new(format!("P{p}-O{o}"), kind);
                for r in 0..rng.random_range(0..4u32) {
                    let q = rng.random_range(0..200u32) as f64 * 0.5;
                    let c = rng.random_range(0..40u32) as f64 * 0.5;
                    op.add_resource(Resource::new(format!("R{r}"), q, c).unwrap());
                }
                for a in 0..rng.random_range(0..3u32) {
                    let rate = rng.random_range(0..30u32) as f64 * 0.5;
                    let hours = rng.random_range(0..20u32) as f64 * 0.5;
                    op.add_agv(Agv::new(format!("A{a}"), "AGV", rate, hours).unwrap());
                }
                process.add_operation(op);
            }
            warehouse.add_process(process);
        }
        warehouse
    }

    #[test]
    fn test_totals_roll_up() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let warehouse = random_warehouse(&mut rng);
            let summary = CostSummary::calculate(&warehouse);

            for process in &summary.processes {
                for op in &process.operations {
                    let items: f64 = op
                        .resources
                        .iter()
                        .chain(op.agvs.iter())
                        .map(|i| i.cost)
                        .sum();
                    assert_eq!(op.cost, items);
                }
                let ops: f64 = process.operations.iter().map(|o| o.cost).sum();
                assert_eq!(process.total_cost, ops);
            }
            let processes: f64 = summary.processes.iter().map(|p| p.total_cost).sum();
            assert_eq!(summary.total_cost, processes);
            assert_eq!(summary, CostSummary::calculate(&warehouse));
        }
    }
}
