//! The built-in demo: a distribution center with a packaging process and an
//! assembly process.
//!
//! | Process | Operation | Resource | AGV | Cost |
//! |---------|-----------|----------|-----|------|
//! | Packaging Process | Loading Operation | Electricity $50 | A01 $120 | $170 |
//! | Packaging Process | Sorting Operation | Packaging material $60 | A01 $120 | $180 |
//! | Assembly Process | Transport Operation | Labor hours $300 | A02 $150 | $450 |
//!
//! Warehouse total: $800.

use crate::error::ModelError;
use crate::models::{Agv, IndustrialProcess, Operation, OperationKind, Resource, Warehouse};
use crate::scenario::{AgvSpec, OperationSpec, ProcessSpec, ResourceSpec, Scenario};

/// Name of the demo warehouse.
pub const DEMO_WAREHOUSE: &str = "Central Distribution Center";

/// Builds the demo warehouse.
pub fn demo_warehouse() -> Result<Warehouse, ModelError> {
    let electricity = Resource::new("Electricity", 100.0, 0.5)?;
    let labor = Resource::new("Labor hours", 20.0, 15.0)?;
    let packaging = Resource::new("Packaging material", 30.0, 2.0)?;

    let loader = Agv::new("A01", "Loader AGV", 12.0, 10.0)?;
    let transporter = Agv::new("A02", "Transport AGV", 10.0, 15.0)?;

    let mut load_op = Operation::loading("Loading Operation");
    load_op.add_resource(electricity);
    load_op.add_agv(loader.clone());

    let mut transport_op = Operation::transport("Transport Operation");
    transport_op.add_resource(labor);
    transport_op.add_agv(transporter);

    let mut sort_op = Operation::sorting("Sorting Operation");
    sort_op.add_resource(packaging);
    sort_op.add_agv(loader);

    let mut packaging_process = IndustrialProcess::new("Packaging Process");
    packaging_process.add_operation(load_op);
    packaging_process.add_operation(sort_op);

    let mut assembly_process = IndustrialProcess::new("Assembly Process");
    assembly_process.add_operation(transport_op);

    let mut warehouse = Warehouse::new(DEMO_WAREHOUSE);
    warehouse.add_process(packaging_process);
    warehouse.add_process(assembly_process);
    Ok(warehouse)
}

/// The demo as a scenario document.
pub fn demo_scenario() -> Scenario {
    Scenario {
        warehouse: DEMO_WAREHOUSE.into(),
        resources: vec![
            ResourceSpec::new("Electricity", 100.0, 0.5),
            ResourceSpec::new("Labor hours", 20.0, 15.0),
            ResourceSpec::new("Packaging material", 30.0, 2.0),
        ],
        agvs: vec![
            AgvSpec::new("A01", "Loader AGV", 12.0, 10.0),
            AgvSpec::new("A02", "Transport AGV", 10.0, 15.0),
        ],
        processes: vec![
            ProcessSpec::new("Packaging Process")
                .with_operation(
                    OperationSpec::new("Loading Operation", OperationKind::Loading)
                        .with_resource("Electricity")
                        .with_agv("A01"),
                )
                .with_operation(
                    OperationSpec::new("Sorting Operation", OperationKind::Sorting)
                        .with_resource("Packaging material")
                        .with_agv("A01"),
                ),
            ProcessSpec::new("Assembly Process").with_operation(
                OperationSpec::new("Transport Operation", OperationKind::Transport)
                    .with_resource("Labor hours")
                    .with_agv("A02"),
            ),
        ],
    }
}
