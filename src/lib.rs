//! Warehouse cost-aggregation simulator.
//!
//! Models a warehouse as a fixed composition tree and rolls costs up from
//! the leaves:
//!
//! ```text
//! Warehouse → IndustrialProcess → Operation → { Resource, Agv }
//! ```
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Resource`, `Vehicle`, `Agv`, `Operation`,
//!   `OperationKind`, `IndustrialProcess`, `Warehouse`, and the `Costed` /
//!   `TaskPerformer` capabilities
//! - **`report`**: Console narration of a run and the serializable `CostSummary`
//! - **`scenario`**: JSON scenario documents and their conversion to a warehouse
//! - **`validation`**: Structural checks for scenario documents
//! - **`demo`**: The built-in distribution center
//! - **`error`**: `ModelError` and `ScenarioError`
//!
//! # Example
//!
//! ```
//! use u_warehouse::models::{Agv, IndustrialProcess, Operation, Resource, Warehouse};
//!
//! let op = Operation::loading("Loading Operation")
//!     .with_resource(Resource::new("Electricity", 100.0, 0.5).unwrap())
//!     .with_agv(Agv::new("A01", "Loader AGV", 12.0, 10.0).unwrap());
//! let warehouse = Warehouse::new("Depot")
//!     .with_process(IndustrialProcess::new("Packaging").with_operation(op));
//!
//! assert_eq!(warehouse.calculate_total_cost(), 170.0);
//! ```

pub mod demo;
pub mod error;
pub mod models;
pub mod report;
pub mod scenario;
pub mod validation;
