//! Scenario documents.
//!
//! A scenario describes a warehouse declaratively: a catalogue of
//! resources, a fleet of AGVs, and processes whose operations refer to
//! them by resource name and AGV id. One catalogue entry may be referenced
//! by several operations; each reference receives its own copy of the
//! (immutable) entity.
//!
//! # Format
//!
//! ```json
//! {
//!   "warehouse": "Central Distribution Center",
//!   "resources": [{ "name": "Electricity", "quantity": 100, "cost_per_unit": 0.5 }],
//!   "agvs": [{ "id": "A01", "type": "Loader AGV", "hourly_cost": 12, "hours_used": 10 }],
//!   "processes": [{
//!     "name": "Packaging Process",
//!     "operations": [{
//!       "name": "Loading Operation", "kind": "loading",
//!       "resources": ["Electricity"], "agvs": ["A01"]
//!     }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ScenarioError;
use crate::models::{Agv, IndustrialProcess, Operation, OperationKind, Resource, Warehouse};
use crate::validation::{validate_scenario, ValidationError, ValidationErrorKind};

/// A declarative warehouse description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Warehouse name.
    pub warehouse: String,
    /// Resource catalogue.
    #[serde(default)]
    pub resources: Vec<ResourceSpec>,
    /// AGV fleet.
    #[serde(default)]
    pub agvs: Vec<AgvSpec>,
    /// Processes, in execution order.
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

/// A resource catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Unique resource name.
    pub name: String,
    /// Consumed quantity.
    pub quantity: f64,
    /// Cost of a single unit.
    pub cost_per_unit: f64,
}

/// An AGV fleet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgvSpec {
    /// Unique AGV id.
    pub id: String,
    /// Vehicle type.
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Operating cost per hour.
    pub hourly_cost: f64,
    /// Hours of operation billed.
    pub hours_used: f64,
}

/// A process and its operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process name.
    pub name: String,
    /// Operations, in execution order.
    #[serde(default)]
    pub operations: Vec<OperationSpec>,
}

/// An operation and the catalogue entries it uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Operation name.
    pub name: String,
    /// Operation kind.
    pub kind: OperationKind,
    /// Referenced resource names, in attachment order.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Referenced AGV ids, in attachment order.
    #[serde(default)]
    pub agvs: Vec<String>,
}

impl ResourceSpec {
    /// Creates a resource entry.
    pub fn new(name: impl Into<String>, quantity: f64, cost_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            cost_per_unit,
        }
    }
}

impl AgvSpec {
    /// Creates an AGV entry.
    pub fn new(
        id: impl Into<String>,
        vehicle_type: impl Into<String>,
        hourly_cost: f64,
        hours_used: f64,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle_type: vehicle_type.into(),
            hourly_cost,
            hours_used,
        }
    }
}

impl ProcessSpec {
    /// Creates a process entry with no operations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Adds an operation.
    pub fn with_operation(mut self, operation: OperationSpec) -> Self {
        self.operations.push(operation);
        self
    }
}

impl OperationSpec {
    /// Creates an operation entry with no references.
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            resources: Vec::new(),
            agvs: Vec::new(),
        }
    }

    /// Adds a resource reference.
    pub fn with_resource(mut self, name: impl Into<String>) -> Self {
        self.resources.push(name.into());
        self
    }

    /// Adds an AGV reference.
    pub fn with_agv(mut self, id: impl Into<String>) -> Self {
        self.agvs.push(id.into());
        self
    }
}

impl Scenario {
    /// Parses a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            warehouse = %scenario.warehouse,
            processes = scenario.processes.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Serializes the scenario as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the scenario and builds the warehouse it describes.
    ///
    /// # Errors
    /// - [`ScenarioError::Invalid`] with every structural issue found.
    /// - [`ScenarioError::Model`] if a resource or AGV has invalid numbers.
    pub fn build(&self) -> Result<Warehouse, ScenarioError> {
        validate_scenario(self).map_err(ScenarioError::Invalid)?;

        let resources = self
            .resources
            .iter()
            .map(|r| -> Result<_, ScenarioError> {
                let resource = Resource::new(&r.name, r.quantity, r.cost_per_unit)?;
                Ok((r.name.as_str(), resource))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        let agvs = self
            .agvs
            .iter()
            .map(|a| -> Result<_, ScenarioError> {
                let agv = Agv::new(&a.id, &a.vehicle_type, a.hourly_cost, a.hours_used)?;
                Ok((a.id.as_str(), agv))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        let mut warehouse = Warehouse::new(&self.warehouse);
        for p in &self.processes {
            let mut process = IndustrialProcess::new(&p.name);
            for o in &p.operations {
                let mut operation = Operation::new(&o.name, o.kind);
                for name in &o.resources {
                    let resource =
                        lookup(&resources, name, ValidationErrorKind::InvalidResourceReference)?;
                    operation.add_resource(resource);
                }
                for id in &o.agvs {
                    let agv = lookup(&agvs, id, ValidationErrorKind::InvalidAgvReference)?;
                    operation.add_agv(agv);
                }
                process.add_operation(operation);
            }
            debug!(process = %p.name, operations = process.operation_count(), "Built process");
            warehouse.add_process(process);
        }
        Ok(warehouse)
    }
}

fn lookup<T: Clone>(
    catalogue: &HashMap<&str, T>,
    key: &str,
    kind: ValidationErrorKind,
) -> Result<T, ScenarioError> {
    catalogue.get(key).cloned().ok_or_else(|| {
        ScenarioError::Invalid(vec![ValidationError::new(
            kind,
            format!("Unknown reference '{key}'"),
        )])
    })
}
