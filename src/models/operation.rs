//! Operation model.
//!
//! An operation is a named unit of work that consumes resources and employs
//! AGVs. Its kind decides which task every attached AGV is asked to perform;
//! cost is the plain sum of what is attached.
//!
//! | Kind | Label | Task issued to AGVs |
//! |------|-------|---------------------|
//! | Loading | `Loading` | `Load materials` |
//! | Transport | `Transport` | `Move items across warehouse` |
//! | Sorting | `Sorting` | `Sort items` |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{sum_costs, Agv, Costed, Resource, TaskPerformer};

/// The kind of work an operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Loading materials onto AGVs.
    Loading,
    /// Moving items across the warehouse.
    Transport,
    /// Sorting items.
    Sorting,
}

impl OperationKind {
    /// All kinds, in declaration order.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Loading,
        OperationKind::Transport,
        OperationKind::Sorting,
    ];

    /// Label shown in the execution header.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Loading => "Loading",
            OperationKind::Transport => "Transport",
            OperationKind::Sorting => "Sorting",
        }
    }

    /// Task issued to every AGV of an operation of this kind.
    pub fn task(self) -> &'static str {
        match self {
            OperationKind::Loading => "Load materials",
            OperationKind::Transport => "Move items across warehouse",
            OperationKind::Sorting => "Sort items",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named unit of work with attached resources and AGVs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    name: String,
    kind: OperationKind,
    resources: Vec<Resource>,
    agvs: Vec<Agv>,
}

impl Operation {
    /// Creates an operation with nothing attached.
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            resources: Vec::new(),
            agvs: Vec::new(),
        }
    }

    /// Creates a loading operation.
    pub fn loading(name: impl Into<String>) -> Self {
        Self::new(name, OperationKind::Loading)
    }

    /// Creates a transport operation.
    pub fn transport(name: impl Into<String>) -> Self {
        Self::new(name, OperationKind::Transport)
    }

    /// Creates a sorting operation.
    pub fn sorting(name: impl Into<String>) -> Self {
        Self::new(name, OperationKind::Sorting)
    }

    /// Adds a resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds an AGV.
    pub fn with_agv(mut self, agv: Agv) -> Self {
        self.agvs.push(agv);
        self
    }

    /// Appends a resource. No deduplication.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Appends an AGV. No deduplication.
    pub fn add_agv(&mut self, agv: Agv) {
        self.agvs.push(agv);
    }

    /// Operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Attached resources, in insertion order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Attached AGVs, in insertion order.
    pub fn agvs(&self) -> &[Agv] {
        &self.agvs
    }

    /// Total cost: resource costs plus AGV costs.
    pub fn calculate_cost(&self) -> f64 {
        sum_costs(&self.resources) + sum_costs(&self.agvs)
    }

    /// Has every AGV perform this operation's task.
    ///
    /// Returns the task descriptions in AGV insertion order.
    pub fn execute(&self) -> Vec<String> {
        let task = self.kind.task();
        self.agvs.iter().map(|agv| agv.perform_task(task)).collect()
    }
}

impl Costed for Operation {
    fn cost(&self) -> f64 {
        self.calculate_cost()
    }
}
