//! Console narration of a warehouse run.
//!
//! Walks the composition tree depth-first in insertion order and writes
//! one line per step to any [`Write`] sink:
//!
//! ```text
//!
//! === Simulating Warehouse: {warehouse} ===
//!
//! --- Starting Process: {process} ---
//! Executing {operation} ({kind})...
//! {type} (ID: {id}) performing: {task}
//!   Operation: {operation}
//!     Resource -> {resource}
//!     AGV -> {agv}
//!     Operation cost = ${cost}
//! Total process cost: ${total}
//!
//! Total warehouse cost: ${total}
//! ```

use std::io::{self, Write};
use tracing::{debug, info_span};

use crate::models::{format_money, IndustrialProcess, Operation, Warehouse};

/// Writes the narration of a run to a sink.
///
/// # Example
///
/// ```
/// use u_warehouse::demo::demo_warehouse;
/// use u_warehouse::report::Narrator;
///
/// let warehouse = demo_warehouse().unwrap();
/// let mut narrator = Narrator::new(Vec::new());
/// narrator.simulate(&warehouse).unwrap();
///
/// let text = String::from_utf8(narrator.into_inner()).unwrap();
/// assert!(text.ends_with("Total warehouse cost: $800.00\n"));
/// ```
#[derive(Debug)]
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    /// Creates a narrator writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Narrates a full run: every process in order, then the grand total.
    pub fn simulate(&mut self, warehouse: &Warehouse) -> io::Result<()> {
        let _span = info_span!("simulate", warehouse = %warehouse.name()).entered();

        writeln!(self.out)?;
        writeln!(self.out, "=== Simulating Warehouse: {} ===", warehouse.name())?;
        for process in warehouse.processes() {
            self.start(process)?;
        }
        let total = warehouse.calculate_total_cost();
        writeln!(self.out)?;
        writeln!(self.out, "Total warehouse cost: {}", format_money(total))?;
        self.out.flush()?;

        debug!(total, "Simulation finished");
        Ok(())
    }

    /// Narrates one process: each operation's tasks and costs, then the total.
    pub fn start(&mut self, process: &IndustrialProcess) -> io::Result<()> {
        let _span = info_span!("process", name = %process.name()).entered();

        writeln!(self.out)?;
        writeln!(self.out, "--- Starting Process: {} ---", process.name())?;
        for operation in process.operations() {
            self.execute(operation)?;
            self.print_cost_details(operation)?;
        }
        writeln!(
            self.out,
            "Total process cost: {}",
            format_money(process.total_cost())
        )
    }

    /// Writes the execution header and every AGV task line.
    pub fn execute(&mut self, operation: &Operation) -> io::Result<()> {
        writeln!(
            self.out,
            "Executing {} ({})...",
            operation.name(),
            operation.kind().label()
        )?;
        let tasks = operation.execute();
        debug!(operation = %operation.name(), tasks = tasks.len(), "Executed operation");
        for line in tasks {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Writes the resource and AGV line items and the operation total.
    pub fn print_cost_details(&mut self, operation: &Operation) -> io::Result<()> {
        writeln!(self.out, "  Operation: {}", operation.name())?;
        for resource in operation.resources() {
            writeln!(self.out, "    Resource -> {resource}")?;
        }
        for agv in operation.agvs() {
            writeln!(self.out, "    AGV -> {agv}")?;
        }
        writeln!(
            self.out,
            "    Operation cost = {}",
            format_money(operation.calculate_cost())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_warehouse;
    use crate::models::{Agv, Resource};

    const DEMO_TRANSCRIPT: &str = "
=== Simulating Warehouse: Central Distribution Center ===

--- Starting Process: Packaging Process ---
Executing Loading Operation (Loading)...
Loader AGV (ID: A01) performing: Load materials
  Operation: Loading Operation
    Resource -> Electricity (100.0 × 0.5) = $50.00
    AGV -> Loader AGV (ID: A01) cost = $120.00
    Operation cost = $170.00
Executing Sorting Operation (Sorting)...
Loader AGV (ID: A01) performing: Sort items
  Operation: Sorting Operation
    Resource -> Packaging material (30.0 × 2.0) = $60.00
    AGV -> Loader AGV (ID: A01) cost = $120.00
    Operation cost = $180.00
Total process cost: $350.00

--- Starting Process: Assembly Process ---
Executing Transport Operation (Transport)...
Transport AGV (ID: A02) performing: Move items across warehouse
  Operation: Transport Operation
    Resource -> Labor hours (20.0 × 15.0) = $300.00
    AGV -> Transport AGV (ID: A02) cost = $150.00
    Operation cost = $450.00
Total process cost: $450.00

Total warehouse cost: $800.00
";

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Narrator<Vec<u8>>) -> io::Result<()>,
    {
        let mut narrator = Narrator::new(Vec::new());
        f(&mut narrator).unwrap();
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn test_demo_transcript() {
        let w = demo_warehouse().unwrap();
        assert_eq!(render(|n| n.simulate(&w)), DEMO_TRANSCRIPT);
    }

    #[test]
    fn test_transcript_is_repeatable() {
        let w = demo_warehouse().unwrap();
        assert_eq!(render(|n| n.simulate(&w)), render(|n| n.simulate(&w)));
    }

    #[test]
    fn test_execute_without_agvs() {
        let op = Operation::transport("Idle Move");
        assert_eq!(render(|n| n.execute(&op)), "Executing Idle Move (Transport)...\n");
    }

    #[test]
    fn test_cost_details_without_attachments() {
        let op = Operation::sorting("Idle");
        assert_eq!(
            render(|n| n.print_cost_details(&op)),
            "  Operation: Idle\n    Operation cost = $0.00\n"
        );
    }

    #[test]
    fn test_empty_process() {
        let p = IndustrialProcess::new("Standby");
        assert_eq!(
            render(|n| n.start(&p)),
            "\n--- Starting Process: Standby ---\nTotal process cost: $0.00\n"
        );
    }

    #[test]
    fn test_cost_details_order() {
        let op = Operation::loading("Dock")
            .with_resource(Resource::new("B", 1.0, 1.0).unwrap())
            .with_resource(Resource::new("A", 2.0, 1.0).unwrap())
            .with_agv(Agv::new("Z9", "Loader AGV", 1.0, 0.5).unwrap());

        assert_eq!(
            render(|n| n.print_cost_details(&op)),
            "  Operation: Dock\n\
             \x20   Resource -> B (1.0 × 1.0) = $1.00\n\
             \x20   Resource -> A (2.0 × 1.0) = $2.00\n\
             \x20   AGV -> Loader AGV (ID: Z9) cost = $0.50\n\
             \x20   Operation cost = $3.50\n"
        );
    }

    #[test]
    fn test_empty_warehouse() {
        let w = Warehouse::new("Empty Lot");
        assert_eq!(
            render(|n| n.simulate(&w)),
            "\n=== Simulating Warehouse: Empty Lot ===\n\nTotal warehouse cost: $0.00\n"
        );
    }
}
