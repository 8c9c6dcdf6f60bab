//! Structural validation for scenario documents.
//!
//! Checks the integrity of a [`Scenario`] before it is turned into a
//! warehouse. Detects:
//! - Empty names
//! - Duplicate resource names, AGV ids, process names, and operation
//!   names within a process
//! - Operations referencing resources or AGVs that are not declared
//!
//! Numeric checks (negative or non-finite values) happen at entity
//! construction and are reported as [`crate::error::ModelError`].

use crate::scenario::Scenario;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same type share a name or id.
    DuplicateName,
    /// A name or id is empty.
    EmptyName,
    /// An operation references a resource that doesn't exist.
    InvalidResourceReference,
    /// An operation references an AGV that doesn't exist.
    InvalidAgvReference,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scenario document.
///
/// Checks:
/// 1. Warehouse, resource, AGV, process and operation names are non-empty
/// 2. No duplicate resource names
/// 3. No duplicate AGV ids
/// 4. No duplicate process names
/// 5. No duplicate operation names within a process
/// 6. Every resource reference names a declared resource
/// 7. Every AGV reference names a declared AGV
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scenario(scenario: &Scenario) -> ValidationResult {
    let mut errors = Vec::new();

    if scenario.warehouse.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Warehouse name is empty",
        ));
    }

    let mut resource_names = HashSet::new();
    for r in &scenario.resources {
        check_name(&mut errors, "Resource name", &r.name);
        if !resource_names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate resource name: {}", r.name),
            ));
        }
    }

    let mut agv_ids = HashSet::new();
    for a in &scenario.agvs {
        check_name(&mut errors, "AGV id", &a.id);
        if !agv_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate AGV id: {}", a.id),
            ));
        }
    }

    let mut process_names = HashSet::new();
    for process in &scenario.processes {
        check_name(&mut errors, "Process name", &process.name);
        if !process_names.insert(process.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", process.name),
            ));
        }

        let mut operation_names = HashSet::new();
        for op in &process.operations {
            check_name(&mut errors, "Operation name", &op.name);
            if !operation_names.insert(op.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!(
                        "Duplicate operation name in process '{}': {}",
                        process.name, op.name
                    ),
                ));
            }

            for r in &op.resources {
                if !resource_names.contains(r.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidResourceReference,
                        format!("Operation '{}' references unknown resource '{}'", op.name, r),
                    ));
                }
            }
            for a in &op.agvs {
                if !agv_ids.contains(a.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidAgvReference,
                        format!("Operation '{}' references unknown AGV '{}'", op.name, a),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_name(errors: &mut Vec<ValidationError>, what: &str, name: &str) {
    if name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            format!("{what} is empty"),
        ));
    }
}
