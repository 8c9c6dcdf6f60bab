//! Error types.
//!
//! Model construction fails with [`ModelError`]; loading a scenario document
//! fails with [`ScenarioError`], which wraps every lower-level cause.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while constructing model entities.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// A numeric input is negative or not finite.
    #[error("Invalid {field} for '{entity}': {value}")]
    InvalidInput {
        /// Name or id of the entity being constructed.
        entity: String,
        /// Offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Errors raised while loading a scenario document.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("Failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario is not valid JSON or does not match the document shape.
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// The scenario parsed but failed structural checks.
    #[error("Invalid scenario: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// An entity in the scenario was rejected at construction.
    #[error(transparent)]
    Model(#[from] ModelError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks that a numeric field is finite and non-negative.
pub(crate) fn ensure_non_negative(
    entity: &str,
    field: &'static str,
    value: f64,
) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidInput {
            entity: entity.to_string(),
            field,
            value,
        })
    }
}
