//! Resource model.
//!
//! A resource is a consumable an operation draws on: energy, labour hours,
//! packaging material. It carries a quantity and a per-unit cost and never
//! changes after construction, so the same resource may be attached to any
//! number of operations.

use serde::Serialize;
use std::fmt;

use super::{format_amount, format_money, Costed};
use crate::error::{ensure_non_negative, ModelError};

/// A consumable with a quantity and a per-unit cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    name: String,
    quantity: f64,
    cost_per_unit: f64,
}

impl Resource {
    /// Creates a new resource.
    ///
    /// # Errors
    /// [`ModelError::InvalidInput`] if `quantity` or `cost_per_unit` is
    /// negative or not finite.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        cost_per_unit: f64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let quantity = ensure_non_negative(&name, "quantity", quantity)?;
        let cost_per_unit = ensure_non_negative(&name, "cost_per_unit", cost_per_unit)?;
        Ok(Self {
            name,
            quantity,
            cost_per_unit,
        })
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumed quantity.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Cost of a single unit.
    pub fn cost_per_unit(&self) -> f64 {
        self.cost_per_unit
    }

    /// Total cost: `quantity × cost_per_unit`.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }
}

impl Costed for Resource {
    fn cost(&self) -> f64 {
        Resource::cost(self)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} × {}) = {}",
            self.name,
            format_amount(self.quantity),
            format_amount(self.cost_per_unit),
            format_money(self.cost())
        )
    }
}
