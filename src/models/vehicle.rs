//! Vehicle and AGV models.
//!
//! A [`Vehicle`] performs named tasks and has no cost of its own. An [`Agv`]
//! (automated guided vehicle) is a vehicle that also bills by the hour.
//!
//! Both implement [`TaskPerformer`]; an AGV performs tasks exactly as the
//! vehicle it wraps, whether called directly or through `&dyn TaskPerformer`.

use serde::Serialize;
use std::fmt;

use super::{format_money, Costed, TaskPerformer};
use crate::error::{ensure_non_negative, ModelError};

/// A vehicle identified by id and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    id: String,
    #[serde(rename = "type")]
    vehicle_type: String,
}

impl Vehicle {
    /// Creates a new vehicle.
    pub fn new(id: impl Into<String>, vehicle_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vehicle_type: vehicle_type.into(),
        }
    }

    /// Vehicle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle type (e.g., "Loader AGV").
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }
}

impl TaskPerformer for Vehicle {
    fn perform_task(&self, task: &str) -> String {
        format!("{} (ID: {}) performing: {}", self.vehicle_type, self.id, task)
    }
}

/// An automated guided vehicle with an hourly operating cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agv {
    #[serde(flatten)]
    vehicle: Vehicle,
    hourly_cost: f64,
    hours_used: f64,
}

impl Agv {
    /// Creates a new AGV.
    ///
    /// # Errors
    /// [`ModelError::InvalidInput`] if `hourly_cost` or `hours_used` is
    /// negative or not finite.
    pub fn new(
        id: impl Into<String>,
        vehicle_type: impl Into<String>,
        hourly_cost: f64,
        hours_used: f64,
    ) -> Result<Self, ModelError> {
        let vehicle = Vehicle::new(id, vehicle_type);
        let hourly_cost = ensure_non_negative(vehicle.id(), "hourly_cost", hourly_cost)?;
        let hours_used = ensure_non_negative(vehicle.id(), "hours_used", hours_used)?;
        Ok(Self {
            vehicle,
            hourly_cost,
            hours_used,
        })
    }

    /// The underlying vehicle.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Vehicle identifier.
    pub fn id(&self) -> &str {
        self.vehicle.id()
    }

    /// Vehicle type.
    pub fn vehicle_type(&self) -> &str {
        self.vehicle.vehicle_type()
    }

    /// Operating cost per hour.
    pub fn hourly_cost(&self) -> f64 {
        self.hourly_cost
    }

    /// Hours of operation billed.
    pub fn hours_used(&self) -> f64 {
        self.hours_used
    }

    /// Operating cost: `hourly_cost × hours_used`.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.hourly_cost * self.hours_used
    }
}

impl Costed for Agv {
    fn cost(&self) -> f64 {
        Agv::cost(self)
    }
}

impl TaskPerformer for Agv {
    fn perform_task(&self, task: &str) -> String {
        self.vehicle.perform_task(task)
    }
}

impl fmt::Display for Agv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}) cost = {}",
            self.vehicle_type(),
            self.id(),
            format_money(self.cost())
        )
    }
}
