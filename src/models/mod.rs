//! Warehouse domain models.
//!
//! The composition tree, leaves first:
//!
//! | Type | Owns | Cost |
//! |------|------|------|
//! | `Resource` | - | quantity × cost per unit |
//! | `Agv` | a `Vehicle` | hourly cost × hours used |
//! | `Operation` | resources, AGVs | sum of attached costs |
//! | `IndustrialProcess` | operations | sum of operation costs |
//! | `Warehouse` | processes | sum of process costs |
//!
//! Every cost query is pure. Narrating a run is the job of
//! [`crate::report`].

mod operation;
mod process;
mod resource;
mod vehicle;
mod warehouse;

pub use operation::{Operation, OperationKind};
pub use process::IndustrialProcess;
pub use resource::Resource;
pub use vehicle::{Agv, Vehicle};
pub use warehouse::Warehouse;

/// Anything with a derived monetary cost.
///
/// Every level of the tree implements it; parents total their children
/// through [`sum_costs`].
pub trait Costed {
    /// Cost in currency units.
    fn cost(&self) -> f64;
}

/// Sums the costs of `items`, starting from `+0.0`.
///
/// An empty list totals `0.0`, never `-0.0`.
pub fn sum_costs<'a, T, I>(items: I) -> f64
where
    T: Costed + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().fold(0.0, |acc, item| acc + item.cost())
}

/// Anything that can be asked to perform a named task.
pub trait TaskPerformer {
    /// Performs `task` and returns a description of what was done.
    fn perform_task(&self, task: &str) -> String;
}

/// Formats an amount as dollars with two decimals (e.g., `$50.00`).
pub fn format_money(amount: f64) -> String {
    // Adding +0.0 turns -0.0 into 0.0.
    format!("${:.2}", amount + 0.0)
}

/// Formats a raw amount in plain decimal notation, always keeping a
/// fractional part (`100.0`, `0.5`, `0.0000001`).
pub(crate) fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(800.0), "$800.00");
        assert_eq!(format_money(0.5), "$0.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(-0.0), "$0.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(15.0), "15.0");
        assert_eq!(format_amount(1e17), "100000000000000000.0");
        assert_eq!(format_amount(1e-7), "0.0000001");
        assert_eq!(format_amount(2.5e-3), "0.0025");
    }

    #[test]
    fn test_total_cost_of_nothing_is_positive_zero() {
        let none: Vec<Resource> = Vec::new();
        let total = sum_costs(&none);
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn test_costed_trait_objects() {
        let items: Vec<Box<dyn Costed>> = vec![
            Box::new(Resource::new("Electricity", 100.0, 0.5).unwrap()),
            Box::new(Agv::new("A01", "Loader AGV", 12.0, 10.0).unwrap()),
        ];
        let total = sum_costs(items.iter().map(|c| &**c));
        assert!((total - 170.0).abs() < 1e-10);
    }
}
