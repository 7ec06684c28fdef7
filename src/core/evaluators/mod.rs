//! Health checks over one bundle.
//!
//! Each check is a pure function from [`CheckInput`] to [`Evaluation`]. A
//! check whose source text is missing, blank or rejected by the firmware
//! returns an empty evaluation. Checks run in a fixed order and their
//! outputs are folded into a [`HealthReport`].

mod background;
mod controller;
mod drives;
mod foreign;
mod power;
mod spares;

pub use background::{check_consistency, check_patrol_read, check_rebuild};
pub use controller::check_controller;
pub use drives::{check_error_counters, check_predictive_failure, check_ssd_wear, check_temperature};
pub use foreign::check_foreign_config;
pub use power::check_power_protection;
pub use spares::check_hot_spares;

use super::bundle::{CommandKey, RawOutputBundle};
use super::config::Thresholds;
use super::extract;
use super::records::DriveInventory;
use super::report::{Evaluation, HealthReport};

/// Read-only view every check works from
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    pub bundle: &'a RawOutputBundle,
    pub inventory: &'a DriveInventory,
    pub thresholds: &'a Thresholds,
}

impl<'a> CheckInput<'a> {
    /// Text for `key` if it is present and not a rejection
    pub fn text(&self, key: CommandKey) -> Option<&'a str> {
        extract::usable(self.bundle.get(key))
    }
}

pub type Check = fn(&CheckInput<'_>) -> Evaluation;

/// All checks, in evaluation order
pub const CHECKS: &[(&str, Check)] = &[
    ("controller", check_controller),
    ("power_protection", check_power_protection),
    ("foreign_config", check_foreign_config),
    ("predictive_failure", check_predictive_failure),
    ("error_counters", check_error_counters),
    ("rebuild", check_rebuild),
    ("consistency_check", check_consistency),
    ("ssd_wear", check_ssd_wear),
    ("temperature", check_temperature),
    ("patrol_read", check_patrol_read),
    ("hot_spares", check_hot_spares),
];

/// Run every check and collect their outputs in order
pub fn run_checks(input: &CheckInput<'_>) -> Vec<Evaluation> {
    CHECKS
        .iter()
        .map(|(name, check)| {
            let eval = check(input);
            log::debug!(
                "check {}: {} findings, statuses {:?}",
                name,
                eval.findings.len(),
                eval.statuses
            );
            eval
        })
        .collect()
}

/// Build records, run every check and fold the result
pub fn evaluate_health(
    bundle: &RawOutputBundle,
    inventory: &DriveInventory,
    thresholds: &Thresholds,
) -> HealthReport {
    let input = CheckInput {
        bundle,
        inventory,
        thresholds,
    };
    HealthReport::fold(inventory, run_checks(&input))
}
