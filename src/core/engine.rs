//! Single entry point: bundle + config in, verdict out.

use std::panic::{self, AssertUnwindSafe};

use super::aggregate::{aggregate, Verdict};
use super::bundle::RawOutputBundle;
use super::config::CheckConfig;
use super::evaluators::evaluate_health;
use super::records::DriveInventory;

/// Evaluate one snapshot. Pure: the same bundle and config always give the
/// same verdict.
pub fn evaluate(bundle: &RawOutputBundle, config: &CheckConfig) -> Verdict {
    let inventory = DriveInventory::build(bundle);
    let report = evaluate_health(bundle, &inventory, &config.thresholds);
    log::debug!(
        "{} warnings, {} criticals, max temp {}",
        report.warnings.len(),
        report.criticals.len(),
        report.max_temp
    );
    aggregate(&report, &inventory, config)
}

/// Like [`evaluate`], but a panic inside the engine becomes an UNKNOWN verdict
pub fn evaluate_guarded(bundle: &RawOutputBundle, config: &CheckConfig) -> Verdict {
    guard(|| evaluate(bundle, config))
}

/// Run `pass`, turning a panic into `RAID UNKNOWN - Error: <payload>`
pub fn guard<F>(pass: F) -> Verdict
where
    F: FnOnce() -> Verdict,
{
    match panic::catch_unwind(AssertUnwindSafe(pass)) {
        Ok(verdict) => verdict,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "internal fault".to_string());
            log::error!("Evaluation panicked: {}", reason);
            Verdict::unknown(format!("Error: {}", reason))
        }
    }
}
