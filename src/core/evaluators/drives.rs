//! Per-drive checks driven by the `show all` detail sections.

use super::CheckInput;
use crate::core::records::{DriveMetrics, PhysicalDriveRecord};
use crate::core::report::{Evaluation, Finding};

fn with_metrics<'a>(
    input: &CheckInput<'a>,
) -> impl Iterator<Item = (&'a PhysicalDriveRecord, &'a DriveMetrics)> {
    input
        .inventory
        .physical_drives
        .iter()
        .filter_map(|pd| pd.metrics.as_ref().map(|m| (pd, m)))
}

/// Drives that flag an upcoming failure
pub fn check_predictive_failure(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();

    let flagged: Vec<&str> = with_metrics(input)
        .filter(|(_, metrics)| metrics.predictive_failure)
        .map(|(pd, _)| pd.id.as_str())
        .collect();

    if !flagged.is_empty() {
        eval.finding(Finding::warning(format!(
            "Predictive failure on: {}",
            flagged.join(", ")
        )));
    }

    eval
}

/// Media, other, shield and BBM error counters
pub fn check_error_counters(input: &CheckInput<'_>) -> Evaluation {
    let t = input.thresholds;
    let mut eval = Evaluation::new();

    for (pd, metrics) in with_metrics(input) {
        if let Some(count) = metrics.media_errors.filter(|&c| c > 0) {
            eval.media_errors = eval.media_errors.saturating_add(count);
            let text = format!("Drive {}: {} media errors", pd.id, count);
            if count >= t.media_error_crit {
                eval.finding(Finding::critical(text).on_drive(&pd.id));
            } else if count >= t.media_error_warn {
                eval.finding(Finding::warning(text).on_drive(&pd.id));
            }
        }

        if let Some(count) = metrics.other_errors.filter(|&c| c > 0) {
            eval.other_errors = eval.other_errors.saturating_add(count);
            if count >= t.other_error_warn {
                eval.finding(
                    Finding::warning(format!("Drive {}: {} other errors", pd.id, count))
                        .on_drive(&pd.id),
                );
            }
        }

        if let Some(count) = metrics.shield_counter.filter(|&c| c > 0) {
            eval.shield_errors = eval.shield_errors.saturating_add(count);
            if count >= t.shield_warn {
                eval.finding(
                    Finding::warning(format!("Drive {}: {} shield errors", pd.id, count))
                        .on_drive(&pd.id),
                );
            }
        }

        if let Some(count) = metrics.bbm_errors.filter(|&c| c > 0) {
            eval.bbm_errors = eval.bbm_errors.saturating_add(count);
            if count >= t.bbm_warn {
                eval.finding(
                    Finding::warning(format!("Drive {}: {} BBM errors", pd.id, count))
                        .on_drive(&pd.id),
                );
            }
        }
    }

    eval
}

/// Remaining life on solid-state drives
pub fn check_ssd_wear(input: &CheckInput<'_>) -> Evaluation {
    let t = input.thresholds;
    let mut eval = Evaluation::new();

    for (pd, metrics) in with_metrics(input).filter(|(pd, _)| pd.is_ssd()) {
        let Some(remaining) = metrics.wear_remaining else {
            continue;
        };

        if remaining <= t.ssd_wear_crit {
            eval.finding(
                Finding::critical(format!("SSD {} wear critical ({}% left)", pd.id, remaining))
                    .on_drive(&pd.id),
            );
        } else if remaining <= t.ssd_wear_warn {
            eval.finding(
                Finding::warning(format!("SSD {} wear warning ({}% left)", pd.id, remaining))
                    .on_drive(&pd.id),
            );
        }
    }

    eval
}

/// Readings of 0 and of 100 or more are sensor sentinels
fn is_plausible(celsius: u32) -> bool {
    celsius > 0 && celsius < 100
}

/// Drive temperatures from every detail section, summary listing or not
pub fn check_temperature(input: &CheckInput<'_>) -> Evaluation {
    let t = input.thresholds;
    let mut eval = Evaluation::new();

    for (id, metrics) in &input.inventory.details {
        let Some(hottest) = metrics
            .temperatures
            .iter()
            .copied()
            .filter(|&c| is_plausible(c))
            .max()
        else {
            continue;
        };
        eval.temperature(hottest);

        if hottest >= t.temp_crit {
            eval.finding(
                Finding::critical(format!("Drive {} overheating ({}C)", id, hottest)).on_drive(id),
            );
        } else if hottest >= t.temp_warn {
            eval.finding(
                Finding::warning(format!("Drive {} temperature high ({}C)", id, hottest))
                    .on_drive(id),
            );
        }
    }

    eval
}
