use super::CheckInput;
use crate::core::records::PdState;
use crate::core::report::{Evaluation, Finding, Subsystem};

/// Hot-spare capacity, falling back to unconfigured-good drives
pub fn check_hot_spares(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();
    let drives = &input.inventory.physical_drives;
    if drives.is_empty() {
        return eval;
    }

    let spares = drives.iter().filter(|pd| pd.state.is_hot_spare()).count();
    let unconfigured_good = drives
        .iter()
        .filter(|pd| pd.state == PdState::UnconfiguredGood)
        .count();
    eval.spare_count = Some(spares);

    if spares > 0 {
        eval.status(Subsystem::HotSpare, format!("Spares:{}", spares));
    } else if unconfigured_good > 0 {
        eval.status(Subsystem::HotSpare, format!("UGood:{}", unconfigured_good));
    } else {
        eval.status(Subsystem::HotSpare, "Spares:0");
        if drives.len() > input.thresholds.spare_min_drives {
            eval.finding(Finding::warning("No hot spares configured"));
        }
    }

    eval
}
