//! Background operations: rebuild, consistency check and patrol read.
//! These only produce status strings, never findings.

use super::CheckInput;
use crate::core::bundle::CommandKey;
use crate::core::extract;
use crate::core::report::{Evaluation, Subsystem};

/// Rebuild progress, looked at only while some VD is rebuilding
pub fn check_rebuild(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();
    if !input.inventory.any_rebuilding() {
        return eval;
    }

    let progress = input
        .text(CommandKey::Rebuild)
        .and_then(|text| extract::percent_after(text, &["Progress"]));

    match progress {
        Some(pct) => eval.status(Subsystem::Rebuild, format!("Rebuild:{}%", pct)),
        None => eval.status(Subsystem::Rebuild, "Rebuild:InProgress"),
    };

    eval
}

fn running_line(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.to_lowercase();
        line.contains("in progress") && !line.contains("not in progress")
    })
}

pub fn check_consistency(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();
    let Some(text) = input.text(CommandKey::ConsistencyCheck) else {
        return eval;
    };

    if let Some(pct) = extract::any_percent(text) {
        eval.status(Subsystem::ConsistencyCheck, format!("CC:{}%", pct));
    } else if running_line(text) {
        eval.status(Subsystem::ConsistencyCheck, "CC:Running");
    }

    eval
}

pub fn check_patrol_read(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();
    let Some(text) = input.text(CommandKey::PatrolRead) else {
        return eval;
    };
    let Some(state) = extract::field(text, &["State"]) else {
        return eval;
    };

    if extract::token_is(state, &["Active", "Running"]) {
        match extract::percent_after(text, &["Progress"]) {
            Some(pct) => eval.status(Subsystem::PatrolRead, format!("PR:{}%", pct)),
            None => eval.status(Subsystem::PatrolRead, "PR:Running"),
        };
    } else if extract::token_is(state, &["Stopped", "Paused"]) {
        eval.status(Subsystem::PatrolRead, "PR:Stopped");
    }

    eval
}
