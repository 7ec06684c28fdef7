use super::CheckInput;
use crate::core::bundle::CommandKey;
use crate::core::extract;
use crate::core::report::{Evaluation, Finding, Subsystem};

const GOOD_STATES: &[&str] = &["Optimal", "OK", "Good"];

/// Controller status token from `/cN show`
pub fn check_controller(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();

    let Some(state) = input
        .text(CommandKey::ControllerSummary)
        .and_then(|text| extract::field(text, &["Controller Status"]))
    else {
        return eval;
    };

    if extract::token_is(state, GOOD_STATES) {
        eval.status(Subsystem::Controller, "Controller:OK");
    } else {
        eval.status(Subsystem::Controller, format!("Controller:{}", state))
            .finding(Finding::warning(format!("Controller status: {}", state)));
    }

    eval
}
