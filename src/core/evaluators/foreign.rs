use super::CheckInput;
use crate::core::bundle::CommandKey;
use crate::core::extract;
use crate::core::report::{Evaluation, Finding};

/// Foreign configuration rows in `/cN/fall show`
pub fn check_foreign_config(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();

    let Some(text) = input.text(CommandKey::ForeignConfig) else {
        return eval;
    };

    if extract::mentions(text, &["foreign configuration"]) || extract::has_word(text, "DG") {
        let count = extract::numbered_rows(text);
        if count > 0 {
            eval.finding(Finding::warning(format!(
                "Foreign config detected ({})",
                count
            )));
        }
    }

    eval
}
