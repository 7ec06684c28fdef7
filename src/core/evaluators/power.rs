//! Write-cache power protection: CacheVault, BBU and the energy pack.
//!
//! Each unit is resolved by walking an ordered list of strategies; the first
//! strategy whose command text is usable and yields a token wins.

use super::CheckInput;
use crate::core::bundle::{CommandKey, RawOutputBundle};
use crate::core::extract;
use crate::core::report::{Evaluation, Finding, Subsystem};

const GOOD_STATES: &[&str] = &["Optimal", "Good", "OK"];
const STATE_LABELS: &[&str] = &["State", "Status"];

/// How a token is pulled out of one command's text
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    /// First `State`/`Status` pair in the block
    Field(&'static [&'static str]),
    /// `State`/`Status` pair on a line that names the unit
    Anchored {
        anchor: &'static [&'static str],
        labels: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub command: CommandKey,
    pub lookup: Lookup,
}

impl Strategy {
    const fn field(command: CommandKey) -> Self {
        Self {
            command,
            lookup: Lookup::Field(STATE_LABELS),
        }
    }

    const fn anchored(command: CommandKey, anchor: &'static [&'static str]) -> Self {
        Self {
            command,
            lookup: Lookup::Anchored {
                anchor,
                labels: STATE_LABELS,
            },
        }
    }

    fn apply<'a>(&self, bundle: &'a RawOutputBundle) -> Option<&'a str> {
        let text = extract::usable(bundle.get(self.command))?;
        match self.lookup {
            Lookup::Field(labels) => extract::field_where(text, labels, |v| !is_banner(v)),
            Lookup::Anchored { anchor, labels } => extract::field_after(text, anchor, labels),
        }
    }
}

/// storcli opens every reply with `Status = Success|Failure`
fn is_banner(value: &str) -> bool {
    value.eq_ignore_ascii_case("Success") || value.eq_ignore_ascii_case("Failure")
}

/// A protection unit and the order its sources are tried in
#[derive(Debug, Clone, Copy)]
pub struct PowerUnit {
    pub short: &'static str,
    pub name: &'static str,
    pub chain: &'static [Strategy],
}

pub const CACHEVAULT: PowerUnit = PowerUnit {
    short: "CV",
    name: "CacheVault",
    chain: &[
        Strategy::field(CommandKey::CachevaultStatus),
        Strategy::field(CommandKey::CachevaultBasic),
        Strategy::field(CommandKey::CachevaultAll),
        Strategy::anchored(CommandKey::ControllerInfo, &["CacheVault"]),
    ],
};

pub const BATTERY: PowerUnit = PowerUnit {
    short: "BBU",
    name: "BBU",
    chain: &[
        Strategy::field(CommandKey::BatteryStatus),
        Strategy::field(CommandKey::BatteryBasic),
        Strategy::field(CommandKey::BatteryAll),
        Strategy::anchored(CommandKey::ControllerInfo, &["BBU", "Battery"]),
    ],
};

/// First token produced by the unit's chain, with the command it came from
pub fn resolve<'a>(unit: &PowerUnit, bundle: &'a RawOutputBundle) -> Option<(CommandKey, &'a str)> {
    unit.chain
        .iter()
        .find_map(|strategy| strategy.apply(bundle).map(|token| (strategy.command, token)))
}

pub fn check_power_protection(input: &CheckInput<'_>) -> Evaluation {
    let mut eval = Evaluation::new();
    let mut resolved = false;

    for unit in [CACHEVAULT, BATTERY] {
        let Some((source, state)) = resolve(&unit, input.bundle) else {
            continue;
        };
        log::debug!("{} state {:?} from {}", unit.name, state, source.as_str());
        resolved = true;

        if extract::token_is(state, GOOD_STATES) {
            eval.status(Subsystem::Battery, format!("{}:OK", unit.short));
        } else {
            eval.status(Subsystem::Battery, format!("{}:{}", unit.short, state))
                .finding(Finding::warning(format!("{} {}", unit.name, state)));
        }
    }

    if !resolved {
        if let Some(text) = input.text(CommandKey::ControllerAll) {
            check_energy_pack(text, &mut eval);
        }
    }

    eval
}

/// Newer firmware only reports an energy pack inside `controller show all`
fn check_energy_pack(text: &str, eval: &mut Evaluation) {
    let present = extract::field(text, &["Energy Pack"]).unwrap_or("");
    let status = extract::field(text, &["Energy Pack Status"]).unwrap_or("");

    if extract::token_is(present, &["Present", "Yes"]) {
        if status.is_empty() || status == "0" || extract::token_is(status, &["OK", "Optimal", "Good"]) {
            eval.status(Subsystem::Battery, "Cache:OK Battery:OK");
        } else {
            eval.status(
                Subsystem::Battery,
                format!("Cache:EP{} Battery:EP{}", status, status),
            )
            .finding(Finding::warning(format!("Energy Pack status {}", status)));
        }
    } else if extract::token_is(present, &["Absent", "No"]) {
        eval.finding(Finding::warning("Energy Pack Absent"));
    }
}
