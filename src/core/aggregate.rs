//! Turns a folded report into one verdict line.
//!
//! Rules are tried in a fixed order and the first one that applies picks
//! severity and summary. Host suffix, perfdata and long output are layered
//! on afterwards and never change the severity.

use super::config::{CheckConfig, OutputOptions};
use super::records::{DriveInventory, StateClass, VirtualDriveRecord};
use super::report::{Finding, HealthReport};

pub const SOURCE_LABEL: &str = "MegaRAID";

/// Monitoring plugin exit states
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ExitState {
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Final outcome of one check pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub state: ExitState,
    pub message: String,
}

impl Verdict {
    pub fn unknown<S: AsRef<str>>(reason: S) -> Self {
        Self {
            state: ExitState::Unknown,
            message: format!("RAID UNKNOWN - {}", reason.as_ref()),
        }
    }

    pub fn maintenance() -> Self {
        Self {
            state: ExitState::Ok,
            message: "RAID OK - Check skipped (maintenance mode)".to_string(),
        }
    }
}

fn headline(state: ExitState, summary: &str) -> String {
    if summary.is_empty() {
        format!("RAID {} ({})", state.label(), SOURCE_LABEL)
    } else {
        format!("RAID {} ({}) - {}", state.label(), SOURCE_LABEL, summary)
    }
}

fn optimal_list(vds: &[&VirtualDriveRecord]) -> String {
    vds.iter()
        .map(|vd| format!("VD{}:Optimal", vd.index))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pick severity and summary line by rule priority
fn classify(
    report: &HealthReport,
    inventory: &DriveInventory,
    config: &CheckConfig,
) -> (ExitState, String) {
    let terse = config.output.terse;
    let vds: Vec<&VirtualDriveRecord> = inventory
        .virtual_drives
        .iter()
        .filter(|vd| config.vd_filter.as_ref().map_or(true, |n| vd.index == *n))
        .collect();

    if let Some(n) = &config.vd_filter {
        if vds.is_empty() {
            return (
                ExitState::Critical,
                format!("Virtual Drive {} not found", n),
            );
        }
    }

    if let Some(vd) = vds.iter().find(|vd| !vd.state.is_optimal()) {
        let readable = vd.state.display_name();
        let state = match vd.state.class() {
            StateClass::Warn => ExitState::Warning,
            _ => ExitState::Critical,
        };
        let rebuild = match (&report.rebuild_status, state) {
            (Some(rebuild), ExitState::Warning) => format!(" [{}]", rebuild),
            _ => String::new(),
        };
        let summary = if terse {
            format!("VD{} {}{}", vd.index, readable, rebuild)
        } else {
            format!("VD{} ({}) Status: {}{}", vd.index, vd.name, readable, rebuild)
        };
        return (state, summary);
    }

    for (state, findings) in [
        (ExitState::Critical, &report.criticals),
        (ExitState::Warning, &report.warnings),
    ] {
        if findings.is_empty() {
            continue;
        }
        let joined = join_findings(findings);
        let summary = if terse {
            joined
        } else {
            format!("VDs Optimal but: {} ({})", joined, optimal_list(&vds))
        };
        return (state, summary);
    }

    let summary = match (&config.vd_filter, terse) {
        (Some(n), true) => format!("VD{} Optimal", n),
        (None, true) => String::new(),
        (Some(n), false) => format!("VD{} Status: Optimal{}", n, extras(report)),
        (None, false) => {
            let list = optimal_list(&vds);
            let list = if list.is_empty() {
                String::new()
            } else {
                format!(" ({})", list)
            };
            format!(
                "All {} Virtual Drives Optimal{}{}",
                report.vd.total,
                list,
                extras(report)
            )
        }
    };
    (ExitState::Ok, summary)
}

/// Subsystem strings appended to a verbose OK summary
fn extras(report: &HealthReport) -> String {
    let mut parts: Vec<String> = [
        &report.battery_status,
        &report.controller_status,
        &report.hotspare_status,
        &report.cc_status,
        &report.patrol_status,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();

    if report.max_temp > 0 {
        parts.push(format!("Temp:{}C", report.max_temp));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

/// Nagios-style performance data, without the leading `|`
pub fn perfdata(report: &HealthReport) -> String {
    format!(
        "vd_total={} vd_ok={} vd_warn={} vd_crit={} pd_total={} pd_ok={} pd_warn={} pd_crit={} \
         spares={} max_temp={} media_errors={} other_errors={}",
        report.vd.total,
        report.vd.ok,
        report.vd.warn,
        report.vd.crit,
        report.pd.total,
        report.pd.ok,
        report.pd.warn,
        report.pd.crit,
        report.spare_count,
        report.max_temp,
        report.media_errors,
        report.other_errors
    )
}

/// Multi-line detail block
pub fn long_output(report: &HealthReport, inventory: &DriveInventory) -> Vec<String> {
    let mut lines = vec!["--- Virtual Drives ---".to_string()];
    lines.extend(inventory.virtual_drives.iter().map(|vd| {
        format!(
            "VD{}: {} {} ({})",
            vd.id(),
            vd.raid_type,
            vd.state.display_name(),
            vd.name
        )
    }));
    lines.push(String::new());
    lines.push("--- Status ---".to_string());

    let labelled = [
        ("Controller", &report.controller_status),
        ("Battery", &report.battery_status),
        ("Hot Spares", &report.hotspare_status),
        ("Patrol Read", &report.patrol_status),
        ("Consistency Check", &report.cc_status),
        ("Rebuild", &report.rebuild_status),
    ];
    for (label, status) in labelled {
        if let Some(status) = status {
            lines.push(format!("{}: {}", label, status));
        }
    }

    if report.max_temp > 0 {
        lines.push(format!("Max Temperature: {}C", report.max_temp));
    }
    if report.media_errors > 0 {
        lines.push(format!("Total Media Errors: {}", report.media_errors));
    }
    if report.other_errors > 0 {
        lines.push(format!("Total Other Errors: {}", report.other_errors));
    }

    lines
}

fn decorate(
    mut message: String,
    report: &HealthReport,
    inventory: &DriveInventory,
    output: &OutputOptions,
    host: &str,
) -> String {
    if output.show_host && !host.is_empty() {
        message.push_str(" - ");
        message.push_str(host);
    }
    if output.perfdata {
        message.push_str(" | ");
        message.push_str(&perfdata(report));
    }
    if output.long_output {
        message.push('\n');
        message.push_str(&long_output(report, inventory).join("\n"));
    }
    message
}

/// Combine findings, drive states and metrics into the final verdict
pub fn aggregate(report: &HealthReport, inventory: &DriveInventory, config: &CheckConfig) -> Verdict {
    let (state, summary) = classify(report, inventory, config);
    let message = decorate(
        headline(state, &summary),
        report,
        inventory,
        &config.output,
        &config.host,
    );
    Verdict { state, message }
}
