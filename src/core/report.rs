//! Findings and the folded health report.
//!
//! Evaluators never touch shared state: each returns an [`Evaluation`] and
//! [`HealthReport::fold`] merges them once, in order.

use super::records::{DriveCounts, DriveInventory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Critical,
}

/// A single threshold breach or bad state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub description: String,
    pub drive: Option<String>,
}

impl Finding {
    pub fn warning<S: Into<String>>(description: S) -> Self {
        Self {
            severity: Severity::Warning,
            description: description.into(),
            drive: None,
        }
    }

    pub fn critical<S: Into<String>>(description: S) -> Self {
        Self {
            severity: Severity::Critical,
            description: description.into(),
            drive: None,
        }
    }

    pub fn on_drive<S: Into<String>>(mut self, drive: S) -> Self {
        self.drive = Some(drive.into());
        self
    }
}

/// Subsystems that carry a short status string into the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Controller,
    Battery,
    HotSpare,
    Rebuild,
    ConsistencyCheck,
    PatrolRead,
}

/// Output of one evaluator: findings plus metric deltas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    pub statuses: Vec<(Subsystem, String)>,
    pub max_temp: Option<u32>,
    pub media_errors: u64,
    pub other_errors: u64,
    pub shield_errors: u64,
    pub bbm_errors: u64,
    pub spare_count: Option<usize>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finding(&mut self, finding: Finding) -> &mut Self {
        self.findings.push(finding);
        self
    }

    pub fn status<S: Into<String>>(&mut self, subsystem: Subsystem, status: S) -> &mut Self {
        self.statuses.push((subsystem, status.into()));
        self
    }

    pub fn temperature(&mut self, celsius: u32) -> &mut Self {
        self.max_temp = Some(self.max_temp.map_or(celsius, |t| t.max(celsius)));
        self
    }
}

/// Everything the aggregator needs, frozen after the fold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub vd: DriveCounts,
    pub pd: DriveCounts,
    pub spare_count: usize,
    pub max_temp: u32,
    pub media_errors: u64,
    pub other_errors: u64,
    pub shield_errors: u64,
    pub bbm_errors: u64,
    pub controller_status: Option<String>,
    pub battery_status: Option<String>,
    pub hotspare_status: Option<String>,
    pub rebuild_status: Option<String>,
    pub cc_status: Option<String>,
    pub patrol_status: Option<String>,
    pub warnings: Vec<Finding>,
    pub criticals: Vec<Finding>,
}

impl HealthReport {
    /// Merge evaluator outputs, in order, into one report
    pub fn fold<I>(inventory: &DriveInventory, evaluations: I) -> Self
    where
        I: IntoIterator<Item = Evaluation>,
    {
        let base = Self {
            vd: inventory.vd_counts(),
            pd: inventory.pd_counts(),
            ..Default::default()
        };

        evaluations.into_iter().fold(base, |mut report, eval| {
            report.max_temp = report.max_temp.max(eval.max_temp.unwrap_or(0));
            report.media_errors = report.media_errors.saturating_add(eval.media_errors);
            report.other_errors = report.other_errors.saturating_add(eval.other_errors);
            report.shield_errors = report.shield_errors.saturating_add(eval.shield_errors);
            report.bbm_errors = report.bbm_errors.saturating_add(eval.bbm_errors);
            if let Some(spares) = eval.spare_count {
                report.spare_count = spares;
            }

            for (subsystem, status) in eval.statuses {
                let slot = report.status_slot(subsystem);
                *slot = Some(match slot.take() {
                    Some(existing) => format!("{} {}", existing, status),
                    None => status,
                });
            }

            for finding in eval.findings {
                match finding.severity {
                    Severity::Warning => report.warnings.push(finding),
                    Severity::Critical => report.criticals.push(finding),
                }
            }

            report
        })
    }

    fn status_slot(&mut self, subsystem: Subsystem) -> &mut Option<String> {
        match subsystem {
            Subsystem::Controller => &mut self.controller_status,
            Subsystem::Battery => &mut self.battery_status,
            Subsystem::HotSpare => &mut self.hotspare_status,
            Subsystem::Rebuild => &mut self.rebuild_status,
            Subsystem::ConsistencyCheck => &mut self.cc_status,
            Subsystem::PatrolRead => &mut self.patrol_status,
        }
    }
}
