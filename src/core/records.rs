//! Typed drive records built from storcli summaries.

use once_cell::sync::Lazy;
use regex::Regex;

use super::bundle::{CommandKey, RawOutputBundle};
use super::extract;

static VD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(\d+)/(\d+)[ \t]+(RAID\S*)[ \t]+(\S+)([^\n]*)$")
        .expect("vd line pattern is valid")
});

static PD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(\d+):(\d+)[ \t]+\d+[ \t]+(\S+)([^\n]*)$")
        .expect("pd line pattern is valid")
});

static SSD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bSSD\b").expect("ssd pattern is valid"));

/// Severity bucket a drive state falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    Ok,
    Warn,
    Crit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VdState {
    Optimal,
    Degraded,
    Rebuilding,
    Offline,
    PartiallyDegraded,
    Recovering,
    Failed,
    Missing,
    UnconfiguredBad,
    /// Unrecognised token, kept verbatim
    Other(String),
}

impl VdState {
    pub fn parse(token: &str) -> Self {
        match token {
            "Optl" => Self::Optimal,
            "Dgrd" => Self::Degraded,
            "Rbld" => Self::Rebuilding,
            "Offln" | "OfLn" => Self::Offline,
            "Pdgd" => Self::PartiallyDegraded,
            "Rec" => Self::Recovering,
            "Failed" => Self::Failed,
            "Msng" => Self::Missing,
            "UBad" => Self::UnconfiguredBad,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn class(&self) -> StateClass {
        match self {
            Self::Optimal => StateClass::Ok,
            Self::Rebuilding | Self::PartiallyDegraded => StateClass::Warn,
            _ => StateClass::Crit,
        }
    }

    pub fn is_optimal(&self) -> bool {
        *self == Self::Optimal
    }

    /// Human-readable name used in messages
    pub fn display_name(&self) -> &str {
        match self {
            Self::Optimal => "Optimal",
            Self::Degraded => "Degraded",
            Self::Rebuilding => "Rebuilding",
            Self::Offline => "Offline",
            Self::PartiallyDegraded => "Partially Degraded",
            Self::Recovering => "Recovering",
            Self::Failed => "Failed",
            Self::Missing => "Missing",
            Self::UnconfiguredBad => "Unconfigured Bad",
            Self::Other(token) => token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdState {
    Online,
    Rebuilding,
    Offline,
    Failed,
    UnconfiguredBad,
    Missing,
    DedicatedHotSpare,
    GlobalHotSpare,
    UnconfiguredGood,
    Jbod,
    Other(String),
}

impl PdState {
    pub fn parse(token: &str) -> Self {
        match token {
            "Onln" => Self::Online,
            "Rbld" => Self::Rebuilding,
            "Offln" | "OfLn" => Self::Offline,
            "Failed" => Self::Failed,
            "UBad" => Self::UnconfiguredBad,
            "Msng" => Self::Missing,
            "DHS" => Self::DedicatedHotSpare,
            "GHS" => Self::GlobalHotSpare,
            "UGood" => Self::UnconfiguredGood,
            "JBOD" => Self::Jbod,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn class(&self) -> StateClass {
        match self {
            Self::Online
            | Self::DedicatedHotSpare
            | Self::GlobalHotSpare
            | Self::UnconfiguredGood
            | Self::Jbod => StateClass::Ok,
            Self::Offline | Self::Failed | Self::UnconfiguredBad | Self::Missing => {
                StateClass::Crit
            }
            Self::Rebuilding | Self::Other(_) => StateClass::Warn,
        }
    }

    pub fn is_hot_spare(&self) -> bool {
        matches!(self, Self::DedicatedHotSpare | Self::GlobalHotSpare)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Rotational,
    SolidState,
}

/// One line of the `/cN/vall show` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDriveRecord {
    /// Leading component of `0/1`
    pub group: String,
    /// Trailing component of `0/1`, the number users filter on
    pub index: String,
    pub raid_type: String,
    pub state: VdState,
    pub name: String,
}

impl VirtualDriveRecord {
    pub fn id(&self) -> String {
        format!("{}/{}", self.group, self.index)
    }
}

/// Counters and flags read from one drive's detail section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveMetrics {
    pub temperatures: Vec<u32>,
    pub wear_remaining: Option<u32>,
    pub media_errors: Option<u64>,
    pub other_errors: Option<u64>,
    pub shield_counter: Option<u64>,
    pub bbm_errors: Option<u64>,
    pub predictive_failure: bool,
}

impl DriveMetrics {
    pub fn from_section(section: &str) -> Self {
        let predictive_failure = extract::field(section, &["Predictive Failure"])
            .map(|v| extract::token_is(v, &["Yes"]))
            .unwrap_or(false)
            || extract::field(section, &["S.M.A.R.T alert flagged by drive"])
                .map(|v| extract::token_is(v, &["Yes"]))
                .unwrap_or(false)
            || extract::number_after(section, &["Predictive Failure Count"])
                .map(|n| n > 0)
                .unwrap_or(false);

        Self {
            temperatures: extract::numbers_after(section, &["Temperature"])
                .into_iter()
                .filter_map(|t| u32::try_from(t).ok())
                .collect(),
            wear_remaining: extract::number_after(section, &["Life Left", "Wearout", "Wear"])
                .and_then(|w| u32::try_from(w).ok()),
            media_errors: extract::number_after(section, &["Media Error"]),
            other_errors: extract::number_after(section, &["Other Error"]),
            shield_counter: extract::number_after(section, &["Shield Counter"]),
            bbm_errors: extract::number_after(section, &["BBM Error"]),
            predictive_failure,
        }
    }
}

/// One line of the `/cN/eall/sall show` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDriveRecord {
    /// `enclosure:slot`
    pub id: String,
    pub state: PdState,
    pub media: MediaType,
    /// Present when the detail output had a section for this drive
    pub metrics: Option<DriveMetrics>,
}

impl PhysicalDriveRecord {
    pub fn is_ssd(&self) -> bool {
        self.media == MediaType::SolidState
    }
}

/// Parse VD lines such as `0/1   RAID5 Rbld  RW No RWBD - ON 3.271 TB data`
pub fn parse_virtual_drives(text: &str) -> Vec<VirtualDriveRecord> {
    VD_LINE
        .captures_iter(text)
        .map(|caps| {
            let rest = caps.get(5).map(|m| m.as_str()).unwrap_or("");
            VirtualDriveRecord {
                group: caps[1].to_string(),
                index: caps[2].to_string(),
                raid_type: caps[3].to_string(),
                state: VdState::parse(&caps[4]),
                name: rest.split_whitespace().last().unwrap_or("").to_string(),
            }
        })
        .collect()
}

/// Parse PD lines such as `252:0  7 Onln 0 558.406 GB SAS HDD N N 512B ...`
pub fn parse_physical_drives(text: &str) -> Vec<PhysicalDriveRecord> {
    PD_LINE
        .captures_iter(text)
        .map(|caps| {
            let line = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            PhysicalDriveRecord {
                id: format!("{}:{}", &caps[1], &caps[2]),
                state: PdState::parse(&caps[3]),
                media: if SSD_TOKEN.is_match(line) {
                    MediaType::SolidState
                } else {
                    MediaType::Rotational
                },
                metrics: None,
            }
        })
        .collect()
}

/// Metrics for every drive that has a section in the detail output
pub fn parse_drive_details(text: &str) -> Vec<(String, DriveMetrics)> {
    extract::drive_sections(text)
        .into_iter()
        .map(|section| (section.id, DriveMetrics::from_section(section.text)))
        .collect()
}

/// Drive totals by class. Always derived from records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveCounts {
    pub total: usize,
    pub ok: usize,
    pub warn: usize,
    pub crit: usize,
}

impl DriveCounts {
    fn from_classes<I: IntoIterator<Item = StateClass>>(classes: I) -> Self {
        classes.into_iter().fold(Self::default(), |mut counts, class| {
            counts.total += 1;
            match class {
                StateClass::Ok => counts.ok += 1,
                StateClass::Warn => counts.warn += 1,
                StateClass::Crit => counts.crit += 1,
            }
            counts
        })
    }
}

/// All typed records for one check pass
#[derive(Debug, Clone, Default)]
pub struct DriveInventory {
    pub virtual_drives: Vec<VirtualDriveRecord>,
    pub physical_drives: Vec<PhysicalDriveRecord>,
    /// Detail sections by drive id, including drives missing from the summary
    pub details: Vec<(String, DriveMetrics)>,
}

impl DriveInventory {
    pub fn build(bundle: &RawOutputBundle) -> Self {
        let virtual_drives = extract::usable(bundle.get(CommandKey::VdSummary))
            .map(parse_virtual_drives)
            .unwrap_or_default();

        let details = extract::usable(bundle.get(CommandKey::DriveDetail))
            .map(parse_drive_details)
            .unwrap_or_default();

        let physical_drives: Vec<PhysicalDriveRecord> =
            extract::usable(bundle.get(CommandKey::PdSummary))
                .map(parse_physical_drives)
                .unwrap_or_default()
                .into_iter()
                .map(|mut pd| {
                    pd.metrics = details
                        .iter()
                        .find(|(id, _)| *id == pd.id)
                        .map(|(_, metrics)| metrics.clone());
                    pd
                })
                .collect();

        log::debug!(
            "Parsed {} virtual drives, {} physical drives, {} detail sections",
            virtual_drives.len(),
            physical_drives.len(),
            details.len()
        );

        Self {
            virtual_drives,
            physical_drives,
            details,
        }
    }

    pub fn vd_counts(&self) -> DriveCounts {
        DriveCounts::from_classes(self.virtual_drives.iter().map(|vd| vd.state.class()))
    }

    pub fn pd_counts(&self) -> DriveCounts {
        DriveCounts::from_classes(self.physical_drives.iter().map(|pd| pd.state.class()))
    }

    pub fn any_rebuilding(&self) -> bool {
        self.virtual_drives
            .iter()
            .any(|vd| vd.state == VdState::Rebuilding)
    }
}
