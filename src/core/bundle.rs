//! Raw command text for one check pass.

use std::collections::HashMap;
use std::time::Instant;

use crate::error::Result;

use super::runner::CommandRunner;

/// Every storcli command a check pass may consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKey {
    VdSummary,
    PdSummary,
    ControllerSummary,
    CachevaultStatus,
    CachevaultBasic,
    CachevaultAll,
    BatteryStatus,
    BatteryBasic,
    BatteryAll,
    ControllerInfo,
    ControllerAll,
    ForeignConfig,
    DriveDetail,
    Rebuild,
    ConsistencyCheck,
    PatrolRead,
}

impl CommandKey {
    pub const ALL: [CommandKey; 16] = [
        CommandKey::VdSummary,
        CommandKey::PdSummary,
        CommandKey::ControllerSummary,
        CommandKey::CachevaultStatus,
        CommandKey::CachevaultBasic,
        CommandKey::CachevaultAll,
        CommandKey::BatteryStatus,
        CommandKey::BatteryBasic,
        CommandKey::BatteryAll,
        CommandKey::ControllerInfo,
        CommandKey::ControllerAll,
        CommandKey::ForeignConfig,
        CommandKey::DriveDetail,
        CommandKey::Rebuild,
        CommandKey::ConsistencyCheck,
        CommandKey::PatrolRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VdSummary => "vd_summary",
            Self::PdSummary => "pd_summary",
            Self::ControllerSummary => "controller_summary",
            Self::CachevaultStatus => "cachevault_status",
            Self::CachevaultBasic => "cachevault_basic",
            Self::CachevaultAll => "cachevault_all",
            Self::BatteryStatus => "battery_status",
            Self::BatteryBasic => "battery_basic",
            Self::BatteryAll => "battery_all",
            Self::ControllerInfo => "controller_info",
            Self::ControllerAll => "controller_all",
            Self::ForeignConfig => "foreign_config",
            Self::DriveDetail => "drive_detail",
            Self::Rebuild => "rebuild",
            Self::ConsistencyCheck => "consistency_check",
            Self::PatrolRead => "patrol_read",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }

    /// The storcli argument line for this command on controller `ctrl`
    pub fn storcli_args(&self, ctrl: &str) -> String {
        match self {
            Self::VdSummary => format!("/c{}/vall show", ctrl),
            Self::PdSummary => format!("/c{}/eall/sall show", ctrl),
            Self::ControllerSummary => format!("/c{} show", ctrl),
            Self::CachevaultStatus => format!("cachevault show status -i {}", ctrl),
            Self::CachevaultBasic => format!("cachevault show basic -i {}", ctrl),
            Self::CachevaultAll => format!("cachevault show all -i {}", ctrl),
            Self::BatteryStatus => format!("battery show status -i {}", ctrl),
            Self::BatteryBasic => format!("battery show basic -i {}", ctrl),
            Self::BatteryAll => format!("battery show all -i {}", ctrl),
            Self::ControllerInfo => format!("controller show -i {}", ctrl),
            Self::ControllerAll => format!("controller show all -i {}", ctrl),
            Self::ForeignConfig => format!("/c{}/fall show", ctrl),
            Self::DriveDetail => format!("/c{}/eall/sall show all", ctrl),
            Self::Rebuild => format!("/c{}/vall show rebuild", ctrl),
            Self::ConsistencyCheck => format!("/c{}/vall show cc", ctrl),
            Self::PatrolRead => format!("/c{} show patrolread", ctrl),
        }
    }
}

/// Command key -> raw text it returned. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RawOutputBundle {
    outputs: HashMap<CommandKey, String>,
}

impl RawOutputBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every command for `controller`, in declaration order.
    ///
    /// The first retrieval failure aborts the whole fetch.
    pub fn fetch(runner: &dyn CommandRunner, controller: &str) -> Result<Self> {
        let mut bundle = Self::new();

        for key in CommandKey::ALL {
            let args = key.storcli_args(controller);
            let started = Instant::now();
            let text = runner.run(&args)?;
            log::debug!(
                "{} ({}) returned {} bytes in {:?}",
                key.as_str(),
                args,
                text.len(),
                started.elapsed()
            );
            bundle.outputs.insert(key, text);
        }

        Ok(bundle)
    }

    pub fn with(mut self, key: CommandKey, text: impl Into<String>) -> Self {
        self.outputs.insert(key, text.into());
        self
    }

    pub fn get(&self, key: CommandKey) -> Option<&str> {
        self.outputs.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(CommandKey, S)> for RawOutputBundle {
    fn from_iter<I: IntoIterator<Item = (CommandKey, S)>>(iter: I) -> Self {
        Self {
            outputs: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
