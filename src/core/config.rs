use crate::error::{RaidError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ESXCLI_PATH: &str = "/opt/vmware-vsphere-cli-distrib/lib/bin/esxcli/esxcli";
pub const DEFAULT_MAINTENANCE_FILE: &str = "/tmp/NO_CHECK";

/// Numeric limits the health checks compare against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub temp_warn: u32,        // °C
    pub temp_crit: u32,        // °C
    pub ssd_wear_warn: u32,    // % life remaining
    pub ssd_wear_crit: u32,    // % life remaining
    pub media_error_warn: u64,
    pub media_error_crit: u64,
    pub other_error_warn: u64,
    pub shield_warn: u64,
    pub bbm_warn: u64,
    /// Missing spares only matter once the array has more drives than this
    pub spare_min_drives: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temp_warn: 50,
            temp_crit: 60,
            ssd_wear_warn: 20,
            ssd_wear_crit: 10,
            media_error_warn: 1,
            media_error_crit: 10,
            other_error_warn: 1,
            shield_warn: 1,
            bbm_warn: 1,
            spare_min_drives: 2,
        }
    }
}

/// Presentation toggles for the verdict line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub perfdata: bool,
    pub long_output: bool,
    pub show_host: bool,
    pub terse: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            perfdata: false,
            long_output: false,
            show_host: false,
            terse: true,
        }
    }
}

impl OutputOptions {
    /// Read toggles from `ENABLE_PERFDATA`, `ENABLE_LONG_OUTPUT`,
    /// `SHOW_HOST` and `TERSE_OUTPUT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| match lookup(key) {
            Some(value) => is_truthy(&value),
            None => default,
        };

        Self {
            perfdata: flag("ENABLE_PERFDATA", defaults.perfdata),
            long_output: flag("ENABLE_LONG_OUTPUT", defaults.long_output),
            show_host: flag("SHOW_HOST", defaults.show_host),
            terse: flag("TERSE_OUTPUT", defaults.terse),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Everything one evaluation pass needs besides the raw text
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub thresholds: Thresholds,
    pub output: OutputOptions,
    pub vd_filter: Option<String>,
    pub controller: String,
    pub host: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            output: OutputOptions::default(),
            vd_filter: None,
            controller: "0".to_string(),
            host: String::new(),
        }
    }
}

/// Site-wide settings persisted on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_esxcli_path")]
    pub esxcli_path: String,
    /// Host address -> SSL thumbprint passed to esxcli
    #[serde(default)]
    pub thumbprints: HashMap<String, String>,
    #[serde(default = "default_maintenance_file")]
    pub maintenance_file: String,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_esxcli_path() -> String {
    DEFAULT_ESXCLI_PATH.to_string()
}

fn default_maintenance_file() -> String {
    DEFAULT_MAINTENANCE_FILE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            esxcli_path: default_esxcli_path(),
            thumbprints: HashMap::new(),
            maintenance_file: default_maintenance_file(),
            thresholds: Thresholds::default(),
        }
    }
}

impl SiteConfig {
    /// Load from an explicit path, or from the per-user config directory.
    ///
    /// A missing file at the default location yields defaults. A missing
    /// file at an explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            RaidError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(&data)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("raidcheck").join("config.json"))
    }

    pub fn thumbprint_for(&self, host: &str) -> Result<&str> {
        self.thumbprints
            .get(host)
            .map(String::as_str)
            .ok_or_else(|| RaidError::UnknownHost(host.to_string()))
    }
}
