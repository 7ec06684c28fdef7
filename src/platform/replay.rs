//! Replays captured storcli output from a directory.
//!
//! Files are named after the command key, e.g. `vd_summary.txt`. A missing
//! file reads as empty text, which every check treats as absent.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::bundle::CommandKey;
use crate::core::runner::CommandRunner;
use crate::error::{RaidError, Result};

pub struct ReplayRunner {
    dir: PathBuf,
    controller: String,
}

impl ReplayRunner {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(dir: P, controller: S) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(RaidError::config(format!(
                "Replay directory not found: {:?}",
                dir
            )));
        }
        Ok(Self {
            dir,
            controller: controller.into(),
        })
    }
}

impl CommandRunner for ReplayRunner {
    fn run(&self, args: &str) -> Result<String> {
        let key = CommandKey::ALL
            .iter()
            .find(|key| key.storcli_args(&self.controller) == args)
            .ok_or_else(|| RaidError::other(format!("No capture mapping for '{}'", args)))?;

        let path = self.dir.join(format!("{}.txt", key.as_str()));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No capture for {} at {:?}", key.as_str(), path);
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
