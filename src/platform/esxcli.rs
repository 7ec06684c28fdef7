//! storcli over the vSphere CLI.
//!
//! Each command is a separate `esxcli ... storcli <args>` process bounded by
//! the configured timeout.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::runtime::Runtime;

use crate::core::runner::CommandRunner;
use crate::error::{RaidError, Result};

/// Connection details for one ESXi host
#[derive(Debug, Clone)]
pub struct EsxcliTarget {
    pub esxcli_path: PathBuf,
    pub host: String,
    pub user: String,
    pub thumbprint: String,
    pub timeout: Duration,
}

/// Runs storcli through esxcli on a private current-thread runtime
pub struct EsxcliRunner {
    target: EsxcliTarget,
    runtime: Runtime,
}

impl EsxcliRunner {
    pub fn new(target: EsxcliTarget) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RaidError::transport(format!("Failed to start runtime: {}", e)))?;

        Ok(Self { target, runtime })
    }

    fn command(&self, args: &str) -> Command {
        let mut cmd = Command::new(&self.target.esxcli_path);
        cmd.arg("-s")
            .arg(&self.target.host)
            .arg("-u")
            .arg(&self.target.user)
            .arg("-d")
            .arg(&self.target.thumbprint)
            .arg("storcli")
            .args(args.split_whitespace())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl CommandRunner for EsxcliRunner {
    fn run(&self, args: &str) -> Result<String> {
        let started = Instant::now();
        let timeout = self.target.timeout;
        log::debug!("esxcli -s {} storcli {}", self.target.host, args);

        let mut cmd = self.command(args);
        let output = self.runtime.block_on(async move {
            let child = cmd
                .spawn()
                .map_err(|e| RaidError::transport(format!("Failed to run esxcli: {}", e)))?;

            let output = tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| RaidError::Timeout {
                    command: args.to_string(),
                    secs: timeout.as_secs(),
                })?
                .map_err(|e| RaidError::transport(format!("esxcli failed: {}", e)))?;
            Ok::<_, RaidError>(output)
        })?;

        log::debug!(
            "storcli {} exited with {} after {:?}",
            args,
            output.status,
            started.elapsed()
        );

        // Error text from storcli often lands on stderr; checks need both
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
