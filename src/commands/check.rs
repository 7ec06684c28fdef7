//! The `raidcheck` check pass: pre-flight, fetch, evaluate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::{CheckConfig, OutputOptions, SiteConfig};
use crate::core::{evaluate_guarded, CommandRunner, RawOutputBundle, Verdict};
use crate::error::RaidError;
use crate::platform::{EsxcliRunner, EsxcliTarget, ReplayRunner};

/// Parsed command-line options
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub host: String,
    pub user: String,
    pub vd: Option<String>,
    pub controller: String,
    pub timeout: Duration,
    pub config: Option<PathBuf>,
    pub replay: Option<PathBuf>,
}

impl CheckArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            host: matches.get_one::<String>("host").cloned().unwrap_or_default(),
            user: matches.get_one::<String>("user").cloned().unwrap_or_default(),
            vd: matches.get_one::<u32>("vd").map(|n| n.to_string()),
            controller: matches
                .get_one::<u32>("controller")
                .copied()
                .unwrap_or(0)
                .to_string(),
            timeout: Duration::from_secs(matches.get_one::<u64>("timeout").copied().unwrap_or(60)),
            config: matches.get_one::<PathBuf>("config").cloned(),
            replay: matches.get_one::<PathBuf>("replay").cloned(),
        }
    }
}

/// Execute the check. Never fails: every error becomes an UNKNOWN verdict.
pub fn execute(matches: &ArgMatches) -> Verdict {
    resolve(run(&CheckArgs::from_matches(matches)))
}

/// Collapse a failed check pass into an UNKNOWN verdict
pub fn resolve(result: Result<Verdict>) -> Verdict {
    result.unwrap_or_else(|e| match e.downcast_ref::<RaidError>() {
        Some(raid) if raid.is_retrieval_failure() => Verdict::unknown(raid.to_string()),
        Some(RaidError::UnknownHost(_)) => Verdict::unknown(format!("{:#}", e)),
        _ => Verdict::unknown(format!("Error: {:#}", e)),
    })
}

pub fn run(args: &CheckArgs) -> Result<Verdict> {
    let site = SiteConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    let runner: Box<dyn CommandRunner> = match &args.replay {
        Some(dir) => Box::new(ReplayRunner::new(dir.as_path(), args.controller.as_str())?),
        None => match esxcli_runner(args, &site)? {
            Preflight::Ready(runner) => runner,
            Preflight::Stop(verdict) => return Ok(verdict),
        },
    };

    let config = CheckConfig {
        thresholds: site.thresholds.clone(),
        output: OutputOptions::from_env(),
        vd_filter: args.vd.clone(),
        controller: args.controller.clone(),
        host: args.host.clone(),
    };

    run_with(runner.as_ref(), &config)
}

/// Fetch every command through `runner` and evaluate the result
pub fn run_with(runner: &dyn CommandRunner, config: &CheckConfig) -> Result<Verdict> {
    let bundle = RawOutputBundle::fetch(runner, &config.controller)?;
    Ok(evaluate_guarded(&bundle, config))
}

enum Preflight {
    Ready(Box<dyn CommandRunner>),
    Stop(Verdict),
}

fn esxcli_runner(args: &CheckArgs, site: &SiteConfig) -> Result<Preflight> {
    let thumbprint = site.thumbprint_for(&args.host)?.to_string();

    let Some(esxcli_path) = locate(&site.esxcli_path) else {
        return Ok(Preflight::Stop(Verdict::unknown(format!(
            "esxcli not found at {}",
            site.esxcli_path
        ))));
    };

    if Path::new(&site.maintenance_file).exists() {
        log::info!("Maintenance marker {} present", site.maintenance_file);
        return Ok(Preflight::Stop(Verdict::maintenance()));
    }

    let runner = EsxcliRunner::new(EsxcliTarget {
        esxcli_path,
        host: args.host.clone(),
        user: args.user.clone(),
        thumbprint,
        timeout: args.timeout,
    })?;

    Ok(Preflight::Ready(Box::new(runner)))
}

/// Absolute paths must exist; bare names are looked up on PATH
fn locate(esxcli: &str) -> Option<PathBuf> {
    let path = Path::new(esxcli);
    if path.components().count() > 1 {
        path.exists().then(|| path.to_path_buf())
    } else {
        which::which(esxcli).ok()
    }
}
