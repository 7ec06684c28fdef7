use std::cell::Cell;
use std::fs;

use raidcheck::commands::check;
use raidcheck::core::config::CheckConfig;
use raidcheck::core::{evaluate, CommandKey, CommandRunner, ExitState, RawOutputBundle};
use raidcheck::platform::ReplayRunner;
use raidcheck::{RaidError, Result};
use tempfile::TempDir;

use super::fixtures;

fn capture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (key, text) in fixtures::healthy_outputs() {
        fs::write(dir.path().join(format!("{}.txt", key.as_str())), text).unwrap();
    }
    dir
}

/// Answers the first `ok_calls` commands, then times out
struct FlakyRunner {
    ok_calls: usize,
    calls: Cell<usize>,
}

impl CommandRunner for FlakyRunner {
    fn run(&self, args: &str) -> Result<String> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n < self.ok_calls {
            Ok(String::new())
        } else {
            Err(RaidError::Timeout {
                command: args.to_string(),
                secs: 60,
            })
        }
    }
}

#[test]
fn test_replayed_captures_match_in_memory_bundle() {
    let dir = capture_dir();
    let runner = ReplayRunner::new(dir.path(), "0").unwrap();
    let bundle = RawOutputBundle::fetch(&runner, "0").unwrap();

    assert_eq!(bundle.len(), CommandKey::ALL.len());
    let config = CheckConfig::default();
    let replayed = evaluate(&bundle, &config);
    assert_eq!(replayed, evaluate(&fixtures::healthy_bundle(), &config));
    assert_eq!(replayed.state, ExitState::Ok);
}

#[test]
fn test_missing_capture_reads_as_absent() {
    let dir = capture_dir();
    fs::remove_file(dir.path().join("patrol_read.txt")).unwrap();

    let runner = ReplayRunner::new(dir.path(), "0").unwrap();
    let bundle = RawOutputBundle::fetch(&runner, "0").unwrap();
    assert_eq!(bundle.get(CommandKey::PatrolRead), Some(""));
    assert_eq!(evaluate(&bundle, &CheckConfig::default()).state, ExitState::Ok);
}

#[test]
fn test_other_controller_reads_same_files() {
    let dir = capture_dir();
    let runner = ReplayRunner::new(dir.path(), "1").unwrap();
    let bundle = RawOutputBundle::fetch(&runner, "1").unwrap();
    assert!(bundle.get(CommandKey::VdSummary).unwrap().contains("0/0"));
}

#[test]
fn test_retrieval_failure_aborts_fetch() {
    let runner = FlakyRunner {
        ok_calls: 4,
        calls: Cell::new(0),
    };
    let err = RawOutputBundle::fetch(&runner, "0").unwrap_err();

    assert!(err.is_retrieval_failure());
    assert_eq!(runner.calls.get(), 5);
}

#[test]
fn test_retrieval_failure_is_unknown() {
    let runner = FlakyRunner {
        ok_calls: 4,
        calls: Cell::new(0),
    };
    let verdict = check::resolve(check::run_with(&runner, &CheckConfig::default()));

    assert_eq!(verdict.state, ExitState::Unknown);
    assert_eq!(verdict.state.code(), 3);
    assert_eq!(
        verdict.message,
        "RAID UNKNOWN - Timeout after 60s running 'cachevault show basic -i 0'"
    );
}

#[test]
fn test_healthy_runner_through_check_pass() {
    let dir = capture_dir();
    let runner = ReplayRunner::new(dir.path(), "0").unwrap();
    let verdict = check::resolve(check::run_with(&runner, &CheckConfig::default()));
    assert_eq!(verdict.state, ExitState::Ok);
    assert_eq!(verdict.message, "RAID OK (MegaRAID)");
}
