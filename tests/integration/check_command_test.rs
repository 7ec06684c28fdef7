use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use raidcheck::commands::check::{run, CheckArgs};
use raidcheck::core::{CommandKey, ExitState};
use raidcheck::RaidError;
use tempfile::TempDir;

use super::fixtures;

fn args(host: &str, config: &Path) -> CheckArgs {
    CheckArgs {
        host: host.to_string(),
        user: "nagios".to_string(),
        vd: None,
        controller: "0".to_string(),
        timeout: Duration::from_secs(5),
        config: Some(config.to_path_buf()),
        replay: None,
    }
}

fn write_config(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, json).unwrap();
    path
}

fn write_captures(dir: &TempDir) -> PathBuf {
    let captures = dir.path().join("captures");
    fs::create_dir(&captures).unwrap();
    for (key, text) in fixtures::healthy_outputs() {
        fs::write(captures.join(format!("{}.txt", key.as_str())), text).unwrap();
    }
    captures
}

#[test]
fn test_unknown_host_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"thumbprints": {"10.10.10.20": "AA:BB"}}"#);

    let err = run(&args("10.10.10.99", &config)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RaidError>(),
        Some(RaidError::UnknownHost(host)) if host == "10.10.10.99"
    ));
}

#[test]
fn test_missing_esxcli_is_unknown() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"{"esxcli_path": "/nonexistent/vcli/esxcli", "thumbprints": {"10.10.10.20": "AA:BB"}}"#,
    );

    let verdict = run(&args("10.10.10.20", &config)).unwrap();
    assert_eq!(verdict.state, ExitState::Unknown);
    assert_eq!(
        verdict.message,
        "RAID UNKNOWN - esxcli not found at /nonexistent/vcli/esxcli"
    );
}

#[test]
fn test_maintenance_marker_skips_check() {
    let dir = TempDir::new().unwrap();
    let esxcli = dir.path().join("esxcli");
    let marker = dir.path().join("NO_CHECK");
    fs::write(&esxcli, "").unwrap();
    fs::write(&marker, "").unwrap();

    let json = serde_json::json!({
        "esxcli_path": esxcli,
        "maintenance_file": marker,
        "thumbprints": {"10.10.10.20": "AA:BB"},
    });
    let config = write_config(&dir, &json.to_string());

    let verdict = run(&args("10.10.10.20", &config)).unwrap();
    assert_eq!(verdict.state, ExitState::Ok);
    assert_eq!(verdict.message, "RAID OK - Check skipped (maintenance mode)");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = run(&args("10.10.10.20", &dir.path().join("absent.json"))).unwrap_err();
    assert!(format!("{:#}", err).starts_with("Failed to load configuration"));
}

#[test]
fn test_replay_needs_no_thumbprint() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");
    let check = CheckArgs {
        replay: Some(write_captures(&dir)),
        ..args("10.10.10.20", &config)
    };

    let verdict = run(&check).unwrap();
    assert_eq!(verdict.state, ExitState::Ok);
}

#[test]
fn test_replay_uses_configured_thresholds() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"thresholds": {"temp_warn": 33, "temp_crit": 35}}"#);
    let check = CheckArgs {
        replay: Some(write_captures(&dir)),
        ..args("10.10.10.20", &config)
    };

    let verdict = run(&check).unwrap();
    assert_eq!(verdict.state, ExitState::Critical);
    assert!(verdict.message.contains("Drive 252:5 overheating (35C)"));
}

#[test]
fn test_replay_with_drive_filter() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");
    let captures = write_captures(&dir);
    fs::write(
        captures.join(format!("{}.txt", CommandKey::VdSummary.as_str())),
        fixtures::VD_DEGRADED,
    )
    .unwrap();

    let check = CheckArgs {
        vd: Some("7".to_string()),
        replay: Some(captures),
        ..args("10.10.10.20", &config)
    };
    let verdict = run(&check).unwrap();
    assert_eq!(verdict.state, ExitState::Critical);
    assert!(verdict.message.contains("Virtual Drive 7 not found"));
}
