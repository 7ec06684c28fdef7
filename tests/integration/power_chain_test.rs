use raidcheck::core::config::{CheckConfig, OutputOptions};
use raidcheck::core::{evaluate, CommandKey, ExitState};

use super::fixtures::{bundle_with, UNSUPPORTED};

fn verbose() -> CheckConfig {
    CheckConfig {
        output: OutputOptions {
            terse: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

const NO_CACHEVAULT: [(CommandKey, &str); 3] = [
    (CommandKey::CachevaultStatus, UNSUPPORTED),
    (CommandKey::CachevaultBasic, UNSUPPORTED),
    (CommandKey::CachevaultAll, UNSUPPORTED),
];

const BATTERY_ALL: &str = "\
Controller = 0
Status = Success
Description = None

BBU_Info :
========

Property              Value
Type                  BBU
Battery Status = Optimal
";

#[test]
fn test_battery_resolved_from_last_variant() {
    let mut overrides = NO_CACHEVAULT.to_vec();
    overrides.push((CommandKey::BatteryAll, BATTERY_ALL));
    let bundle = bundle_with(&overrides);

    let verdict = evaluate(&bundle, &verbose());
    assert_eq!(verdict.state, ExitState::Ok);
    assert!(verdict.message.contains(" BBU:OK "));
    assert!(!verdict.message.contains("CV:"));
}

#[test]
fn test_controller_info_fallback_warns() {
    let mut overrides = NO_CACHEVAULT.to_vec();
    overrides.push((
        CommandKey::ControllerInfo,
        "Product Name = PERC H730P Mini\nBBU Status = Charging\n",
    ));
    let bundle = bundle_with(&overrides);

    let verdict = evaluate(&bundle, &CheckConfig::default());
    assert_eq!(verdict.state, ExitState::Warning);
    assert_eq!(verdict.message, "RAID WARNING (MegaRAID) - BBU Charging");
}

#[test]
fn test_cachevault_failure_is_a_warning() {
    let bundle = bundle_with(&[(
        CommandKey::CachevaultStatus,
        "Status = Success\nState = Failed\n",
    )]);

    let verdict = evaluate(&bundle, &verbose());
    assert_eq!(verdict.state, ExitState::Warning);
    assert!(verdict
        .message
        .starts_with("RAID WARNING (MegaRAID) - VDs Optimal but: CacheVault Failed ("));
}

#[test]
fn test_energy_pack_after_empty_chains() {
    let mut overrides = NO_CACHEVAULT.to_vec();
    overrides.push((
        CommandKey::ControllerAll,
        "Controller = 0\nStatus = Success\nEnergy Pack = Present\nEnergy Pack Status = 0\n",
    ));
    let bundle = bundle_with(&overrides);

    let verdict = evaluate(&bundle, &verbose());
    assert_eq!(verdict.state, ExitState::Ok);
    assert!(verdict.message.contains(" Cache:OK Battery:OK "));
}

#[test]
fn test_no_power_protection_at_all() {
    let bundle = bundle_with(&NO_CACHEVAULT);
    let verdict = evaluate(&bundle, &verbose());
    assert_eq!(verdict.state, ExitState::Ok);
    assert!(!verdict.message.contains("CV:"));
    assert!(!verdict.message.contains("BBU:"));
    assert!(verdict.message.contains("Controller:OK"));
}
