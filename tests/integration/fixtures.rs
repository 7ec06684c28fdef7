// Captured storcli output shared by the integration tests
#![allow(dead_code)]

use raidcheck::core::{CommandKey, RawOutputBundle};

pub const UNSUPPORTED: &str = "\
CLI Version = 007.1017.0000.0000 May 10, 2019
Operating system = VMkernel 6.7.0
Status Code = 0
Status = Failure
Description = Un-supported command
";

pub const VD_HEALTHY: &str = "\
CLI Version = 007.1017.0000.0000 May 10, 2019
Operating system = VMkernel 6.7.0
Controller = 0
Status = Success
Description = None


Virtual Drives :
==============

---------------------------------------------------------------
DG/VD TYPE  State Access Consist Cache Cac sCC       Size Name
---------------------------------------------------------------
0/0   RAID1 Optl  RW     Yes     RWBD  -   ON  558.375 GB OS
1/1   RAID5 Optl  RW     Yes     RWBD  -   ON    1.089 TB data
---------------------------------------------------------------

Cac=CacheCade|Rec=Recovery|OfLn=OffLine|Pdgd=Partially Degraded|Dgrd=Degraded
Optl=Optimal|RO=Read Only|RW=Read Write|HD=Hidden|TRANS=TransportReady|B=Blocked|
";

pub const VD_REBUILDING: &str = "\
Virtual Drives :
==============

---------------------------------------------------------------
DG/VD TYPE  State Access Consist Cache Cac sCC       Size Name
---------------------------------------------------------------
0/0   RAID1 Optl  RW     Yes     RWBD  -   ON  558.375 GB OS
0/1   RAID5 Rbld  RW     No      RWBD  -   ON    1.089 TB data
---------------------------------------------------------------
";

pub const VD_DEGRADED: &str = "\
DG/VD TYPE  State Access Consist Cache Cac sCC       Size Name
0/0   RAID1 Optl  RW     Yes     RWBD  -   ON  558.375 GB OS
1/1   RAID5 Dgrd  RW     No      RWBD  -   ON    1.089 TB data
";

pub const PD_HEALTHY: &str = "\
Drive Information :
=================

-------------------------------------------------------------------------------
EID:Slt DID State DG       Size Intf Med SED PI SeSz Model                Sp Type
-------------------------------------------------------------------------------
252:0     7 Onln   0 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:1     8 Onln   0 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:2     9 Onln   1 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:3    10 Onln   1 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:4    11 GHS    - 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:5    12 GHS    - 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
-------------------------------------------------------------------------------

EID=Enclosure Device ID|Slt=Slot No.|DID=Device ID|DG=DriveGroup
DHS=Dedicated Hot Spare|UGood=Unconfigured Good|GHS=Global Hotspare
UBad=Unconfigured Bad|Onln=Online|Offln=Offline|Intf=Interface
";

pub const PD_REBUILDING: &str = "\
EID:Slt DID State DG       Size Intf Med SED PI SeSz Model                Sp Type
252:0     7 Onln   0 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:1     8 Onln   0 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:2     9 Onln   1 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:3    10 Rbld   1 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
252:4    11 GHS    - 558.406 GB SAS  HDD N   N  512B ST600MM0088          U  -
";

pub const CONTROLLER_OPTIMAL: &str = "\
Controller = 0
Status = Success
Description = None

Product Name = PERC H730P Mini
Serial Number = 5CF00H4
Controller Status = Optimal
";

pub const CACHEVAULT_OPTIMAL: &str = "\
Controller = 0
Status = Success
Description = None


Cachevault_Info :
===============

--------------------
Property    Value
--------------------
Type = CVPM02
Temperature = 28 C
State = Optimal
--------------------
";

pub const CONTROLLER_INFO: &str = "\
Controller = 0
Status = Success
Description = None

Product Name = PERC H730P Mini
FW Package Build = 25.5.9.0001
";

pub const FOREIGN_NONE: &str = "\
Controller = 0
Status = Success
Description = Couldn't find any foreign Configuration
";

pub const CC_IDLE: &str = "\
VD Operation Progress% Status          Estimited Time Left
0  CC        -         Not in progress -
1  CC        -         Not in progress -
";

pub const PATROL_STOPPED: &str = "\
Controller = 0
Status = Success
Description = None

PR Mode = Auto
PR Execution Delay = 168 hours
PR iterations completed = 12
PR Current State = Stopped
";

/// The `show all` block of one drive in enclosure 252
pub fn drive_detail(slot: u32, temp: u32, media_errors: u64, other_errors: u64) -> String {
    format!(
        "\
Drive /c0/e252/s{slot} :
================

252:{slot}    {did} Onln   0 558.406 GB SAS  HDD N   N  512B ST600MM0088      U  -

Drive /c0/e252/s{slot} - Detailed Information :
========================================

Drive /c0/e252/s{slot} State :
=======================
Shield Counter = 0
Media Error Count = {media_errors}
Other Error Count = {other_errors}
Drive Temperature = {temp}C ({fahrenheit}.00 F)
Predictive Failure Count = 0
S.M.A.R.T alert flagged by drive = No

Drive /c0/e252/s{slot} Device attributes :
====================================
SN = S0M5CKKS
Model Number = ST600MM0088
Raw size = 558.911 GB [0x45dd2fb0 Sectors]

",
        slot = slot,
        did = slot + 7,
        temp = temp,
        fahrenheit = temp * 9 / 5 + 32,
        media_errors = media_errors,
        other_errors = other_errors,
    )
}

/// Six healthy drives at 30C to 35C
pub fn healthy_details() -> String {
    (0..6).map(|slot| drive_detail(slot, 30 + slot, 0, 0)).collect()
}

/// Every block a healthy controller with a CacheVault returns
pub fn healthy_outputs() -> Vec<(CommandKey, String)> {
    vec![
        (CommandKey::VdSummary, VD_HEALTHY.to_string()),
        (CommandKey::PdSummary, PD_HEALTHY.to_string()),
        (CommandKey::ControllerSummary, CONTROLLER_OPTIMAL.to_string()),
        (CommandKey::CachevaultStatus, CACHEVAULT_OPTIMAL.to_string()),
        (CommandKey::CachevaultBasic, CACHEVAULT_OPTIMAL.to_string()),
        (CommandKey::CachevaultAll, CACHEVAULT_OPTIMAL.to_string()),
        (CommandKey::BatteryStatus, UNSUPPORTED.to_string()),
        (CommandKey::BatteryBasic, UNSUPPORTED.to_string()),
        (CommandKey::BatteryAll, UNSUPPORTED.to_string()),
        (CommandKey::ControllerInfo, CONTROLLER_INFO.to_string()),
        (CommandKey::ControllerAll, CONTROLLER_OPTIMAL.to_string()),
        (CommandKey::ForeignConfig, FOREIGN_NONE.to_string()),
        (CommandKey::DriveDetail, healthy_details()),
        (CommandKey::Rebuild, UNSUPPORTED.to_string()),
        (CommandKey::ConsistencyCheck, CC_IDLE.to_string()),
        (CommandKey::PatrolRead, PATROL_STOPPED.to_string()),
    ]
}

pub fn healthy_bundle() -> RawOutputBundle {
    healthy_outputs().into_iter().collect()
}

/// Healthy outputs with some blocks replaced
pub fn bundle_with(overrides: &[(CommandKey, &str)]) -> RawOutputBundle {
    healthy_outputs()
        .into_iter()
        .map(|(key, text)| {
            match overrides.iter().find(|(k, _)| *k == key) {
                Some((_, replacement)) => (key, replacement.to_string()),
                None => (key, text),
            }
        })
        .collect()
}

/// Healthy outputs with some blocks left out entirely
pub fn bundle_without(missing: &[CommandKey]) -> RawOutputBundle {
    healthy_outputs()
        .into_iter()
        .filter(|(key, _)| !missing.contains(key))
        .collect()
}
