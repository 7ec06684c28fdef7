//! Check engine: raw storcli text in, one health verdict out.
//!
//! Data flows one way: bundle -> records -> evaluations -> report -> verdict.

pub mod aggregate;
pub mod bundle;
pub mod config;
pub mod engine;
pub mod evaluators;
pub mod extract;
pub mod records;
pub mod report;
pub mod runner;

pub use aggregate::{aggregate, ExitState, Verdict};
pub use bundle::{CommandKey, RawOutputBundle};
pub use config::{CheckConfig, OutputOptions, SiteConfig, Thresholds};
pub use engine::{evaluate, evaluate_guarded, guard};
pub use records::{DriveInventory, PhysicalDriveRecord, VirtualDriveRecord};
pub use report::{Finding, HealthReport, Severity};
pub use runner::CommandRunner;
