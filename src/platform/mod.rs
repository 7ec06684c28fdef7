// Transport implementations for CommandRunner

pub mod esxcli;
pub mod replay;

pub use esxcli::{EsxcliRunner, EsxcliTarget};
pub use replay::ReplayRunner;
