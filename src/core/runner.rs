use crate::error::Result;

/// Trait for anything that can run a storcli command line and hand back its text
///
/// Implementations live in the platform layer. A returned `Err` means the
/// text could not be retrieved at all (timeout, spawn failure); a command
/// that ran and complained still returns `Ok` with whatever it printed.
pub trait CommandRunner {
    /// Run `storcli <args>` and return stdout followed by stderr
    fn run(&self, args: &str) -> Result<String>;
}
