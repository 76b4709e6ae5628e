//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::process::Output;

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, capturing stdout and stderr.
    ///
    /// Blocks until the command exits. A missing program surfaces as
    /// `io::ErrorKind::NotFound`.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }
}
