// src/procs/mod.rs

//! Host process introspection.
//!
//! Discovering and signalling other processes is OS-specific, so it sits
//! behind the [`ProcessTable`] capability trait. Production code uses
//! [`SystemProcessTable`]; tests provide a synthetic table
//! (`hadctl-test-utils`).

use std::fmt::Debug;

use crate::errors::Result;

pub mod system;

pub use system::SystemProcessTable;

/// One live process as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Full command line, joined with spaces. For JVM daemons this carries
    /// the main class name we match on.
    pub command: String,
}

/// Capability to enumerate and terminate live processes.
pub trait ProcessTable: Send + Debug {
    /// Snapshot every process visible to us, discovered fresh on each call.
    fn list(&mut self) -> Result<Vec<ProcessInfo>>;

    /// Send a graceful termination signal (SIGTERM equivalent).
    ///
    /// Fire-and-forget: implementations do not verify that the process
    /// actually exits and never escalate to a forceful kill.
    fn terminate(&mut self, pid: u32) -> Result<()>;
}
