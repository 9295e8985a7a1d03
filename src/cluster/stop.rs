// src/cluster/stop.rs

//! Cluster teardown.
//!
//! No registry of spawned pids is kept between invocations. Instead, stop
//! walks the live process table and recognizes our daemons by their reported
//! command line: it must contain the platform marker and one of the four
//! daemon class names.

use tracing::info;

use crate::errors::Result;
use crate::procs::ProcessTable;

/// Substring identifying platform processes, case-sensitive.
pub const DAEMON_MARKER: &str = "hadoop";

/// Daemon class names, checked in this order; first match wins per process.
pub const DAEMON_CLASSES: [&str; 4] = ["NameNode", "DataNode", "JobTracker", "TaskTracker"];

/// Terminate every recognized daemon. Returns how many were signalled.
///
/// Enumeration failure and any individual termination failure abort the
/// whole operation.
pub fn stop_all(table: &mut dyn ProcessTable, quiet: bool) -> Result<usize> {
    let mut stopped = 0;
    for process in table.list()? {
        if !process.command.contains(DAEMON_MARKER) {
            continue;
        }
        for class in DAEMON_CLASSES {
            if process.command.contains(class) {
                if !quiet {
                    info!(daemon = class, pid = process.pid, "terminating");
                }
                table.terminate(process.pid)?;
                stopped += 1;
                break;
            }
        }
    }
    Ok(stopped)
}
