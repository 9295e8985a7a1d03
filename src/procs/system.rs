// src/procs/system.rs

use sysinfo::{Pid, PidExt, ProcessExt, Signal, System, SystemExt};
use tracing::debug;

use super::{ProcessInfo, ProcessTable};
use crate::errors::{HadctlError, Result};

/// Real process table backed by `sysinfo`.
pub struct SystemProcessTable {
    system: System,
}

impl std::fmt::Debug for SystemProcessTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemProcessTable").finish_non_exhaustive()
    }
}

impl SystemProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl ProcessTable for SystemProcessTable {
    fn list(&mut self) -> Result<Vec<ProcessInfo>> {
        self.system.refresh_processes();
        let processes = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                command: process.cmd().join(" "),
            })
            .collect::<Vec<_>>();
        debug!(count = processes.len(), "enumerated live processes");
        Ok(processes)
    }

    fn terminate(&mut self, pid: u32) -> Result<()> {
        let process = self.system.process(Pid::from_u32(pid)).ok_or_else(|| {
            HadctlError::ProcessTable(format!("process {pid} not found"))
        })?;
        match process.kill_with(Signal::Term) {
            Some(true) => Ok(()),
            Some(false) => Err(HadctlError::ProcessTable(format!(
                "unable to signal process {pid}"
            ))),
            None => Err(HadctlError::ProcessTable(
                "SIGTERM is not supported on this platform".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_current_process() {
        let mut table = SystemProcessTable::new();
        let own_pid = std::process::id();
        let processes = table.list().unwrap();
        assert!(
            processes.iter().any(|p| p.pid == own_pid),
            "own pid {own_pid} missing from {} enumerated processes",
            processes.len()
        );
    }
}
