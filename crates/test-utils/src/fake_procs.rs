use std::sync::{Arc, Mutex};

use hadctl::errors::{HadctlError, Result};
use hadctl::procs::{ProcessInfo, ProcessTable};

/// A synthetic process table that:
/// - serves a fixed list of processes,
/// - records which pids were terminated,
/// - can be told to fail enumeration or termination.
#[derive(Debug)]
pub struct FakeProcessTable {
    processes: Vec<ProcessInfo>,
    terminated: Arc<Mutex<Vec<u32>>>,
    fail_list: bool,
    fail_terminate: bool,
}

impl FakeProcessTable {
    pub fn new(processes: &[(u32, &str)]) -> Self {
        Self {
            processes: processes
                .iter()
                .map(|(pid, command)| ProcessInfo {
                    pid: *pid,
                    command: command.to_string(),
                })
                .collect(),
            terminated: Arc::new(Mutex::new(Vec::new())),
            fail_list: false,
            fail_terminate: false,
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_terminate(mut self) -> Self {
        self.fail_terminate = true;
        self
    }

    /// Pids terminated so far, in order.
    pub fn terminated(&self) -> Vec<u32> {
        self.terminated.lock().unwrap().clone()
    }
}

impl ProcessTable for FakeProcessTable {
    fn list(&mut self) -> Result<Vec<ProcessInfo>> {
        if self.fail_list {
            return Err(HadctlError::ProcessTable(
                "enumeration unavailable".to_string(),
            ));
        }
        Ok(self.processes.clone())
    }

    fn terminate(&mut self, pid: u32) -> Result<()> {
        if self.fail_terminate {
            return Err(HadctlError::ProcessTable(format!(
                "unable to signal process {pid}"
            )));
        }
        self.terminated.lock().unwrap().push(pid);
        Ok(())
    }
}
