// src/exec/daemon.rs

//! Detached daemon spawning.
//!
//! Each daemon runs under its own monitor task: the monitor spawns the child,
//! waits for it to exit (which for a healthy daemon is never) and logs the
//! outcome. The caller does not wait for the monitor; it proceeds straight to
//! the readiness probe.

use std::process::Stdio;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::command::{output_policy, shell_command};

/// Spawn `command` as a long-running daemon and return immediately.
///
/// With `bind_to_exit` set, the child is killed when this process shuts its
/// runtime down (Ctrl-C in `--auto-shutdown` mode). Otherwise the child is
/// fully detached and survives us.
pub fn spawn_daemon(
    settings: Arc<Settings>,
    name: &'static str,
    command: String,
    quiet: bool,
    bind_to_exit: bool,
) {
    info!(daemon = name, "starting");
    tokio::spawn(async move {
        match monitor_daemon(&settings, name, &command, quiet, bind_to_exit).await {
            Ok(code) if code == 0 => info!(daemon = name, "daemon exited"),
            Ok(code) => warn!(daemon = name, code, "daemon exited with failure"),
            Err(e) => error!(daemon = name, error = %e, "unable to run daemon"),
        }
    });
}

async fn monitor_daemon(
    settings: &Settings,
    name: &'static str,
    command: &str,
    quiet: bool,
    bind_to_exit: bool,
) -> Result<i32> {
    debug!(daemon = name, command, "executing");

    let mut cmd = shell_command(command);
    cmd.current_dir(settings.home_dir())
        .envs(settings.environment())
        .stdin(Stdio::null())
        .stdout(output_policy(quiet))
        .stderr(output_policy(quiet))
        .kill_on_drop(bind_to_exit);

    let mut child = cmd.spawn()?;
    let status = child.wait().await?;
    Ok(status.code().unwrap_or(-1))
}
