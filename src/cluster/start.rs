// src/cluster/start.rs

//! Daemon startup sequencing.
//!
//! The four daemons start in a fixed order: NameNode, DataNode, JobTracker,
//! TaskTracker. Each is spawned detached, then (if a readiness timeout is
//! configured) the sequencer blocks polling the daemon's HTTP port before
//! moving on. A readiness timeout is a warning, never an error: the next
//! daemon starts regardless.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cluster::readiness::{probe_port, wait_for_port};
use crate::config::Settings;
use crate::errors::Result;
use crate::exec::{run_command, spawn_daemon, CommandOptions};

const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Run `namenode -format` (with automatic confirmation) before starting.
    pub auto_format: bool,
    /// Bind daemon lifetime to this process: daemons die when we do.
    pub bind_to_exit: bool,
    /// Silence output of every spawned command.
    pub quiet: bool,
    pub namenode_timeout: Duration,
    pub datanode_timeout: Duration,
    pub jobtracker_timeout: Duration,
    pub tasktracker_timeout: Duration,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            auto_format: true,
            bind_to_exit: false,
            quiet: false,
            namenode_timeout: DEFAULT_STARTUP_TIMEOUT,
            datanode_timeout: DEFAULT_STARTUP_TIMEOUT,
            jobtracker_timeout: DEFAULT_STARTUP_TIMEOUT,
            tasktracker_timeout: DEFAULT_STARTUP_TIMEOUT,
        }
    }
}

/// One daemon in the startup sequence.
#[derive(Debug, Clone)]
pub struct DaemonSpec {
    pub name: &'static str,
    pub command: String,
    pub bind_address_key: &'static str,
    pub default_port: u16,
    /// Zero disables the readiness probe for this daemon entirely.
    pub timeout: Duration,
}

/// The fixed startup sequence for the given install.
pub fn daemon_plan(settings: &Settings, options: &StartOptions) -> Vec<DaemonSpec> {
    let hdfs = settings.hdfs_script();
    let mapred = settings.mapred_script();
    vec![
        DaemonSpec {
            name: "NameNode",
            command: format!("{hdfs} namenode"),
            bind_address_key: "dfs.http.bindAddress",
            default_port: 50070,
            timeout: options.namenode_timeout,
        },
        DaemonSpec {
            name: "DataNode",
            command: format!("{hdfs} datanode"),
            bind_address_key: "dfs.datanode.http.bindAddress",
            default_port: 50075,
            timeout: options.datanode_timeout,
        },
        DaemonSpec {
            name: "JobTracker",
            command: format!("{mapred} jobtracker"),
            bind_address_key: "mapred.job.tracker.http.bindAddress",
            default_port: 50030,
            timeout: options.jobtracker_timeout,
        },
        DaemonSpec {
            name: "TaskTracker",
            command: format!("{mapred} tasktracker"),
            bind_address_key: "mapred.task.tracker.http.bindAddress",
            default_port: 50060,
            timeout: options.tasktracker_timeout,
        },
    ]
}

/// Format the NameNode (when enabled) and start all daemons in order.
///
/// Returns once the last daemon has been spawned and probed; the daemons
/// themselves keep running under detached monitor tasks.
pub async fn start_cluster(settings: Arc<Settings>, options: &StartOptions) -> Result<()> {
    debug!(environment = ?settings.environment(), "spawn environment");

    if options.auto_format {
        format_namenode(&settings, options).await?;
    }

    for daemon in daemon_plan(&settings, options) {
        spawn_daemon(
            Arc::clone(&settings),
            daemon.name,
            daemon.command.clone(),
            options.quiet,
            options.bind_to_exit,
        );
        if daemon.timeout > Duration::ZERO {
            await_daemon(&settings, &daemon).await?;
        }
    }
    Ok(())
}

async fn await_daemon(settings: &Settings, daemon: &DaemonSpec) -> Result<()> {
    let port = probe_port(settings, daemon.bind_address_key, daemon.default_port)?;
    info!(daemon = daemon.name, port, "waiting for daemon");
    if !wait_for_port(port, daemon.timeout).await {
        warn!(daemon = daemon.name, port, "timed out waiting for daemon");
    }
    Ok(())
}

async fn format_namenode(settings: &Settings, options: &StartOptions) -> Result<()> {
    info!("formatting NameNode");
    let command = format!("{} namenode -format", settings.hdfs_script());
    let run_options = CommandOptions {
        quiet: options.quiet,
        prompt_response: Some("Y\n".to_string()),
    };
    run_command(settings, &command, &run_options)
        .await
        .map_err(|e| anyhow::Error::new(e).context("unable to format NameNode"))?;

    // A leftover VERSION marker makes the DataNode refuse to join a freshly
    // formatted NameNode (HDFS-107), so drop it; a missing file is fine.
    match settings.conf("dfs.data.dir")? {
        Some(data_dir) => {
            let version_file = Path::new(&data_dir).join("current/VERSION");
            debug!(file = %version_file.display(), "removing DataNode version marker");
            let _ = std::fs::remove_file(&version_file);
        }
        None => warn!("unable to determine dfs.data.dir; DataNode may fail to start"),
    }
    Ok(())
}
