// src/lib.rs

pub mod cli;
pub mod cluster;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod procs;
pub mod resources;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::cli::{CliArgs, Command, InstallArgs};
use crate::cluster::{start_cluster, stop_all, StartOptions};
use crate::config::Settings;
use crate::procs::SystemProcessTable;

/// High-level entry point used by `main.rs`.
///
/// Settings are built fresh for each invocation and discarded afterwards;
/// nothing persists between runs except the daemons themselves.
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Start {
            install,
            no_format,
            auto_shutdown,
            quiet,
            namenode_timeout_ms,
            datanode_timeout_ms,
            jobtracker_timeout_ms,
            tasktracker_timeout_ms,
        } => {
            let settings = Arc::new(load_settings(install)?);
            let options = StartOptions {
                auto_format: !no_format,
                bind_to_exit: auto_shutdown,
                quiet,
                namenode_timeout: Duration::from_millis(namenode_timeout_ms),
                datanode_timeout: Duration::from_millis(datanode_timeout_ms),
                jobtracker_timeout: Duration::from_millis(jobtracker_timeout_ms),
                tasktracker_timeout: Duration::from_millis(tasktracker_timeout_ms),
            };
            start_cluster(Arc::clone(&settings), &options).await?;
            if auto_shutdown {
                info!("cluster started; press Ctrl-C to shut the daemons down");
                tokio::signal::ctrl_c().await?;
                info!("stopping daemons bound to this process");
            }
            Ok(())
        }

        Command::Stop { quiet } => {
            let mut table = SystemProcessTable::new();
            let stopped = stop_all(&mut table, quiet)?;
            info!(stopped, "daemons signalled");
            Ok(())
        }

        Command::CopyFromLocal {
            install,
            source,
            target,
            no_clean,
            quiet,
        } => {
            let settings = load_settings(install)?;
            cluster::dfs::copy_from_local(&settings, &source, target, !no_clean, quiet).await?;
            Ok(())
        }

        Command::CopyToLocal {
            install,
            target,
            source,
            no_clean,
            quiet,
        } => {
            let settings = load_settings(install)?;
            cluster::dfs::copy_to_local(&settings, source, &target, !no_clean, quiet).await?;
            Ok(())
        }

        Command::SubmitJob {
            install,
            jar,
            params,
            quiet,
        } => {
            let settings = load_settings(install)?;
            cluster::dfs::submit_job(&settings, &jar, &params, quiet).await?;
            Ok(())
        }
    }
}

fn load_settings(install: InstallArgs) -> errors::Result<Settings> {
    Settings::new(install.hadoop_home, install.conf_dir)
}
