// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! One subcommand per cluster operation. Every operation that talks to the
//! install (everything except `stop`) shares the [`InstallArgs`] group.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `hadctl`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hadctl",
    version,
    about = "Start, stop and submit jobs against a pseudo-distributed Hadoop cluster.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HADCTL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Location of the Hadoop install this invocation operates on.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Hadoop home directory (must exist).
    #[arg(long, value_name = "PATH")]
    pub hadoop_home: PathBuf,

    /// Hadoop configuration directory.
    ///
    /// If omitted, a default pseudo-distributed configuration is extracted
    /// into a temp directory and used instead.
    #[arg(long, value_name = "PATH")]
    pub conf_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format the NameNode (unless disabled) and start all four daemons.
    Start {
        #[command(flatten)]
        install: InstallArgs,

        /// Skip the automatic `namenode -format` step.
        #[arg(long)]
        no_format: bool,

        /// Keep running after startup and kill the daemons on Ctrl-C.
        ///
        /// Without this flag the daemons are fully detached and survive
        /// `hadctl` exiting.
        #[arg(long)]
        auto_shutdown: bool,

        /// Suppress output of the spawned Hadoop commands.
        #[arg(long)]
        quiet: bool,

        /// How long to wait for the NameNode to accept connections.
        /// 0 disables the readiness probe entirely.
        #[arg(long, value_name = "MS", default_value_t = 60_000)]
        namenode_timeout_ms: u64,

        /// How long to wait for the DataNode. 0 disables the probe.
        #[arg(long, value_name = "MS", default_value_t = 60_000)]
        datanode_timeout_ms: u64,

        /// How long to wait for the JobTracker. 0 disables the probe.
        #[arg(long, value_name = "MS", default_value_t = 60_000)]
        jobtracker_timeout_ms: u64,

        /// How long to wait for the TaskTracker. 0 disables the probe.
        #[arg(long, value_name = "MS", default_value_t = 60_000)]
        tasktracker_timeout_ms: u64,
    },

    /// Find running Hadoop daemons in the process table and terminate them.
    Stop {
        /// Suppress output of the kill commands.
        #[arg(long)]
        quiet: bool,
    },

    /// Copy a local file or directory into the DFS.
    CopyFromLocal {
        #[command(flatten)]
        install: InstallArgs,

        /// Local file/directory to copy.
        source: PathBuf,

        /// Target DFS path. Defaults to the canonical source path.
        #[arg(long, value_name = "PATH")]
        target: Option<String>,

        /// Do not remove the DFS target before copying.
        #[arg(long)]
        no_clean: bool,

        /// Suppress output of the spawned Hadoop commands.
        #[arg(long)]
        quiet: bool,
    },

    /// Copy a DFS file or directory out to the local filesystem.
    CopyToLocal {
        #[command(flatten)]
        install: InstallArgs,

        /// Local target file/directory.
        target: PathBuf,

        /// DFS source path. Defaults to the absolute target path.
        #[arg(long, value_name = "PATH")]
        source: Option<String>,

        /// Do not remove the local target before copying.
        #[arg(long)]
        no_clean: bool,

        /// Suppress output of the spawned Hadoop commands.
        #[arg(long)]
        quiet: bool,
    },

    /// Submit a job jar to the running cluster.
    SubmitJob {
        #[command(flatten)]
        install: InstallArgs,

        /// Jar file containing the job.
        #[arg(long, value_name = "PATH")]
        jar: PathBuf,

        /// Free-form parameters passed through to the job.
        #[arg(long, value_name = "ARGS", default_value = "")]
        params: String,

        /// Suppress the job's own output.
        #[arg(long)]
        quiet: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
