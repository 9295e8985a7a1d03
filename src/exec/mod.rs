// src/exec/mod.rs

//! Spawning of external Hadoop commands.

pub mod command;
pub mod daemon;

pub use command::{run_command, CommandOptions};
pub use daemon::spawn_daemon;
