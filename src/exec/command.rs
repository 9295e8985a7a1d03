// src/exec/command.rs

//! One-shot external command execution.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::Settings;
use crate::errors::{HadctlError, Result};

/// Stream and lifetime policy for a spawned command.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Silence the child's stdout/stderr instead of inheriting ours.
    pub quiet: bool,
    /// Bytes written to the child's stdin right after spawning, for
    /// commands that stop on an interactive confirmation prompt.
    pub prompt_response: Option<String>,
}

/// Run `command` from the install's home directory and wait for it to exit.
///
/// The command receives the settings environment on top of ours. A non-zero
/// exit status maps to [`HadctlError::CommandFailed`]; failing to spawn at
/// all surfaces as an IO error, so callers can tell the two apart.
pub async fn run_command(
    settings: &Settings,
    command: &str,
    options: &CommandOptions,
) -> Result<()> {
    debug!(command, "executing");

    let mut cmd = shell_command(command);
    cmd.current_dir(settings.home_dir())
        .envs(settings.environment())
        .stdin(if options.prompt_response.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(output_policy(options.quiet))
        .stderr(output_policy(options.quiet));

    let mut child = cmd.spawn()?;

    if let Some(response) = &options.prompt_response {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(response.as_bytes()).await?;
            // Dropping stdin closes the pipe so the child sees EOF.
        }
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(HadctlError::CommandFailed {
            command: command.to_string(),
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

/// Build a shell command appropriate for the platform.
pub(crate) fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

pub(crate) fn output_policy(quiet: bool) -> Stdio {
    if quiet {
        Stdio::null()
    } else {
        Stdio::inherit()
    }
}
