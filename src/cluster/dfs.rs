// src/cluster/dfs.rs

//! Data movement between the local filesystem and the DFS, plus job
//! submission. All three are opaque `bin/hadoop` invocations; this module
//! only prepares paths and interprets exit statuses.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{info, warn};

use crate::config::Settings;
use crate::errors::{HadctlError, Result};
use crate::exec::{run_command, CommandOptions};

/// Copy a local file or directory into the DFS.
///
/// The target defaults to the canonical source path. With `auto_clean`, the
/// DFS target is removed first; a failed clean is only a warning (the target
/// usually just doesn't exist yet).
pub async fn copy_from_local(
    settings: &Settings,
    source: &Path,
    target: Option<String>,
    auto_clean: bool,
    quiet: bool,
) -> Result<()> {
    if !source.exists() {
        return Err(HadctlError::Other(anyhow!(
            "copy source {} doesn't exist",
            source.display()
        )));
    }
    let canonical_source = fs::canonicalize(source)?;
    let target = match target.filter(|t| !t.trim().is_empty()) {
        Some(target) => target,
        None => canonical_source.to_string_lossy().into_owned(),
    };

    let options = CommandOptions {
        quiet,
        prompt_response: None,
    };
    if auto_clean {
        let dfs_target = format!("{}{}", settings.dfs_uri()?, target);
        info!(target = %target, "cleaning DFS target");
        let clean = format!("bin/hadoop fs -rmr {dfs_target}");
        if let Err(e) = run_command(settings, &clean, &options).await {
            warn!(target = %dfs_target, error = %e, "unable to clean DFS target");
        }
    }

    info!(source = %canonical_source.display(), target = %target, "copying into DFS");
    let copy = format!(
        "bin/hadoop fs -copyFromLocal {} {}",
        canonical_source.display(),
        target
    );
    run_command(settings, &copy, &options).await
}

/// Copy a DFS file or directory out to the local filesystem.
///
/// The DFS source defaults to the absolute target path. With `auto_clean`,
/// an existing local target is deleted first.
pub async fn copy_to_local(
    settings: &Settings,
    source: Option<String>,
    target: &Path,
    auto_clean: bool,
    quiet: bool,
) -> Result<()> {
    let absolute_target = absolutize(target)?;
    let source = match source.filter(|s| !s.trim().is_empty()) {
        Some(source) => source,
        None => absolute_target.to_string_lossy().into_owned(),
    };

    if auto_clean && target.exists() {
        info!(target = %target.display(), "cleaning local target");
        if target.is_dir() {
            fs::remove_dir_all(target)?;
        } else {
            fs::remove_file(target)?;
        }
    }

    info!(source = %source, target = %absolute_target.display(), "copying out of DFS");
    let copy = format!(
        "bin/hadoop fs -copyToLocal {} {}",
        source,
        absolute_target.display()
    );
    let options = CommandOptions {
        quiet,
        prompt_response: None,
    };
    run_command(settings, &copy, &options).await
}

/// Submit a job jar to the running cluster.
///
/// A non-zero exit from the submitter means the job itself failed
/// ([`HadctlError::JobFailed`]); any other failure means we couldn't submit.
pub async fn submit_job(
    settings: &Settings,
    jar: &Path,
    parameters: &str,
    quiet: bool,
) -> Result<()> {
    let command = format!("bin/hadoop jar {} {}", jar.display(), parameters)
        .trim_end()
        .to_string();
    info!(jar = %jar.display(), "submitting job");
    let options = CommandOptions {
        quiet,
        prompt_response: None,
    };
    match run_command(settings, &command, &options).await {
        Err(HadctlError::CommandFailed { code, .. }) => Err(HadctlError::JobFailed(code)),
        other => other,
    }
}

/// Like `fs::canonicalize`, but tolerates a path that doesn't exist yet by
/// resolving it against the current directory instead.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(fs::canonicalize(path)?)
    } else if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
