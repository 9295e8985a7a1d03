// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HadctlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported resource location: {0}")]
    UnsupportedResource(String),

    #[error("Command `{command}` exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// The external tool ran but reported failure through its own exit
    /// status. Kept separate from [`HadctlError::Io`] so job submission can
    /// tell "the job failed" apart from "we could not run the submitter".
    #[error("Hadoop job failed (exit status {0})")]
    JobFailed(i32),

    #[error("Process table error: {0}")]
    ProcessTable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, HadctlError>;
