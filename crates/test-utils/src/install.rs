//! Throwaway Hadoop installs for integration tests.
//!
//! The control scripts are stub shell scripts, so tests can exercise the
//! orchestrator's spawning, prompting and environment handling without a
//! real Hadoop distribution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use hadctl::config::Settings;

/// A temp Hadoop home + conf dir pair, deleted on drop.
pub struct FakeInstall {
    pub home: TempDir,
    pub conf: TempDir,
}

impl FakeInstall {
    /// Create an install whose combined `bin/hadoop` script runs `body`
    /// (a `sh` fragment; `"$@"`-style expansions work as usual).
    pub fn with_script(body: &str) -> Result<Self> {
        let home = tempfile::tempdir()?;
        let conf = tempfile::tempdir()?;
        write_script(&home.path().join("bin/hadoop"), body)?;
        Ok(Self { home, conf })
    }

    /// Write `hdfs-site.xml` into the conf directory.
    pub fn with_site_xml(self, xml: &str) -> Result<Self> {
        fs::write(self.conf.path().join("hdfs-site.xml"), xml)?;
        Ok(self)
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings::new(
            self.home.path().to_path_buf(),
            Some(self.conf.path().to_path_buf()),
        )?)
    }

    /// Path of a scratch file under the home directory, for scripts that
    /// record their invocations.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}

fn write_script(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n"))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}
