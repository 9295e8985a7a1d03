// src/config/settings.rs

//! Per-invocation view of a Hadoop install.
//!
//! [`Settings`] owns the home and configuration directories, the environment
//! every spawned command receives, and a lazily parsed copy of the installed
//! site configuration. It is constructed once per command execution and is
//! read-only afterwards, so it can be shared freely with the detached daemon
//! monitors.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::site::parse_site_xml;
use crate::config::subst::substitute;
use crate::errors::{HadctlError, Result};
use crate::resources::{ResourceSource, DEFAULT_CONF_BUNDLE};

/// Name of the installed configuration document under the conf directory.
const SITE_FILE: &str = "hdfs-site.xml";

/// Default DFS endpoint when `fs.default.name` is not configured.
const DEFAULT_DFS_URI: &str = "hdfs://localhost:9000";

#[derive(Debug)]
pub struct Settings {
    home_dir: PathBuf,
    conf_dir: PathBuf,
    environment: HashMap<String, String>,
    configurations: OnceCell<HashMap<String, String>>,
}

impl Settings {
    /// Build settings for the install at `home_dir`.
    ///
    /// `home_dir` must exist. If `conf_dir` is not given, the bundled
    /// pseudo-distributed template is extracted into a directory under the OS
    /// temp dir and used instead. That directory is never cleaned up here;
    /// OS temp cleanup bounds the leak.
    pub fn new(home_dir: PathBuf, conf_dir: Option<PathBuf>) -> Result<Self> {
        if !home_dir.exists() {
            return Err(HadctlError::Config(format!(
                "Hadoop home directory {} doesn't exist",
                home_dir.display()
            )));
        }

        let conf_dir = match conf_dir {
            Some(dir) => dir,
            None => {
                let dir = std::env::temp_dir().join("hadctl.conf");
                fs::create_dir_all(&dir)?;
                debug!(conf_dir = %dir.display(), "synthesizing default configuration");
                let source = ResourceSource::locate()?;
                source.extract_into(DEFAULT_CONF_BUNDLE, &dir)?;
                dir
            }
        };

        let environment = init_environment(&home_dir, &conf_dir)?;

        Ok(Self {
            home_dir,
            conf_dir,
            environment,
            configurations: OnceCell::new(),
        })
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn conf_dir(&self) -> &Path {
        &self.conf_dir
    }

    /// Environment passed to every spawned command.
    pub fn environment(&self) -> &HashMap<String, String> {
        &self.environment
    }

    /// Read a configuration value, substituting `${...}` references.
    ///
    /// The site file is parsed on first access; every read re-substitutes
    /// against the current environment, resolved values are never cached.
    pub fn conf(&self, key: &str) -> Result<Option<String>> {
        let configurations = self.configurations()?;
        match configurations.get(key) {
            Some(raw) => substitute(raw, configurations).map(Some),
            None => Ok(None),
        }
    }

    pub fn conf_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.conf(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// DFS endpoint with any trailing slash stripped.
    pub fn dfs_uri(&self) -> Result<String> {
        let uri = self.conf_or("fs.default.name", DEFAULT_DFS_URI)?;
        Ok(uri.strip_suffix('/').unwrap_or(&uri).to_string())
    }

    /// Control script for HDFS daemons, relative to the home directory.
    ///
    /// Newer installs split the combined `bin/hadoop` script; prefer the
    /// component script when it exists.
    pub fn hdfs_script(&self) -> String {
        self.resolve_script("bin/hdfs")
    }

    /// Control script for MapReduce daemons, relative to the home directory.
    pub fn mapred_script(&self) -> String {
        self.resolve_script("bin/mapred")
    }

    fn resolve_script(&self, preferred: &str) -> String {
        if self.home_dir.join(preferred).exists() {
            preferred.to_string()
        } else {
            "bin/hadoop".to_string()
        }
    }

    fn configurations(&self) -> Result<&HashMap<String, String>> {
        self.configurations.get_or_try_init(|| {
            let site_file = self.conf_dir.join(SITE_FILE);
            if !site_file.exists() {
                return Ok(HashMap::new());
            }
            let text = fs::read_to_string(&site_file)?;
            parse_site_xml(&text).map_err(|e| {
                HadctlError::Config(format!("unable to parse {}: {e}", site_file.display()))
            })
        })
    }
}

/// Environment contract: Java home plus canonical install/conf locations.
fn init_environment(home_dir: &Path, conf_dir: &Path) -> Result<HashMap<String, String>> {
    let mut environment = HashMap::new();
    environment.insert(
        "JAVA_HOME".to_string(),
        std::env::var("JAVA_HOME").unwrap_or_default(),
    );
    environment.insert(
        "HADOOP_HOME".to_string(),
        fs::canonicalize(home_dir)?.to_string_lossy().into_owned(),
    );
    environment.insert(
        "HADOOP_CONF_DIR".to_string(),
        fs::canonicalize(conf_dir)?.to_string_lossy().into_owned(),
    );
    Ok(environment)
}
