// src/resources.rs

//! Extraction of bundled template configuration files.
//!
//! The default pseudo-distributed configuration ships with the tool itself,
//! either as loose files (development layout, `share/<bundle>` next to the
//! executable) or inside a single zip archive (installed layout). Both are
//! expressed as variants of [`ResourceSource`]; any other shape is an
//! unsupported-location error.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{HadctlError, Result};

/// Bundle holding the default pseudo-distributed configuration templates.
pub const DEFAULT_CONF_BUNDLE: &str = "pseudo-distributed-mode";

/// Archive expected next to the executable in the installed layout.
const RESOURCE_ARCHIVE: &str = "hadctl-resources.zip";

/// Fixed chunk size for streaming copies.
const COPY_BUF_SIZE: usize = 4096;

/// Where the tool's own packaged resources live.
#[derive(Debug, Clone)]
pub enum ResourceSource {
    /// Loose files: `<root>/<bundle>/...` on the local filesystem.
    Directory(PathBuf),
    /// A zip archive with entries named `<bundle>/...`.
    Archive(PathBuf),
}

impl ResourceSource {
    /// Locate the packaged resources for the running executable.
    ///
    /// `HADCTL_RESOURCES` overrides the probe and may point at either a
    /// directory or a zip file.
    pub fn locate() -> Result<Self> {
        let root = match std::env::var_os("HADCTL_RESOURCES") {
            Some(root) => PathBuf::from(root),
            None => {
                let exe = std::env::current_exe()?;
                let exe_dir = exe.parent().ok_or_else(|| {
                    HadctlError::UnsupportedResource(format!(
                        "executable {} has no parent directory",
                        exe.display()
                    ))
                })?;
                let share = exe_dir.join("share");
                if share.is_dir() {
                    share
                } else {
                    exe_dir.join(RESOURCE_ARCHIVE)
                }
            }
        };
        Self::classify(root)
    }

    fn classify(root: PathBuf) -> Result<Self> {
        if root.is_dir() {
            Ok(ResourceSource::Directory(root))
        } else if root.is_file() && root.extension().is_some_and(|ext| ext == "zip") {
            Ok(ResourceSource::Archive(root))
        } else {
            Err(HadctlError::UnsupportedResource(root.display().to_string()))
        }
    }

    /// Copy the direct children of `bundle` into `target`.
    ///
    /// Non-recursive: subdirectories (and, in the archive case, any entry
    /// nested below the bundle's top level) are skipped.
    pub fn extract_into(&self, bundle: &str, target: &Path) -> Result<()> {
        match self {
            ResourceSource::Directory(root) => extract_from_directory(&root.join(bundle), target),
            ResourceSource::Archive(archive) => extract_from_archive(archive, bundle, target),
        }
    }
}

fn extract_from_directory(source: &Path, target: &Path) -> Result<()> {
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        debug!(file = %path.display(), "extracting bundled file");
        let mut reader = fs::File::open(&path)?;
        let mut writer = fs::File::create(target.join(file_name))?;
        copy_chunked(&mut reader, &mut writer)?;
    }
    Ok(())
}

fn extract_from_archive(archive_path: &Path, bundle: &str, target: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| HadctlError::UnsupportedResource(format!("{}: {e}", archive_path.display())))?;

    let prefix = format!("{bundle}/");
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            HadctlError::UnsupportedResource(format!("{}: {e}", archive_path.display()))
        })?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        let Some(file_name) = name.strip_prefix(&prefix) else {
            continue;
        };
        if file_name.is_empty() || file_name.contains('/') {
            continue;
        }
        debug!(entry = %name, "extracting archived file");
        let mut writer = fs::File::create(target.join(file_name))?;
        copy_chunked(&mut entry, &mut writer)?;
    }
    Ok(())
}

/// Stream bytes through a small fixed buffer; never buffers whole files.
fn copy_chunked(reader: &mut impl Read, writer: &mut impl Write) -> Result<()> {
    let mut buffer = [0u8; COPY_BUF_SIZE];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
    }
    writer.flush()?;
    Ok(())
}
