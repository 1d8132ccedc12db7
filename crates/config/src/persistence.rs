//! File system persistence for manifests and rendered feeds
//!
//! This module handles reading and writing files with:
//! - Atomic writes (no partial/corrupted files)
//! - Automatic backups before overwrites
//! - Directory creation

use crate::error::join_errors;
use crate::{ConfigError, ConfigResult, FeedManifest};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles manifest file persistence
pub struct ManifestPersistence {
    manifest_path: PathBuf,
}

impl ManifestPersistence {
    /// Creates a new persistence handler for the given manifest path
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    /// Returns the manifest path
    pub fn path(&self) -> &Path {
        &self.manifest_path
    }

    /// Loads the manifest from file
    ///
    /// A missing file is `NotFound`; an empty file is treated as corrupted.
    /// Validation problems are logged but do not fail the load.
    pub fn load(&self) -> ConfigResult<FeedManifest> {
        if !self.manifest_path.exists() {
            return Err(ConfigError::NotFound {
                path: self.manifest_path.clone(),
            });
        }

        let contents =
            fs::read_to_string(&self.manifest_path).map_err(|e| ConfigError::ReadError {
                path: self.manifest_path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Err(ConfigError::ReadError {
                path: self.manifest_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Manifest file is empty or contains only whitespace",
                ),
            });
        }

        let manifest: FeedManifest =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: self.manifest_path.clone(),
                source: e,
            })?;

        if let Err(errors) = manifest.validate() {
            log::warn!("Manifest validation warnings: {}", join_errors(&errors));
        }

        Ok(manifest)
    }

    /// Saves the manifest atomically, backing up the previous version
    pub fn save(&self, manifest: &FeedManifest) -> ConfigResult<()> {
        if let Err(errors) = manifest.validate() {
            return Err(ConfigError::ValidationError(join_errors(&errors)));
        }

        if self.manifest_path.exists() {
            self.backup_manifest()?;
        }

        let toml_string = toml::to_string_pretty(manifest).map_err(ConfigError::SerializeError)?;
        write_atomic(&self.manifest_path, &toml_string)?;

        log::info!("Manifest saved to {}", self.manifest_path.display());
        Ok(())
    }

    /// Path of the backup written before each overwrite
    pub fn backup_path(&self) -> PathBuf {
        self.manifest_path.with_extension("toml.backup")
    }

    fn backup_manifest(&self) -> ConfigResult<()> {
        let backup_path = self.backup_path();
        fs::copy(&self.manifest_path, &backup_path)
            .map_err(|e| ConfigError::BackupError { source: e })?;
        log::debug!("Backed up manifest to {}", backup_path.display());
        Ok(())
    }

    /// Writes the sample manifest
    pub fn generate_template(&self) -> ConfigResult<()> {
        self.save(&FeedManifest::template())?;
        log::info!(
            "Generated template manifest at {}",
            self.manifest_path.display()
        );
        Ok(())
    }
}

/// Writes `contents` to `path` through a temporary file and an atomic rename
///
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> ConfigResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_directory_exists(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(ConfigError::IoError)?;
    temp_file
        .write_all(contents.as_bytes())
        .map_err(ConfigError::IoError)?;
    temp_file.flush().map_err(ConfigError::IoError)?;

    temp_file.persist(path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn ensure_directory_exists(path: &Path) -> ConfigResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| ConfigError::DirectoryCreationError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Created directory: {}", path.display());
    }
    Ok(())
}
