//! Manifest manager - main API for manifest operations

use crate::persistence::ManifestPersistence;
use crate::{ConfigError, ConfigResult, FeedManifest};
use std::path::{Path, PathBuf};

/// Overrides `output.path`
pub const ENV_OUTPUT_PATH: &str = "PODFEED_OUTPUT_PATH";

/// Overrides `output.xml_declaration`
pub const ENV_OUTPUT_XML_DECLARATION: &str = "PODFEED_OUTPUT_XML_DECLARATION";

/// Main manifest manager
///
/// Owns the manifest location and resolves relative paths (audio files,
/// feed output) against the manifest's directory.
pub struct ManifestManager {
    persistence: ManifestPersistence,
    base_dir: PathBuf,
}

impl ManifestManager {
    /// Creates a manager for the manifest at `manifest_path`
    pub fn new(manifest_path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let manifest_path = manifest_path.into();
        if manifest_path.as_os_str().is_empty() {
            return Err(ConfigError::PathResolutionError {
                reason: "Manifest path is empty".to_string(),
            });
        }

        let base_dir = match manifest_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            persistence: ManifestPersistence::new(manifest_path),
            base_dir,
        })
    }

    /// Returns the directory relative paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the manifest file path
    pub fn manifest_path(&self) -> &Path {
        self.persistence.path()
    }

    /// Loads the manifest from file
    pub fn load(&self) -> ConfigResult<FeedManifest> {
        self.persistence.load()
    }

    /// Saves the manifest, validating first
    pub fn save(&self, manifest: &FeedManifest) -> ConfigResult<()> {
        self.persistence.save(manifest)
    }

    /// Updates the manifest using a closure
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use podfeed_config::ManifestManager;
    /// # let manager = ManifestManager::new("podcast.toml").unwrap();
    /// manager.update(|manifest| {
    ///     manifest.output.xml_declaration = false;
    /// }).expect("Failed to update manifest");
    /// ```
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut FeedManifest),
    {
        let mut manifest = self.load()?;
        update_fn(&mut manifest);
        self.save(&manifest)
    }

    /// Writes the template manifest if none exists
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.manifest_path().exists() {
            log::info!(
                "Manifest already exists at {}",
                self.manifest_path().display()
            );
            return Ok(false);
        }

        self.persistence.generate_template()?;
        Ok(true)
    }

    /// Validates the manifest file
    ///
    /// Returns all validation messages, empty when valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let manifest = self.load()?;

        match manifest.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }

    /// Loads the manifest and applies environment overrides
    ///
    /// `PODFEED_OUTPUT_PATH` replaces `output.path`;
    /// `PODFEED_OUTPUT_XML_DECLARATION` (`true`/`false`) replaces
    /// `output.xml_declaration`. Unparseable values are ignored with a warning.
    pub fn load_with_env_overrides(&self) -> ConfigResult<FeedManifest> {
        let mut manifest = self.load()?;

        if let Ok(path) = std::env::var(ENV_OUTPUT_PATH) {
            if !path.trim().is_empty() {
                manifest.output.path = Some(PathBuf::from(path));
            }
        }

        if let Ok(value) = std::env::var(ENV_OUTPUT_XML_DECLARATION) {
            match value.trim().parse::<bool>() {
                Ok(enabled) => manifest.output.xml_declaration = enabled,
                Err(_) => log::warn!(
                    "Ignoring {}={:?}: expected true or false",
                    ENV_OUTPUT_XML_DECLARATION,
                    value
                ),
            }
        }

        Ok(manifest)
    }

    /// Renders the feed described by `manifest`
    pub fn render(&self, manifest: &FeedManifest) -> ConfigResult<String> {
        manifest.render(&self.base_dir)
    }

    /// Resolves the manifest's output path against the manifest directory
    pub fn output_path(&self, manifest: &FeedManifest) -> Option<PathBuf> {
        manifest.output.resolve(&self.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_manager() -> (TempDir, ManifestManager) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = ManifestManager::new(temp_dir.path().join("podcast.toml"))
            .expect("Failed to create manager");
        (temp_dir, manager)
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            ManifestManager::new(""),
            Err(ConfigError::PathResolutionError { .. })
        ));
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let manager = ManifestManager::new("podcast.toml").unwrap();
        assert_eq!(manager.base_dir(), Path::new("."));
    }

    #[test]
    fn test_initialize_creates_file() {
        let (_temp_dir, manager) = setup_test_manager();

        assert!(manager.initialize().expect("Should initialize"));
        assert!(manager.manifest_path().exists());
        assert!(!manager.initialize().expect("Should initialize"));
    }

    #[test]
    fn test_update() {
        let (_temp_dir, manager) = setup_test_manager();
        manager.initialize().expect("Should initialize");

        manager
            .update(|manifest| {
                manifest.podcast.title = "Updated".to_string();
            })
            .expect("Should update");

        let loaded = manager.load().expect("Should load");
        assert_eq!(loaded.podcast.title, "Updated");
    }

    #[test]
    fn test_validate_reports_messages() {
        let (_temp_dir, manager) = setup_test_manager();
        std::fs::write(
            manager.manifest_path(),
            "[podcast]\ntitle = \"T\"\nlink = \"demo.url\"\n",
        )
        .expect("Should write");

        let errors = manager.validate().expect("Should validate");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("podcast.link"));
    }

    #[test]
    fn test_output_path_is_relative_to_manifest() {
        let (temp_dir, manager) = setup_test_manager();
        let manifest = FeedManifest::template();

        assert_eq!(
            manager.output_path(&manifest),
            Some(temp_dir.path().join("feed.rss"))
        );
    }

    #[test]
    fn test_env_overrides() {
        let (temp_dir, manager) = setup_test_manager();
        manager.initialize().expect("Should initialize");

        std::env::set_var(ENV_OUTPUT_PATH, "public/podcast.rss");
        std::env::set_var(ENV_OUTPUT_XML_DECLARATION, "false");

        let manifest = manager
            .load_with_env_overrides()
            .expect("Should load with overrides");

        std::env::remove_var(ENV_OUTPUT_PATH);
        std::env::remove_var(ENV_OUTPUT_XML_DECLARATION);

        assert!(!manifest.output.xml_declaration);
        assert_eq!(
            manager.output_path(&manifest),
            Some(temp_dir.path().join("public/podcast.rss"))
        );
    }
}
