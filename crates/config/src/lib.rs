//! Podfeed manifest system
//!
//! A TOML manifest describes a podcast channel and its episodes. This crate
//! loads, validates and saves manifests, and turns them into rendered feeds.
//!
//! # Architecture
//!
//! - **Sections**: `output`, `podcast` and each `[[episodes]]` entry implement `ConfigSection`
//! - **Warn on load, fail on save**: invalid manifests still load, but are never written
//! - **Atomic writes**: manifests and feeds are never left half written
//!
//! # Example
//!
//! ```rust
//! use podfeed_config::FeedManifest;
//! use std::path::Path;
//!
//! let manifest: FeedManifest = toml::from_str(r#"
//!     [podcast]
//!     title = "My Podcast"
//!     link = "https://example.com/feed.rss"
//!
//!     [[episodes]]
//!     title = "Pilot"
//!     publication_date = "2024-01-01T12:00:00Z"
//!     url = "https://example.com/pilot.mp3"
//!     length = 5000000
//! "#).expect("Failed to parse manifest");
//!
//! let feed = manifest.render(Path::new(".")).expect("Failed to render");
//! assert!(feed.contains("<title>Pilot</title>"));
//! ```

mod episode_config;
mod error;
mod manager;
mod output_config;
mod persistence;
mod podcast_config;
mod validation;

pub use episode_config::EpisodeConfig;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ManifestManager;
pub use output_config::OutputConfig;
pub use persistence::{write_atomic, ManifestPersistence};
pub use podcast_config::PodcastConfig;
pub use validation::{ConfigSection, Validator};

use chrono::{TimeZone, Utc};
use podfeed_builder::{Category, FeedError, Owner, Podcast};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current manifest format version
pub const MANIFEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    MANIFEST_VERSION
}

/// Root manifest structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedManifest {
    /// Manifest format version
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub output: OutputConfig,

    pub podcast: PodcastConfig,

    #[serde(default)]
    pub episodes: Vec<EpisodeConfig>,
}

impl FeedManifest {
    /// Creates a manifest with default output settings and no episodes
    pub fn new(podcast: PodcastConfig) -> Self {
        Self {
            version: MANIFEST_VERSION,
            output: OutputConfig::default(),
            podcast,
            episodes: Vec::new(),
        }
    }

    /// Sample manifest written by `init`
    pub fn template() -> Self {
        let mut podcast = PodcastConfig::new("My Podcast", "https://example.com/feed.rss");
        podcast.language = Some("en".to_string());
        podcast.author = Some("Jane Appleseed".to_string());
        podcast.summary = Some("A show about things.".to_string());
        podcast.image = Some("https://example.com/artwork.jpg".to_string());
        podcast.explicit = Some(false);
        podcast.owner = Some(Owner::new("Jane Appleseed", "jane@example.com"));
        podcast.categories = vec![Category::with_subcategory("Arts", "Books")];

        let mut episode = EpisodeConfig::new(
            "Episode 1",
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
            "https://example.com/episodes/1.mp3",
        );
        episode.length = Some(1_000_000);
        episode.duration = Some("0:30:00".to_string());
        episode.short_summary = Some("The first episode.".to_string());

        Self {
            output: OutputConfig {
                path: Some("feed.rss".into()),
                ..OutputConfig::default()
            },
            episodes: vec![episode],
            ..Self::new(podcast)
        }
    }

    /// Validates every section
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Validator::in_range(self.version, 1, MANIFEST_VERSION, "version") {
            errors.push(e);
        }

        if let Err(mut e) = self.output.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.podcast.validate() {
            errors.append(&mut e);
        }

        for (index, episode) in self.episodes.iter().enumerate() {
            if let Err(mut e) = episode.validate_as(&format!("episodes[{index}]")) {
                errors.append(&mut e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the podcast; `base_dir` anchors relative `audio_file` paths
    pub fn to_podcast(&self, base_dir: &Path) -> ConfigResult<Podcast> {
        let episodes = self
            .episodes
            .iter()
            .map(|episode| episode.to_episode(base_dir))
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(self.podcast.to_podcast().with_episodes(episodes))
    }

    /// Renders the feed, honoring `output.xml_declaration`
    pub fn render(&self, base_dir: &Path) -> ConfigResult<String> {
        let mut document = self.to_podcast(base_dir)?.document()?;
        document.set_declaration(self.output.xml_declaration);
        Ok(document.render().map_err(FeedError::from)?)
    }
}
