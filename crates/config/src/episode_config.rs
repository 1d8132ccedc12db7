//! Episode entries of the manifest

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{ConfigSection, ValidationError, Validator};
use chrono::{DateTime, Utc};
use podfeed_builder::{Duration, Enclosure, Episode, MediaType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[episodes]]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeConfig {
    pub title: String,
    pub publication_date: DateTime<Utc>,

    /// Public URL of the media file
    pub url: String,

    /// Size in bytes; read from `audio_file` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,

    /// Local copy of the media file, relative to the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,

    /// MIME type; inferred from the URL extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// `H:MM:SS`, `M:SS` or whole seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,
}

impl EpisodeConfig {
    /// Creates an entry with only the required fields
    pub fn new(
        title: impl Into<String>,
        publication_date: DateTime<Utc>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            publication_date,
            url: url.into(),
            length: None,
            audio_file: None,
            media_type: None,
            duration: None,
            author: None,
            subtitle: None,
            image: None,
            short_summary: None,
            long_summary: None,
            guid: None,
            explicit: None,
        }
    }

    /// Media type from `media_type`, falling back to the URL extension
    pub fn resolve_media_type(&self) -> Option<MediaType> {
        match &self.media_type {
            Some(mime) => MediaType::from_mime(mime),
            None => MediaType::from_url(&self.url),
        }
    }

    /// Validates the entry, naming fields under `prefix` (e.g. `episodes[2]`)
    pub fn validate_as(&self, prefix: &str) -> Result<(), Vec<ValidationError>> {
        let field = |name: &str| format!("{prefix}.{name}");

        let mut results = vec![
            Validator::not_empty(&self.title, &field("title")),
            Validator::is_url(&self.url, &field("url")),
            Validator::optional(self.image.as_deref(), &field("image"), Validator::is_url),
            Validator::optional(self.guid.as_deref(), &field("guid"), Validator::not_empty),
        ];

        if self.length.is_none() && self.audio_file.is_none() {
            results.push(Err(ValidationError::new(
                field("length"),
                "either length or audio_file is required",
            )));
        }

        if self.resolve_media_type().is_none() {
            let shown = self.media_type.as_deref().unwrap_or(&self.url);
            results.push(Err(ValidationError::with_value(
                field("media_type"),
                "unsupported media type",
                shown,
            )));
        }

        if let Some(duration) = &self.duration {
            if Duration::parse(duration).is_err() {
                results.push(Err(ValidationError::with_value(
                    field("duration"),
                    "must be H:MM:SS, M:SS or seconds",
                    duration,
                )));
            }
        }

        Validator::collect_errors(results)
    }

    /// Builds the episode, reading the media file size from disk if needed
    pub fn to_episode(&self, base_dir: &Path) -> ConfigResult<Episode> {
        let media_type = self.resolve_media_type().ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "episode '{}' has an unsupported media type",
                self.title
            ))
        })?;
        let length = self.resolve_length(base_dir)?;

        let mut episode = Episode::new(
            self.title.as_str(),
            self.publication_date,
            Enclosure::new(self.url.as_str(), length, media_type),
        )
        .contains_explicit_material(self.explicit);

        if let Some(author) = &self.author {
            episode = episode.with_author(author.as_str());
        }
        if let Some(subtitle) = &self.subtitle {
            episode = episode.with_subtitle(subtitle.as_str());
        }
        if let Some(image) = &self.image {
            episode = episode.with_image(image.as_str());
        }
        if let Some(summary) = &self.short_summary {
            episode = episode.with_short_summary(summary.as_str());
        }
        if let Some(notes) = &self.long_summary {
            episode = episode.with_long_summary(notes.as_str());
        }
        if let Some(guid) = &self.guid {
            episode = episode.with_guid(guid.as_str());
        }
        if let Some(duration) = &self.duration {
            episode = episode.with_duration(Duration::parse(duration)?);
        }

        Ok(episode)
    }

    fn resolve_length(&self, base_dir: &Path) -> ConfigResult<u64> {
        if let Some(length) = self.length {
            return Ok(length);
        }

        let file = self.audio_file.as_ref().ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "episode '{}' needs a length or an audio_file",
                self.title
            ))
        })?;
        let path = base_dir.join(file);
        let metadata = fs::metadata(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        log::debug!("Read {} bytes for {}", metadata.len(), path.display());
        Ok(metadata.len())
    }
}

impl ConfigSection for EpisodeConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.validate_as(self.section_name())
    }

    fn section_name(&self) -> &'static str {
        "episode"
    }
}
