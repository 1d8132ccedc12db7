//! Podcast (channel) section of the manifest

use crate::validation::{ConfigSection, ValidationError, Validator};
use podfeed_builder::{Category, Owner, Podcast};
use serde::{Deserialize, Serialize};

/// Channel-level metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PodcastConfig {
    pub title: String,
    pub link: String,

    /// Language code such as `en` or `pt-BR`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Artwork URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,

    /// Only `true` has an effect on the feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

impl PodcastConfig {
    /// Creates a section with only the required fields
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            language: None,
            author: None,
            copyright: None,
            summary: None,
            subtitle: None,
            image: None,
            explicit: None,
            block: None,
            owner: None,
            categories: Vec::new(),
        }
    }

    /// Builds the channel part of a podcast, without episodes
    pub fn to_podcast(&self) -> Podcast {
        let mut podcast = Podcast::new(self.title.as_str(), self.link.as_str())
            .contains_explicit_material(self.explicit)
            .block_from_itunes(self.block);

        if let Some(language) = &self.language {
            podcast = podcast.with_language_code(language.as_str());
        }
        if let Some(author) = &self.author {
            podcast = podcast.with_author(author.as_str());
        }
        if let Some(copyright) = &self.copyright {
            podcast = podcast.with_copyright_info(copyright.as_str());
        }
        if let Some(summary) = &self.summary {
            podcast = podcast.with_summary(summary.as_str());
        }
        if let Some(subtitle) = &self.subtitle {
            podcast = podcast.with_subtitle(subtitle.as_str());
        }
        if let Some(owner) = &self.owner {
            podcast = podcast.with_owner(owner.name.as_str(), owner.email.as_str());
        }
        if let Some(image) = &self.image {
            podcast = podcast.with_image(image.as_str());
        }

        self.categories
            .iter()
            .cloned()
            .fold(podcast, Podcast::with_category)
    }
}

impl ConfigSection for PodcastConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::not_empty(&self.title, "podcast.title"),
            Validator::is_url(&self.link, "podcast.link"),
            Validator::optional(
                self.language.as_deref(),
                "podcast.language",
                Validator::is_language,
            ),
            Validator::optional(self.image.as_deref(), "podcast.image", Validator::is_url),
        ];

        if let Some(owner) = &self.owner {
            results.push(Validator::not_empty(&owner.name, "podcast.owner.name"));
            results.push(Validator::is_email(&owner.email, "podcast.owner.email"));
        }

        for (index, category) in self.categories.iter().enumerate() {
            let field = format!("podcast.categories[{index}]");
            results.push(Validator::not_empty(&category.name, &format!("{field}.name")));
            results.push(Validator::optional(
                category.subcategory.as_deref(),
                &format!("{field}.subcategory"),
                Validator::not_empty,
            ));
        }

        Validator::collect_errors(results)
    }

    fn section_name(&self) -> &'static str {
        "podcast"
    }
}
