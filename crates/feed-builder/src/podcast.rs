//! Podcast description and feed assembly

use crate::category::{merge_categories, Category, Owner};
use crate::episode::Episode;
use crate::error::FeedResult;
use crate::language::Language;
use crate::tags;
use podfeed_xml::{XmlDocument, XmlNode, XmlResult};

/// A podcast channel and its episodes.
///
/// Only `title` and `link` are required; every other field is omitted from
/// the feed while unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    title: String,
    link: String,
    block: Option<bool>,
    explicit: Option<bool>,
    language_code: Option<String>,
    author: Option<String>,
    copyright: Option<String>,
    summary: Option<String>,
    subtitle: Option<String>,
    owner: Option<Owner>,
    image_link: Option<String>,
    categories: Vec<Category>,
    episodes: Vec<Episode>,
}

impl Podcast {
    /// Creates a podcast with its mandatory fields
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            block: None,
            explicit: None,
            language_code: None,
            author: None,
            copyright: None,
            summary: None,
            subtitle: None,
            owner: None,
            image_link: None,
            categories: Vec::new(),
            episodes: Vec::new(),
        }
    }

    /// `Some(true)` hides the podcast from the iTunes directory; anything
    /// else writes no `itunes:block` element at all
    pub fn block_from_itunes(mut self, block: Option<bool>) -> Self {
        self.block = block;
        self
    }

    /// `Some(true)` renders `yes`, `Some(false)` renders `no`, `None` omits the element
    pub fn contains_explicit_material(mut self, explicit: Option<bool>) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn with_language(self, language: Language) -> Self {
        self.with_language_code(language.code())
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_copyright_info(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Written to both `itunes:summary` and `description`
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_owner(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.owner = Some(Owner::new(name, email));
        self
    }

    /// Sets the channel artwork URL
    pub fn with_image(mut self, link: impl Into<String>) -> Self {
        self.image_link = Some(link.into());
        self
    }

    /// Adds a category entry; entries sharing a name are merged on output
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_category_name(
        self,
        name: impl Into<String>,
        subcategory: Option<impl Into<String>>,
    ) -> Self {
        let category = match subcategory {
            Some(subcategory) => Category::with_subcategory(name, subcategory),
            None => Category::new(name),
        };
        self.with_category(category)
    }

    pub fn with_episode(mut self, episode: Episode) -> Self {
        self.episodes.push(episode);
        self
    }

    /// Appends several episodes
    pub fn with_episodes(mut self, episodes: impl IntoIterator<Item = Episode>) -> Self {
        self.episodes.extend(episodes);
        self
    }

    /// Replaces all episodes
    pub fn replace_episodes(mut self, episodes: Vec<Episode>) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns episodes in the order they were added
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Returns episodes newest first. Episodes published at the same
    /// instant keep the order they were added in.
    pub fn episodes_newest_first(&self) -> Vec<&Episode> {
        let mut sorted: Vec<&Episode> = self.episodes.iter().collect();
        sorted.sort_by(|a, b| b.publication_date().cmp(&a.publication_date()));
        sorted
    }

    /// Builds the complete feed document
    pub fn document(&self) -> FeedResult<XmlDocument> {
        let mut document = XmlDocument::with_root_attributes(&tags::RSS_ATTRIBUTES)?;
        let channel = document.set_root(tags::RSS)?.add_child(tags::CHANNEL)?;

        self.append_metadata(channel)?;
        merge_categories(channel, &self.categories)?;
        self.append_flags(channel)?;

        for episode in self.episodes_newest_first() {
            channel.append_child(episode.node()?);
        }

        log::debug!(
            "Assembled feed {:?}: {} categories, {} episodes",
            self.title,
            channel.children_named(tags::ITUNES_CATEGORY).count(),
            self.episodes.len()
        );
        Ok(document)
    }

    /// Renders the feed, including the XML declaration
    pub fn feed(&self) -> FeedResult<String> {
        Ok(self.document()?.render()?)
    }

    fn append_metadata(&self, channel: &mut XmlNode) -> XmlResult<()> {
        channel.add_text_child(tags::TITLE, self.title.as_str())?;
        channel.add_text_child(tags::LINK, self.link.as_str())?;
        add_optional(channel, tags::LANGUAGE, &self.language_code)?;
        add_optional(channel, tags::COPYRIGHT, &self.copyright)?;
        add_optional(channel, tags::ITUNES_SUBTITLE, &self.subtitle)?;
        add_optional(channel, tags::ITUNES_AUTHOR, &self.author)?;
        add_optional(channel, tags::ITUNES_SUMMARY, &self.summary)?;
        add_optional(channel, tags::DESCRIPTION, &self.summary)?;

        if let Some(owner) = &self.owner {
            owner.append_to(channel)?;
        }
        if let Some(image) = &self.image_link {
            channel.add_child_with(tags::ITUNES_IMAGE, None, &[(tags::HREF, image.as_str())])?;
        }
        Ok(())
    }

    fn append_flags(&self, channel: &mut XmlNode) -> XmlResult<()> {
        if let Some(explicit) = self.explicit {
            channel.add_text_child(tags::ITUNES_EXPLICIT, tags::explicit_text(explicit))?;
        }
        // only a positive block is written
        if self.block == Some(true) {
            channel.add_text_child(tags::ITUNES_BLOCK, "Yes")?;
        }
        Ok(())
    }
}

fn add_optional(channel: &mut XmlNode, name: &str, value: &Option<String>) -> XmlResult<()> {
    if let Some(value) = value {
        channel.add_text_child(name, value.as_str())?;
    }
    Ok(())
}
