//! Episode description and its `item` element

use crate::duration::Duration;
use crate::error::FeedResult;
use crate::media::Enclosure;
use crate::tags;
use chrono::{DateTime, Utc};
use podfeed_xml::{XmlNode, XmlText};

/// A single episode of a podcast.
///
/// Built with consuming setters; unset optional fields are left out of the
/// generated `item`.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    title: String,
    publication_date: DateTime<Utc>,
    enclosure: Enclosure,
    author: Option<String>,
    subtitle: Option<String>,
    image_link: Option<String>,
    short_summary: Option<String>,
    long_summary: Option<String>,
    explicit: Option<bool>,
    guid: Option<String>,
    duration: Option<Duration>,
}

impl Episode {
    /// Creates an episode with its mandatory fields
    pub fn new(
        title: impl Into<String>,
        publication_date: DateTime<Utc>,
        enclosure: Enclosure,
    ) -> Self {
        Self {
            title: title.into(),
            publication_date,
            enclosure,
            author: None,
            subtitle: None,
            image_link: None,
            short_summary: None,
            long_summary: None,
            explicit: None,
            guid: None,
            duration: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the episode artwork URL
    pub fn with_image(mut self, link: impl Into<String>) -> Self {
        self.image_link = Some(link.into());
        self
    }

    /// Plain-text summary, written to `itunes:summary` and `description`
    pub fn with_short_summary(mut self, summary: impl Into<String>) -> Self {
        self.short_summary = Some(summary.into());
        self
    }

    /// HTML show notes, written to `content:encoded` as CDATA
    pub fn with_long_summary(mut self, summary: impl Into<String>) -> Self {
        self.long_summary = Some(summary.into());
        self
    }

    /// `Some(true)` renders `yes`, `Some(false)` renders `no`, `None` omits the element
    pub fn contains_explicit_material(mut self, explicit: Option<bool>) -> Self {
        self.explicit = explicit;
        self
    }

    /// Overrides the GUID, which otherwise defaults to the enclosure URL
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_date(&self) -> DateTime<Utc> {
        self.publication_date
    }

    pub fn enclosure(&self) -> &Enclosure {
        &self.enclosure
    }

    /// Returns the GUID written to the feed
    pub fn guid(&self) -> &str {
        self.guid.as_deref().unwrap_or(&self.enclosure.url)
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Builds the `item` subtree for this episode
    pub fn node(&self) -> FeedResult<XmlNode> {
        let mut item = XmlNode::new(tags::ITEM)?;
        item.add_text_child(tags::TITLE, self.title.as_str())?;

        if let Some(author) = &self.author {
            item.add_text_child(tags::ITUNES_AUTHOR, author.as_str())?;
        }
        if let Some(subtitle) = &self.subtitle {
            item.add_text_child(tags::ITUNES_SUBTITLE, subtitle.as_str())?;
        }
        if let Some(summary) = &self.short_summary {
            item.add_text_child(tags::ITUNES_SUMMARY, summary.as_str())?;
            item.add_text_child(tags::DESCRIPTION, summary.as_str())?;
        }
        if let Some(notes) = &self.long_summary {
            item.add_child_with(
                tags::CONTENT_ENCODED,
                Some(XmlText::cdata(notes.as_str())),
                &[],
            )?;
        }
        if let Some(image) = &self.image_link {
            item.add_child_with(tags::ITUNES_IMAGE, None, &[(tags::HREF, image.as_str())])?;
        }

        let length = self.enclosure.length.to_string();
        item.add_child_with(
            tags::ENCLOSURE,
            None,
            &[
                (tags::URL, self.enclosure.url.as_str()),
                (tags::LENGTH, length.as_str()),
                (tags::TYPE, self.enclosure.media_type.mime()),
            ],
        )?;

        item.add_text_child(tags::GUID, self.guid())?;
        item.add_text_child(
            tags::PUB_DATE,
            self.publication_date.format(tags::PUB_DATE_FORMAT).to_string(),
        )?;

        if let Some(duration) = self.duration {
            item.add_text_child(tags::ITUNES_DURATION, duration.as_hms())?;
        }
        if let Some(explicit) = self.explicit {
            item.add_text_child(tags::ITUNES_EXPLICIT, tags::explicit_text(explicit))?;
        }

        Ok(item)
    }
}
