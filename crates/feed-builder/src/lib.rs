// crates/feed-builder/src/lib.rs
//! Podcast RSS feed builder
//!
//! Turns a podcast description into an RSS 2.0 document with the iTunes
//! podcast extensions:
//! - Channel metadata, owner block and artwork
//! - Hierarchical iTunes categories (entries sharing a name are merged)
//! - Explicit and block flags
//! - One `item` per episode, newest first
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use podfeed_builder::{Category, Enclosure, Episode, Language, MediaType, Podcast};
//!
//! let episode = Episode::new(
//!     "Pilot",
//!     Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
//!     Enclosure::new("https://example.com/pilot.mp3", 5_000_000, MediaType::Mp3),
//! );
//!
//! let feed = Podcast::new("My Podcast", "https://example.com/feed.rss")
//!     .with_language(Language::English)
//!     .with_category(Category::with_subcategory("Arts", "Books"))
//!     .with_episode(episode)
//!     .feed()
//!     .expect("Failed to build feed");
//!
//! assert!(feed.contains("<itunes:category text=\"Arts\">"));
//! ```

mod category;
mod duration;
mod episode;
mod error;
mod language;
mod media;
mod podcast;
pub mod tags;

pub use category::{merge_categories, Category, Owner};
pub use duration::Duration;
pub use episode::Episode;
pub use error::{FeedError, FeedResult};
pub use language::Language;
pub use media::{Enclosure, MediaType};
pub use podcast::Podcast;

// Callers that post-process a document need the tree types too
pub use podfeed_xml::{XmlDocument, XmlError, XmlNode, XmlText};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _: Category = Category::new("Arts");
        let _: Duration = Duration::default();
        let _: Language = Language::English;
        let _: Enclosure = Enclosure::new("http://example.com/a.mp3", 1, MediaType::Mp3);
        let _: Podcast = Podcast::new("Test", "http://example.com");
    }

    #[test]
    fn test_complete_workflow() {
        let feed = Podcast::new("Test Audiobook Feed", "https://example.com/feed.rss")
            .with_summary("Audiobooks for testing")
            .with_category(Category::with_subcategory("Arts", "Books"))
            .with_category(Category::with_subcategory("Arts", "Literature"))
            .feed()
            .expect("Should build");

        assert_eq!(feed.matches("<itunes:category text=\"Arts\">").count(), 1);
        assert!(feed.contains("<itunes:category text=\"Literature\"></itunes:category>"));
        assert!(feed.ends_with("</rss>\n"));
    }
}
