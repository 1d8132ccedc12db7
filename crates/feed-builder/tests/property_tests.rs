//! Property-based tests for feed assembly
//!
//! These tests use proptest to verify:
//! 1. Category merge: one top-level element per distinct name, first-seen order
//! 2. Episode order: items are always newest first
//! 3. Rendering is deterministic and escapes character data
//! 4. Control characters XML cannot carry are rejected, never emitted

use chrono::{TimeZone, Utc};
use podfeed_builder::{
    merge_categories, tags, Category, Enclosure, Episode, FeedError, MediaType, Podcast, XmlError,
    XmlNode,
};
use proptest::prelude::*;

/// Small alphabets so that duplicate names show up often
fn arb_category() -> impl Strategy<Value = Category> {
    ("[A-D]", prop::option::of("[a-d]")).prop_map(|(name, subcategory)| Category {
        name,
        subcategory,
    })
}

fn distinct_in_order(categories: &[Category]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for category in categories {
        if !names.contains(&category.name.as_str()) {
            names.push(&category.name);
        }
    }
    names
}

proptest! {
    #[test]
    fn category_merge_groups_by_name(categories in prop::collection::vec(arb_category(), 0..20)) {
        let mut channel = XmlNode::new(tags::CHANNEL).unwrap();
        merge_categories(&mut channel, &categories).unwrap();

        let top: Vec<&XmlNode> = channel.children_named(tags::ITUNES_CATEGORY).collect();
        let names: Vec<&str> = top.iter().filter_map(|node| node.attribute(tags::TEXT)).collect();
        prop_assert_eq!(&names, &distinct_in_order(&categories));

        for node in top {
            let name = node.attribute(tags::TEXT).unwrap();
            let expected: Vec<&str> = categories
                .iter()
                .filter(|category| category.name == name)
                .filter_map(|category| category.subcategory.as_deref())
                .collect();
            let actual: Vec<&str> = node
                .children()
                .iter()
                .filter_map(|child| child.attribute(tags::TEXT))
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn episodes_render_newest_first(days in prop::collection::vec(1u32..=28, 0..12)) {
        let episodes = days.iter().enumerate().map(|(index, day)| {
            Episode::new(
                format!("ep{index}"),
                Utc.with_ymd_and_hms(2020, 2, *day, 8, 0, 0).unwrap(),
                Enclosure::new(format!("http://demo.url/{index}.mp3"), 1, MediaType::Mp3),
            )
        });
        let podcast = Podcast::new("T", "L").with_episodes(episodes);

        let ordered = podcast.episodes_newest_first();
        prop_assert_eq!(ordered.len(), days.len());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].publication_date() >= pair[1].publication_date());
        }
    }

    #[test]
    fn feed_render_is_deterministic(
        title in "\\PC{0,40}",
        categories in prop::collection::vec(arb_category(), 0..8),
    ) {
        let podcast = categories
            .into_iter()
            .fold(Podcast::new(title, "https://demo.url/feed.rss"), Podcast::with_category);

        prop_assert_eq!(podcast.feed().unwrap(), podcast.feed().unwrap());
    }

    #[test]
    fn text_content_never_contains_markup(text in "\\PC{0,60}") {
        let node = XmlNode::new(tags::TITLE).unwrap().with_value(text.as_str()).unwrap();
        let rendered = node.render(0);
        let inner = rendered
            .strip_prefix("<title>")
            .and_then(|rest| rest.strip_suffix("</title>"))
            .unwrap();

        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    #[test]
    fn control_characters_are_rejected(
        prefix in "\\PC{0,20}",
        control in prop::sample::select(vec!['\u{0}', '\u{1}', '\u{8}', '\u{b}', '\u{c}', '\u{1f}']),
        suffix in "\\PC{0,20}",
    ) {
        let title = format!("{prefix}{control}{suffix}");
        let result = Podcast::new(title, "https://demo.url/feed.rss").feed();
        prop_assert!(matches!(
            result,
            Err(FeedError::Xml(XmlError::InvalidCharacter(c))) if c == control
        ));
    }
}
