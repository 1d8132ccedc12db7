//! iTunes categories and the channel owner

use crate::tags;
use podfeed_xml::{XmlNode, XmlResult};
use serde::{Deserialize, Serialize};

/// A category entry: a top-level name with an optional subcategory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Top-level category name
    pub name: String,
    /// Optional subcategory under `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl Category {
    /// Creates a top-level category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcategory: None,
        }
    }

    /// Creates a category with a subcategory
    pub fn with_subcategory(name: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcategory: Some(subcategory.into()),
        }
    }
}

/// Owner contact block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Owner display name
    pub name: String,
    /// Owner contact email
    pub email: String,
}

impl Owner {
    /// Creates an owner
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub(crate) fn append_to(&self, channel: &mut XmlNode) -> XmlResult<()> {
        let owner = channel.add_child(tags::ITUNES_OWNER)?;
        owner.add_text_child(tags::ITUNES_NAME, self.name.as_str())?;
        owner.add_text_child(tags::ITUNES_EMAIL, self.email.as_str())?;
        Ok(())
    }
}

/// Appends category elements under `channel`, merging entries that share a name.
///
/// Each distinct name gets one top-level `itunes:category`, in order of first
/// appearance. Every subcategory is appended under its parent in input
/// order; repeated subcategories are kept.
pub fn merge_categories(channel: &mut XmlNode, categories: &[Category]) -> XmlResult<()> {
    for category in categories {
        let attributes = [(tags::TEXT, category.name.as_str())];
        let existed = channel.has_child(tags::ITUNES_CATEGORY, &attributes);
        let parent = channel.find_or_add_child(tags::ITUNES_CATEGORY, &attributes)?;

        if let Some(subcategory) = &category.subcategory {
            parent.add_child_with(
                tags::ITUNES_CATEGORY,
                None,
                &[(tags::TEXT, subcategory.as_str())],
            )?;
        }

        if existed {
            log::debug!("Merged category entry into existing {:?}", category.name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(nodes: &[XmlNode]) -> Vec<&str> {
        nodes.iter().filter_map(|node| node.attribute(tags::TEXT)).collect()
    }

    #[test]
    fn test_distinct_names_are_not_merged() {
        let mut channel = XmlNode::new("channel").unwrap();
        let categories = [
            Category::new("Books"),
            Category::new("TV Reviews"),
            Category::new("Film Reviews"),
            Category::new("Technology"),
        ];
        merge_categories(&mut channel, &categories).unwrap();

        assert_eq!(
            texts(channel.children()),
            vec!["Books", "TV Reviews", "Film Reviews", "Technology"]
        );
        assert!(channel.children().iter().all(|c| c.children().is_empty()));
    }

    #[test]
    fn test_shared_name_merges_subcategories() {
        let mut channel = XmlNode::new("channel").unwrap();
        let categories = [
            Category::with_subcategory("Arts", "Books"),
            Category::with_subcategory("Arts", "Film"),
        ];
        merge_categories(&mut channel, &categories).unwrap();

        assert_eq!(channel.children().len(), 1);
        let arts = &channel.children()[0];
        assert_eq!(arts.attribute(tags::TEXT), Some("Arts"));
        assert_eq!(texts(arts.children()), vec!["Books", "Film"]);
    }

    #[test]
    fn test_duplicate_subcategories_are_kept() {
        let mut channel = XmlNode::new("channel").unwrap();
        let categories = [
            Category::with_subcategory("News", "Politics"),
            Category::new("News"),
            Category::with_subcategory("News", "Politics"),
        ];
        merge_categories(&mut channel, &categories).unwrap();

        assert_eq!(channel.children().len(), 1);
        assert_eq!(
            texts(channel.children()[0].children()),
            vec!["Politics", "Politics"]
        );
    }

    #[test]
    fn test_first_appearance_order_preserved() {
        let mut channel = XmlNode::new("channel").unwrap();
        let categories = [
            Category::with_subcategory("Arts", "Books"),
            Category::new("Technology"),
            Category::with_subcategory("Arts", "Design"),
            Category::with_subcategory("Technology", "Gadgets"),
        ];
        merge_categories(&mut channel, &categories).unwrap();

        assert_eq!(texts(channel.children()), vec!["Arts", "Technology"]);
        assert_eq!(texts(channel.children()[1].children()), vec!["Gadgets"]);
    }

    #[test]
    fn test_existing_unrelated_children_untouched() {
        let mut channel = XmlNode::new("channel").unwrap();
        channel.add_text_child("title", "Arts").unwrap();
        merge_categories(&mut channel, &[Category::new("Arts")]).unwrap();
        assert_eq!(channel.children().len(), 2);
    }

    #[test]
    fn test_owner_block() {
        let mut channel = XmlNode::new("channel").unwrap();
        Owner::new("Jane", "jane@example.com")
            .append_to(&mut channel)
            .unwrap();

        assert_eq!(
            channel.render(0),
            "<channel>\n    <itunes:owner>\n        <itunes:name>Jane</itunes:name>\n        <itunes:email>jane@example.com</itunes:email>\n    </itunes:owner>\n</channel>"
        );
    }
}
