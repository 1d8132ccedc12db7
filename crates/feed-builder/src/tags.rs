//! Element and attribute names used in generated feeds

pub const RSS: &str = "rss";
pub const CHANNEL: &str = "channel";
pub const ITEM: &str = "item";

pub const TITLE: &str = "title";
pub const LINK: &str = "link";
pub const LANGUAGE: &str = "language";
pub const COPYRIGHT: &str = "copyright";
pub const DESCRIPTION: &str = "description";
pub const ENCLOSURE: &str = "enclosure";
pub const GUID: &str = "guid";
pub const PUB_DATE: &str = "pubDate";
pub const CONTENT_ENCODED: &str = "content:encoded";

pub const ITUNES_SUBTITLE: &str = "itunes:subtitle";
pub const ITUNES_AUTHOR: &str = "itunes:author";
pub const ITUNES_SUMMARY: &str = "itunes:summary";
pub const ITUNES_OWNER: &str = "itunes:owner";
pub const ITUNES_NAME: &str = "itunes:name";
pub const ITUNES_EMAIL: &str = "itunes:email";
pub const ITUNES_IMAGE: &str = "itunes:image";
pub const ITUNES_CATEGORY: &str = "itunes:category";
pub const ITUNES_EXPLICIT: &str = "itunes:explicit";
pub const ITUNES_BLOCK: &str = "itunes:block";
pub const ITUNES_DURATION: &str = "itunes:duration";

pub const TEXT: &str = "text";
pub const HREF: &str = "href";
pub const URL: &str = "url";
pub const LENGTH: &str = "length";
pub const TYPE: &str = "type";

/// Namespace and version attributes of the `rss` element, in output order
pub const RSS_ATTRIBUTES: [(&str, &str); 3] = [
    ("xmlns:itunes", "http://www.itunes.com/dtds/podcast-1.0.dtd"),
    ("xmlns:content", "http://purl.org/rss/1.0/modules/content/"),
    ("version", "2.0"),
];

/// Text of `itunes:explicit`
pub fn explicit_text(explicit: bool) -> &'static str {
    if explicit {
        "yes"
    } else {
        "no"
    }
}

/// `pubDate` layout (RFC 2822 with a zero-padded day)
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";
