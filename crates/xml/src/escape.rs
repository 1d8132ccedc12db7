//! Character data helpers: escaping, CDATA wrapping and name checks

use std::borrow::Cow;

/// Escapes element text (`&`, `<` and `>`)
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::partial_escape(raw)
}

/// Escapes an attribute value, including both quote characters.
///
/// Tab, line feed and carriage return become character references so that
/// attribute-value normalization leaves them intact.
pub fn escape_attribute(raw: &str) -> Cow<'_, str> {
    let escaped = quick_xml::escape::escape(raw);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Returns the first character XML 1.0 does not allow in a document.
///
/// Tab, line feed and carriage return are the only permitted C0 controls;
/// U+FFFE and U+FFFF are excluded as well.
pub fn find_invalid_char(text: &str) -> Option<char> {
    text.chars().find(|&c| match c {
        '\t' | '\n' | '\r' => false,
        '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => true,
        _ => false,
    })
}

/// Wraps raw text in a CDATA section.
///
/// A literal `]]>` cannot appear inside CDATA, so it is split across two
/// adjacent sections.
pub fn wrap_cdata(raw: &str) -> String {
    format!("<![CDATA[{}]]>", raw.replace("]]>", "]]]]><![CDATA[>"))
}

/// Returns true if `name` is usable as an element or attribute name.
///
/// Prefixes are kept as a literal part of the name (`itunes:category`).
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
    }

    #[test]
    fn test_escape_text_leaves_quotes() {
        assert_eq!(escape_text("\"quoted\" isn't"), "\"quoted\" isn't");
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(escape_attribute("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_escape_attribute_whitespace_references() {
        assert_eq!(escape_attribute("a\nb\tc\rd"), "a&#10;b&#9;c&#13;d");
        assert_eq!(escape_attribute("<a>\n"), "&lt;a&gt;&#10;");
    }

    #[test]
    fn test_escape_attribute_borrows_plain_value() {
        assert!(matches!(escape_attribute("Books"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_find_invalid_char() {
        assert_eq!(find_invalid_char("bad\u{1}title"), Some('\u{1}'));
        assert_eq!(find_invalid_char("nul\0"), Some('\0'));
        assert_eq!(find_invalid_char("\u{ffff}"), Some('\u{ffff}'));
        assert_eq!(find_invalid_char("tab\tnew\nline\r"), None);
        assert_eq!(find_invalid_char("caf\u{e9} \u{1f399}"), None);
    }

    #[test]
    fn test_plain_text_borrows() {
        assert!(matches!(escape_text("nothing to do"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_wrap_cdata() {
        assert_eq!(wrap_cdata("<p>hi</p>"), "<![CDATA[<p>hi</p>]]>");
    }

    #[test]
    fn test_wrap_cdata_splits_terminator() {
        assert_eq!(wrap_cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("channel"));
        assert!(is_valid_name("itunes:category"));
        assert!(is_valid_name("xmlns:content"));
        assert!(is_valid_name("_private-1.0"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1st"));
        assert!(!is_valid_name("two words"));
        assert!(!is_valid_name("<tag>"));
        assert!(!is_valid_name("-dash"));
    }
}
