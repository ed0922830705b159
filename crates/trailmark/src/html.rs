use std::borrow::Cow;

use quick_xml::escape::{resolve_html5_entity, unescape_with};

/// Decodes HTML character references in `text`.
///
/// Numeric references and the full set of HTML5 named entities are decoded.
/// Text containing an unknown or malformed reference is returned unchanged.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    unescape_with(text, resolve_html5_entity).unwrap_or(Cow::Borrowed(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(
            decode_html_entities("Hello, world"),
            Cow::Borrowed("Hello, world")
        ));
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_html_entities("Salt &amp; Pepper &mdash; &lt;Classic&gt;"),
            "Salt & Pepper \u{2014} <Classic>"
        );
    }

    #[test]
    fn test_html5_entities() {
        assert_eq!(
            decode_html_entities("Caf&eacute; &copy; 2024 &trade; &euro;5"),
            "Café © 2024 ™ €5"
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("It&#8217;s &#x41;BC"), "It\u{2019}s ABC");
    }

    #[test]
    fn test_unknown_entities_leave_text_alone() {
        assert_eq!(decode_html_entities("&bogus; &amp;"), "&bogus; &amp;");
        assert_eq!(decode_html_entities("Fish & Chips"), "Fish & Chips");
    }
}
