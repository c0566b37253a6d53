use html_escape::decode_html_entities;

/// Decode HTML entities in `raw` and spell out every remaining `&` as `and`.
///
/// Decoding runs first, so `&amp;` ends up as `and` as well.
pub fn normalize_meaning(raw: &str) -> String {
    decode_html_entities(raw).replace('&', "and")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entities() {
        assert_eq!(
            normalize_meaning("To move swiftly &amp; smoothly on foot."),
            "To move swiftly and smoothly on foot."
        );
        assert_eq!(normalize_meaning("&lt;tag&gt;"), "<tag>");
        assert_eq!(normalize_meaning("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn numeric_entities() {
        assert_eq!(normalize_meaning("caf&#233;"), "café");
        assert_eq!(normalize_meaning("a &#x26; b"), "a and b");
    }

    #[test]
    fn bare_ampersand() {
        assert_eq!(normalize_meaning("salt & pepper"), "salt and pepper");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(normalize_meaning("A small feline."), "A small feline.");
    }
}
