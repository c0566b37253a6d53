//! Part-of-speech abbreviations used by the dictionary source.

/// Abbreviation to label mapping, in the order the source documents them.
pub const PART_OF_SPEECH_TABLE: &[(&str, &str)] = &[
    ("n.", "Noun"),
    ("v.", "Verb"),
    ("v. t.", "Transitive Verb"),
    ("v. i.", "Intransitive Verb"),
    ("a.", "Adjective"),
    ("adv.", "Adverb"),
    ("n. pl.", "Plural Noun"),
];

/// Return the descriptive label for `abbreviation`, or `""` when it is not
/// listed. Matching is exact, including spacing.
pub fn describe(abbreviation: &str) -> &'static str {
    PART_OF_SPEECH_TABLE
        .iter()
        .find(|(abbr, _)| *abbr == abbreviation)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Whether `abbreviation` has an entry in [`PART_OF_SPEECH_TABLE`].
pub fn is_known(abbreviation: &str) -> bool {
    PART_OF_SPEECH_TABLE
        .iter()
        .any(|(abbr, _)| *abbr == abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_abbreviations() {
        assert_eq!(describe("n."), "Noun");
        assert_eq!(describe("v. t."), "Transitive Verb");
        assert_eq!(describe("v. i."), "Intransitive Verb");
        assert_eq!(describe("n. pl."), "Plural Noun");
    }

    #[test]
    fn unknown_abbreviation_is_empty() {
        assert_eq!(describe("prep."), "");
        assert_eq!(describe("v.t."), "");
        assert!(!is_known("interj."));
    }
}
