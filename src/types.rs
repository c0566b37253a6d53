use serde::Serialize;

/// One well-formed CSV row before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub word: String,
    /// Abbreviation as written in the file, e.g. `v. t.`.
    pub part_of_speech: String,
    /// Meaning text with HTML entities still encoded.
    pub meaning: String,
}

/// All meanings of a word for a single part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meaning {
    /// Descriptive label such as `Transitive Verb`; empty when the
    /// abbreviation is not in the table.
    pub part_of_speech: String,
    /// Normalized meanings in file order.
    pub meanings: Vec<String>,
}

/// A dictionary word with its meanings grouped by part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    pub meanings: Vec<Meaning>,
}
