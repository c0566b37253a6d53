//! CSV dictionary loading.
//!
//! The file is a headerless CSV of `word,part_of_speech,meaning` rows. Rows
//! with any other number of fields are skipped. Broken quoting and reader
//! errors abort the load. Bytes that are not valid UTF-8 are replaced with
//! U+FFFD rather than rejected.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{DictionaryError, ParseError};
use crate::normalize::normalize_meaning;
use crate::part_of_speech;
use crate::quoting::check_quoting;
use crate::types::{Entry, Meaning, RawRecord};

/// Number of fields in a usable row.
pub const FIELDS_PER_ROW: usize = 3;

/// Insertion-ordered grouping of meanings by word, then by abbreviation.
#[derive(Debug, Default)]
struct Grouping {
    words: Vec<(String, Vec<(String, Vec<String>)>)>,
    index: HashMap<String, usize>,
}

impl Grouping {
    fn push(&mut self, record: RawRecord) {
        let slot = match self.index.get(&record.word) {
            Some(&slot) => slot,
            None => {
                self.words.push((record.word.clone(), Vec::new()));
                self.index.insert(record.word, self.words.len() - 1);
                self.words.len() - 1
            }
        };
        let groups = &mut self.words[slot].1;
        let meaning = normalize_meaning(&record.meaning);
        match groups
            .iter_mut()
            .find(|(abbr, _)| *abbr == record.part_of_speech)
        {
            Some((_, meanings)) => meanings.push(meaning),
            None => groups.push((record.part_of_speech, vec![meaning])),
        }
    }

    fn into_entries(self) -> Vec<Entry> {
        self.words
            .into_iter()
            .map(|(word, groups)| Entry {
                word,
                meanings: groups
                    .into_iter()
                    .map(|(abbr, meanings)| {
                        if !part_of_speech::is_known(&abbr) {
                            tracing::debug!(abbreviation = %abbr, "unknown part of speech");
                        }
                        Meaning {
                            part_of_speech: part_of_speech::describe(&abbr).to_string(),
                            meanings,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Load and group every entry in the CSV file at `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = read_entries(file).map_err(|source| DictionaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), entries = entries.len(), "dictionary loaded");
    Ok(entries)
}

/// Load entries from an in-memory or already opened CSV source.
///
/// Parse failures are reported against the placeholder path `<reader>`.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Entry>, DictionaryError> {
    read_entries(reader).map_err(|source| DictionaryError::Parse {
        path: PathBuf::from("<reader>"),
        source,
    })
}

fn read_entries<R: Read>(mut reader: R) -> Result<Vec<Entry>, ParseError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    check_quoting(&data)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut grouping = Grouping::default();
    let mut skipped = 0usize;
    for result in rdr.byte_records() {
        let record = result?;
        match raw_record(&record) {
            Some(raw) => grouping.push(raw),
            None => {
                skipped += 1;
                tracing::debug!(
                    line = record.position().map(|p| p.line()),
                    fields = record.len(),
                    "skipping row with wrong field count"
                );
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "rows skipped");
    }
    Ok(grouping.into_entries())
}

fn raw_record(record: &csv::ByteRecord) -> Option<RawRecord> {
    if record.len() != FIELDS_PER_ROW {
        return None;
    }
    let field = |i| record.get(i).map(|f| String::from_utf8_lossy(f).into_owned());
    Some(RawRecord {
        word: field(0)?,
        part_of_speech: field(1)?,
        meaning: field(2)?,
    })
}
