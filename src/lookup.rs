use crate::types::Entry;

/// Return the first entry whose word equals `word` ignoring case.
///
/// Characters are compared one to one under simple case folding, without
/// locale rules. No prefix or fuzzy matching is attempted.
pub fn find_entry<'a>(entries: &'a [Entry], word: &str) -> Option<&'a Entry> {
    let hit = entries.iter().find(|entry| eq_fold(&entry.word, word));
    match hit {
        Some(entry) => tracing::debug!(word, matched = %entry.word, "lookup hit"),
        None => tracing::debug!(word, "lookup miss"),
    }
    hit
}

fn eq_fold(a: &str, b: &str) -> bool {
    let (mut a, mut b) = (a.chars(), b.chars());
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_fold_eq(x, y) => {}
            _ => return false,
        }
    }
}

/// Two chars fold together when they share a single-char lowercase or a
/// single-char uppercase mapping. Multi-char mappings (`ß` → `SS`, `İ` → `i̇`)
/// never match, so `Σ`, `σ` and `ς` fold together but `ß` and `ss` do not.
fn chars_fold_eq(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let same = |x: Option<char>, y: Option<char>| matches!((x, y), (Some(x), Some(y)) if x == y);
    same(single(a.to_lowercase()), single(b.to_lowercase()))
        || same(single(a.to_uppercase()), single(b.to_uppercase()))
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
