use cli_dictionary::{find_entry, load_from_reader, normalize_meaning};
use proptest::prelude::*;

fn csv_line(word: &str, pos: &str, meaning: &str) -> String {
    format!("{word},{pos},\"{}\"\n", meaning.replace('"', "\"\""))
}

fn entity() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["&amp;", "&lt;", "&gt;", "&quot;", "&#38;", "&#x26;", "&", "&#233;"])
}

proptest! {
    #[test]
    fn normalized_text_has_no_ampersand(
        parts in prop::collection::vec(("[a-z ]{0,8}", entity()), 0..6)
    ) {
        let raw: String = parts.iter().map(|(text, ent)| format!("{text}{ent}")).collect();
        let out = normalize_meaning(&raw);
        prop_assert!(!out.contains('&'));
    }

    #[test]
    fn meanings_keep_input_order(meanings in prop::collection::vec("[A-Za-z .]{1,20}", 1..10)) {
        let csv: String = meanings.iter().map(|m| csv_line("word", "n.", m)).collect();
        let entries = load_from_reader(csv.as_bytes()).unwrap();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].meanings.len(), 1);
        prop_assert_eq!(&entries[0].meanings[0].meanings, &meanings);
    }

    #[test]
    fn lookup_matches_every_casing(word in "[a-zA-Z]{1,12}") {
        let csv = csv_line(&word.to_lowercase(), "n.", "thing");
        let entries = load_from_reader(csv.as_bytes()).unwrap();
        prop_assert!(find_entry(&entries, &word).is_some());
        prop_assert!(find_entry(&entries, &word.to_uppercase()).is_some());
    }
}

#[test]
fn one_good_row_one_bad_row_yields_one_entry() {
    let entries = load_from_reader("cat,n.,A feline.\ndog,n.\n".as_bytes()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "cat");
}
