use cli_dictionary::{find_entry, load_from_reader, render_entry};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(entries) = load_from_reader(data) else {
                return;
            };
            for entry in &entries {
                for group in &entry.meanings {
                    assert!(group.meanings.iter().all(|m| !m.contains('&')));
                }
                assert!(find_entry(&entries, &entry.word).is_some());
                render_entry(entry).unwrap();
            }
        });
    }
}
