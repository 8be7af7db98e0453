#![no_main]

use libfuzzer_sys::fuzz_target;

use dupfind::finder::DuplicateFinder;
use dupfind::store::DocumentStore;
use dupfind::text::Utf8String;

fuzz_target!(|data: &[u8]| {
    // Treat each input line as a document and check that every reported
    // match really is a shared substring at the reported offsets.
    let text = String::from_utf8_lossy(data);
    let docs: Vec<&str> = text.lines().filter(|d| !d.is_empty()).take(8).collect();
    if docs.len() < 2 {
        return;
    }

    let mut store = DocumentStore::default();
    for (i, doc) in docs.iter().enumerate() {
        store.add(&Utf8String::from(*doc), i as i64 + 1);
    }

    let matches = DuplicateFinder::default()
        .find_duplicates(&store, 1)
        .unwrap();
    for m in matches {
        assert!(m.doc1_id < m.doc2_id);
        let d1 = Utf8String::from(docs[(m.doc1_id - 1) as usize]);
        let d2 = Utf8String::from(docs[(m.doc2_id - 1) as usize]);
        let s1 = d1.substring(m.start_pos1, m.length).unwrap();
        let s2 = d2.substring(m.start_pos2, m.length).unwrap();
        assert_eq!(s1, s2);
    }
});
