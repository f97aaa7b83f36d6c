#![no_main]
use huffcode::{encode, get_codes, Error, FrequencyTable, SENTINEL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (corpus, message) = data;

    let codes = match get_codes(&corpus) {
        Ok(codes) => codes,
        Err(Error::EmptyCorpus) => {
            assert!(corpus.is_empty());
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let freqs = FrequencyTable::from_corpus(&corpus);
    assert_eq!(codes.len(), freqs.len());

    if codes.len() > 1 {
        let all: Vec<&str> = codes.iter().map(|(_, code)| code).collect();
        for (i, a) in all.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a));
                }
            }
        }
    }

    let encoded = encode(&message, &codes);
    let expected: usize = message
        .chars()
        .map(|c| codes.get(c).map_or(SENTINEL.len_utf8(), str::len))
        .sum();
    assert_eq!(encoded.len(), expected);
});
