//! Message encoding with a fixed code table.

use crate::codes::CodeTable;

/// Emitted in place of a character that has no code.
pub const SENTINEL: char = '-';

/// Encode `message` as a string of `'0'` and `'1'`.
///
/// Characters missing from `codes` are replaced by a single [`SENTINEL`]
/// rather than rejected, so the output is not decodable for messages outside
/// the training corpus.
pub fn encode(message: &str, codes: &CodeTable) -> String {
    let mut out = String::with_capacity(message.len());
    let mut unmapped = 0usize;
    for symbol in message.chars() {
        match codes.get(symbol) {
            Some(code) => out.push_str(code),
            None => {
                out.push(SENTINEL);
                unmapped += 1;
            }
        }
    }
    if unmapped > 0 {
        log::debug!("{unmapped} unmapped characters replaced by '{SENTINEL}'");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(pairs: &[(char, &str)]) -> CodeTable {
        pairs.iter().map(|&(c, code)| (c, code.to_string())).collect()
    }

    #[test]
    fn test_encode_with_unmapped_tail() {
        let codes = table(&[('a', "00"), ('b', "01"), ('c', "1")]);
        assert_eq!(encode("abcd", &codes), "00011-");
    }

    #[test]
    fn test_empty_message() {
        let codes = table(&[('a', "0"), ('b', "1")]);
        assert_eq!(encode("", &codes), "");
    }

    #[test]
    fn test_every_unmapped_occurrence_gets_a_sentinel() {
        let codes = table(&[('a', "0"), ('b', "1")]);
        assert_eq!(encode("xaxxb", &codes), "-0--1");
    }

    #[test]
    fn test_empty_code_contributes_nothing() {
        let codes = table(&[('a', "")]);
        assert_eq!(encode("aaa", &codes), "");
        assert_eq!(encode("aba", &codes), "-");
    }

    proptest! {
        #[test]
        fn prop_output_length_is_sum_of_contributions(message in "[a-f]{0,64}") {
            let codes = table(&[('a', "0"), ('b', "10"), ('c', "110")]);
            let expected: usize = message
                .chars()
                .map(|c| codes.get(c).map_or(1, str::len))
                .sum();
            let encoded = encode(&message, &codes);
            prop_assert_eq!(encoded.len(), expected);
            prop_assert_eq!(encoded.clone(), encode(&message, &codes));
        }
    }
}
