use proptest::prelude::*;
use regex::Regex;

use rlfs_finder::matching::riz::RIZ_PATTERN;
use rlfs_finder::matching::rez::{find_rez_exhaustive, is_g_rich, MAX_LINKER_LENGTH};
use rlfs_finder::{classify, find_rez, find_riz, find_rlfs, normalize};

/// Nucleotide strings where `g` makes up roughly `g_weight / (g_weight + 3)`
fn bases(g_weight: u32, max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            g_weight => Just('g'),
            1 => Just('a'),
            1 => Just('c'),
            1 => Just('t'),
        ],
        0..max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ── Normalization ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".{0,200}") {
        let once = normalize(&raw);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_output_is_in_alphabet(raw in ".{0,200}") {
        let seq = normalize(&raw);
        prop_assert!(seq.as_str().chars().all(|c| matches!(c, 'a' | 'c' | 'g' | 't')));
    }

    #[test]
    fn normalization_keeps_every_nucleotide(raw in "[ACGTacgtNn \n0-9>]{0,200}") {
        let expected = raw
            .chars()
            .filter(|c| "acgtACGT".contains(*c))
            .count();
        prop_assert_eq!(normalize(&raw).len(), expected);
    }
}

// ── REZ search ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prefix_sum_search_matches_exhaustive_g_rich(tail in bases(3, 600)) {
        prop_assert_eq!(find_rez(&tail), find_rez_exhaustive(&tail));
    }

    #[test]
    fn prefix_sum_search_matches_exhaustive_balanced(tail in bases(1, 400)) {
        prop_assert_eq!(find_rez(&tail), find_rez_exhaustive(&tail));
    }

    #[test]
    fn found_rez_is_the_first_qualifying_window(tail in bases(2, 400)) {
        if let Some(found) = find_rez(&tail) {
            let i = found.linker.len();
            let j = found.rez.len();
            let g_in = |s: &str| s.bytes().filter(|&b| b == b'g').count();

            prop_assert!(i < MAX_LINKER_LENGTH);
            prop_assert!(is_g_rich(g_in(found.rez), j));
            // No shorter REZ at the same linker length qualifies
            for shorter in 100..j {
                prop_assert!(!is_g_rich(g_in(&tail[i..i + shorter]), shorter));
            }
            prop_assert_eq!(format!("{}{}{}", found.linker, found.rez, found.rest), tail);
        }
    }
}

// ── RIZ scan and composition ──────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn riz_matches_are_ordered_and_exact(raw in bases(4, 300)) {
        let seq = normalize(&raw);
        let anchored = Regex::new(&format!("^{RIZ_PATTERN}$")).unwrap();
        let matches = find_riz(&seq);
        for m in &matches {
            prop_assert!(anchored.is_match(m.riz));
            prop_assert_eq!(format!("{}{}{}", m.prefix, m.riz, m.tail), seq.as_str());
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start);
        }
    }

    #[test]
    fn segments_reassemble_the_sequence(raw in bases(3, 600)) {
        let search = find_rlfs(&raw);
        for seg in &search.segments {
            prop_assert_eq!(seg.to_sequence_string(), search.sequence.as_str());
            prop_assert_eq!(classify(seg).len(), search.sequence.len());
        }
        for pair in search.segments.windows(2) {
            prop_assert!(pair[0].riz_start() < pair[1].riz_start());
        }
    }
}
