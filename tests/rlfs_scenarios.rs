//! End-to-end searches through the public API.

use rlfs_finder::matching::rez::{find_rez_exhaustive, MAX_LINKER_LENGTH, MAX_REZ_LENGTH, MIN_REZ_LENGTH};
use rlfs_finder::{classify, compose_rlfs, find_rez, find_riz, find_rlfs, Region, Sequence};

fn scenario_input() -> String {
    format!("GGGAGGGCGGG{}{}{}", "T".repeat(5), "G".repeat(45), "A".repeat(60))
}

#[test]
fn test_riz_then_rez_yields_one_segment() {
    let search = find_rlfs(&scenario_input());
    assert!(search.found());
    assert_eq!(search.segments.len(), 1);

    let seg = &search.segments[0];
    assert_eq!(seg.riz(), "gggagggcggg");
    assert_eq!(seg.linker(), "");
    assert_eq!(seg.rez().len(), 100);
    assert!(seg.rez_g_content() >= 0.40);
}

#[test]
fn test_filtered_separator_merges_clusters() {
    // With N's as the separator the G-runs join after normalization and the
    // RIZ absorbs the whole run, leaving a 60 nt tail
    let raw = format!("GGGAGGGCGGG{}{}{}", "N".repeat(5), "G".repeat(45), "A".repeat(60));
    let search = find_rlfs(&raw);
    assert_eq!(search.sequence.len(), 116);
    assert!(!search.found());
}

#[test]
fn test_riz_with_short_non_g_tail_not_found() {
    let raw = format!("GGGAGGGCGGG{}", "A".repeat(80));
    let search = find_rlfs(&raw);
    assert!(!search.found());
    assert!(search.segments.is_empty());
}

#[test]
fn test_no_riz_short_circuits() {
    let seq = Sequence::normalize(&"a".repeat(1000));
    assert!(find_riz(&seq).is_empty());
    assert!(compose_rlfs(&seq).is_empty());
}

#[test]
fn test_segment_reconstruction() {
    let raw = format!(
        ">chr_test\n{}\n{}\n{}\n",
        "acgt".repeat(20),
        scenario_input(),
        "tgca".repeat(30)
    );
    let search = find_rlfs(&raw);
    assert!(search.found());
    for seg in &search.segments {
        assert_eq!(seg.to_sequence_string(), search.sequence.as_str());
        let from_riz = &search.sequence.as_str()[seg.riz_start()..seg.rez_end()];
        assert_eq!(from_riz, format!("{}{}{}", seg.riz(), seg.linker(), seg.rez()));
    }
}

#[test]
fn test_bounds_of_every_segment() {
    let unit = format!("gggcgggtggg{}{}", "ct".repeat(10), "gga".repeat(60));
    let raw = unit.repeat(5);
    let search = find_rlfs(&raw);
    assert!(search.found());
    for seg in &search.segments {
        assert!(seg.linker().len() < MAX_LINKER_LENGTH);
        assert!(seg.rez().len() >= MIN_REZ_LENGTH);
        assert!(seg.rez().len() <= MAX_REZ_LENGTH);
        assert!(seg.rez_g_content() >= 0.40);
    }
}

#[test]
fn test_g_content_boundary_window() {
    let forty = format!("{}{}", "g".repeat(40), "c".repeat(60));
    let thirty_nine = format!("{}{}", "g".repeat(39), "c".repeat(61));
    assert!(find_rez(&forty).is_some());
    assert!(find_rez_exhaustive(&forty).is_some());
    assert!(find_rez(&thirty_nine).is_none());
    assert!(find_rez_exhaustive(&thirty_nine).is_none());
}

#[test]
fn test_classified_labels_cover_segment() {
    let search = find_rlfs(&format!("tt{}", scenario_input()));
    let seg = &search.segments[0];
    let labels = classify(seg);

    assert_eq!(labels.len(), search.sequence.len());
    assert_eq!(labels[0].region, Region::Outside);
    assert_eq!(labels[2].region, Region::Riz);
    assert_eq!(labels[seg.rez_start()].region, Region::Rez);
    assert_eq!(labels.last().map(|l| l.region), Some(Region::Outside));
}
