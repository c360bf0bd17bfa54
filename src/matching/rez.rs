//! R-loop extension zone (REZ) search.
//!
//! Given the sequence that follows a RIZ, look for a linker of 0-49 nt
//! followed by a window of 100-2000 nt that is at least 40% `g`. Candidates
//! are tried with the linker length in the outer loop and the window length
//! in the inner loop, both ascending, and the first qualifying window wins.
//! That order is the tie-break: shortest linker first, then shortest REZ.

/// Linker lengths tried are `0..MAX_LINKER_LENGTH`
pub const MAX_LINKER_LENGTH: usize = 50;
pub const MIN_REZ_LENGTH: usize = 100;
pub const MAX_REZ_LENGTH: usize = 2000;

/// Minimum G-content of a REZ, as the exact fraction 2/5 (40%)
pub const MIN_G_CONTENT_NUMERATOR: usize = 2;
pub const MIN_G_CONTENT_DENOMINATOR: usize = 5;

/// A tail split into linker, REZ and whatever follows the REZ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RezFind<'a> {
    pub linker: &'a str,
    pub rez: &'a str,
    pub rest: &'a str,
}

/// Whether `g_count` out of `length` bases reaches the REZ G-content threshold.
///
/// Compared by cross-multiplication so the 40% boundary is exact.
///
/// ```
/// use rlfs_finder::matching::rez::is_g_rich;
///
/// assert!(is_g_rich(40, 100));
/// assert!(!is_g_rich(39, 100));
/// ```
#[must_use]
pub fn is_g_rich(g_count: usize, length: usize) -> bool {
    length > 0 && g_count * MIN_G_CONTENT_DENOMINATOR >= length * MIN_G_CONTENT_NUMERATOR
}

/// Search `tail` for a linker + REZ.
///
/// Window G counts are read from a prefix-sum array, so each candidate costs
/// O(1); the candidate order is the same as [`find_rez_exhaustive`].
/// Returns `None` when no window qualifies.
#[must_use]
pub fn find_rez(tail: &str) -> Option<RezFind<'_>> {
    let bytes = tail.as_bytes();
    let len = bytes.len();
    if len < MIN_REZ_LENGTH {
        return None;
    }

    // No candidate window reaches past this point
    let horizon = len.min(MAX_LINKER_LENGTH - 1 + MAX_REZ_LENGTH);
    let mut g_prefix = Vec::with_capacity(horizon + 1);
    g_prefix.push(0usize);
    let mut running = 0usize;
    for &b in &bytes[..horizon] {
        running += usize::from(b == b'g');
        g_prefix.push(running);
    }

    scan_windows(tail, |start, end| g_prefix[end] - g_prefix[start])
}

/// Reference implementation of [`find_rez`] that recounts every window.
///
/// Much slower, kept to cross-check the prefix-sum search.
#[must_use]
pub fn find_rez_exhaustive(tail: &str) -> Option<RezFind<'_>> {
    let bytes = tail.as_bytes();
    scan_windows(tail, |start, end| {
        bytes[start..end].iter().filter(|&&b| b == b'g').count()
    })
}

/// Walk the (linker, REZ length) grid in tie-break order and return the first
/// window whose G count, as reported by `g_in`, is rich enough.
fn scan_windows<F>(tail: &str, g_in: F) -> Option<RezFind<'_>>
where
    F: Fn(usize, usize) -> usize,
{
    let len = tail.len();
    for i in 0..MAX_LINKER_LENGTH {
        if len < i + MIN_REZ_LENGTH {
            break;
        }
        for j in MIN_REZ_LENGTH..=MAX_REZ_LENGTH {
            if i + j > len {
                break;
            }
            if is_g_rich(g_in(i, i + j), j) {
                return Some(RezFind {
                    linker: &tail[..i],
                    rez: &tail[i..i + j],
                    rest: &tail[i + j..],
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(tail: &str) -> Option<(usize, usize)> {
        let fast = find_rez(tail);
        let slow = find_rez_exhaustive(tail);
        assert_eq!(fast, slow, "prefix-sum and exhaustive searches disagree");
        fast.map(|f| (f.linker.len(), f.rez.len()))
    }

    #[test]
    fn test_g_content_boundary() {
        assert!(is_g_rich(40, 100));
        assert!(!is_g_rich(39, 100));
        assert!(is_g_rich(2, 5));
        assert!(!is_g_rich(0, 0));
    }

    #[test]
    fn test_exactly_forty_percent_qualifies() {
        let tail = format!("{}{}", "g".repeat(40), "a".repeat(60));
        assert_eq!(both(&tail), Some((0, 100)));
    }

    #[test]
    fn test_thirty_nine_percent_does_not_qualify() {
        let tail = format!("{}{}", "g".repeat(39), "a".repeat(61));
        assert_eq!(both(&tail), None);
    }

    #[test]
    fn test_tail_too_short() {
        assert_eq!(both(&"g".repeat(99)), None);
        assert_eq!(both(""), None);
    }

    #[test]
    fn test_linker_offset_found() {
        // Windows starting before offset 10 can never hold 40 g in 40% of
        // their length, the first one that can is [10, 110).
        let tail = format!("{}{}{}ct", "a".repeat(70), "g".repeat(40), "a".repeat(60));
        let found = find_rez(&tail).unwrap();
        assert_eq!(found.linker, "a".repeat(10));
        assert_eq!(found.rez, format!("{}{}", "a".repeat(60), "g".repeat(40)));
        assert_eq!(found.rest, format!("{}ct", "a".repeat(60)));
        assert_eq!(
            format!("{}{}{}", found.linker, found.rez, found.rest),
            tail
        );
        assert_eq!(both(&tail), Some((10, 100)));
    }

    #[test]
    fn test_shortest_linker_beats_shortest_rez() {
        // [1, 101) is a 100 nt window at 40%, but offset 0 first qualifies at
        // length 102 (41 g), and the smaller linker wins.
        let tail = format!("{}{}", "a".repeat(61), "g".repeat(200));
        assert_eq!(both(&tail), Some((0, 102)));
    }

    #[test]
    fn test_shortest_rez_wins_for_same_linker() {
        // Every window from offset 0 is g-rich; the 100 nt one is taken
        let tail = "g".repeat(500);
        let found = find_rez(&tail).unwrap();
        assert_eq!(found.linker, "");
        assert_eq!(found.rez.len(), 100);
        assert_eq!(found.rest.len(), 400);
    }

    #[test]
    fn test_no_window_within_linker_range() {
        // The only g-rich stretch begins after the largest allowed linker
        let tail = format!("{}{}", "a".repeat(2100), "g".repeat(100));
        assert_eq!(both(&tail), None);
    }

    #[test]
    fn test_window_never_exceeds_max_length() {
        // The whole tail is 40.9% g, but no window of at most 2000 nt
        // starting at offset 0..50 reaches 40%.
        let tail = format!("{}{}", "a".repeat(1300), "g".repeat(900));
        assert_eq!(both(&tail), None);
    }
}
