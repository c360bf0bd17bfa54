use serde::Serialize;

use crate::core::sequence::Sequence;
use crate::core::types::RlfsSegment;
use crate::matching::rez::{find_rez, MIN_REZ_LENGTH};
use crate::matching::riz::find_riz;

/// Outcome of searching one raw input for R-loop forming structures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RlfsSearch {
    /// The normalized sequence that was searched
    pub sequence: Sequence,
    /// Structures found, ordered by RIZ start
    pub segments: Vec<RlfsSegment>,
}

impl RlfsSearch {
    /// Whether at least one RLFS was found
    #[must_use]
    pub fn found(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Normalize `raw` and search it for R-loop forming structures.
///
/// # Examples
///
/// ```
/// use rlfs_finder::find_rlfs;
///
/// let raw = format!("GGGAGGGCGGG TTTTT {}{}", "G".repeat(45), "A".repeat(60));
/// let search = find_rlfs(&raw);
/// assert!(search.found());
/// assert_eq!(search.segments[0].riz(), "gggagggcggg");
/// ```
#[must_use]
pub fn find_rlfs(raw: &str) -> RlfsSearch {
    let sequence = Sequence::normalize(raw);
    let segments = compose_rlfs(&sequence);
    tracing::debug!(
        length = sequence.len(),
        segments = segments.len(),
        "RLFS search complete"
    );
    RlfsSearch { sequence, segments }
}

/// Pair every RIZ in `seq` with the REZ that follows it.
///
/// A RIZ whose tail is too short to hold a REZ, or whose tail has no
/// qualifying REZ, is dropped entirely. The result keeps RIZ order and is
/// empty when nothing qualifies.
#[must_use]
pub fn compose_rlfs(seq: &Sequence) -> Vec<RlfsSegment> {
    let riz_matches = find_riz(seq);
    if riz_matches.is_empty() {
        tracing::trace!("no RIZ in sequence");
        return Vec::new();
    }

    let mut segments = Vec::new();
    for riz in riz_matches {
        if riz.tail.len() < MIN_REZ_LENGTH {
            tracing::trace!(start = riz.start, tail = riz.tail.len(), "RIZ tail too short");
            continue;
        }
        let Some(rez) = find_rez(riz.tail) else {
            tracing::trace!(start = riz.start, "no REZ after RIZ");
            continue;
        };
        let rez_start = riz.end() + rez.linker.len();
        segments.push(RlfsSegment::new(
            seq.clone(),
            riz.start..riz.end(),
            rez_start..rez_start + rez.rez.len(),
        ));
    }

    segments
}
