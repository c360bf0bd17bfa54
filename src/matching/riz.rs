//! R-loop initiation zone (RIZ) detection.
//!
//! A RIZ is two or more repetitions of a G-cluster (`ggg` or longer) followed
//! by a 1-2 nt spacer of non-`g` bases, closed by one final G-cluster. That is
//! at least three clusters in total, e.g. `GGGaGGGcGGG`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sequence::Sequence;

/// RIZ pattern over a normalized (lowercase) sequence
pub const RIZ_PATTERN: &str = "(?:g{3,}[act]{1,2}){2,}g{3,}";

#[allow(clippy::expect_used)] // Constant pattern, covered by tests
static RIZ_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RIZ_PATTERN).expect("RIZ pattern is a valid regex"));

/// One RIZ occurrence, split into the text before it, the RIZ itself, and the
/// text after it. All three borrow from the searched sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RizMatch<'a> {
    /// 0-based offset of the RIZ in the sequence
    pub start: usize,
    pub prefix: &'a str,
    pub riz: &'a str,
    pub tail: &'a str,
}

impl RizMatch<'_> {
    /// 0-based exclusive end of the RIZ
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.riz.len()
    }
}

/// Find every RIZ in `seq`, leftmost first, without overlaps.
///
/// Each match consumes as much as the pattern allows and scanning resumes
/// right after it. An empty result means the sequence has no RIZ.
#[must_use]
pub fn find_riz(seq: &Sequence) -> Vec<RizMatch<'_>> {
    let text = seq.as_str();
    RIZ_REGEX
        .find_iter(text)
        .map(|m| RizMatch {
            start: m.start(),
            prefix: &text[..m.start()],
            riz: m.as_str(),
            tail: &text[m.end()..],
        })
        .collect()
}
