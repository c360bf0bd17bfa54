use crate::core::sequence::Sequence;
use crate::core::types::{LabeledBase, Region, RlfsSegment};

/// Label every base of `segment` with the region it came from.
///
/// Bases are emitted in field order (prefix, RIZ, linker, REZ, rest) with their
/// case untouched; prefix and rest are labelled [`Region::Outside`].
#[must_use]
pub fn classify(segment: &RlfsSegment) -> Vec<LabeledBase> {
    let mut labels = Vec::with_capacity(segment.len());
    for (text, region) in segment.fields() {
        labels.extend(text.chars().map(|base| LabeledBase::new(base, region)));
    }
    labels
}

/// Label a whole sequence as outside any structure, for reporting a sequence
/// with no RLFS.
#[must_use]
pub fn unclassified(seq: &Sequence) -> Vec<LabeledBase> {
    let mut labels = Vec::with_capacity(seq.len());
    labels.extend(
        seq.as_str()
            .chars()
            .map(|base| LabeledBase::new(base, Region::Outside)),
    );
    labels
}
