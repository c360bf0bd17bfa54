use std::ops::Range;

use serde::{Deserialize, Serialize, Serializer};

use crate::core::sequence::Sequence;

/// Region of an RLFS a base belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Outside the structure (before the RIZ or after the REZ)
    #[serde(rename = "none")]
    Outside,
    /// R-loop initiation zone
    Riz,
    /// Gap between RIZ and REZ
    Linker,
    /// R-loop extension zone
    Rez,
}

impl Region {
    /// CSS class / short tag used by renderers
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Outside => "none",
            Self::Riz => "riz",
            Self::Linker => "linker",
            Self::Rez => "rez",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outside => write!(f, "none"),
            Self::Riz => write!(f, "RIZ"),
            Self::Linker => write!(f, "linker"),
            Self::Rez => write!(f, "REZ"),
        }
    }
}

/// A single base tagged with its region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBase {
    pub base: char,
    pub region: Region,
}

impl LabeledBase {
    #[must_use]
    pub fn new(base: char, region: Region) -> Self {
        Self { base, region }
    }
}

/// A fully composed R-loop forming structure.
///
/// A segment is a view into the normalized sequence it was found in: the RIZ
/// and REZ are stored as offsets, and `prefix + riz + linker + rez + rest` is
/// the whole sequence. Every segment of one search shares the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlfsSegment {
    sequence: Sequence,
    riz: Range<usize>,
    rez: Range<usize>,
}

impl RlfsSegment {
    /// Build a segment from the RIZ and REZ offsets within `sequence`.
    ///
    /// # Panics
    ///
    /// Panics unless `riz.start <= riz.end <= rez.start <= rez.end <= sequence.len()`.
    #[must_use]
    pub fn new(sequence: Sequence, riz: Range<usize>, rez: Range<usize>) -> Self {
        assert!(
            riz.start <= riz.end
                && riz.end <= rez.start
                && rez.start <= rez.end
                && rez.end <= sequence.len(),
            "segment offsets out of order or out of bounds"
        );
        Self { sequence, riz, rez }
    }

    /// The whole normalized sequence the segment was found in
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Bases before the RIZ
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.sequence.as_str()[..self.riz.start]
    }

    #[must_use]
    pub fn riz(&self) -> &str {
        &self.sequence.as_str()[self.riz.clone()]
    }

    #[must_use]
    pub fn linker(&self) -> &str {
        &self.sequence.as_str()[self.riz.end..self.rez.start]
    }

    #[must_use]
    pub fn rez(&self) -> &str {
        &self.sequence.as_str()[self.rez.clone()]
    }

    /// Bases after the REZ
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.sequence.as_str()[self.rez.end..]
    }

    /// 0-based offset of the first RIZ base
    #[must_use]
    pub fn riz_start(&self) -> usize {
        self.riz.start
    }

    /// 0-based exclusive end of the RIZ
    #[must_use]
    pub fn riz_end(&self) -> usize {
        self.riz.end
    }

    /// 0-based offset of the first REZ base
    #[must_use]
    pub fn rez_start(&self) -> usize {
        self.rez.start
    }

    /// 0-based exclusive end of the REZ
    #[must_use]
    pub fn rez_end(&self) -> usize {
        self.rez.end
    }

    /// Total number of bases across all five fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fraction of `g` bases in the REZ
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // REZ length is bounded by 2000
    pub fn rez_g_content(&self) -> f64 {
        let rez = self.rez();
        if rez.is_empty() {
            return 0.0;
        }
        let g = rez.bytes().filter(|&b| b == b'g').count();
        g as f64 / rez.len() as f64
    }

    /// Reassemble the sequence the segment was carved from
    #[must_use]
    pub fn to_sequence_string(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for (text, _) in self.fields() {
            out.push_str(text);
        }
        out
    }

    /// Fields paired with their regions, in sequence order
    #[must_use]
    pub fn fields(&self) -> [(&str, Region); 5] {
        [
            (self.prefix(), Region::Outside),
            (self.riz(), Region::Riz),
            (self.linker(), Region::Linker),
            (self.rez(), Region::Rez),
            (self.rest(), Region::Outside),
        ]
    }
}

// Serialized as its summary; the flanking sequence is not repeated per segment
impl Serialize for RlfsSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SegmentSummary::from(self).serialize(serializer)
    }
}

/// Coordinates and region texts of a segment, without the flanking sequence.
///
/// Offsets are 0-based and half-open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub riz_start: usize,
    pub riz_end: usize,
    pub linker_length: usize,
    pub rez_start: usize,
    pub rez_end: usize,
    pub rez_g_content: f64,
    pub riz: String,
    pub linker: String,
    pub rez: String,
}

impl From<&RlfsSegment> for SegmentSummary {
    fn from(segment: &RlfsSegment) -> Self {
        Self {
            riz_start: segment.riz_start(),
            riz_end: segment.riz_end(),
            linker_length: segment.linker().len(),
            rez_start: segment.rez_start(),
            rez_end: segment.rez_end(),
            rez_g_content: segment.rez_g_content(),
            riz: segment.riz().to_string(),
            linker: segment.linker().to_string(),
            rez: segment.rez().to_string(),
        }
    }
}
