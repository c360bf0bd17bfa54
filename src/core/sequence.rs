use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A nucleotide sequence over the lowercase alphabet `{a, c, g, t}`.
///
/// The only way to build one is [`Sequence::normalize`], so every other
/// component can rely on the alphabet without re-checking it. The text is
/// shared: clones point at the same buffer.
///
/// A `Sequence` serializes as a plain string but cannot be deserialized:
///
/// ```compile_fail
/// let seq: rlfs_finder::Sequence = serde_json::from_str("\"GGG NNN\"").unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Arc<str>);

impl Sequence {
    /// Clean raw text into a canonical sequence.
    ///
    /// Lower-cases everything, then drops whitespace and every character that
    /// is not one of `a`, `c`, `g`, `t`. Line breaks, position numbers and
    /// stray header text pasted along with a sequence are filtered silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlfs_finder::core::sequence::Sequence;
    ///
    /// let seq = Sequence::normalize("  1 GGGA nnCT\n61 tgca");
    /// assert_eq!(seq.as_str(), "gggacttgca");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let mut buffer = String::with_capacity(raw.len());
        buffer.extend(
            raw.chars()
                .map(|c| c.to_ascii_lowercase())
                .filter(|c| matches!(c, 'a' | 'c' | 'g' | 't')),
        );
        Self(Arc::from(buffer))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `g` bases in the sequence
    #[must_use]
    pub fn g_count(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'g').count()
    }

    /// Whether `self` and `other` are views of the same buffer
    #[must_use]
    pub fn shares_buffer(&self, other: &Sequence) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Serialize only: deserializing would bypass normalization
impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Shorthand for [`Sequence::normalize`].
#[must_use]
pub fn normalize(raw: &str) -> Sequence {
    Sequence::normalize(raw)
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
