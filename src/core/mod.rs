//! Core data types for R-loop forming structure detection.
//!
//! - [`Sequence`](sequence::Sequence): a normalized `{a, c, g, t}` sequence
//! - [`RlfsSegment`](types::RlfsSegment): a composed RIZ + linker + REZ hit
//! - [`Region`](types::Region), [`LabeledBase`](types::LabeledBase): per-base labels
//!
//! ## Model
//!
//! | Region | Definition |
//! |--------|------------|
//! | RIZ    | three or more G-clusters (`ggg+`) separated by 1-2 nt of `a`/`c`/`t` |
//! | linker | 0-49 nt between RIZ and REZ |
//! | REZ    | 100-2000 nt with at least 40% `g` |

pub mod sequence;
pub mod types;
