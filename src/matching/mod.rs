//! RLFS search pipeline.
//!
//! This module provides:
//!
//! - [`riz`]: locate R-loop initiation zones with the G-cluster pattern
//! - [`rez`]: the bounded linker + REZ window search
//! - [`engine`]: compose both into [`RlfsSegment`](crate::core::types::RlfsSegment)s
//! - [`classify`]: per-base region labels for renderers
//!
//! Every function here is pure and takes its input by reference, so searches
//! over different sequences can run in parallel without coordination.

pub mod classify;
pub mod engine;
pub mod rez;
pub mod riz;
