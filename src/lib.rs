//! # rlfs-finder
//!
//! A library for locating R-loop forming structures (RLFS) in nucleotide sequences.
//!
//! An RLFS is three consecutive regions:
//!
//! - **RIZ** (R-loop initiation zone): three or more G-clusters of at least
//!   3 nt, separated by 1-2 nt, e.g. `GGGaGGGcGGG`
//! - **linker**: 0-49 nt of anything
//! - **REZ** (R-loop extension zone): 100-2000 nt with at least 40% G
//!
//! `rlfs-finder` normalizes the input, finds every RIZ, and pairs each with the
//! first qualifying REZ that follows it (shortest linker, then shortest REZ).
//! A RIZ with no REZ behind it is dropped.
//!
//! Reference: Wongsurawat et al. Quantitative model of R-loop forming
//! structures reveals a novel level of RNA-DNA interactome complexity.
//! Nucleic Acids Res 40, e16 (2012).
//!
//! ## Example
//!
//! ```rust
//! use rlfs_finder::find_rlfs;
//! use rlfs_finder::matching::classify::classify;
//! use rlfs_finder::render::render_text;
//!
//! let raw = format!(">promoter\nGGGAGGGCGGG TTTTT {}{}", "G".repeat(45), "A".repeat(60));
//! let search = find_rlfs(&raw);
//!
//! for segment in &search.segments {
//!     println!("RIZ at {}, REZ at {}", segment.riz_start(), segment.rez_start());
//!     print!("{}", render_text(&classify(segment), 60));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence and segment types
//! - [`matching`]: RIZ/REZ search, composition and classification
//! - [`render`]: Text and HTML layouts of labelled sequences
//! - [`parsing`]: Raw text and FASTA readers
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based search

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod render;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::sequence::{normalize, Sequence};
pub use crate::core::types::*;
pub use crate::matching::classify::{classify, unclassified};
pub use crate::matching::engine::{compose_rlfs, find_rlfs, RlfsSearch};
pub use crate::matching::rez::{find_rez, RezFind};
pub use crate::matching::riz::{find_riz, RizMatch};
