//! Readers that turn input files into raw sequence text.
//!
//! This module provides readers for:
//!
//! - **Raw text**: any file (optionally gzip compressed) or stdin, read whole
//!   and searched as one sequence. Non-nucleotide characters are dropped later
//!   by normalization.
//! - **FASTA files**: plain or gzip/bgzip compressed, one record per sequence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rlfs_finder::parsing::fasta::parse_fasta_file;
//! use rlfs_finder::find_rlfs;
//! use std::path::Path;
//!
//! for record in parse_fasta_file(Path::new("promoters.fa")).unwrap() {
//!     let search = find_rlfs(&record.sequence);
//!     println!("{}: {} RLFS", record.name, search.segments.len());
//! }
//! ```

pub mod fasta;
pub mod text;

/// Maximum number of FASTA records read from a single file (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Errors from reading sequence input
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// A named, not yet normalized sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}
