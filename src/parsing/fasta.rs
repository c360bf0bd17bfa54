//! Reader for FASTA files using noodles.
//!
//! Each record becomes one [`SequenceRecord`]; records are searched
//! independently, so a motif never spans two records.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::text::is_gzipped;
use crate::parsing::{ParseError, SequenceRecord, MAX_RECORDS};

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Whether in-memory text looks like FASTA (first non-blank character is `>`)
#[must_use]
pub fn looks_like_fasta(text: &str) -> bool {
    text.trim_start().starts_with('>')
}

/// Parse a FASTA file into its records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse FASTA records from text already in memory (e.g. stdin).
///
/// # Errors
///
/// Same as [`parse_fasta_file`], minus file access errors.
pub fn parse_fasta_text(text: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    // noodles expects the first line to be a definition line
    let mut reader = fasta::io::Reader::new(text.trim_start().as_bytes());
    parse_fasta_reader(&mut reader)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if records.len() >= MAX_RECORDS {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        tracing::debug!(name = %name, length = sequence.len(), "read FASTA record");
        records.push(SequenceRecord::new(name, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Promoter.FA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.seq")));
        assert!(!is_fasta_file(Path::new("test.gz")));
    }

    #[test]
    fn test_looks_like_fasta() {
        assert!(looks_like_fasta(">chr1\nACGT\n"));
        assert!(looks_like_fasta("\n\n  >chr1\nACGT\n"));
        assert!(!looks_like_fasta("ACGT\n>chr1"));
        assert!(!looks_like_fasta(""));
    }

    #[test]
    fn test_parse_fasta_file() {
        let fasta_content = b">chr1 description\nACGTACGT\nACGT\n>chr2\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "chr1");
        assert_eq!(records[0].sequence, "ACGTACGTACGT");
        assert_eq!(records[1].name, "chr2");
        assert_eq!(records[1].sequence, "GGGG");
    }

    #[test]
    fn test_parse_gzipped_fasta_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">seq1\nGGGAGGGAGGG\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let records = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(records, vec![SequenceRecord::new("seq1", "GGGAGGGAGGG")]);
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_fasta_text() {
        let records = parse_fasta_text("\n>a\nAC\nGT\n>b\nTTTT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SequenceRecord::new("a", "ACGT"));
        assert_eq!(records[1], SequenceRecord::new("b", "TTTT"));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_fasta_file(Path::new("/nonexistent/input.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
