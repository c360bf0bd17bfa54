//! Whole-file text input.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a file as text, decompressing gzip input. Invalid UTF-8 is replaced
/// rather than rejected, since normalization drops it anyway.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or decompressed.
pub fn read_text_file(path: &Path) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        std::io::BufReader::new(file).read_to_end(&mut bytes)?;
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read all of stdin as text.
///
/// # Errors
///
/// Returns `ParseError::Io` if stdin cannot be read.
pub fn read_stdin() -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name a raw-text input after its file, without directory or extensions
#[must_use]
pub fn record_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        file_name
    } else {
        stem.to_string()
    }
}
