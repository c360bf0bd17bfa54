//! Centralized input validation.
//!
//! The search itself accepts any text; these checks bound what outer layers
//! (the web server in particular) hand to it.

/// Largest raw sequence text accepted from a single web request (1MB)
pub const MAX_SEQUENCE_TEXT_SIZE: usize = 1024 * 1024;

/// Input validation error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No sequence provided")]
    EmptyInput,
    #[error("Sequence text too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// Check raw sequence text before searching it.
///
/// # Examples
///
/// ```
/// use rlfs_finder::utils::validation::{validate_sequence_text, ValidationError};
///
/// assert!(validate_sequence_text("GGGAGGGAGGG", 1024).is_ok());
/// assert_eq!(validate_sequence_text("  \n", 1024), Err(ValidationError::EmptyInput));
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyInput` if the text is blank, or
/// `ValidationError::InputTooLarge` if it is longer than `limit` bytes.
pub fn validate_sequence_text(text: &str, limit: usize) -> Result<(), ValidationError> {
    if text.len() > limit {
        return Err(ValidationError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}
