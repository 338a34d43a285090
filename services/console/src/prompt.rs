//! Pure validation of raw operator answers
//!
//! Each prompt in the question sequence has a parse function here that
//! either yields the structured answer or an error carrying the retry
//! message. The session loop calls these repeatedly until success; nothing
//! in this module touches the terminal.

use thiserror::Error;
use types::level::QualitativeLevel;

/// A rejected raw answer, with the message shown before re-prompting
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PromptError {
    #[error("Invalid input. Please enter L, M, or H.")]
    InvalidLevel,

    #[error("Invalid input. Please enter Y or N.")]
    InvalidYesNo,

    #[error("Invalid input. Please enter a number between 0 and 1.")]
    InvalidProbability,

    #[error("Invalid selection. Please enter a number between 1 and {max}.")]
    InvalidChoice { max: usize },

    #[error("Invalid name. Please enter a non-empty name without path separators.")]
    InvalidEntryName,
}

/// Parse a Low/Medium/High answer. Accepts `l`/`low`, `m`/`medium`,
/// `h`/`high`, case-insensitive.
pub fn parse_level(input: &str) -> Result<QualitativeLevel, PromptError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "l" | "low" => Ok(QualitativeLevel::Low),
        "m" | "medium" => Ok(QualitativeLevel::Medium),
        "h" | "high" => Ok(QualitativeLevel::High),
        _ => Err(PromptError::InvalidLevel),
    }
}

/// Parse a yes/no answer. Accepts `y`/`yes`, `n`/`no`, case-insensitive.
pub fn parse_yes_no(input: &str) -> Result<bool, PromptError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(PromptError::InvalidYesNo),
    }
}

/// Parse a probability answer and check it lies within [0, 1].
///
/// The scoring engine enforces the same range for library callers; checking
/// here turns an operator typo into a re-prompt instead of a lost entry.
pub fn parse_probability(input: &str) -> Result<f64, PromptError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PromptError::InvalidProbability)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(PromptError::InvalidProbability);
    }
    Ok(value)
}

/// Parse a 1-based menu selection with `max` entries.
///
/// Returns the 0-based index.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, PromptError> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| PromptError::InvalidChoice { max })?;
    if choice < 1 || choice > max {
        return Err(PromptError::InvalidChoice { max });
    }
    Ok(choice - 1)
}

/// Parse an entry name. Names end up in report filenames, so they must be
/// non-empty and free of path separators.
pub fn parse_entry_name(input: &str) -> Result<String, PromptError> {
    let name = input.trim();
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(PromptError::InvalidEntryName);
    }
    Ok(name.to_string())
}
