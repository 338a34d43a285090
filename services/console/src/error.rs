//! Central error type for the session console

use thiserror::Error;
use types::errors::InvalidInput;

/// Errors that abort a console session
///
/// Invalid operator answers are NOT errors at this level; they are handled
/// by re-prompting inside the session loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scoring rejected the assessment: {0}")]
    Scoring(#[from] InvalidInput),

    #[error("Input stream closed before the session finished")]
    InputClosed,
}
