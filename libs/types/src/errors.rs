//! Error types for the scoring engine
//!
//! The engine rejects a whole assessment on the first precondition
//! violation; it never substitutes defaults or retries. Re-prompting the
//! operator is the session console's responsibility.

use thiserror::Error;

/// Precondition violations detected by the scoring engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Capability answer set is empty")]
    EmptyCapabilities,

    #[error("Probability out of range: {value} (must be within [0, 1])")]
    ProbabilityOutOfRange { value: f64 },
}
