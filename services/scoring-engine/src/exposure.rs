//! Exposure coefficient from binary capability answers

use types::errors::InvalidInput;

/// Aggregate yes/no capability answers into an exposure coefficient.
///
/// `exposure = granted / total`, the arithmetic mean of the answers with
/// true = 1 and false = 0. Always in [0, 1] for a non-empty sequence.
///
/// An empty sequence is rejected rather than letting 0/0 propagate as NaN.
pub fn exposure_coefficient(answers: &[bool]) -> Result<f64, InvalidInput> {
    if answers.is_empty() {
        return Err(InvalidInput::EmptyCapabilities);
    }
    let granted = answers.iter().filter(|granted| **granted).count();
    Ok(granted as f64 / answers.len() as f64)
}
