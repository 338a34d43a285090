//! Level-of-effort quotient (exploit likelihood)

use crate::weights::map_weight;
use types::assessment::LikelihoodSource;
use types::errors::InvalidInput;
use types::level::WeightDirection;

/// Resolve the level-of-effort quotient (LOEQ) for an assessment.
///
/// A direct probability (an EPSS value) is validated against [0, 1] and
/// returned unchanged. A maturity/effort pair averages the two weights:
///
/// `loeq = (maturity_weight + effort_weight) / 2`
///
/// Maturity maps ascending; effort maps descending — less effort required
/// to exploit means a higher contribution to likelihood. The two variants
/// are a choice, not a fallback; the caller supplies exactly one.
pub fn loe_quotient(source: &LikelihoodSource) -> Result<f64, InvalidInput> {
    match *source {
        LikelihoodSource::DirectProbability { probability } => {
            // range check also rejects NaN
            if !(0.0..=1.0).contains(&probability) {
                return Err(InvalidInput::ProbabilityOutOfRange { value: probability });
            }
            Ok(probability)
        }
        LikelihoodSource::MaturityEffort { maturity, effort } => {
            let maturity_weight = map_weight(maturity, WeightDirection::Ascending);
            let effort_weight = map_weight(effort, WeightDirection::Descending);
            Ok((maturity_weight + effort_weight) / 2.0)
        }
    }
}
