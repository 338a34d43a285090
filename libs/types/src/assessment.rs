//! The aggregate structured input for one triage entry
//!
//! An assessment is built incrementally by the session console, one
//! validated answer at a time, then handed whole to the scoring engine.
//! The engine retains nothing after the call returns.

use crate::capability::CapabilityAnswers;
use crate::level::QualitativeLevel;
use serde::{Deserialize, Serialize};

/// Source of the exploit-likelihood term
///
/// Either a direct probability (an EPSS value) or a pair of qualitative
/// judgements. Exactly one variant holds by construction; an assessment
/// with both or neither populated is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LikelihoodSource {
    /// Published exploit probability in [0, 1]
    DirectProbability { probability: f64 },
    /// Qualitative judgement of exploit maturity and level of effort
    MaturityEffort {
        maturity: QualitativeLevel,
        effort: QualitativeLevel,
    },
}

/// Completed answers for one vulnerability entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Confidentiality level of the affected data
    pub data_sensitivity: QualitativeLevel,
    /// What the vulnerability lets an attacker do with the data
    pub capabilities: CapabilityAnswers,
    /// Impact score
    pub impact: QualitativeLevel,
    /// Availability score
    pub availability: QualitativeLevel,
    /// Exploit likelihood source
    pub likelihood: LikelihoodSource,
}

impl Assessment {
    /// Create a completed assessment
    pub fn new(
        data_sensitivity: QualitativeLevel,
        capabilities: CapabilityAnswers,
        impact: QualitativeLevel,
        availability: QualitativeLevel,
        likelihood: LikelihoodSource,
    ) -> Self {
        Self {
            data_sensitivity,
            capabilities,
            impact,
            availability,
            likelihood,
        }
    }
}
