//! Score results and priority tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier assigned to an entry
///
/// P1 is highest urgency. Variant order gives `P1 < P2 < P3 < P4`, so
/// sorting a list of results puts the most urgent entries first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived scores for one completed assessment
///
/// Produced once by the scoring engine and never mutated. All values lie in
/// [0, 1] for in-contract inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Data severity value: exposure coefficient × data sensitivity weight
    pub dsv: f64,
    /// Equal-thirds blend of DSV, impact weight, and availability weight
    pub threat_score: f64,
    /// Level-of-effort quotient (exploit likelihood term)
    pub loeq: f64,
    /// Threat score × LOEQ
    pub inherent_risk: f64,
    /// Tier assigned from the inherent risk value
    pub priority: Priority,
}
