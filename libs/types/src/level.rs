//! Qualitative answer levels and weight direction
//!
//! Every qualitative question in the triage sequence takes a Low/Medium/High
//! answer. The numeric weight a level maps to depends on the direction of
//! the question: effort-type questions invert the scale (less effort to
//! exploit means a higher contribution to likelihood).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative answer to a Low/Medium/High question
///
/// A level has no meaning on its own; it is always scoped to a named
/// question (data sensitivity, impact, availability, exploit maturity,
/// level of effort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualitativeLevel {
    Low,
    Medium,
    High,
}

impl QualitativeLevel {
    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            QualitativeLevel::Low => "Low",
            QualitativeLevel::Medium => "Medium",
            QualitativeLevel::High => "High",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of the level-to-weight mapping
///
/// Ascending: Low maps to the smallest weight (used for sensitivity,
/// impact, availability, exploit maturity).
/// Descending: Low maps to the largest weight (used for level of effort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDirection {
    Ascending,
    Descending,
}
