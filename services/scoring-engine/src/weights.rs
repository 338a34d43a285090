//! Qualitative level to numeric weight mapping
//!
//! Weights are thirds of the unit interval. The constants are shared by the
//! threat-score blend so every component computes with the same doubles.

use types::level::{QualitativeLevel, WeightDirection};

/// Weight of a Low (ascending) or High (descending) answer.
pub const ONE_THIRD: f64 = 1.0 / 3.0;

/// Weight of a Medium answer in either direction.
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Map a qualitative level to its numeric weight.
///
/// Ascending:  Low → 1/3, Medium → 2/3, High → 1
/// Descending: Low → 1,   Medium → 2/3, High → 1/3
///
/// Total over valid enum members; validating raw operator input is the
/// caller's responsibility.
pub fn map_weight(level: QualitativeLevel, direction: WeightDirection) -> f64 {
    match direction {
        WeightDirection::Ascending => match level {
            QualitativeLevel::Low => ONE_THIRD,
            QualitativeLevel::Medium => TWO_THIRDS,
            QualitativeLevel::High => 1.0,
        },
        WeightDirection::Descending => match level {
            QualitativeLevel::Low => 1.0,
            QualitativeLevel::Medium => TWO_THIRDS,
            QualitativeLevel::High => ONE_THIRD,
        },
    }
}
