//! Scoring engine — orchestrator
//!
//! Sequences weight mapping, exposure aggregation, data severity, threat
//! score, likelihood resolution, and classification into the single entry
//! point consumed by the session console.

use types::assessment::Assessment;
use types::errors::InvalidInput;
use types::level::WeightDirection;
use types::score::ScoreResult;

use crate::classifier;
use crate::exposure;
use crate::likelihood;
use crate::severity;
use crate::threat;
use crate::weights;

/// Score a completed assessment.
///
/// Pure and stateless: the same assessment always yields the same result,
/// and nothing is retained after the call returns. The first precondition
/// violation is surfaced as `InvalidInput` and rejects the whole
/// assessment; re-prompting the operator is the caller's concern.
pub fn score(assessment: &Assessment) -> Result<ScoreResult, InvalidInput> {
    let sensitivity_weight =
        weights::map_weight(assessment.data_sensitivity, WeightDirection::Ascending);
    let exposure = exposure::exposure_coefficient(&assessment.capabilities.as_array())?;
    let dsv = severity::data_severity(sensitivity_weight, exposure);

    let impact_weight = weights::map_weight(assessment.impact, WeightDirection::Ascending);
    let availability_weight =
        weights::map_weight(assessment.availability, WeightDirection::Ascending);
    let threat_score = threat::threat_score(dsv, impact_weight, availability_weight);

    let loeq = likelihood::loe_quotient(&assessment.likelihood)?;
    let inherent_risk = classifier::inherent_risk(threat_score, loeq);
    let priority = classifier::priority_level(inherent_risk);

    Ok(ScoreResult {
        dsv,
        threat_score,
        loeq,
        inherent_risk,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::capability::CapabilityAnswers;
    use types::assessment::LikelihoodSource;
    use types::level::QualitativeLevel;
    use types::score::Priority;

    fn make_assessment(
        sensitivity: QualitativeLevel,
        capabilities: CapabilityAnswers,
        impact: QualitativeLevel,
        availability: QualitativeLevel,
        likelihood: LikelihoodSource,
    ) -> Assessment {
        Assessment::new(sensitivity, capabilities, impact, availability, likelihood)
    }

    #[test]
    fn test_worst_case_with_epss() {
        // High sensitivity, every capability granted, High impact and
        // availability, EPSS 0.9 → threat 1, IR 0.9, P1
        let assessment = make_assessment(
            QualitativeLevel::High,
            CapabilityAnswers::all_granted(),
            QualitativeLevel::High,
            QualitativeLevel::High,
            LikelihoodSource::DirectProbability { probability: 0.9 },
        );

        let result = score(&assessment).unwrap();
        assert_eq!(result.dsv, 1.0);
        assert_eq!(result.threat_score, 1.0);
        assert_eq!(result.loeq, 0.9);
        assert_eq!(result.inherent_risk, 0.9);
        assert_eq!(result.priority, Priority::P1);
    }

    #[test]
    fn test_best_case_with_maturity_effort() {
        // Low sensitivity, no capabilities, Low impact and availability,
        // immature hard exploit → DSV 0, threat 2/9, LOEQ 1/3, P4
        let assessment = make_assessment(
            QualitativeLevel::Low,
            CapabilityAnswers::none_granted(),
            QualitativeLevel::Low,
            QualitativeLevel::Low,
            LikelihoodSource::MaturityEffort {
                maturity: QualitativeLevel::Low,
                effort: QualitativeLevel::High,
            },
        );

        let result = score(&assessment).unwrap();
        assert_eq!(result.dsv, 0.0);
        assert!((result.threat_score - 2.0 / 9.0).abs() < 1e-15);
        assert_eq!(result.loeq, 1.0 / 3.0);
        assert!((result.inherent_risk - 2.0 / 27.0).abs() < 1e-15);
        assert_eq!(result.priority, Priority::P4);
    }

    #[test]
    fn test_out_of_range_probability_rejects_assessment() {
        let assessment = make_assessment(
            QualitativeLevel::High,
            CapabilityAnswers::all_granted(),
            QualitativeLevel::High,
            QualitativeLevel::High,
            LikelihoodSource::DirectProbability { probability: 1.5 },
        );

        let err = score(&assessment).unwrap_err();
        assert_eq!(err, InvalidInput::ProbabilityOutOfRange { value: 1.5 });
    }

    #[test]
    fn test_partial_capabilities() {
        // Medium sensitivity (2/3), 2 of 5 capabilities (0.4) → DSV 4/15
        let mut capabilities = CapabilityAnswers::none_granted();
        capabilities.copy_data = true;
        capabilities.read_data = true;

        let assessment = make_assessment(
            QualitativeLevel::Medium,
            capabilities,
            QualitativeLevel::Medium,
            QualitativeLevel::Low,
            LikelihoodSource::DirectProbability { probability: 0.5 },
        );

        let result = score(&assessment).unwrap();
        assert_eq!(result.dsv, 0.4 * (2.0 / 3.0));
        assert_eq!(result.loeq, 0.5);
    }

    #[test]
    fn test_deterministic_scoring() {
        let assessment = make_assessment(
            QualitativeLevel::Medium,
            CapabilityAnswers::all_granted(),
            QualitativeLevel::High,
            QualitativeLevel::Medium,
            LikelihoodSource::MaturityEffort {
                maturity: QualitativeLevel::Medium,
                effort: QualitativeLevel::Low,
            },
        );

        let r1 = score(&assessment).unwrap();
        let r2 = score(&assessment).unwrap();
        assert_eq!(r1, r2, "Determinism violated");
    }
}
