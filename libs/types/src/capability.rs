//! Exposure capability questions and their answers
//!
//! Five yes/no questions establish what a vulnerability lets an attacker do
//! with the data. The answers form an ordered set; their mean is the
//! exposure coefficient of the assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One exposure capability a vulnerability may grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CopyData,
    ReadData,
    UpdateData,
    ConfigureData,
    ExecuteOperations,
}

impl Capability {
    /// All capabilities in question order
    pub const ALL: [Capability; 5] = [
        Capability::CopyData,
        Capability::ReadData,
        Capability::UpdateData,
        Capability::ConfigureData,
        Capability::ExecuteOperations,
    ];

    /// Human-readable label used in prompts and transcripts
    pub fn label(&self) -> &'static str {
        match self {
            Capability::CopyData => "copy data",
            Capability::ReadData => "read data",
            Capability::UpdateData => "update data",
            Capability::ConfigureData => "configure data",
            Capability::ExecuteOperations => "execute operations",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Answers to the five capability questions for one assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityAnswers {
    pub copy_data: bool,
    pub read_data: bool,
    pub update_data: bool,
    pub configure_data: bool,
    pub execute_operations: bool,
}

impl CapabilityAnswers {
    /// All five capabilities granted
    pub fn all_granted() -> Self {
        Self {
            copy_data: true,
            read_data: true,
            update_data: true,
            configure_data: true,
            execute_operations: true,
        }
    }

    /// No capability granted
    pub fn none_granted() -> Self {
        Self::default()
    }

    /// Get the answer for one capability
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::CopyData => self.copy_data,
            Capability::ReadData => self.read_data,
            Capability::UpdateData => self.update_data,
            Capability::ConfigureData => self.configure_data,
            Capability::ExecuteOperations => self.execute_operations,
        }
    }

    /// Set the answer for one capability
    pub fn set(&mut self, capability: Capability, granted: bool) {
        match capability {
            Capability::CopyData => self.copy_data = granted,
            Capability::ReadData => self.read_data = granted,
            Capability::UpdateData => self.update_data = granted,
            Capability::ConfigureData => self.configure_data = granted,
            Capability::ExecuteOperations => self.execute_operations = granted,
        }
    }

    /// Answers as an ordered array, in `Capability::ALL` order
    pub fn as_array(&self) -> [bool; 5] {
        [
            self.copy_data,
            self.read_data,
            self.update_data,
            self.configure_data,
            self.execute_operations,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_granted() {
        let answers = CapabilityAnswers::all_granted();
        assert_eq!(answers.as_array(), [true; 5]);
    }

    #[test]
    fn test_none_granted() {
        let answers = CapabilityAnswers::none_granted();
        assert_eq!(answers.as_array(), [false; 5]);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut answers = CapabilityAnswers::none_granted();
        for capability in Capability::ALL {
            answers.set(capability, true);
            assert!(answers.get(capability));
        }
        assert_eq!(answers, CapabilityAnswers::all_granted());
    }

    #[test]
    fn test_array_order_matches_question_order() {
        let mut answers = CapabilityAnswers::none_granted();
        answers.set(Capability::ReadData, true);
        // ReadData is the second question
        assert_eq!(answers.as_array(), [false, true, false, false, false]);
    }

    #[test]
    fn test_capability_labels() {
        assert_eq!(Capability::CopyData.label(), "copy data");
        assert_eq!(Capability::ExecuteOperations.label(), "execute operations");
    }

    #[test]
    fn test_answers_serialization() {
        let answers = CapabilityAnswers::all_granted();
        let json = serde_json::to_string(&answers).unwrap();
        let deserialized: CapabilityAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(answers, deserialized);
    }
}
