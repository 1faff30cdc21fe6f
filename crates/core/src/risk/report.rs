//! Assessment output value objects

use crate::risk::levels::RiskLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column-wide convective potential classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConvectivePotential {
    /// CAPE below the moderate edge
    Weak,
    /// Ordinary convective day
    Moderate,
    /// Organized storms possible
    Strong,
    /// Severe-weather environment
    Extreme,
}

impl fmt::Display for ConvectivePotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConvectivePotential::Weak => "WEAK",
            ConvectivePotential::Moderate => "MODERATE",
            ConvectivePotential::Strong => "STRONG",
            ConvectivePotential::Extreme => "EXTREME",
        };
        f.write_str(label)
    }
}

/// Decision for one aviation category
///
/// A single rule produces the whole record as one unit: level, go/no-go,
/// the reasoning naming the rule that fired, and its advisory list. Partial
/// overrides across rules do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderRisk {
    /// Human-readable activity name
    pub activity: String,
    /// Ordinal severity classification
    pub risk_level: RiskLevel,
    /// Operational decision: true = GO
    pub go_no_go: bool,
    /// Which rule fired, with the numbers that drove it
    pub reasoning: String,
    /// Ordered advisory strings (may be empty)
    pub precautions: Vec<String>,
}

impl StakeholderRisk {
    /// Decision as the conventional label
    #[must_use]
    pub fn decision_label(&self) -> &'static str {
        if self.go_no_go {
            "GO"
        } else {
            "NO-GO"
        }
    }
}

/// Complete multi-stakeholder assessment bundle
///
/// Five independent decisions over the same indices, plus the column-wide
/// summary. No field depends on any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Column-wide risk class (CIN-led, then CAPE-banded)
    pub general_risk: RiskLevel,
    /// Column-wide convective potential class
    pub convective_potential: ConvectivePotential,
    /// Paragliding decision
    pub paragliding: StakeholderRisk,
    /// Hang-gliding decision
    pub hang_gliding: StakeholderRisk,
    /// Hot-air-balloon decision
    pub hot_air_balloon: StakeholderRisk,
    /// Sailplane decision
    pub gliding: StakeholderRisk,
    /// General-aviation decision
    pub general_aviation: StakeholderRisk,
}

impl RiskAssessment {
    /// The five stakeholder decisions in canonical order, for export
    /// collaborators that iterate rather than name fields
    #[must_use]
    pub fn stakeholders(&self) -> [(&'static str, &StakeholderRisk); 5] {
        [
            ("paragliding", &self.paragliding),
            ("hang_gliding", &self.hang_gliding),
            ("hot_air_balloon", &self.hot_air_balloon),
            ("gliding", &self.gliding),
            ("general_aviation", &self.general_aviation),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_label() {
        let mut risk = StakeholderRisk {
            activity: "Paragliding".to_string(),
            risk_level: RiskLevel::Minimal,
            go_no_go: true,
            reasoning: String::new(),
            precautions: Vec::new(),
        };
        assert_eq!(risk.decision_label(), "GO");
        risk.go_no_go = false;
        assert_eq!(risk.decision_label(), "NO-GO");
    }

    #[test]
    fn test_convective_potential_ordering() {
        assert!(ConvectivePotential::Weak < ConvectivePotential::Extreme);
        assert_eq!(ConvectivePotential::Strong.to_string(), "STRONG");
    }
}
