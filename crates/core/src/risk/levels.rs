//! Ordinal risk classification levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification for an aviation activity
///
/// Totally ordered from least to most severe; the derived `Ord` follows the
/// variant order. Boundary values in the rule lists always resolve to the
/// more severe side (closed on the stricter side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No meaningful convective threat
    Minimal,
    /// Benign conditions with routine precautions
    Low,
    /// Conditions demanding active monitoring
    Moderate,
    /// Hazardous conditions; operations curtailed
    High,
    /// Dangerous conditions; operations suspended
    Extreme,
}

impl RiskLevel {
    /// Numerical score for comparisons and export (1 = Minimal .. 5 = Extreme)
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            RiskLevel::Minimal => 1,
            RiskLevel::Low => 2,
            RiskLevel::Moderate => 3,
            RiskLevel::High => 4,
            RiskLevel::Extreme => 5,
        }
    }

    /// Display color for export collaborators (hex RGB)
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Minimal => "#00FF00",
            RiskLevel::Low => "#FFFF00",
            RiskLevel::Moderate => "#FFA500",
            RiskLevel::High => "#FF0000",
            RiskLevel::Extreme => "#8B0000",
        }
    }

    /// One severity tier more permissive, saturating at `Minimal`
    ///
    /// Used to derive the hang-gliding outcomes from the paragliding tiers.
    #[must_use]
    pub fn one_tier_more_permissive(self) -> RiskLevel {
        match self {
            RiskLevel::Minimal | RiskLevel::Low => RiskLevel::Minimal,
            RiskLevel::Moderate => RiskLevel::Low,
            RiskLevel::High => RiskLevel::Moderate,
            RiskLevel::Extreme => RiskLevel::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Minimal => "MINIMAL",
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Extreme => "EXTREME",
        };
        f.write_str(label)
    }
}
