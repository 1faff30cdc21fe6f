//! One-call analysis facade
//!
//! Runs the parcel engine and the risk engine in sequence over a validated
//! profile. This is the orchestration seam, so it is also where the crate
//! logs: the engines themselves stay silent.

use crate::core_types::units::{Celsius, JoulesPerKilogram};
use crate::core_types::{ConvectiveIndices, SoundingProfile};
use crate::physics::{compute_indices, ParcelOptions};
use crate::risk::{RiskAssessment, RiskAssessor};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Combined result of one full analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundingAnalysis {
    /// Output of the parcel thermodynamics engine
    pub indices: ConvectiveIndices,
    /// Output of the multi-stakeholder risk engine
    pub assessment: RiskAssessment,
}

/// Run both engines over a profile
///
/// # Example
/// ```
/// use convective_risk_core::{analyze, ParcelOptions, RiskAssessor, SoundingProfile};
///
/// let analysis = analyze(
///     &SoundingProfile::high_instability(),
///     ParcelOptions::default(),
///     &RiskAssessor::new(),
/// );
/// assert!(*analysis.indices.cape > 0.0);
/// ```
#[must_use]
pub fn analyze(
    profile: &SoundingProfile,
    options: ParcelOptions,
    assessor: &RiskAssessor,
) -> SoundingAnalysis {
    let indices = compute_indices(profile, options);

    if indices.has_positive_area() {
        for (label, pressure, temperature) in indices.key_levels() {
            debug!(%pressure, %temperature, "critical level {label}");
        }
    } else {
        debug!("no positive buoyancy area in the column");
    }

    let assessment = assessor.assess(&indices);
    info!(
        cape = %indices.cape,
        cin = %indices.cin,
        general_risk = %assessment.general_risk,
        potential = %assessment.convective_potential,
        "sounding analysis complete"
    );

    SoundingAnalysis {
        indices,
        assessment,
    }
}

/// Assess already-known CAPE/CIN magnitudes without a sounding
///
/// For callers that hold indices from another source. Negative inputs are
/// taken by magnitude, matching the sign-agnostic convention of the risk
/// context.
#[must_use]
pub fn quick_assessment(cape: f64, cin: f64) -> RiskAssessment {
    let indices = ConvectiveIndices {
        cape: JoulesPerKilogram::new(cape.abs()),
        cin: JoulesPerKilogram::new(cin.abs()),
        lcl_pressure: None,
        lcl_temperature: None,
        lfc_pressure: None,
        lfc_temperature: None,
        el_pressure: None,
        el_temperature: None,
        surface_temperature: Celsius::new(25.0),
        surface_dewpoint: Celsius::new(18.0),
        parcel_profile: Vec::new(),
    };
    RiskAssessor::new().assess(&indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;

    #[test]
    fn test_analyze_produces_consistent_bundle() {
        let profile = SoundingProfile::moderate_summer();
        let analysis = analyze(&profile, ParcelOptions::default(), &RiskAssessor::new());

        assert_eq!(
            analysis.indices.parcel_profile.len(),
            profile.level_count()
        );
        // Both engines saw the same indices
        let repeat = RiskAssessor::new().assess(&analysis.indices);
        assert_eq!(repeat, analysis.assessment);
    }

    #[test]
    fn test_quick_assessment_is_sign_agnostic() {
        // CIN often arrives negatively signed from other tools
        let negative = quick_assessment(150.0, -250.0);
        let positive = quick_assessment(150.0, 250.0);
        assert_eq!(negative, positive);
        assert_eq!(negative.paragliding.risk_level, RiskLevel::Minimal);
    }
}
