//! Threshold configuration for the multi-stakeholder risk engine
//!
//! Every CAPE/CIN cutoff the rule lists compare against lives here as a
//! named, documented value. The engines never embed a literal: regional or
//! regulatory variants are substituted by building a [`RiskThresholds`] with
//! different numbers and handing it to the assessor.
//!
//! Boundary semantics are uniform across the engine: CAPE cutoffs are
//! compared with `>=` (a value exactly on a tier edge takes the stricter
//! tier) and CIN cap-credit cutoffs with strict `>` (a value exactly on the
//! edge does not earn the more permissive tier).

use serde::{Deserialize, Serialize};

/// Default cutoff values (J/kg)
///
/// Grouped here so tests and documentation reference one set of numbers,
/// in the same spirit as a danger-index classification table.
pub mod defaults {
    /// CIN above which soaring wings treat the cap as unbreakable
    pub const SOARING_STRONG_CAP_CIN: f64 = 200.0;
    /// CIN above which soaring wings treat the cap as limiting
    pub const SOARING_MODERATE_CAP_CIN: f64 = 50.0;
    /// CAPE at which an uncapped column grounds paragliders outright
    pub const SOARING_EXTREME_CAPE: f64 = 1000.0;
    /// CAPE at which an uncapped column grounds paragliders for the day
    pub const SOARING_HIGH_CAPE: f64 = 500.0;

    /// CAPE ceiling above which balloons stay down regardless of window
    pub const BALLOON_ABSOLUTE_CAPE_CEILING: f64 = 500.0;
    /// Lower CAPE ceiling distinguishing sunrise from daytime operations
    pub const BALLOON_MORNING_CAPE_CEILING: f64 = 200.0;
    /// CIN above which a calm balloon morning counts as firmly capped
    pub const BALLOON_CAPPED_CIN: f64 = 100.0;

    /// CAPE at which sailplanes stand down for storm risk
    pub const GLIDING_STORM_CAPE: f64 = 2500.0;
    /// CAPE marking the strong-lift band sailplanes seek
    pub const GLIDING_STRONG_CAPE: f64 = 1000.0;
    /// CAPE marking ordinary workable thermals
    pub const GLIDING_THERMAL_CAPE: f64 = 300.0;
    /// CIN that holds a strong-CAPE day capped (the favorable combination)
    pub const GLIDING_CAP_CIN: f64 = 100.0;

    /// CAPE at which general aviation goes NO-GO
    pub const AVIATION_NO_GO_CAPE: f64 = 1500.0;
    /// CAPE opening the cautious-GO band for general aviation
    pub const AVIATION_CAUTION_CAPE: f64 = 500.0;

    /// Convective-potential classification edges
    pub const POTENTIAL_MODERATE_CAPE: f64 = 300.0;
    /// Lower edge of the "strong" convective-potential class
    pub const POTENTIAL_STRONG_CAPE: f64 = 1000.0;
    /// Lower edge of the "extreme" convective-potential class
    pub const POTENTIAL_EXTREME_CAPE: f64 = 2500.0;

    /// CIN granting the column-wide minimal general-risk class
    pub const GENERAL_STRONG_CAP_CIN: f64 = 200.0;
    /// CIN granting the column-wide low general-risk class
    pub const GENERAL_MODERATE_CAP_CIN: f64 = 100.0;
}

/// Cutoffs for the CIN-led soaring-wing decisions (paragliding and hang
/// gliding share the structure; hang gliding shifts the *outcomes*, not the
/// cutoffs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoaringThresholds {
    /// CIN above which the cap is treated as unbreakable (GO even under
    /// high CAPE)
    pub strong_cap_cin: f64,
    /// CIN above which the cap still limits development
    pub moderate_cap_cin: f64,
    /// Uncapped CAPE at/above which the day is extreme
    pub extreme_cape: f64,
    /// Uncapped CAPE at/above which the day is high-risk
    pub high_cape: f64,
}

impl Default for SoaringThresholds {
    fn default() -> Self {
        Self {
            strong_cap_cin: defaults::SOARING_STRONG_CAP_CIN,
            moderate_cap_cin: defaults::SOARING_MODERATE_CAP_CIN,
            extreme_cape: defaults::SOARING_EXTREME_CAPE,
            high_cape: defaults::SOARING_HIGH_CAPE,
        }
    }
}

/// Cutoffs for the CAPE-led hot-air-balloon decisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalloonThresholds {
    /// CAPE at/above which balloons stay down in any operating window
    pub absolute_cape_ceiling: f64,
    /// CAPE at/above which only the sunrise window remains flyable;
    /// daytime operations are NO-GO from here up
    pub morning_cape_ceiling: f64,
    /// CIN above which a below-ceiling morning counts as firmly capped
    pub capped_cin: f64,
}

impl Default for BalloonThresholds {
    fn default() -> Self {
        Self {
            absolute_cape_ceiling: defaults::BALLOON_ABSOLUTE_CAPE_CEILING,
            morning_cape_ceiling: defaults::BALLOON_MORNING_CAPE_CEILING,
            capped_cin: defaults::BALLOON_CAPPED_CIN,
        }
    }
}

/// Cutoffs for the sailplane decisions (inverted preference: lift is wanted,
/// storms are not)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlidingThresholds {
    /// CAPE at/above which storm risk grounds sailplanes regardless of CIN
    pub storm_cape: f64,
    /// CAPE at/above which the day counts as strong lift
    pub strong_cape: f64,
    /// CAPE at/above which ordinary thermals are workable
    pub thermal_cape: f64,
    /// CIN that keeps a strong-CAPE day capped - the favorable band
    pub cap_cin: f64,
}

impl Default for GlidingThresholds {
    fn default() -> Self {
        Self {
            storm_cape: defaults::GLIDING_STORM_CAPE,
            strong_cape: defaults::GLIDING_STRONG_CAPE,
            thermal_cape: defaults::GLIDING_THERMAL_CAPE,
            cap_cin: defaults::GLIDING_CAP_CIN,
        }
    }
}

/// Cutoffs for the three-band general-aviation decisions (CIN-indifferent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AviationThresholds {
    /// CAPE at/above which the flight is NO-GO
    pub no_go_cape: f64,
    /// CAPE at/above which the flight is a cautious GO
    pub caution_cape: f64,
}

impl Default for AviationThresholds {
    fn default() -> Self {
        Self {
            no_go_cape: defaults::AVIATION_NO_GO_CAPE,
            caution_cape: defaults::AVIATION_CAUTION_CAPE,
        }
    }
}

/// Cutoffs for the column-wide summary classifications
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryThresholds {
    /// CAPE at/above which potential is at least moderate
    pub moderate_cape: f64,
    /// CAPE at/above which potential is strong
    pub strong_cape: f64,
    /// CAPE at/above which potential is extreme
    pub extreme_cape: f64,
    /// CIN granting the minimal general-risk class
    pub strong_cap_cin: f64,
    /// CIN granting the low general-risk class
    pub moderate_cap_cin: f64,
}

impl Default for SummaryThresholds {
    fn default() -> Self {
        Self {
            moderate_cape: defaults::POTENTIAL_MODERATE_CAPE,
            strong_cape: defaults::POTENTIAL_STRONG_CAPE,
            extreme_cape: defaults::POTENTIAL_EXTREME_CAPE,
            strong_cap_cin: defaults::GENERAL_STRONG_CAP_CIN,
            moderate_cap_cin: defaults::GENERAL_MODERATE_CAP_CIN,
        }
    }
}

/// The complete, substitutable configuration surface of the risk engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Paragliding cutoffs
    pub paragliding: SoaringThresholds,
    /// Hang-gliding cutoffs (same defaults as paragliding; the rule
    /// outcomes, not the cutoffs, carry the one-tier shift)
    pub hang_gliding: SoaringThresholds,
    /// Hot-air-balloon cutoffs
    pub balloon: BalloonThresholds,
    /// Sailplane cutoffs
    pub gliding: GlidingThresholds,
    /// General-aviation cutoffs
    pub general_aviation: AviationThresholds,
    /// Column-wide summary cutoffs
    pub summary: SummaryThresholds,
}
