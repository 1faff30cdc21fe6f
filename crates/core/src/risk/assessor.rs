//! Multi-stakeholder risk assessment
//!
//! Builds the ordered rule list for each aviation category from the
//! threshold configuration and evaluates all five independently over the
//! same convective indices. Every decision is deterministic and auditable:
//! the reasoning string names the quantity and cutoff that fired.

use crate::core_types::ConvectiveIndices;
use crate::risk::levels::RiskLevel;
use crate::risk::report::{ConvectivePotential, RiskAssessment, StakeholderRisk};
use crate::risk::rules::{evaluate, DecisionRule, OperatingWindow, RiskContext};
use crate::risk::thresholds::{
    AviationThresholds, BalloonThresholds, GlidingThresholds, RiskThresholds, SoaringThresholds,
    SummaryThresholds,
};

/// Activity labels, shared by the rule builders and the fail-safe path
mod activity {
    pub const PARAGLIDING: &str = "Paragliding";
    pub const HANG_GLIDING: &str = "Hang Gliding";
    pub const HOT_AIR_BALLOON: &str = "Hot Air Balloon";
    pub const GLIDING: &str = "Gliding (Sailplanes)";
    pub const GENERAL_AVIATION: &str = "General Aviation (VFR)";
}

/// Assessor holding the threshold configuration and operating window
///
/// Stateless between calls: `assess` is a pure function of the indices and
/// the configuration captured here.
///
/// # Example
/// ```
/// use convective_risk_core::risk::{OperatingWindow, RiskAssessor};
/// use convective_risk_core::physics::{compute_indices, ParcelOptions};
/// use convective_risk_core::SoundingProfile;
///
/// let indices = compute_indices(&SoundingProfile::capped_stable(), ParcelOptions::default());
/// let assessment = RiskAssessor::new()
///     .with_window(OperatingWindow::Sunrise)
///     .assess(&indices);
/// assert!(assessment.hot_air_balloon.go_no_go);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    thresholds: RiskThresholds,
    window: OperatingWindow,
}

impl RiskAssessor {
    /// Assessor with default thresholds and the conservative daytime window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the threshold configuration (regional/regulatory variant)
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the operating window the balloon rules are judged against
    #[must_use]
    pub fn with_window(mut self, window: OperatingWindow) -> Self {
        self.window = window;
        self
    }

    /// Configured thresholds
    #[must_use]
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Assess all five stakeholders over the same indices
    ///
    /// Pure and total: any valid indices value (including the all-zero
    /// quiescent case) produces a full bundle, and repeated calls yield
    /// identical output.
    #[must_use]
    pub fn assess(&self, indices: &ConvectiveIndices) -> RiskAssessment {
        let context = RiskContext::new(indices, self.window);

        RiskAssessment {
            general_risk: general_risk(&self.thresholds.summary, &context),
            convective_potential: convective_potential(&self.thresholds.summary, &context),
            paragliding: evaluate(
                activity::PARAGLIDING,
                &paragliding_rules(&self.thresholds.paragliding),
                &context,
            ),
            hang_gliding: evaluate(
                activity::HANG_GLIDING,
                &hang_gliding_rules(&self.thresholds.hang_gliding),
                &context,
            ),
            hot_air_balloon: evaluate(
                activity::HOT_AIR_BALLOON,
                &balloon_rules(&self.thresholds.balloon),
                &context,
            ),
            gliding: evaluate(
                activity::GLIDING,
                &gliding_rules(&self.thresholds.gliding),
                &context,
            ),
            general_aviation: evaluate(
                activity::GENERAL_AVIATION,
                &general_aviation_rules(&self.thresholds.general_aviation),
                &context,
            ),
        }
    }
}

fn outcome(
    activity: &str,
    risk_level: RiskLevel,
    go_no_go: bool,
    reasoning: String,
    precautions: &[&str],
) -> StakeholderRisk {
    StakeholderRisk {
        activity: activity.to_string(),
        risk_level,
        go_no_go,
        reasoning,
        precautions: precautions.iter().map(ToString::to_string).collect(),
    }
}

/// Leading rule shared by every stakeholder: a column with zero CAPE has no
/// convective signal and is indistinguishable from a calm atmosphere, so it
/// resolves to the least-severe classification outright.
fn no_signal_rule(activity: &'static str) -> DecisionRule {
    DecisionRule::new(
        "no-signal",
        |c| c.cape <= 0.0,
        move |_| {
            outcome(
                activity,
                RiskLevel::Minimal,
                true,
                "No convective signal: zero CAPE in the column.".to_string(),
                &["Standard operating procedures"],
            )
        },
    )
}

/// Paragliding: CIN-led, the most convection-sensitive wing
///
/// A strong cap is protective even under high CAPE; an uncapped column is
/// judged by CAPE against the soaring ceilings.
#[must_use]
pub fn paragliding_rules(thresholds: &SoaringThresholds) -> Vec<DecisionRule> {
    let t = *thresholds;
    vec![
        no_signal_rule(activity::PARAGLIDING),
        DecisionRule::new(
            "strong-cap",
            move |c| c.cin > t.strong_cap_cin,
            |c| {
                outcome(
                    activity::PARAGLIDING,
                    RiskLevel::Minimal,
                    true,
                    format!(
                        "Strong cap (CIN {:.0} J/kg) prevents convection. Excellent soaring conditions.",
                        c.cin
                    ),
                    &[
                        "Monitor for cap breakage",
                        "Stay within glide range of landing zones",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "moderate-cap",
            move |c| c.cin > t.moderate_cap_cin,
            |c| {
                outcome(
                    activity::PARAGLIDING,
                    RiskLevel::Low,
                    true,
                    format!(
                        "Moderate cap (CIN {:.0} J/kg) limits convective development.",
                        c.cin
                    ),
                    &[
                        "Monitor cloud development",
                        "Land if cumulus develops rapidly",
                        "Avoid areas of convergence",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "uncapped-extreme-cape",
            move |c| c.cape >= t.extreme_cape,
            |c| {
                outcome(
                    activity::PARAGLIDING,
                    RiskLevel::Extreme,
                    false,
                    format!(
                        "DANGEROUS: high CAPE ({:.0} J/kg) with a weak cap. Thunderstorm development likely.",
                        c.cape
                    ),
                    &[
                        "DO NOT FLY",
                        "Wait for storms to pass",
                        "Check forecast for storm timing",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "uncapped-high-cape",
            move |c| c.cape >= t.high_cape,
            |c| {
                outcome(
                    activity::PARAGLIDING,
                    RiskLevel::High,
                    false,
                    format!(
                        "Moderate CAPE ({:.0} J/kg) with no cap. Convection probable.",
                        c.cape
                    ),
                    &["Fly early morning only", "Land by 11am", "Watch for first cumulus"],
                )
            },
        ),
        DecisionRule::new(
            "weak-convection",
            |_| true,
            |c| {
                outcome(
                    activity::PARAGLIDING,
                    RiskLevel::Moderate,
                    true,
                    format!("Low CAPE ({:.0} J/kg), weak convection expected.", c.cape),
                    &[
                        "Monitor cloud development",
                        "Avoid overdevelopment areas",
                        "Land if conditions deteriorate",
                    ],
                )
            },
        ),
    ]
}

/// Hang gliding: the same ordered predicates as paragliding, each outcome
/// one severity tier more permissive
///
/// Higher wing loading tolerates stronger convective turbulence; the
/// cutoffs stay identical so the two lists remain directly comparable.
#[must_use]
pub fn hang_gliding_rules(thresholds: &SoaringThresholds) -> Vec<DecisionRule> {
    let t = *thresholds;
    vec![
        no_signal_rule(activity::HANG_GLIDING),
        DecisionRule::new(
            "strong-cap",
            move |c| c.cin > t.strong_cap_cin,
            |c| {
                outcome(
                    activity::HANG_GLIDING,
                    RiskLevel::Minimal,
                    true,
                    format!(
                        "Strong cap (CIN {:.0} J/kg) prevents convection. Excellent soaring conditions.",
                        c.cin
                    ),
                    &[
                        "Monitor for cap breakage",
                        "Stay within glide range of landing zones",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "moderate-cap",
            move |c| c.cin > t.moderate_cap_cin,
            |c| {
                outcome(
                    activity::HANG_GLIDING,
                    RiskLevel::Minimal,
                    true,
                    format!(
                        "Moderate cap (CIN {:.0} J/kg); higher wing loading handles residual turbulence.",
                        c.cin
                    ),
                    &["Monitor cloud development", "Avoid areas of convergence"],
                )
            },
        ),
        DecisionRule::new(
            "uncapped-extreme-cape",
            move |c| c.cape >= t.extreme_cape,
            |c| {
                outcome(
                    activity::HANG_GLIDING,
                    RiskLevel::High,
                    false,
                    format!(
                        "High CAPE ({:.0} J/kg) with a weak cap. Thunderstorm risk outweighs wing-loading margin.",
                        c.cape
                    ),
                    &["DO NOT FLY", "Wait for storms to pass"],
                )
            },
        ),
        DecisionRule::new(
            "uncapped-high-cape",
            move |c| c.cape >= t.high_cape,
            |c| {
                outcome(
                    activity::HANG_GLIDING,
                    RiskLevel::Moderate,
                    true,
                    format!(
                        "Moderate CAPE ({:.0} J/kg) with no cap; flyable early on higher wing loading.",
                        c.cape
                    ),
                    &["Fly early morning only", "Land by 11am", "Watch for first cumulus"],
                )
            },
        ),
        DecisionRule::new(
            "weak-convection",
            |_| true,
            |c| {
                outcome(
                    activity::HANG_GLIDING,
                    RiskLevel::Low,
                    true,
                    format!("Low CAPE ({:.0} J/kg), weak convection expected.", c.cape),
                    &["Monitor cloud development", "Land if conditions deteriorate"],
                )
            },
        ),
    ]
}

/// Hot-air balloon: CAPE-led and the most restrictive stakeholder
///
/// Balloons cannot outrun convection, so a single absolute CAPE ceiling
/// dominates regardless of CIN. Below it, the caller-supplied operating
/// window decides: daytime operations are grounded from the lower morning
/// ceiling up, while a sunrise launch can still use the calm window before
/// surface heating releases the forecast CAPE.
#[must_use]
pub fn balloon_rules(thresholds: &BalloonThresholds) -> Vec<DecisionRule> {
    let t = *thresholds;
    vec![
        no_signal_rule(activity::HOT_AIR_BALLOON),
        DecisionRule::new(
            "absolute-ceiling",
            move |c| c.cape >= t.absolute_cape_ceiling,
            |c| {
                outcome(
                    activity::HOT_AIR_BALLOON,
                    RiskLevel::Extreme,
                    false,
                    format!(
                        "CAPE {:.0} J/kg above the absolute ceiling. Balloons cannot escape convective conditions.",
                        c.cape
                    ),
                    &["DO NOT FLY", "Check forecast carefully"],
                )
            },
        ),
        DecisionRule::new(
            "daytime-above-morning-ceiling",
            move |c| c.window == OperatingWindow::Daytime && c.cape >= t.morning_cape_ceiling,
            |c| {
                outcome(
                    activity::HOT_AIR_BALLOON,
                    RiskLevel::High,
                    false,
                    format!(
                        "CAPE {:.0} J/kg will feed daytime convection. Limited manoeuvrability leaves no escape.",
                        c.cape
                    ),
                    &["Reschedule to a sunrise launch", "Avoid afternoon operations"],
                )
            },
        ),
        DecisionRule::new(
            "sunrise-above-morning-ceiling",
            move |c| c.window == OperatingWindow::Sunrise && c.cape >= t.morning_cape_ceiling,
            |c| {
                outcome(
                    activity::HOT_AIR_BALLOON,
                    RiskLevel::Moderate,
                    true,
                    format!(
                        "Sunrise window only: CAPE {:.0} J/kg stays capped until surface heating begins.",
                        c.cape
                    ),
                    &[
                        "Launch at first light",
                        "Land before 8am",
                        "Monitor cumulus development",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "capped-calm",
            move |c| c.cin > t.capped_cin,
            |c| {
                outcome(
                    activity::HOT_AIR_BALLOON,
                    RiskLevel::Minimal,
                    true,
                    format!("Low CAPE ({:.0} J/kg) with a cap. Good conditions.", c.cape),
                    &["Standard operating procedures", "Monitor surface heating"],
                )
            },
        ),
        DecisionRule::new(
            "calm",
            |_| true,
            |c| {
                outcome(
                    activity::HOT_AIR_BALLOON,
                    RiskLevel::Low,
                    true,
                    format!("Low CAPE ({:.0} J/kg). Acceptable conditions.", c.cape),
                    &[
                        "Fly early",
                        "Monitor cumulus development",
                        "Land if thermals strengthen",
                    ],
                )
            },
        ),
    ]
}

/// Sailplanes: inverted preference - lift is sought, storms are not
///
/// The best band is strong CAPE held down by meaningful CIN: energy for
/// cross-country flying without free convection. Very high CAPE grounds
/// the fleet regardless of cap.
#[must_use]
pub fn gliding_rules(thresholds: &GlidingThresholds) -> Vec<DecisionRule> {
    let t = *thresholds;
    vec![
        no_signal_rule(activity::GLIDING),
        DecisionRule::new(
            "storm-cape",
            move |c| c.cape >= t.storm_cape,
            |c| {
                outcome(
                    activity::GLIDING,
                    RiskLevel::High,
                    false,
                    format!("Extreme CAPE ({:.0} J/kg). Storm development likely.", c.cape),
                    &[
                        "Morning flights only",
                        "Land before convection develops",
                        "Have alternate landing sites",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "capped-strong-lift",
            move |c| c.cape >= t.strong_cape && c.cin > t.cap_cin,
            |c| {
                outcome(
                    activity::GLIDING,
                    RiskLevel::Low,
                    true,
                    format!(
                        "Strong CAPE ({:.0} J/kg) under cap control. Excellent XC conditions.",
                        c.cape
                    ),
                    &[
                        "Monitor cap breakage",
                        "Track storm development",
                        "Land away from storms",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "uncapped-strong-lift",
            move |c| c.cape >= t.strong_cape,
            |c| {
                outcome(
                    activity::GLIDING,
                    RiskLevel::Moderate,
                    true,
                    format!(
                        "Strong CAPE ({:.0} J/kg) without a cap. Good lift but storm risk.",
                        c.cape
                    ),
                    &[
                        "Fly early",
                        "Land by early afternoon",
                        "Monitor radar",
                        "Keep 20km storm clearance",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "thermal-band",
            move |c| c.cape >= t.thermal_cape,
            |c| {
                outcome(
                    activity::GLIDING,
                    RiskLevel::Low,
                    true,
                    format!("Moderate CAPE ({:.0} J/kg). Good thermal conditions.", c.cape),
                    &["Standard XC precautions", "Monitor convective development"],
                )
            },
        ),
        DecisionRule::new(
            "blue-day",
            |_| true,
            |c| {
                outcome(
                    activity::GLIDING,
                    RiskLevel::Minimal,
                    true,
                    format!(
                        "Low CAPE ({:.0} J/kg). Weak thermals, blue day possible.",
                        c.cape
                    ),
                    &[
                        "Expect weak lift",
                        "Plan for lower working altitudes",
                        "Ridge or wave soaring may be better",
                    ],
                )
            },
        ),
    ]
}

/// General aviation: CAPE-led three-band decision, indifferent to CIN
#[must_use]
pub fn general_aviation_rules(thresholds: &AviationThresholds) -> Vec<DecisionRule> {
    let t = *thresholds;
    vec![
        no_signal_rule(activity::GENERAL_AVIATION),
        DecisionRule::new(
            "no-go-band",
            move |c| c.cape >= t.no_go_cape,
            |c| {
                outcome(
                    activity::GENERAL_AVIATION,
                    RiskLevel::High,
                    false,
                    format!("High CAPE ({:.0} J/kg). Embedded thunderstorms likely.", c.cape),
                    &[
                        "IFR flight plan",
                        "Storm avoidance equipment required",
                        "Keep 20nm storm clearance",
                        "Consider delaying flight",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "caution-band",
            move |c| c.cape >= t.caution_cape,
            |c| {
                outcome(
                    activity::GENERAL_AVIATION,
                    RiskLevel::Moderate,
                    true,
                    format!("Moderate CAPE ({:.0} J/kg). Convection possible.", c.cape),
                    &[
                        "File VFR flight plan",
                        "Monitor weather radar",
                        "Maintain VMC",
                        "Have alternate routes",
                    ],
                )
            },
        ),
        DecisionRule::new(
            "clear-band",
            |_| true,
            |c| {
                outcome(
                    activity::GENERAL_AVIATION,
                    RiskLevel::Low,
                    true,
                    format!("Low CAPE ({:.0} J/kg). Good VFR conditions.", c.cape),
                    &["Standard VFR operations", "Monitor METAR/TAF"],
                )
            },
        ),
    ]
}

/// Column-wide convective potential class (CAPE bands, stricter-side closed)
fn convective_potential(thresholds: &SummaryThresholds, context: &RiskContext) -> ConvectivePotential {
    if context.cape >= thresholds.extreme_cape {
        ConvectivePotential::Extreme
    } else if context.cape >= thresholds.strong_cape {
        ConvectivePotential::Strong
    } else if context.cape >= thresholds.moderate_cape {
        ConvectivePotential::Moderate
    } else {
        ConvectivePotential::Weak
    }
}

/// Column-wide general risk: CIN-led cap credit, then CAPE bands
fn general_risk(thresholds: &SummaryThresholds, context: &RiskContext) -> RiskLevel {
    if context.cin > thresholds.strong_cap_cin {
        return RiskLevel::Minimal;
    }
    if context.cin > thresholds.moderate_cap_cin {
        return RiskLevel::Low;
    }
    if context.cape >= thresholds.extreme_cape {
        RiskLevel::Extreme
    } else if context.cape >= thresholds.strong_cape {
        RiskLevel::High
    } else if context.cape >= thresholds.moderate_cape {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
