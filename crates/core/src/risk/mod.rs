//! Multi-stakeholder risk engine
//!
//! Maps [`ConvectiveIndices`](crate::ConvectiveIndices) into independent
//! go/no-go decisions for five categories of light aviation. Every decision
//! is an ordered rule list over an explicit threshold configuration; nothing
//! is inferred, everything is auditable.

pub mod assessor;
pub mod levels;
pub mod report;
pub mod rules;
pub mod thresholds;

pub use assessor::{
    balloon_rules, general_aviation_rules, gliding_rules, hang_gliding_rules, paragliding_rules,
    RiskAssessor,
};
pub use levels::RiskLevel;
pub use report::{ConvectivePotential, RiskAssessment, StakeholderRisk};
pub use rules::{evaluate, DecisionRule, OperatingWindow, RiskContext};
pub use thresholds::{
    AviationThresholds, BalloonThresholds, GlidingThresholds, RiskThresholds, SoaringThresholds,
    SummaryThresholds,
};
