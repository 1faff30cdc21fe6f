//! Ordered decision-rule machinery
//!
//! Each stakeholder is an ordered list of [`DecisionRule`]s evaluated
//! top-to-bottom; the first matching predicate wins and its outcome fully
//! determines the [`StakeholderRisk`] - no fallthrough, no re-evaluation,
//! no partial overrides. Rule order and exhaustiveness are therefore
//! independently testable, and regional variants can rebuild the lists from
//! different thresholds without touching the evaluation.

use crate::core_types::ConvectiveIndices;
use crate::risk::levels::RiskLevel;
use crate::risk::report::StakeholderRisk;
use std::fmt;

/// Operating window for time-sensitive stakeholders
///
/// Supplied by the caller, never inferred from the indices. Currently only
/// the hot-air-balloon rules read it: forecast CAPE that will feed daytime
/// convection can still leave the calm sunrise window flyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatingWindow {
    /// First light until surface heating begins
    Sunrise,
    /// Anything later than the early-morning window (default: the
    /// conservative assumption when the caller does not say)
    #[default]
    Daytime,
}

/// Inputs a rule predicate may consult
///
/// CAPE and CIN are carried as raw magnitudes (J/kg); the constructor takes
/// them straight from the indices so every stakeholder sees the same
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskContext {
    /// Convective available potential energy magnitude (J/kg)
    pub cape: f64,
    /// Convective inhibition magnitude (J/kg)
    pub cin: f64,
    /// Caller-supplied operating window
    pub window: OperatingWindow,
}

impl RiskContext {
    /// Build the evaluation context from computed indices
    #[must_use]
    pub fn new(indices: &ConvectiveIndices, window: OperatingWindow) -> Self {
        Self {
            cape: indices.cape.value(),
            cin: indices.cin.value(),
            window,
        }
    }
}

/// One (predicate, outcome) pair in a stakeholder's ordered rule list
pub struct DecisionRule {
    name: &'static str,
    predicate: Box<dyn Fn(&RiskContext) -> bool + Send + Sync>,
    outcome: Box<dyn Fn(&RiskContext) -> StakeholderRisk + Send + Sync>,
}

impl DecisionRule {
    /// Create a rule from a predicate and the outcome it fully determines
    pub fn new(
        name: &'static str,
        predicate: impl Fn(&RiskContext) -> bool + Send + Sync + 'static,
        outcome: impl Fn(&RiskContext) -> StakeholderRisk + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
            outcome: Box::new(outcome),
        }
    }

    /// Rule identifier, for order/exhaustiveness tests and audit trails
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this rule's predicate matches the context
    #[must_use]
    pub fn matches(&self, context: &RiskContext) -> bool {
        (self.predicate)(context)
    }

    /// Produce the rule's outcome for the context
    #[must_use]
    pub fn fire(&self, context: &RiskContext) -> StakeholderRisk {
        (self.outcome)(context)
    }
}

impl fmt::Debug for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Evaluate an ordered rule list: first match wins
///
/// Exhaustive lists end in a catch-all, so the fail-safe outcome should
/// never fire; it exists so an incomplete regional variant fails toward
/// NO-GO instead of silently approving.
#[must_use]
pub fn evaluate(activity: &str, rules: &[DecisionRule], context: &RiskContext) -> StakeholderRisk {
    for rule in rules {
        if rule.matches(context) {
            return rule.fire(context);
        }
    }
    fail_safe(activity, context)
}

/// Fail-safe outcome for an unhandled input
#[must_use]
pub fn fail_safe(activity: &str, context: &RiskContext) -> StakeholderRisk {
    StakeholderRisk {
        activity: activity.to_string(),
        risk_level: RiskLevel::Extreme,
        go_no_go: false,
        reasoning: format!(
            "UNHANDLED INPUT: no decision rule matched CAPE {:.0} J/kg, CIN {:.0} J/kg. Failing safe.",
            context.cape, context.cin
        ),
        precautions: vec!["Do not fly until the rule configuration is reviewed".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(cape: f64, cin: f64) -> RiskContext {
        RiskContext {
            cape,
            cin,
            window: OperatingWindow::Daytime,
        }
    }

    fn go_outcome(name: &'static str) -> StakeholderRisk {
        StakeholderRisk {
            activity: name.to_string(),
            risk_level: RiskLevel::Low,
            go_no_go: true,
            reasoning: name.to_string(),
            precautions: Vec::new(),
        }
    }

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            DecisionRule::new("first", |c| c.cape >= 100.0, |_| go_outcome("first")),
            DecisionRule::new("second", |c| c.cape >= 100.0, |_| go_outcome("second")),
        ];
        let result = evaluate("Test", &rules, &context(150.0, 0.0));
        assert_eq!(result.reasoning, "first");
    }

    #[test]
    fn test_empty_list_fails_safe() {
        let result = evaluate("Test", &[], &context(42.0, 7.0));
        assert_eq!(result.risk_level, RiskLevel::Extreme);
        assert!(!result.go_no_go);
        assert!(result.reasoning.contains("UNHANDLED INPUT"));
        assert!(result.reasoning.contains("42"));
    }

    #[test]
    fn test_no_match_fails_safe() {
        let rules = vec![DecisionRule::new(
            "narrow",
            |c| c.cape > 1e6,
            |_| go_outcome("narrow"),
        )];
        let result = evaluate("Test", &rules, &context(500.0, 50.0));
        assert!(!result.go_no_go);
    }

    #[test]
    fn test_rule_names_are_inspectable() {
        let rules = vec![
            DecisionRule::new("a", |_| true, |_| go_outcome("a")),
            DecisionRule::new("b", |_| true, |_| go_outcome("b")),
        ];
        let names: Vec<_> = rules.iter().map(DecisionRule::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
