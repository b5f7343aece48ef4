// src/core/gate.rs — Decision gate
//
// Turns a RiskAssessment into one of two outcomes: execute the bookings, or
// stop and wait for the user. No cancellation or timeout semantics here; the
// whole evaluation is synchronous.

use super::risk::{RiskAssessment, RiskConfig};

/// Terminal outcome of one gated evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Execute,
    AwaitOverride,
}

#[derive(Debug, Clone)]
pub struct DecisionGate {
    confidence_threshold: f64,
}

impl DecisionGate {
    /// Share the evaluator's threshold so the gate and the recommendation
    /// string can never disagree.
    pub fn from_risk_config(cfg: &RiskConfig) -> Self {
        Self {
            confidence_threshold: cfg.confidence_threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.confidence_threshold
    }

    pub fn decide(&self, assessment: &RiskAssessment) -> GateOutcome {
        if assessment.confidence < self.confidence_threshold {
            GateOutcome::AwaitOverride
        } else {
            GateOutcome::Execute
        }
    }
}

impl Default for DecisionGate {
    fn default() -> Self {
        Self::from_risk_config(&RiskConfig::default())
    }
}
