// src/core/risk.rs — Risk evaluator
//
// Quantifies whether a selected food order and ride will both complete before
// class, and records why. Additive-penalty heuristic, not a probabilistic
// model: variance inputs are thresholded, never fed into a distribution.

use serde::{Deserialize, Serialize};

use super::types::{FoodCandidate, PlannerContext, TravelCandidate};

/// Named thresholds and penalty weights for the evaluator. Every value is
/// overridable through the `[risk]` config section. The evaluator performs no
/// bounds-checking on these; pathological values are the caller's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Minutes of slack required before class; less than this is penalized.
    pub min_buffer: f64,
    /// Food ETA ceiling before a penalty applies.
    pub max_food_eta: f64,
    /// Travel ETA ceiling before a penalty applies.
    pub max_travel_eta: f64,
    /// Food ETA variance above which a penalty applies.
    pub food_variance_ceiling: f64,
    /// Travel ETA variance above which a penalty applies.
    pub travel_variance_ceiling: f64,

    pub buffer_penalty: f64,
    pub food_eta_penalty: f64,
    pub travel_eta_penalty: f64,
    pub food_variance_penalty: f64,
    pub travel_variance_penalty: f64,

    /// Confidence at or above this is safe to execute. The decision gate
    /// reads the same field, so the two cannot drift apart.
    pub confidence_threshold: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            min_buffer: 15.0,
            max_food_eta: 30.0,
            max_travel_eta: 20.0,
            food_variance_ceiling: 5.0,
            travel_variance_ceiling: 4.0,
            buffer_penalty: 0.35,
            food_eta_penalty: 0.20,
            travel_eta_penalty: 0.20,
            food_variance_penalty: 0.15,
            travel_variance_penalty: 0.10,
            confidence_threshold: 0.6,
        }
    }
}

/// Which constraint a penalty was deducted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyRule {
    TightBuffer,
    SlowFood,
    SlowTravel,
    FoodVariance,
    TravelVariance,
}

impl std::fmt::Display for PenaltyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PenaltyRule::TightBuffer => "tight_buffer",
            PenaltyRule::SlowFood => "slow_food",
            PenaltyRule::SlowTravel => "slow_travel",
            PenaltyRule::FoodVariance => "food_variance",
            PenaltyRule::TravelVariance => "travel_variance",
        };
        write!(f, "{name}")
    }
}

/// One penalty that fired, with its magnitude and a human-readable detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Penalty {
    pub rule: PenaltyRule,
    pub amount: f64,
    pub detail: String,
}

/// The arithmetic behind an assessment, kept for explainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReasoning {
    pub food_eta: f64,
    pub travel_eta: f64,
    pub total_eta: f64,
    pub minutes_until_class: f64,
    /// Raw slack; may be negative even though `buffer_minutes` is clamped.
    pub buffer: f64,
    pub penalties: Vec<Penalty>,
}

impl RiskReasoning {
    /// The penalty record for `rule`, if it fired.
    pub fn fired(&self, rule: PenaltyRule) -> Option<&Penalty> {
        self.penalties.iter().find(|p| p.rule == rule)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Safe to execute")]
    SafeToExecute,
    #[serde(rename = "Needs user approval")]
    NeedsApproval,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::SafeToExecute => write!(f, "Safe to execute"),
            Recommendation::NeedsApproval => write!(f, "Needs user approval"),
        }
    }
}

/// Derived result of one evaluation. Never stored; recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Always within [0.0, 1.0].
    pub confidence: f64,
    /// Clamped to >= 0 for display; the raw deficit lives in `reasoning.buffer`.
    pub buffer_minutes: f64,
    pub reasoning: RiskReasoning,
    pub recommendation: Recommendation,
}

/// Strategy seam: any scorer that maps (food, travel, context) to an
/// assessment can stand behind the planner.
pub trait RiskScorer: Send + Sync {
    fn evaluate(
        &self,
        food: &FoodCandidate,
        travel: &TravelCandidate,
        ctx: &PlannerContext,
    ) -> RiskAssessment;
}

/// The default scorer: start at 1.0 and deduct a fixed weight for each
/// constraint the plan violates.
#[derive(Debug, Clone, Default)]
pub struct WeightedDeduction {
    config: RiskConfig,
}

impl WeightedDeduction {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

impl RiskScorer for WeightedDeduction {
    // Negative etas or variances are not rejected; they flow through the
    // arithmetic unchanged.
    fn evaluate(
        &self,
        food: &FoodCandidate,
        travel: &TravelCandidate,
        ctx: &PlannerContext,
    ) -> RiskAssessment {
        let cfg = &self.config;

        let total_eta = food.eta_minutes + travel.eta_minutes;
        let buffer = ctx.minutes_until_class - total_eta;

        let mut confidence: f64 = 1.0;
        let mut penalties = Vec::new();

        if buffer < cfg.min_buffer {
            confidence -= cfg.buffer_penalty;
            penalties.push(Penalty {
                rule: PenaltyRule::TightBuffer,
                amount: cfg.buffer_penalty,
                detail: format!(
                    "buffer is {buffer:.0} minutes, minimum required is {:.0}",
                    cfg.min_buffer
                ),
            });
        }

        if food.eta_minutes > cfg.max_food_eta {
            confidence -= cfg.food_eta_penalty;
            penalties.push(Penalty {
                rule: PenaltyRule::SlowFood,
                amount: cfg.food_eta_penalty,
                detail: format!(
                    "food ETA {:.0} exceeds max {:.0}",
                    food.eta_minutes, cfg.max_food_eta
                ),
            });
        }

        if travel.eta_minutes > cfg.max_travel_eta {
            confidence -= cfg.travel_eta_penalty;
            penalties.push(Penalty {
                rule: PenaltyRule::SlowTravel,
                amount: cfg.travel_eta_penalty,
                detail: format!(
                    "travel ETA {:.0} exceeds max {:.0}",
                    travel.eta_minutes, cfg.max_travel_eta
                ),
            });
        }

        if food.eta_variance > cfg.food_variance_ceiling {
            confidence -= cfg.food_variance_penalty;
            penalties.push(Penalty {
                rule: PenaltyRule::FoodVariance,
                amount: cfg.food_variance_penalty,
                detail: format!("food delivery has high variance {:.1}", food.eta_variance),
            });
        }

        if travel.eta_variance > cfg.travel_variance_ceiling {
            confidence -= cfg.travel_variance_penalty;
            penalties.push(Penalty {
                rule: PenaltyRule::TravelVariance,
                amount: cfg.travel_variance_penalty,
                detail: format!("travel has variance {:.1}", travel.eta_variance),
            });
        }

        let confidence = confidence.clamp(0.0, 1.0);

        // The recommendation is decided on the raw score; rounding is for the
        // reported value only.
        let recommendation = if confidence >= cfg.confidence_threshold {
            Recommendation::SafeToExecute
        } else {
            Recommendation::NeedsApproval
        };
        let confidence = round2(confidence);

        RiskAssessment {
            confidence,
            buffer_minutes: buffer.max(0.0),
            reasoning: RiskReasoning {
                food_eta: food.eta_minutes,
                travel_eta: travel.eta_minutes,
                total_eta,
                minutes_until_class: ctx.minutes_until_class,
                buffer,
                penalties,
            },
            recommendation,
        }
    }
}

/// Round to two decimals so reported scores are display-stable.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn food(eta: f64, variance: f64) -> FoodCandidate {
        FoodCandidate {
            restaurant: "Sangeetha Veg Restaurant".into(),
            item: "Idli + Sambar".into(),
            price: 110.0,
            eta_minutes: eta,
            eta_variance: variance,
            rating: 4.6,
            service: "Swiggy".into(),
        }
    }

    fn travel(eta: f64, variance: f64) -> TravelCandidate {
        TravelCandidate {
            service: "Ola".into(),
            mode: "Ride".into(),
            cost: 95.0,
            eta_minutes: eta,
            eta_variance: variance,
            rating: 4.6,
        }
    }

    fn ctx(minutes_until_class: f64) -> PlannerContext {
        PlannerContext {
            current_time: "08:00".into(),
            date: "2026-08-25".into(),
            minutes_until_class,
            distance_km: 8.5,
        }
    }

    fn scorer() -> WeightedDeduction {
        WeightedDeduction::default()
    }

    #[test]
    fn test_comfortable_plan_scores_full_confidence() {
        // food 15 + travel 10 against 60 minutes: buffer 35, nothing fires
        let a = scorer().evaluate(&food(15.0, 2.0), &travel(10.0, 2.0), &ctx(60.0));
        assert!((a.confidence - 1.0).abs() < f64::EPSILON);
        assert!((a.buffer_minutes - 35.0).abs() < f64::EPSILON);
        assert!(a.reasoning.penalties.is_empty());
        assert_eq!(a.recommendation, Recommendation::SafeToExecute);
    }

    #[test]
    fn test_negative_buffer_fires_only_buffer_penalty() {
        // food 25 + travel 15 against 30 minutes: buffer -10, etas under ceilings
        let a = scorer().evaluate(&food(25.0, 2.0), &travel(15.0, 2.0), &ctx(30.0));
        assert!((a.confidence - 0.65).abs() < 1e-9);
        assert!((a.buffer_minutes - 0.0).abs() < f64::EPSILON);
        assert!((a.reasoning.buffer - (-10.0)).abs() < f64::EPSILON);
        assert_eq!(a.reasoning.penalties.len(), 1);
        assert!(a.reasoning.fired(PenaltyRule::TightBuffer).is_some());
        // 0.65 is still at or above the 0.6 cutoff
        assert_eq!(a.recommendation, Recommendation::SafeToExecute);
    }

    #[test]
    fn test_food_variance_tips_into_approval() {
        // Same as the negative-buffer case plus food variance 6 > 5
        let a = scorer().evaluate(&food(25.0, 6.0), &travel(15.0, 2.0), &ctx(30.0));
        assert!((a.confidence - 0.50).abs() < 1e-9);
        assert!(a.reasoning.fired(PenaltyRule::FoodVariance).is_some());
        assert_eq!(a.recommendation, Recommendation::NeedsApproval);
    }

    #[test]
    fn test_slow_food_penalized_independent_of_buffer() {
        // food 35 > 30 but the buffer is comfortable
        let a = scorer().evaluate(&food(35.0, 2.0), &travel(10.0, 2.0), &ctx(120.0));
        assert!((a.confidence - 0.80).abs() < 1e-9);
        let p = a.reasoning.fired(PenaltyRule::SlowFood).unwrap();
        assert!((p.amount - 0.20).abs() < f64::EPSILON);
        assert!(a.reasoning.fired(PenaltyRule::TightBuffer).is_none());
    }

    #[test]
    fn test_confidence_clamped_at_zero() {
        // Every penalty fires: 1.0 - (0.35+0.2+0.2+0.15+0.1) = 0.0
        let a = scorer().evaluate(&food(45.0, 9.0), &travel(30.0, 8.0), &ctx(10.0));
        assert_eq!(a.reasoning.penalties.len(), 5);
        assert!((0.0..=1.0).contains(&a.confidence));
        assert!((a.confidence - 0.0).abs() < f64::EPSILON);
        assert_eq!(a.recommendation, Recommendation::NeedsApproval);
    }

    #[test]
    fn test_confidence_never_exceeds_bounds() {
        for minutes in [0.0, 5.0, 30.0, 60.0, 240.0] {
            for eta in [1.0, 12.0, 25.0, 40.0, 90.0] {
                let a = scorer().evaluate(&food(eta, 3.0), &travel(eta / 2.0, 3.0), &ctx(minutes));
                assert!((0.0..=1.0).contains(&a.confidence));
                assert!(a.buffer_minutes >= 0.0);
            }
        }
    }

    #[test]
    fn test_monotonic_in_food_eta() {
        // Raising food ETA while everything else is fixed never raises confidence
        let s = scorer();
        let t = travel(10.0, 2.0);
        let c = ctx(45.0);
        let mut last = f64::INFINITY;
        for eta in [5.0, 10.0, 20.0, 29.0, 31.0, 40.0, 80.0] {
            let a = s.evaluate(&food(eta, 2.0), &t, &c);
            assert!(a.confidence <= last, "confidence rose at eta {eta}");
            last = a.confidence;
        }
    }

    #[test]
    fn test_idempotent() {
        let s = scorer();
        let (f, t, c) = (food(22.0, 5.5), travel(18.0, 4.5), ctx(42.0));
        let a = s.evaluate(&f, &t, &c);
        let b = s.evaluate(&f, &t, &c);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.buffer_minutes, b.buffer_minutes);
        assert_eq!(a.reasoning.penalties.len(), b.reasoning.penalties.len());
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn test_variance_at_ceiling_does_not_fire() {
        // Ceilings are strict: exactly 5 / exactly 4 carries no penalty
        let a = scorer().evaluate(&food(10.0, 5.0), &travel(8.0, 4.0), &ctx(90.0));
        assert!(a.reasoning.penalties.is_empty());
        assert!((a.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_inputs_flow_through() {
        // Documented looseness: out-of-domain numbers are computed, not rejected
        let a = scorer().evaluate(&food(-5.0, -1.0), &travel(-3.0, -2.0), &ctx(20.0));
        assert!((a.reasoning.total_eta - (-8.0)).abs() < f64::EPSILON);
        assert!((a.reasoning.buffer - 28.0).abs() < f64::EPSILON);
        assert!(a.reasoning.penalties.is_empty());
        assert!((a.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_weights_respected() {
        let cfg = RiskConfig {
            min_buffer: 30.0,
            buffer_penalty: 0.5,
            confidence_threshold: 0.8,
            ..Default::default()
        };
        let s = WeightedDeduction::new(cfg);
        // buffer = 60 - 25 = 35 < 30? no. Use 50: buffer 25 < 30 → -0.5
        let a = s.evaluate(&food(15.0, 2.0), &travel(10.0, 2.0), &ctx(50.0));
        assert!((a.confidence - 0.5).abs() < 1e-9);
        assert_eq!(a.recommendation, Recommendation::NeedsApproval);
    }

    #[test]
    fn test_recommendation_decided_before_rounding() {
        // Raw score 1.0 - 0.404 = 0.596 reports as 0.60, but the cutoff is
        // applied to the raw value, so the rounded score may not flip the call
        let cfg = RiskConfig {
            buffer_penalty: 0.404,
            ..Default::default()
        };
        let s = WeightedDeduction::new(cfg);
        let a = s.evaluate(&food(25.0, 2.0), &travel(15.0, 2.0), &ctx(30.0));
        assert!((a.confidence - 0.60).abs() < 1e-9);
        assert_eq!(a.recommendation, Recommendation::NeedsApproval);
    }

    #[test]
    fn test_recommendation_strings() {
        assert_eq!(
            Recommendation::SafeToExecute.to_string(),
            "Safe to execute"
        );
        assert_eq!(
            Recommendation::NeedsApproval.to_string(),
            "Needs user approval"
        );
        // Wire form matches the display form
        let json = serde_json::to_string(&Recommendation::NeedsApproval).unwrap();
        assert_eq!(json, "\"Needs user approval\"");
    }

    #[test]
    fn test_assessment_serializes_penalties() {
        let a = scorer().evaluate(&food(25.0, 6.0), &travel(15.0, 2.0), &ctx(30.0));
        let json = serde_json::to_value(&a).unwrap();
        let penalties = json["reasoning"]["penalties"].as_array().unwrap();
        assert_eq!(penalties.len(), 2);
        assert_eq!(penalties[0]["rule"], "tight_buffer");
        assert_eq!(penalties[1]["rule"], "food_variance");
    }
}
