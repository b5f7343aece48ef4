// src/core/types.rs — Core domain types

use serde::{Deserialize, Serialize};

use super::risk::RiskAssessment;

/// Lifecycle tag for one planning request. Each request reconstructs its own
/// sequence; nothing persists between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentState {
    Sleeping,
    Planning,
    RiskEvaluation,
    WaitingForOverride,
    Executing,
    Completed,
}

impl AgentState {
    /// Whether `next` is a legal successor in the planning cycle.
    /// WAITING_FOR_OVERRIDE is terminal for a request; resumption is a fresh
    /// request that carries explicit approval.
    pub fn can_transition_to(self, next: AgentState) -> bool {
        use AgentState::*;
        matches!(
            (self, next),
            (Sleeping, Planning)
                | (Planning, RiskEvaluation)
                | (RiskEvaluation, WaitingForOverride)
                | (RiskEvaluation, Executing)
                | (Executing, Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AgentState::WaitingForOverride | AgentState::Completed)
    }
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AgentState::Sleeping => "SLEEPING",
            AgentState::Planning => "PLANNING",
            AgentState::RiskEvaluation => "RISK_EVALUATION",
            AgentState::WaitingForOverride => "WAITING_FOR_OVERRIDE",
            AgentState::Executing => "EXECUTING",
            AgentState::Completed => "COMPLETED",
        };
        write!(f, "{name}")
    }
}

/// Contextual facts gathered fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerContext {
    /// Local time in the configured timezone, "HH:MM".
    pub current_time: String,
    /// Local date, "YYYY-MM-DD".
    pub date: String,
    pub minutes_until_class: f64,
    pub distance_km: f64,
}

/// A delivery option. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub restaurant: String,
    pub item: String,
    pub price: f64,
    pub eta_minutes: f64,
    pub eta_variance: f64,
    pub rating: f64,
    pub service: String,
}

/// A ride option. Same lifecycle as `FoodCandidate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelCandidate {
    pub service: String,
    pub mode: String,
    pub cost: f64,
    pub eta_minutes: f64,
    pub eta_variance: f64,
    pub rating: f64,
}

/// The ordered action plan for the morning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub objective: String,
    pub steps: Vec<PlanStep>,
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub order: u8,
    pub action: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
}

/// Mock booking confirmation produced by the execution agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    pub food_ordered: String,
    pub food_service: String,
    pub travel_booked: String,
    pub travel_cost: f64,
    /// Local confirmation time, "HH:MM:SS".
    pub confirmed_at: String,
    pub status: String,
    pub notes: String,
}

/// Everything one planning cycle produced, in one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub request_id: String,
    pub state: AgentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub context: PlannerContext,
    pub plan: Plan,
    pub food_options: Vec<FoodCandidate>,
    pub travel_options: Vec<TravelCandidate>,
    pub selected_food: FoodCandidate,
    pub selected_travel: TravelCandidate,
    pub risk: RiskAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution: Option<ExecutionReceipt>,
    pub schedule: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display_names() {
        assert_eq!(AgentState::Sleeping.to_string(), "SLEEPING");
        assert_eq!(
            AgentState::WaitingForOverride.to_string(),
            "WAITING_FOR_OVERRIDE"
        );
        assert_eq!(AgentState::RiskEvaluation.to_string(), "RISK_EVALUATION");
    }

    #[test]
    fn test_state_serializes_as_screaming_snake() {
        let json = serde_json::to_string(&AgentState::WaitingForOverride).unwrap();
        assert_eq!(json, "\"WAITING_FOR_OVERRIDE\"");
        let back: AgentState = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(back, AgentState::Completed);
    }

    #[test]
    fn test_legal_transitions() {
        use AgentState::*;
        assert!(Sleeping.can_transition_to(Planning));
        assert!(Planning.can_transition_to(RiskEvaluation));
        assert!(RiskEvaluation.can_transition_to(WaitingForOverride));
        assert!(RiskEvaluation.can_transition_to(Executing));
        assert!(Executing.can_transition_to(Completed));
    }

    #[test]
    fn test_illegal_transitions() {
        use AgentState::*;
        // No resumption from override within a request
        assert!(!WaitingForOverride.can_transition_to(Executing));
        assert!(!WaitingForOverride.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Planning));
        assert!(!Planning.can_transition_to(Executing));
    }

    #[test]
    fn test_terminal_states() {
        assert!(AgentState::WaitingForOverride.is_terminal());
        assert!(AgentState::Completed.is_terminal());
        assert!(!AgentState::RiskEvaluation.is_terminal());
    }

    #[test]
    fn test_candidate_roundtrip() {
        let food = FoodCandidate {
            restaurant: "Sangeetha Veg Restaurant".into(),
            item: "Idli + Sambar + Chutney".into(),
            price: 110.0,
            eta_minutes: 12.0,
            eta_variance: 2.0,
            rating: 4.6,
            service: "Swiggy".into(),
        };
        let json = serde_json::to_string(&food).unwrap();
        let back: FoodCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.restaurant, food.restaurant);
        assert!((back.eta_minutes - 12.0).abs() < f64::EPSILON);
    }
}
