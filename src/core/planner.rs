// src/core/planner.rs — Planning cycle driver
//
// One call runs one synchronous cycle: gather context, build the plan, fetch
// candidates, evaluate risk, gate the decision, then either execute and log
// or stop and wait for the user. Nothing persists between cycles except the
// best-effort history log.

use chrono::Utc;
use std::sync::Arc;

use super::gate::{DecisionGate, GateOutcome};
use super::risk::{RiskScorer, WeightedDeduction};
use super::types::{AgentState, PlanReport};
use crate::agents::context::ContextAgent;
use crate::agents::execution::ExecutionAgent;
use crate::agents::planning::PlanningAgent;
use crate::agents::schedule::ScheduleAgent;
use crate::infra::config::{Config, ProfileConfig};
use crate::infra::errors::DaybreakError;
use crate::memory::{ExecutionRecord, HistoryStore, PreferencesStore};
use crate::providers::food::DeliveryLookup;
use crate::providers::travel::RideLookup;
use crate::providers::{FoodSource, TravelSource};

/// One planning request. `approved` marks explicit user approval; an approved
/// request takes the forced-execute path and never waits for an override.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub class_time: Option<String>,
    pub location: Option<String>,
    pub approved: bool,
}

impl PlanRequest {
    pub fn approved() -> Self {
        Self {
            approved: true,
            ..Default::default()
        }
    }
}

pub struct Planner {
    profile: ProfileConfig,
    context_agent: ContextAgent,
    planning: PlanningAgent,
    execution: ExecutionAgent,
    schedule: ScheduleAgent,
    food: Arc<dyn FoodSource>,
    travel: Arc<dyn TravelSource>,
    scorer: Box<dyn RiskScorer>,
    gate: DecisionGate,
    store: Option<HistoryStore>,
    prefs: Option<PreferencesStore>,
}

impl Planner {
    /// Assemble a planner with the default collaborators from config.
    pub fn from_config(config: &Config) -> Result<Self, DaybreakError> {
        let context_agent = ContextAgent::new(&config.profile.timezone)?;
        let tz = context_agent.timezone();

        Ok(Self {
            profile: config.profile.clone(),
            context_agent,
            planning: PlanningAgent,
            execution: ExecutionAgent::new(tz),
            schedule: ScheduleAgent::new(tz),
            food: Arc::new(DeliveryLookup::new(&config.providers)),
            travel: Arc::new(RideLookup::new(&config.providers)),
            scorer: Box::new(WeightedDeduction::new(config.risk.clone())),
            gate: DecisionGate::from_risk_config(&config.risk),
            store: Some(HistoryStore::at_default_path()),
            prefs: Some(PreferencesStore::at_default_path()),
        })
    }

    pub fn with_food_source(mut self, source: Arc<dyn FoodSource>) -> Self {
        self.food = source;
        self
    }

    pub fn with_travel_source(mut self, source: Arc<dyn TravelSource>) -> Self {
        self.travel = source;
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn RiskScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_context_agent(mut self, agent: ContextAgent) -> Self {
        self.context_agent = agent;
        self
    }

    pub fn with_store(mut self, store: Option<HistoryStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_preferences(mut self, prefs: Option<PreferencesStore>) -> Self {
        self.prefs = prefs;
        self
    }

    pub fn history(&self) -> Option<&HistoryStore> {
        self.store.as_ref()
    }

    pub fn preferences(&self) -> Option<&PreferencesStore> {
        self.prefs.as_ref()
    }

    /// The profile a cycle starts from: saved preferences when present,
    /// otherwise the configured one.
    pub fn base_profile(&self) -> ProfileConfig {
        self.prefs
            .as_ref()
            .and_then(|p| p.load())
            .unwrap_or_else(|| self.profile.clone())
    }

    /// Run one planning cycle.
    ///
    /// Empty candidate lists are a reported failure, not something to paper
    /// over with defaults; the surfaced state stays at PLANNING.
    pub async fn run(&self, req: &PlanRequest) -> Result<PlanReport, DaybreakError> {
        let mut state = AgentState::Planning;
        tracing::debug!(state = %state, "Planning cycle started");

        let mut profile = self.base_profile();
        if let Some(ref location) = req.location {
            profile.location = location.clone();
        }

        let context = self
            .context_agent
            .gather(&profile, req.class_time.as_deref())?;
        let plan = self.planning.create_plan(&context, &profile);

        let food_options = self.food.candidates(&profile).await?;
        let travel_options = self.travel.candidates(&profile).await?;

        if food_options.is_empty() {
            return Err(DaybreakError::NoFoodCandidates);
        }
        if travel_options.is_empty() {
            return Err(DaybreakError::NoTravelCandidates);
        }

        let selected_food = food_options[0].clone();
        let selected_travel = travel_options[0].clone();

        state = AgentState::RiskEvaluation;
        tracing::debug!(state = %state, "Evaluating plan risk");
        let risk = self
            .scorer
            .evaluate(&selected_food, &selected_travel, &context);
        tracing::info!(
            confidence = risk.confidence,
            buffer_minutes = risk.buffer_minutes,
            penalties = risk.reasoning.penalties.len(),
            "Risk evaluated"
        );

        let outcome = if req.approved {
            GateOutcome::Execute
        } else {
            self.gate.decide(&risk)
        };

        let (state, message, execution) = match outcome {
            GateOutcome::AwaitOverride => {
                let message = format!(
                    "Confidence level {:.0}% is below threshold. User approval needed.",
                    risk.confidence * 100.0
                );
                (AgentState::WaitingForOverride, Some(message), None)
            }
            GateOutcome::Execute => {
                let receipt = self.execution.execute(&selected_food, &selected_travel);

                if let Some(ref store) = self.store {
                    let record = ExecutionRecord {
                        timestamp: Utc::now()
                            .with_timezone(&self.context_agent.timezone())
                            .to_rfc3339(),
                        food: receipt.food_ordered.clone(),
                        travel: receipt.travel_booked.clone(),
                        confidence: risk.confidence,
                        buffer_minutes: risk.buffer_minutes,
                        status: "executed".into(),
                        approved_by_user: req.approved,
                    };
                    if let Err(e) = store.append(&record) {
                        tracing::warn!("Failed to log execution: {}", e);
                    }
                }

                (AgentState::Completed, None, Some(receipt))
            }
        };

        let schedule = self.schedule.generate();

        Ok(PlanReport {
            request_id: uuid::Uuid::new_v4().to_string(),
            state,
            message,
            context,
            plan,
            food_options,
            travel_options,
            selected_food,
            selected_travel,
            risk,
            execution,
            schedule,
        })
    }
}
