// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::core::types::AgentState;
use crate::infra::config::ProfileConfig;
use crate::memory::ExecutionRecord;

/// Query parameters for GET /api/v1/plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanParams {
    pub class_time: Option<String>,
    pub location: Option<String>,
}

/// Request body for POST /api/v1/approve. Same shape as a plan request; the
/// approval flag is implied by the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApproveRequest {
    pub class_time: Option<String>,
    pub location: Option<String>,
}

/// Effective configuration view.
#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub version: String,
    pub profile: ProfileConfig,
    pub confidence_threshold: f64,
}

/// Confirmation body for a saved preference set.
#[derive(Debug, Serialize)]
pub struct PreferencesSaved {
    pub status: String,
    pub preferences: ProfileConfig,
}

/// History response.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<ExecutionRecord>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    10
}

/// Error body for failed planning cycles. The state reflects where the cycle
/// stopped; candidate fetch failures leave it at PLANNING.
#[derive(Debug, Serialize)]
pub struct PlanErrorResponse {
    pub state: AgentState,
    pub error: String,
}

/// Error body for auth and validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
