// src/api/handlers.rs

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::api::auth::check_auth;
use crate::api::types::{
    ApproveRequest, ConfigView, ErrorResponse, HistoryParams, HistoryResponse, PlanErrorResponse,
    PlanParams, PreferencesSaved,
};
use crate::api::ApiState;
use crate::core::planner::PlanRequest;
use crate::core::types::AgentState;
use crate::infra::config::ProfileConfig;
use crate::infra::errors::DaybreakError;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_config(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    Json(ConfigView {
        version: env!("CARGO_PKG_VERSION").to_string(),
        profile: state.profile.clone(),
        confidence_threshold: state.confidence_threshold,
    })
    .into_response()
}

pub async fn run_plan(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<PlanParams>,
) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    let req = PlanRequest {
        class_time: params.class_time,
        location: params.location,
        approved: false,
    };

    match state.planner.run(&req).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => plan_error(e),
    }
}

pub async fn approve_plan(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<ApproveRequest>,
) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    let req = PlanRequest {
        class_time: body.class_time,
        location: body.location,
        approved: true,
    };

    match state.planner.run(&req).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => plan_error(e),
    }
}

/// Saved preferences when present, the configured profile otherwise.
pub async fn get_preferences(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    Json(state.planner.base_profile()).into_response()
}

pub async fn save_preferences(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(profile): Json<ProfileConfig>,
) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    let Some(prefs) = state.planner.preferences() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Preference persistence is disabled".into(),
            }),
        )
            .into_response();
    };

    match prefs.save(&profile) {
        Ok(()) => Json(PreferencesSaved {
            status: "saved".into(),
            preferences: profile,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to save preferences: {}", e),
            }),
        )
            .into_response(),
    }
}

pub async fn get_history(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Response {
    if let Err(e) = check_auth(&state, &headers) {
        return e.into_response();
    }

    let Some(store) = state.planner.history() else {
        return Json(HistoryResponse {
            history: vec![],
            count: 0,
        })
        .into_response();
    };

    let history = store.read(params.limit);
    let count = history.len();
    Json(HistoryResponse { history, count }).into_response()
}

/// Map a failed planning cycle to a response. Invalid input (bad request
/// fields, empty candidate sets) is the caller's 400; anything else is ours.
fn plan_error(e: DaybreakError) -> Response {
    let status = if e.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(PlanErrorResponse {
            state: AgentState::Planning,
            error: e.to_string(),
        }),
    )
        .into_response()
}
