//! Daily planner API routes
//!
//! User identity arrives as an explicit path parameter; authentication
//! is handled by infrastructure in front of this service.

use crate::error::ApiError;
use crate::services::PlannerService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use fitplan_shared::types::{DailyPlanResponse, GeneratePlanRequest, PlanDateQuery};
use uuid::Uuid;

/// Create planner routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(get_plan))
        .route("/:user_id/generate", post(generate_plan))
}

/// GET /api/v1/planner/:user_id?date=YYYY-MM-DD - Fetch the plan for a day
///
/// Returns `null` when no plan exists for the day; a missing plan is
/// normal control flow, not an error.
async fn get_plan(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<PlanDateQuery>,
) -> Result<Json<Option<DailyPlanResponse>>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let plan = PlannerService::get_plan(state.plans.as_ref(), user_id, date).await?;
    Ok(Json(plan.map(DailyPlanResponse::from)))
}

/// POST /api/v1/planner/:user_id/generate - Generate (or regenerate) a plan
///
/// Accepts a full timestamp and truncates it to a calendar day before
/// using it as the plan key; defaults to the current day.
async fn generate_plan(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<Json<DailyPlanResponse>, ApiError> {
    let date = PlannerService::day_key(req.date.unwrap_or_else(Utc::now));
    let plan = PlannerService::generate_plan(
        state.profiles.as_ref(),
        state.plans.as_ref(),
        state.policy(),
        user_id,
        date,
    )
    .await?;
    Ok(Json(DailyPlanResponse::from(plan)))
}
