//! User profile API routes

use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use fitplan_shared::types::{ProfileResponse, UpsertProfileRequest};
use uuid::Uuid;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_profile).put(upsert_profile))
}

/// GET /api/v1/profile/:user_id - Get a user's profile
///
/// Returns `null` for users without a profile; absence is normal for
/// new accounts.
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Option<ProfileResponse>>, ApiError> {
    let profile = ProfileService::get_profile(state.profiles.as_ref(), user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/:user_id - Create or replace a user's profile
async fn upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::upsert_profile(state.profiles.as_ref(), user_id, req).await?;
    Ok(Json(profile))
}
