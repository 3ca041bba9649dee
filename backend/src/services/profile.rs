//! Profile service - create/read the body metrics the planner consumes

use crate::error::ApiError;
use crate::repositories::ProfileStore;
use fitplan_shared::types::{ProfileResponse, UpsertProfileRequest};
use fitplan_shared::validation::{
    get_field_display_label, validate_activity_level, validate_height_cm,
    validate_weekly_goal_kg, validate_weight_kg,
};
use fitplan_shared::{ActivityLevel, UserProfile};
use uuid::Uuid;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get a user's profile. `None` for a user that has not set one up
    /// yet, which is normal for new accounts.
    pub async fn get_profile(
        profiles: &dyn ProfileStore,
        user_id: Uuid,
    ) -> Result<Option<ProfileResponse>, ApiError> {
        let profile = profiles.get(user_id).await.map_err(ApiError::Internal)?;
        Ok(profile.map(ProfileResponse::from))
    }

    /// Create or fully replace a user's profile after validation
    pub async fn upsert_profile(
        profiles: &dyn ProfileStore,
        user_id: Uuid,
        req: UpsertProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        Self::validate(&req)?;

        let activity_level: ActivityLevel = req
            .activity_level
            .parse()
            .map_err(|msg: String| ApiError::Validation(msg))?;

        let profile = UserProfile {
            user_id,
            height_cm: req.height_cm,
            starting_weight_kg: req.starting_weight_kg,
            target_weight_kg: req.target_weight_kg,
            weekly_goal_kg: req.weekly_goal_kg,
            activity_level,
        };

        let stored = profiles
            .upsert(&profile)
            .await
            .map_err(ApiError::Internal)?;
        Ok(ProfileResponse::from(stored))
    }

    fn validate(req: &UpsertProfileRequest) -> Result<(), ApiError> {
        let checks = [
            ("height_cm", validate_height_cm(req.height_cm)),
            (
                "starting_weight_kg",
                validate_weight_kg(req.starting_weight_kg),
            ),
            ("target_weight_kg", validate_weight_kg(req.target_weight_kg)),
            ("weekly_goal_kg", validate_weekly_goal_kg(req.weekly_goal_kg)),
            (
                "activity_level",
                validate_activity_level(&req.activity_level),
            ),
        ];

        for (field, result) in checks {
            if let Err(msg) = result {
                return Err(ApiError::Validation(format!(
                    "{}: {}",
                    get_field_display_label(field),
                    msg
                )));
            }
        }

        Ok(())
    }
}
