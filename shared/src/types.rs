//! API request and response types

use crate::models::{DailyPlan, Meal, UserProfile, Workout};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Create-or-replace profile request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertProfileRequest {
    pub height_cm: f64,
    pub starting_weight_kg: f64,
    pub target_weight_kg: f64,
    /// Negative for loss, positive for gain, zero for maintenance
    pub weekly_goal_kg: f64,
    /// One of: sedentary, lightly_active, moderately_active, very_active, extra_active
    pub activity_level: String,
}

/// Profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub height_cm: f64,
    pub starting_weight_kg: f64,
    pub target_weight_kg: f64,
    pub weekly_goal_kg: f64,
    pub activity_level: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            height_cm: profile.height_cm,
            starting_weight_kg: profile.starting_weight_kg,
            target_weight_kg: profile.target_weight_kg,
            weekly_goal_kg: profile.weekly_goal_kg,
            activity_level: profile.activity_level.to_string(),
        }
    }
}

/// Plan fetch query parameters (calendar-day granularity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDateQuery {
    /// Day to fetch, YYYY-MM-DD; defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Plan generation request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratePlanRequest {
    /// Timestamp to generate for, truncated to a calendar day;
    /// defaults to now
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Daily plan response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlanResponse {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub calorie_target: u32,
    pub meals: Vec<Meal>,
    pub workout: Workout,
}

impl From<DailyPlan> for DailyPlanResponse {
    fn from(plan: DailyPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            user_id: plan.user_id.to_string(),
            date: plan.date,
            calorie_target: plan.calorie_target,
            meals: plan.meals,
            workout: plan.workout,
        }
    }
}
