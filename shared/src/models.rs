//! Domain models for the daily planner

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Activity level used to scale the basal energy estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier applied to the basal estimate
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Wire/storage form of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// User profile consumed (never mutated) by the planner
///
/// All metrics are stored in SI units. A negative weekly goal means
/// weight loss, positive means gain, zero means maintenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub height_cm: f64,
    pub starting_weight_kg: f64,
    pub target_weight_kg: f64,
    pub weekly_goal_kg: f64,
    pub activity_level: ActivityLevel,
}

/// Meal slot within a day, in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All slots in serving order through the day
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single planned meal with its calorie and macro envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    #[serde(rename = "type")]
    pub meal_type: MealType,
}

/// Workout intensity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutIntensity {
    Low,
    Medium,
    High,
}

impl WorkoutIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutIntensity::Low => "low",
            WorkoutIntensity::Medium => "medium",
            WorkoutIntensity::High => "high",
        }
    }
}

impl fmt::Display for WorkoutIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommended workout for a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration_minutes: u32,
    pub intensity: WorkoutIntensity,
    pub description: String,
}

/// Generated plan for one (user, day) pair
///
/// Exactly one plan exists per user and calendar day; regeneration
/// replaces the stored plan rather than appending. Meals are kept in
/// serving order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub calorie_target: u32,
    pub meals: Vec<Meal>,
    pub workout: Workout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_wire_form_is_snake_case() {
        let json = serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap();
        assert_eq!(json, "\"moderately_active\"");
    }

    #[test]
    fn test_activity_level_round_trips_through_str() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ] {
            let parsed: ActivityLevel = level.as_str().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_activity_level_parse_is_case_insensitive() {
        let parsed: ActivityLevel = "Very_Active".parse().unwrap();
        assert_eq!(parsed, ActivityLevel::VeryActive);
        assert!("super_active".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_meal_serializes_with_type_field() {
        let meal = Meal {
            name: "Oatmeal with Berries".to_string(),
            calories: 500,
            protein_g: 38,
            carbs_g: 50,
            fats_g: 17,
            meal_type: MealType::Breakfast,
        };
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["type"], "breakfast");
        assert_eq!(value["protein_g"], 38);
    }

    #[test]
    fn test_meal_types_in_serving_order() {
        assert_eq!(
            MealType::ALL,
            [
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack
            ]
        );
    }
}
