//! Input validation for profile data
//!
//! Boundary validation for user-supplied profile values. These ranges
//! are stricter than the planner's own positivity guards: the planner
//! rejects degenerate metrics, the boundary rejects implausible ones.

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
/// Valid range: 20-500 kg
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate weekly weight-change goal (in kg/week)
///
/// Anything beyond +/-2 kg per week is outside a safe rate of change.
pub fn validate_weekly_goal_kg(goal_kg: f64) -> Result<(), String> {
    if goal_kg.is_nan() || goal_kg.is_infinite() {
        return Err("Weekly goal must be a valid number".to_string());
    }
    if goal_kg.abs() > 2.0 {
        return Err("Weekly goal must be between -2 and 2 kg per week".to_string());
    }
    Ok(())
}

/// Valid activity levels
pub const VALID_ACTIVITY_LEVELS: &[&str] = &[
    "sedentary",
    "lightly_active",
    "moderately_active",
    "very_active",
    "extra_active",
];

/// Validate activity level
pub fn validate_activity_level(level: &str) -> Result<(), String> {
    let normalized = level.to_lowercase();
    if VALID_ACTIVITY_LEVELS.contains(&normalized.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "Invalid activity level. Must be one of: {}",
            VALID_ACTIVITY_LEVELS.join(", ")
        ))
    }
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height_cm" => "Height",
        "starting_weight_kg" => "Starting Weight",
        "target_weight_kg" => "Target Weight",
        "weekly_goal_kg" => "Weekly Goal",
        "activity_level" => "Activity Level",
        _ => field_name,
    }
}
