//! Daily energy target calculations
//!
//! Derives a calorie target from the user's body metrics, activity
//! level, and weekly weight-change goal.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: target is a deterministic function of the profile
//! 2. **Energy Balance**: goal adjustment uses the standard 7700 kcal/kg
//!    energy equivalent of body-mass change, spread over seven days
//! 3. **Safety Floor**: aggressive loss goals never push the target below
//!    a minimum daily intake

use crate::errors::PlanError;
use crate::models::UserProfile;

/// Energy equivalent of one kilogram of body mass
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Default safety floor for the daily target (kcal)
pub const MIN_CALORIE_TARGET: u32 = 1200;

/// Reference age used by the sex/age-neutral basal estimate.
///
/// The profile carries neither age nor sex, so the Mifflin-St Jeor
/// equation is evaluated at a fixed reference age with the midpoint of
/// its male (+5) and female (-161) offsets.
const REFERENCE_AGE_YEARS: f64 = 30.0;
const SEX_NEUTRAL_OFFSET_KCAL: f64 = -78.0;

fn check_metrics(profile: &UserProfile) -> Result<(), PlanError> {
    if !profile.height_cm.is_finite() || profile.height_cm <= 0.0 {
        return Err(PlanError::InvalidProfile(format!(
            "height must be positive, got {} cm",
            profile.height_cm
        )));
    }
    if !profile.starting_weight_kg.is_finite() || profile.starting_weight_kg <= 0.0 {
        return Err(PlanError::InvalidProfile(format!(
            "starting weight must be positive, got {} kg",
            profile.starting_weight_kg
        )));
    }
    if !profile.target_weight_kg.is_finite() || profile.target_weight_kg <= 0.0 {
        return Err(PlanError::InvalidProfile(format!(
            "target weight must be positive, got {} kg",
            profile.target_weight_kg
        )));
    }
    if !profile.weekly_goal_kg.is_finite() {
        return Err(PlanError::InvalidProfile(
            "weekly goal must be a finite number".to_string(),
        ));
    }
    Ok(())
}

/// Estimate basal metabolic rate from height and current weight.
///
/// Mifflin-St Jeor form, sex/age-neutral:
/// BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x 30 - 78
pub fn estimate_bmr(profile: &UserProfile) -> Result<f64, PlanError> {
    check_metrics(profile)?;
    let base = 10.0 * profile.starting_weight_kg + 6.25 * profile.height_cm
        - 5.0 * REFERENCE_AGE_YEARS;
    Ok(base + SEX_NEUTRAL_OFFSET_KCAL)
}

/// Maintenance energy: basal estimate scaled by the activity multiplier
pub fn maintenance_calories(profile: &UserProfile) -> Result<f64, PlanError> {
    let bmr = estimate_bmr(profile)?;
    Ok(bmr * profile.activity_level.multiplier())
}

/// Compute the daily calorie target with the default safety floor
pub fn compute_calorie_target(profile: &UserProfile) -> Result<u32, PlanError> {
    compute_calorie_target_with_floor(profile, MIN_CALORIE_TARGET)
}

/// Compute the daily calorie target with an explicit safety floor.
///
/// The weekly goal is converted to a daily energy delta
/// (`weekly_goal_kg x 7700 / 7`) and added algebraically to maintenance:
/// a loss goal subtracts, a gain goal adds, maintenance is unadjusted.
pub fn compute_calorie_target_with_floor(
    profile: &UserProfile,
    floor_kcal: u32,
) -> Result<u32, PlanError> {
    let maintenance = maintenance_calories(profile)?;
    let daily_delta = profile.weekly_goal_kg * KCAL_PER_KG_BODY_MASS / 7.0;
    let target = (maintenance + daily_delta).round() as i64;
    Ok(target.max(i64::from(floor_kcal)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn profile(
        height_cm: f64,
        weight_kg: f64,
        weekly_goal_kg: f64,
        activity_level: ActivityLevel,
    ) -> UserProfile {
        UserProfile {
            user_id: Uuid::new_v4(),
            height_cm,
            starting_weight_kg: weight_kg,
            target_weight_kg: weight_kg,
            weekly_goal_kg,
            activity_level,
        }
    }

    #[test]
    fn test_bmr_estimate() {
        // 90kg, 175cm -> 900 + 1093.75 - 150 - 78 = 1765.75
        let bmr = estimate_bmr(&profile(175.0, 90.0, 0.0, ActivityLevel::Sedentary)).unwrap();
        assert!((bmr - 1765.75).abs() < 0.01);
    }

    #[test]
    fn test_maintenance_goal_leaves_target_undeflected() {
        let p = profile(175.0, 90.0, 0.0, ActivityLevel::ModeratelyActive);
        let maintenance = maintenance_calories(&p).unwrap();
        let target = compute_calorie_target(&p).unwrap();
        assert_eq!(target, maintenance.round() as u32);
    }

    #[test]
    fn test_loss_goal_applies_daily_deficit() {
        // 175cm, 90kg, moderately active, -0.5 kg/week
        let p = profile(175.0, 90.0, -0.5, ActivityLevel::ModeratelyActive);
        let maintenance = maintenance_calories(&p).unwrap();
        let target = compute_calorie_target(&p).unwrap();

        // Deficit of 0.5 * 7700 / 7 = 550 kcal/day
        assert!(f64::from(target) < maintenance);
        assert_eq!(target, (maintenance - 550.0).round() as u32);
    }

    #[test]
    fn test_gain_goal_applies_daily_surplus() {
        let p = profile(180.0, 70.0, 0.25, ActivityLevel::VeryActive);
        let maintenance = maintenance_calories(&p).unwrap();
        let target = compute_calorie_target(&p).unwrap();
        assert_eq!(target, (maintenance + 275.0).round() as u32);
    }

    #[test]
    fn test_aggressive_loss_is_floored() {
        // -5 kg/week would put the target far below the floor
        let p = profile(160.0, 55.0, -5.0, ActivityLevel::Sedentary);
        let target = compute_calorie_target(&p).unwrap();
        assert_eq!(target, MIN_CALORIE_TARGET);
    }

    #[test]
    fn test_custom_floor_is_honored() {
        let p = profile(160.0, 55.0, -5.0, ActivityLevel::Sedentary);
        let target = compute_calorie_target_with_floor(&p, 1500).unwrap();
        assert_eq!(target, 1500);
    }

    #[test]
    fn test_zero_height_is_invalid() {
        let err = compute_calorie_target(&profile(0.0, 90.0, 0.0, ActivityLevel::Sedentary))
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidProfile(_)));
    }

    #[test]
    fn test_negative_weight_is_invalid() {
        let err = compute_calorie_target(&profile(175.0, -80.0, 0.0, ActivityLevel::Sedentary))
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidProfile(_)));
    }

    #[test]
    fn test_nan_goal_is_invalid() {
        let err =
            compute_calorie_target(&profile(175.0, 80.0, f64::NAN, ActivityLevel::Sedentary))
                .unwrap_err();
        assert!(matches!(err, PlanError::InvalidProfile(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the target is always at least the safety floor
        #[test]
        fn prop_target_at_least_floor(
            height in 100.0f64..250.0,
            weight in 30.0f64..250.0,
            goal in -3.0f64..3.0,
        ) {
            let p = profile(height, weight, goal, ActivityLevel::ModeratelyActive);
            let target = compute_calorie_target(&p).unwrap();
            prop_assert!(target >= MIN_CALORIE_TARGET);
        }

        /// Property: a loss goal never yields a higher target than maintenance
        #[test]
        fn prop_loss_never_exceeds_maintenance(
            height in 140.0f64..210.0,
            weight in 45.0f64..160.0,
            goal in -2.0f64..0.0,
        ) {
            let p = profile(height, weight, goal, ActivityLevel::LightlyActive);
            let maintenance = maintenance_calories(&p).unwrap();
            let target = compute_calorie_target(&p).unwrap();
            prop_assert!(f64::from(target) <= maintenance.round());
        }

        /// Property: more activity means a higher maintenance estimate
        #[test]
        fn prop_activity_raises_maintenance(
            height in 140.0f64..210.0,
            weight in 45.0f64..160.0,
        ) {
            let sedentary = maintenance_calories(
                &profile(height, weight, 0.0, ActivityLevel::Sedentary)).unwrap();
            let extra = maintenance_calories(
                &profile(height, weight, 0.0, ActivityLevel::ExtraActive)).unwrap();
            prop_assert!(extra > sedentary);
        }
    }
}
