//! Daily plan service
//!
//! The single entry point for plan generation and retrieval. Generation
//! loads the profile, runs the energy/meal/workout engine, and
//! write-through upserts the assembled plan into its (user, day) slot;
//! retrieval is a pure lookup where absence is a normal outcome. The
//! service itself is stateless: all state lives in the stores.

use crate::error::ApiError;
use crate::repositories::{PlanStore, ProfileStore};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use fitplan_shared::catalog::{MealCatalog, StaticMealCatalog};
use fitplan_shared::{energy, meals, workouts};
use fitplan_shared::{DailyPlan, PlanPolicy, UserProfile};
use tracing::debug;
use uuid::Uuid;

/// Daily plan service
pub struct PlannerService;

impl PlannerService {
    /// Normalize a timestamp to the calendar-day key used by the
    /// repository, discarding the time of day.
    pub fn day_key(timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.date_naive()
    }

    /// Fetch the plan for a day. `None` means no plan was generated yet,
    /// which is normal control flow rather than an error.
    pub async fn get_plan(
        plans: &dyn PlanStore,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyPlan>, ApiError> {
        plans.get(user_id, date).await.map_err(ApiError::Internal)
    }

    /// Generate the plan for a day and store it, replacing any existing
    /// plan for that (user, day) pair.
    pub async fn generate_plan(
        profiles: &dyn ProfileStore,
        plans: &dyn PlanStore,
        policy: &PlanPolicy,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyPlan, ApiError> {
        let profile = profiles
            .get(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::ProfileRequired)?;

        let plan = Self::assemble(&profile, policy, date)?;
        debug!(
            user_id = %user_id,
            date = %date,
            calorie_target = plan.calorie_target,
            workout = %plan.workout.workout_type,
            "Assembled daily plan"
        );

        plans.upsert(&plan).await.map_err(ApiError::Internal)
    }

    /// Assemble a plan from a profile without touching storage.
    ///
    /// Deterministic for a given (profile, date) pair: the variety seed
    /// is derived from the user id and the day.
    pub fn assemble(
        profile: &UserProfile,
        policy: &PlanPolicy,
        date: NaiveDate,
    ) -> Result<DailyPlan, ApiError> {
        let calorie_target =
            energy::compute_calorie_target_with_floor(profile, policy.calorie_floor)?;
        let seed = variety_seed(profile.user_id, date);
        let catalog = StaticMealCatalog;

        let meals = meals::allocate_meals(calorie_target, policy)
            .into_iter()
            .map(|envelope| {
                let name = catalog.name_for(envelope.meal_type, &envelope, seed);
                envelope.into_meal(name)
            })
            .collect();

        let workout = workouts::select_workout(profile, seed);

        Ok(DailyPlan {
            id: Uuid::new_v4(),
            user_id: profile.user_id,
            date,
            calorie_target,
            meals,
            workout,
        })
    }
}

/// Variety seed: stable for a (user, day) pair, different across days
fn variety_seed(user_id: Uuid, date: NaiveDate) -> u64 {
    (user_id.as_u128() as u64) ^ (date.num_days_from_ce() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryPlanStore, InMemoryProfileStore};
    use chrono::TimeZone;
    use fitplan_shared::{ActivityLevel, MealType, WorkoutIntensity};
    use proptest::prelude::*;

    fn sample_profile(user_id: Uuid) -> UserProfile {
        UserProfile {
            user_id,
            height_cm: 175.0,
            starting_weight_kg: 90.0,
            target_weight_kg: 80.0,
            weekly_goal_kg: -0.5,
            activity_level: ActivityLevel::ModeratelyActive,
        }
    }

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_day_key_discards_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
        assert_eq!(PlannerService::day_key(morning), PlannerService::day_key(evening));
    }

    #[test]
    fn test_assembled_plan_for_loss_profile() {
        let profile = sample_profile(Uuid::new_v4());
        let plan = PlannerService::assemble(&profile, &PlanPolicy::default(), march_first())
            .unwrap();

        // Deficit applied: target sits below the maintenance estimate
        let maintenance = energy::maintenance_calories(&profile).unwrap();
        assert!(plan.calorie_target > 0);
        assert!(f64::from(plan.calorie_target) < maintenance);

        // Four meals covering each slot exactly once, in serving order
        let slots: Vec<MealType> = plan.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(slots, MealType::ALL);

        assert_eq!(plan.workout.intensity, WorkoutIntensity::Medium);
    }

    #[test]
    fn test_assembly_is_deterministic_per_day() {
        let profile = sample_profile(Uuid::new_v4());
        let a = PlannerService::assemble(&profile, &PlanPolicy::default(), march_first()).unwrap();
        let b = PlannerService::assemble(&profile, &PlanPolicy::default(), march_first()).unwrap();

        // Identical apart from the freshly minted plan id
        assert_eq!(a.calorie_target, b.calorie_target);
        assert_eq!(a.meals, b.meals);
        assert_eq!(a.workout, b.workout);
    }

    #[tokio::test]
    async fn test_generate_then_get_round_trips() {
        let profiles = InMemoryProfileStore::new();
        let plans = InMemoryPlanStore::new();
        let user_id = Uuid::new_v4();
        profiles.upsert(&sample_profile(user_id)).await.unwrap();

        let generated = PlannerService::generate_plan(
            &profiles,
            &plans,
            &PlanPolicy::default(),
            user_id,
            march_first(),
        )
        .await
        .unwrap();

        let fetched = PlannerService::get_plan(&plans, user_id, march_first())
            .await
            .unwrap()
            .expect("plan should exist after generation");
        assert_eq!(fetched, generated);
    }

    #[tokio::test]
    async fn test_regeneration_overwrites_the_day_slot() {
        let profiles = InMemoryProfileStore::new();
        let plans = InMemoryPlanStore::new();
        let user_id = Uuid::new_v4();
        profiles.upsert(&sample_profile(user_id)).await.unwrap();

        let first = PlannerService::generate_plan(
            &profiles,
            &plans,
            &PlanPolicy::default(),
            user_id,
            march_first(),
        )
        .await
        .unwrap();
        let second = PlannerService::generate_plan(
            &profiles,
            &plans,
            &PlanPolicy::default(),
            user_id,
            march_first(),
        )
        .await
        .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(plans.stored_plans(), 1);

        let stored = PlannerService::get_plan(&plans, user_id, march_first())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, second.id);
    }

    #[tokio::test]
    async fn test_get_plan_before_generation_is_empty() {
        let plans = InMemoryPlanStore::new();
        let found = PlannerService::get_plan(&plans, Uuid::new_v4(), march_first())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_generate_without_profile_fails() {
        let profiles = InMemoryProfileStore::new();
        let plans = InMemoryPlanStore::new();

        let err = PlannerService::generate_plan(
            &profiles,
            &plans,
            &PlanPolicy::default(),
            Uuid::new_v4(),
            march_first(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::ProfileRequired));
        assert_eq!(plans.stored_plans(), 0);
    }

    #[tokio::test]
    async fn test_degenerate_profile_writes_no_plan() {
        let profiles = InMemoryProfileStore::new();
        let plans = InMemoryPlanStore::new();
        let user_id = Uuid::new_v4();
        let mut profile = sample_profile(user_id);
        profile.height_cm = 0.0;
        profiles.upsert(&profile).await.unwrap();

        let err = PlannerService::generate_plan(
            &profiles,
            &plans,
            &PlanPolicy::default(),
            user_id,
            march_first(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::InvalidProfile(_)));
        assert_eq!(plans.stored_plans(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: assembled meal calories always sum to the plan target
        #[test]
        fn prop_assembled_meals_sum_to_target(
            height in 140.0f64..210.0,
            weight in 45.0f64..160.0,
            goal in -1.0f64..1.0,
        ) {
            let profile = UserProfile {
                user_id: Uuid::new_v4(),
                height_cm: height,
                starting_weight_kg: weight,
                target_weight_kg: weight,
                weekly_goal_kg: goal,
                activity_level: ActivityLevel::LightlyActive,
            };
            let plan = PlannerService::assemble(
                &profile, &PlanPolicy::default(), march_first()).unwrap();
            let total: u32 = plan.meals.iter().map(|m| m.calories).sum();
            prop_assert_eq!(total, plan.calorie_target);
        }
    }
}
