//! Plan repository - one stored plan per (user, day)
//!
//! The upsert is keyed by (user_id, plan_date) so regeneration replaces
//! the existing row atomically: concurrent generators race to a single
//! last-write-wins slot, never to duplicates or a torn plan.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use fitplan_shared::{DailyPlan, Meal, Workout};
use sqlx::PgPool;
use uuid::Uuid;

/// Store of generated daily plans, keyed by (user id, calendar day)
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Fetch the plan for a day. Absence means no plan was generated yet.
    async fn get(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<DailyPlan>>;

    /// Insert or fully replace the plan for the plan's (user, day) slot.
    async fn upsert(&self, plan: &DailyPlan) -> Result<DailyPlan>;
}

/// Plan row as stored (meals and workout serialized as JSONB)
#[derive(Debug, Clone, sqlx::FromRow)]
struct PlanRecord {
    id: Uuid,
    user_id: Uuid,
    plan_date: NaiveDate,
    calorie_target: i32,
    meals: serde_json::Value,
    workout: serde_json::Value,
}

impl PlanRecord {
    fn into_plan(self) -> Result<DailyPlan> {
        let meals: Vec<Meal> =
            serde_json::from_value(self.meals).context("Malformed meals column")?;
        let workout: Workout =
            serde_json::from_value(self.workout).context("Malformed workout column")?;

        Ok(DailyPlan {
            id: self.id,
            user_id: self.user_id,
            date: self.plan_date,
            calorie_target: self.calorie_target.max(0) as u32,
            meals,
            workout,
        })
    }
}

/// PostgreSQL-backed plan repository
#[derive(Clone)]
pub struct PostgresPlanStore {
    pool: PgPool,
}

impl PostgresPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanStore for PostgresPlanStore {
    async fn get(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<DailyPlan>> {
        let record = sqlx::query_as::<_, PlanRecord>(
            r#"
            SELECT id, user_id, plan_date, calorie_target, meals, workout
            FROM daily_plans
            WHERE user_id = $1 AND plan_date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        record.map(PlanRecord::into_plan).transpose()
    }

    async fn upsert(&self, plan: &DailyPlan) -> Result<DailyPlan> {
        let meals = serde_json::to_value(&plan.meals).context("Unserializable meals")?;
        let workout = serde_json::to_value(&plan.workout).context("Unserializable workout")?;

        let record = sqlx::query_as::<_, PlanRecord>(
            r#"
            INSERT INTO daily_plans (id, user_id, plan_date, calorie_target, meals, workout)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, plan_date) DO UPDATE SET
                id = EXCLUDED.id,
                calorie_target = EXCLUDED.calorie_target,
                meals = EXCLUDED.meals,
                workout = EXCLUDED.workout,
                updated_at = NOW()
            RETURNING id, user_id, plan_date, calorie_target, meals, workout
            "#,
        )
        .bind(plan.id)
        .bind(plan.user_id)
        .bind(plan.date)
        .bind(plan.calorie_target as i32)
        .bind(meals)
        .bind(workout)
        .fetch_one(&self.pool)
        .await?;

        record.into_plan()
    }
}
