//! Profile store - body metrics and goal configuration per user
//!
//! The planner only ever reads profiles; writes come from the profile
//! API surface.

use anyhow::Result;
use async_trait::async_trait;
use fitplan_shared::UserProfile;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Store of user profiles, keyed by user id
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile. Absence is normal for new users.
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>>;

    /// Insert or fully replace the profile for a user.
    async fn upsert(&self, profile: &UserProfile) -> Result<UserProfile>;
}

/// Profile row as stored (numeric columns come back as NUMERIC)
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProfileRecord {
    user_id: Uuid,
    height_cm: Decimal,
    starting_weight_kg: Decimal,
    target_weight_kg: Decimal,
    weekly_goal_kg: Decimal,
    activity_level: String,
}

impl ProfileRecord {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            height_cm: decimal_to_f64(&self.height_cm),
            starting_weight_kg: decimal_to_f64(&self.starting_weight_kg),
            target_weight_kg: decimal_to_f64(&self.target_weight_kg),
            weekly_goal_kg: decimal_to_f64(&self.weekly_goal_kg),
            activity_level: self.activity_level.parse().unwrap_or_default(),
        }
    }
}

fn decimal_to_f64(d: &Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// PostgreSQL-backed profile store
#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT user_id, height_cm, starting_weight_kg, target_weight_kg,
                   weekly_goal_kg, activity_level
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(ProfileRecord::into_profile))
    }

    async fn upsert(&self, profile: &UserProfile) -> Result<UserProfile> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profiles (
                user_id, height_cm, starting_weight_kg, target_weight_kg,
                weekly_goal_kg, activity_level
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                height_cm = EXCLUDED.height_cm,
                starting_weight_kg = EXCLUDED.starting_weight_kg,
                target_weight_kg = EXCLUDED.target_weight_kg,
                weekly_goal_kg = EXCLUDED.weekly_goal_kg,
                activity_level = EXCLUDED.activity_level,
                updated_at = NOW()
            RETURNING user_id, height_cm, starting_weight_kg, target_weight_kg,
                      weekly_goal_kg, activity_level
            "#,
        )
        .bind(profile.user_id)
        .bind(profile.height_cm)
        .bind(profile.starting_weight_kg)
        .bind(profile.target_weight_kg)
        .bind(profile.weekly_goal_kg)
        .bind(profile.activity_level.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into_profile())
    }
}
