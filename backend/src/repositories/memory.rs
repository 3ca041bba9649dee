//! In-memory store implementations
//!
//! Hash-map adapters with the same upsert-by-key semantics as the
//! PostgreSQL stores. Used by tests and by local development without a
//! database.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use fitplan_shared::{DailyPlan, UserProfile};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use super::{PlanStore, ProfileStore};

/// In-memory profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: &UserProfile) -> Result<UserProfile> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        profiles.insert(profile.user_id, profile.clone());
        Ok(profile.clone())
    }
}

/// In-memory plan repository keyed by (user id, day)
#[derive(Debug, Default)]
pub struct InMemoryPlanStore {
    plans: RwLock<HashMap<(Uuid, NaiveDate), DailyPlan>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans across all users and days
    pub fn stored_plans(&self) -> usize {
        self.plans.read().map(|plans| plans.len()).unwrap_or(0)
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn get(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<DailyPlan>> {
        let plans = self
            .plans
            .read()
            .map_err(|_| anyhow!("plan store lock poisoned"))?;
        Ok(plans.get(&(user_id, date)).cloned())
    }

    async fn upsert(&self, plan: &DailyPlan) -> Result<DailyPlan> {
        let mut plans = self
            .plans
            .write()
            .map_err(|_| anyhow!("plan store lock poisoned"))?;
        plans.insert((plan.user_id, plan.date), plan.clone());
        Ok(plan.clone())
    }
}
