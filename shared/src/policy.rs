//! Plan generation policy
//!
//! The meal-slot weights, macro ratio, and calorie safety floor are
//! configuration constants rather than business rules. They are grouped
//! here with documented defaults so deployments can override them
//! through the backend configuration tree.

use serde::{Deserialize, Serialize};

/// Tolerance when checking that weight/ratio sets sum to 1.0
const SUM_EPSILON: f64 = 1e-6;

/// Share of the daily calorie target assigned to each meal slot
///
/// Defaults: breakfast 25%, lunch 30%, dinner 30%, snack 15%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealWeights {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl Default for MealWeights {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.30,
            dinner: 0.30,
            snack: 0.15,
        }
    }
}

impl MealWeights {
    fn sum(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Share of each meal's calories assigned to protein, carbs, and fat
///
/// Defaults: protein 30%, carbs 40%, fat 30%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroRatio {
    fn default() -> Self {
        Self {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        }
    }
}

impl MacroRatio {
    fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Complete policy driving plan generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPolicy {
    #[serde(default)]
    pub meal_weights: MealWeights,
    #[serde(default)]
    pub macro_ratio: MacroRatio,
    /// Minimum daily calorie target regardless of how aggressive the
    /// weekly goal is
    #[serde(default = "default_calorie_floor")]
    pub calorie_floor: u32,
}

fn default_calorie_floor() -> u32 {
    crate::energy::MIN_CALORIE_TARGET
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            meal_weights: MealWeights::default(),
            macro_ratio: MacroRatio::default(),
            calorie_floor: default_calorie_floor(),
        }
    }
}

impl PlanPolicy {
    /// Check that the configured weights form valid distributions
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            self.meal_weights.breakfast,
            self.meal_weights.lunch,
            self.meal_weights.dinner,
            self.meal_weights.snack,
            self.macro_ratio.protein,
            self.macro_ratio.carbs,
            self.macro_ratio.fat,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("Plan weights must be non-negative numbers".to_string());
        }
        if (self.meal_weights.sum() - 1.0).abs() > SUM_EPSILON {
            return Err(format!(
                "Meal weights must sum to 1.0, got {}",
                self.meal_weights.sum()
            ));
        }
        if (self.macro_ratio.sum() - 1.0).abs() > SUM_EPSILON {
            return Err(format!(
                "Macro ratio must sum to 1.0, got {}",
                self.macro_ratio.sum()
            ));
        }
        if self.calorie_floor == 0 {
            return Err("Calorie floor must be positive".to_string());
        }
        Ok(())
    }
}
