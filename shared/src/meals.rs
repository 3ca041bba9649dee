//! Meal allocation
//!
//! Partitions a daily calorie target across the four meal slots and
//! converts each slot's calories into a macro envelope using the 4/4/9
//! kcal-per-gram constants. Naming the meals is a catalog concern
//! (see [`crate::catalog`]); this module only computes the envelopes.

use crate::models::{Meal, MealType};
use crate::policy::{MacroRatio, PlanPolicy};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: u32 = 4;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: u32 = 4;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: u32 = 9;

/// Maximum allowed gap between a meal's stated calories and the
/// calories implied by its macro grams. Carbs absorb the gram-rounding
/// remainder, which can be off by at most half a carb gram (2 kcal).
pub const MACRO_KCAL_TOLERANCE: u32 = 2;

/// Calorie/macro envelope for one meal slot, before naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealEnvelope {
    pub meal_type: MealType,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

impl MealEnvelope {
    /// Calories implied by the macro grams (protein*4 + carbs*4 + fat*9)
    pub fn macro_calories(&self) -> u32 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fats_g * KCAL_PER_G_FAT
    }

    /// Attach a name to produce the final meal entity
    pub fn into_meal(self, name: String) -> Meal {
        Meal {
            name,
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fats_g: self.fats_g,
            meal_type: self.meal_type,
        }
    }
}

/// Split a daily calorie target into the four meal envelopes.
///
/// Breakfast, lunch, and dinner each get their weighted share rounded to
/// the nearest calorie; the snack absorbs the remainder so the four
/// figures sum to the target exactly.
pub fn allocate_meals(calorie_target: u32, policy: &PlanPolicy) -> Vec<MealEnvelope> {
    let weights = [
        (MealType::Breakfast, policy.meal_weights.breakfast),
        (MealType::Lunch, policy.meal_weights.lunch),
        (MealType::Dinner, policy.meal_weights.dinner),
    ];

    let mut meals = Vec::with_capacity(MealType::ALL.len());
    let mut allocated = 0u32;
    for (meal_type, weight) in weights {
        let calories = (f64::from(calorie_target) * weight).round() as u32;
        meals.push(envelope(meal_type, calories, &policy.macro_ratio));
        allocated += calories;
    }

    let snack_calories = calorie_target.saturating_sub(allocated);
    meals.push(envelope(MealType::Snack, snack_calories, &policy.macro_ratio));

    meals
}

/// Build the macro envelope for a single slot.
///
/// Protein and fat grams are rounded to the nearest whole gram; carbs
/// are computed from the remaining calories so the macro-implied total
/// stays within [`MACRO_KCAL_TOLERANCE`] of the stated figure.
fn envelope(meal_type: MealType, calories: u32, ratio: &MacroRatio) -> MealEnvelope {
    let kcal = f64::from(calories);
    let protein_g = (kcal * ratio.protein / f64::from(KCAL_PER_G_PROTEIN)).round();
    let fats_g = (kcal * ratio.fat / f64::from(KCAL_PER_G_FAT)).round();
    let remainder_kcal = kcal
        - protein_g * f64::from(KCAL_PER_G_PROTEIN)
        - fats_g * f64::from(KCAL_PER_G_FAT);
    let carbs_g = (remainder_kcal / f64::from(KCAL_PER_G_CARBS)).round().max(0.0);

    MealEnvelope {
        meal_type,
        calories,
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fats_g: fats_g as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allocation_covers_each_slot_once_in_order() {
        let meals = allocate_meals(2000, &PlanPolicy::default());
        let slots: Vec<MealType> = meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(slots, MealType::ALL);
    }

    #[test]
    fn test_default_split_of_2000() {
        let meals = allocate_meals(2000, &PlanPolicy::default());
        assert_eq!(meals[0].calories, 500); // breakfast 25%
        assert_eq!(meals[1].calories, 600); // lunch 30%
        assert_eq!(meals[2].calories, 600); // dinner 30%
        assert_eq!(meals[3].calories, 300); // snack absorbs the rest
    }

    #[test]
    fn test_snack_absorbs_rounding_remainder() {
        // 2187 * 0.25 = 546.75 -> 547; the per-slot rounding must not
        // change the daily total
        let meals = allocate_meals(2187, &PlanPolicy::default());
        let total: u32 = meals.iter().map(|m| m.calories).sum();
        assert_eq!(total, 2187);
    }

    #[test]
    fn test_macro_grams_for_500_kcal() {
        // 500 kcal at 30/40/30: protein 150/4 = 37.5 -> 38g,
        // fat 150/9 = 16.7 -> 17g, carbs fill the remaining 195 kcal -> 49g
        let env = envelope(MealType::Breakfast, 500, &MacroRatio::default());
        assert_eq!(env.protein_g, 38);
        assert_eq!(env.fats_g, 17);
        assert_eq!(env.carbs_g, 49);
        assert!(env.macro_calories().abs_diff(500) <= MACRO_KCAL_TOLERANCE);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: meal calories always sum to the target exactly
        #[test]
        fn prop_meal_calories_sum_to_target(target in 1200u32..6000) {
            let meals = allocate_meals(target, &PlanPolicy::default());
            let total: u32 = meals.iter().map(|m| m.calories).sum();
            prop_assert_eq!(total, target);
        }

        /// Property: every envelope's macro-implied calories are within
        /// tolerance of its stated calories
        #[test]
        fn prop_macro_calories_within_tolerance(target in 1200u32..6000) {
            for meal in allocate_meals(target, &PlanPolicy::default()) {
                prop_assert!(
                    meal.macro_calories().abs_diff(meal.calories) <= MACRO_KCAL_TOLERANCE,
                    "slot {} stated {} kcal but macros imply {}",
                    meal.meal_type, meal.calories, meal.macro_calories()
                );
            }
        }

        /// Property: four envelopes, one per slot, regardless of target
        #[test]
        fn prop_always_four_slots(target in 1200u32..6000) {
            let meals = allocate_meals(target, &PlanPolicy::default());
            let slots: Vec<MealType> = meals.iter().map(|m| m.meal_type).collect();
            prop_assert_eq!(slots, MealType::ALL.to_vec());
        }
    }
}
