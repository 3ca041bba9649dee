//! Meal naming catalog
//!
//! Turning a calorie/macro envelope into a concrete meal name is a
//! content concern, not arithmetic, so it sits behind a trait. The
//! planner passes the envelope it computed plus a variety seed; an
//! implementation picks a suitable name. The built-in catalog is a
//! small static table rotated by the seed.

use crate::meals::MealEnvelope;
use crate::models::MealType;

/// Source of meal names for a given slot and macro envelope
pub trait MealCatalog {
    /// Pick a name for the slot. The same (slot, seed) pair must always
    /// yield the same name so generated plans stay deterministic per day.
    fn name_for(&self, meal_type: MealType, envelope: &MealEnvelope, seed: u64) -> String;
}

/// Built-in catalog backed by static name tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMealCatalog;

const BREAKFAST_NAMES: &[&str] = &[
    "Greek Yogurt Bowl with Granola",
    "Scrambled Eggs on Wholegrain Toast",
    "Oatmeal with Berries and Almonds",
    "Protein Smoothie with Banana",
    "Cottage Cheese Pancakes",
];

const LUNCH_NAMES: &[&str] = &[
    "Grilled Chicken Salad",
    "Turkey and Avocado Wrap",
    "Quinoa Bowl with Roasted Vegetables",
    "Tuna Nicoise Salad",
    "Lentil Soup with Wholegrain Roll",
];

const DINNER_NAMES: &[&str] = &[
    "Baked Salmon with Sweet Potato",
    "Lean Beef Stir-Fry with Rice",
    "Chicken Breast with Couscous",
    "Tofu Curry with Brown Rice",
    "Pork Tenderloin with Green Beans",
];

const SNACK_NAMES: &[&str] = &[
    "Apple with Peanut Butter",
    "Mixed Nuts and Dried Fruit",
    "Protein Bar",
    "Hummus with Carrot Sticks",
    "Cottage Cheese with Pineapple",
];

impl MealCatalog for StaticMealCatalog {
    fn name_for(&self, meal_type: MealType, _envelope: &MealEnvelope, seed: u64) -> String {
        let names = match meal_type {
            MealType::Breakfast => BREAKFAST_NAMES,
            MealType::Lunch => LUNCH_NAMES,
            MealType::Dinner => DINNER_NAMES,
            MealType::Snack => SNACK_NAMES,
        };
        names[(seed as usize) % names.len()].to_string()
    }
}
