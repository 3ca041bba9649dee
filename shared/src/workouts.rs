//! Workout selection
//!
//! Chooses a workout type, intensity, and duration consistent with the
//! user's activity level and goal direction. Loss goals lean toward
//! cardio, maintenance and gain goals toward strength work. The seed is
//! an injectable variety source; callers derive it from (user, date) so
//! the selection stays deterministic per day.

use crate::models::{ActivityLevel, UserProfile, Workout, WorkoutIntensity};

/// Duration range (minutes) per intensity band
const LOW_DURATION_RANGE: (u32, u32) = (20, 30);
const MEDIUM_DURATION_RANGE: (u32, u32) = (30, 45);
const HIGH_DURATION_RANGE: (u32, u32) = (45, 60);

/// Cardio-leaning pool, indexed by intensity, as (type, description)
const CARDIO_POOL: [&[(&str, &str)]; 3] = [
    &[
        ("Brisk Walking", "A steady-paced walk to burn calories without strain."),
        ("Light Cycling", "An easy ride on flat terrain to get the heart rate up."),
    ],
    &[
        ("Jogging", "A continuous jog at a conversational pace."),
        ("Swimming", "Steady laps mixing strokes for a full-body burn."),
        ("Cycling", "A moderate ride with rolling terrain."),
    ],
    &[
        ("Running Intervals", "Alternating hard running efforts with short recoveries."),
        ("HIIT Circuit", "High-intensity intervals of bodyweight movements."),
        ("Rowing", "Sustained hard rowing pieces with short rests."),
    ],
];

/// Strength-leaning pool, indexed by intensity, as (type, description)
const STRENGTH_POOL: [&[(&str, &str)]; 3] = [
    &[
        ("Bodyweight Circuit", "Squats, push-ups, and planks at an easy pace."),
        ("Resistance Band Session", "Light full-body work with bands."),
    ],
    &[
        ("Full-Body Strength", "Compound lifts covering the major muscle groups."),
        ("Upper Body Strength", "Pressing and pulling work with moderate loads."),
        ("Lower Body Strength", "Squat and hinge patterns with moderate loads."),
    ],
    &[
        ("Heavy Compound Lifts", "Low-rep squats, deadlifts, and presses."),
        ("Strength and Conditioning", "Heavy lifts paired with conditioning finishers."),
    ],
];

/// Map activity level to a workout intensity band
pub fn intensity_for(level: ActivityLevel) -> WorkoutIntensity {
    match level {
        ActivityLevel::Sedentary | ActivityLevel::LightlyActive => WorkoutIntensity::Low,
        ActivityLevel::ModeratelyActive => WorkoutIntensity::Medium,
        ActivityLevel::VeryActive | ActivityLevel::ExtraActive => WorkoutIntensity::High,
    }
}

/// Deterministic duration: the midpoint of the intensity's range
pub fn duration_minutes(intensity: WorkoutIntensity) -> u32 {
    let (lo, hi) = match intensity {
        WorkoutIntensity::Low => LOW_DURATION_RANGE,
        WorkoutIntensity::Medium => MEDIUM_DURATION_RANGE,
        WorkoutIntensity::High => HIGH_DURATION_RANGE,
    };
    (lo + hi) / 2
}

fn intensity_index(intensity: WorkoutIntensity) -> usize {
    match intensity {
        WorkoutIntensity::Low => 0,
        WorkoutIntensity::Medium => 1,
        WorkoutIntensity::High => 2,
    }
}

/// Select a workout for the profile.
///
/// Pure: the same (profile, seed) pair always yields the same workout.
pub fn select_workout(profile: &UserProfile, seed: u64) -> Workout {
    let intensity = intensity_for(profile.activity_level);
    let pool = if profile.weekly_goal_kg < 0.0 {
        CARDIO_POOL[intensity_index(intensity)]
    } else {
        STRENGTH_POOL[intensity_index(intensity)]
    };
    let (workout_type, description) = pool[(seed as usize) % pool.len()];

    Workout {
        workout_type: workout_type.to_string(),
        duration_minutes: duration_minutes(intensity),
        intensity,
        description: description.to_string(),
    }
}
