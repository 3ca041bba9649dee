//! Error types for plan generation

use thiserror::Error;

/// Errors raised while generating a daily plan.
///
/// Absence of a plan for a requested day is not an error; lookups model
/// it as `Option::None`. Storage faults are propagated by the repository
/// layer and are not part of this taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The profile on file has degenerate body metrics and no plan can
    /// be computed from it.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// The user has no profile on file; the caller should prompt for
    /// profile setup before requesting a plan.
    #[error("No profile on file for this user")]
    ProfileRequired,
}
