//! HSA business rules
//!
//! This module holds the 2024 IRS limit tables for high-deductible health plans
//! and the pure rules built on them: age calculation, HSA eligibility, and the
//! maximum contribution ceiling. The batch processor applies those rules to a
//! whole roster of employees.

pub mod limits;
pub mod process;
pub mod rules;

pub use limits::{PlanType, CATCH_UP_AGE, CATCH_UP_CONTRIBUTION};
pub use process::{process_employees, process_employees_as_of};
pub use rules::{age_on, calculate_age, is_eligible, max_contribution_as_of};

use thiserror::Error;

/// Errors produced while applying HSA rules to a single record
#[derive(Debug, Error)]
pub enum HsaError {
    /// The plan type is not one of the known plan types
    #[error("unknown plan type: {0}")]
    UnknownPlanType(String),

    /// The date of birth is not a `YYYY-MM-DD` date
    #[error("invalid date of birth '{value}': {source}")]
    InvalidDateOfBirth {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
