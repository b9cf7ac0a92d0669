//! Eligibility, contribution, and age rules
//!
//! All rules are pure. The `_as_of`/`age_on` variants take the reference date
//! explicitly; the plain variants use today's local date.

use chrono::{Datelike, Local, NaiveDate};

use super::limits::{PlanType, CATCH_UP_AGE, CATCH_UP_CONTRIBUTION};
use super::HsaError;

/// Date format used by the roster source for dates of birth
const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date of birth
fn parse_date_of_birth(date_of_birth: &str) -> Result<NaiveDate, HsaError> {
    NaiveDate::parse_from_str(date_of_birth, DATE_OF_BIRTH_FORMAT).map_err(|source| {
        HsaError::InvalidDateOfBirth {
            value: date_of_birth.to_string(),
            source,
        }
    })
}

/// Computes age in whole years on `today`.
///
/// Age is the difference in calendar years, reduced by one when today's
/// day-of-year is earlier than the birth day-of-year. Comparing day-of-year
/// rather than month and day means a birthday on or after March 1st of a leap
/// year is recognised one day late in common years.
pub fn age_on(date_of_birth: &str, today: NaiveDate) -> Result<i32, HsaError> {
    let dob = parse_date_of_birth(date_of_birth)?;
    let mut age = today.year() - dob.year();
    if today.ordinal() < dob.ordinal() {
        age -= 1;
    }
    Ok(age)
}

/// Computes age in whole years as of today's local date
pub fn calculate_age(date_of_birth: &str) -> Result<i32, HsaError> {
    age_on(date_of_birth, Local::now().date_naive())
}

/// Returns whether a plan with the given deductible qualifies for an HSA
///
/// # Returns
/// * `Ok(true)` if the deductible meets the HDHP minimum for the plan type
/// * `Ok(false)` if it falls short
/// * `Err(HsaError::UnknownPlanType)` if the plan type is not recognised
pub fn is_eligible(plan_type: &str, deductible: i64) -> Result<bool, HsaError> {
    let plan: PlanType = plan_type.parse()?;
    Ok(deductible >= plan.minimum_deductible())
}

/// Computes the maximum annual HSA contribution on `today`
///
/// The base limit for the plan type, plus [`CATCH_UP_CONTRIBUTION`] when the
/// employee is at least [`CATCH_UP_AGE`] years old.
pub fn max_contribution_as_of(
    plan_type: &str,
    date_of_birth: &str,
    today: NaiveDate,
) -> Result<i64, HsaError> {
    let plan: PlanType = plan_type.parse()?;
    let mut limit = plan.contribution_limit();

    if age_on(date_of_birth, today)? >= CATCH_UP_AGE {
        limit += CATCH_UP_CONTRIBUTION;
    }

    Ok(limit)
}
