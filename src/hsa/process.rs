//! Batch processing of an employee roster
//!
//! Applies the eligibility and contribution rules to every record in place.
//! A record whose rules fail is degraded to a zero contribution; the rest of
//! the batch is still processed.

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use super::rules::{is_eligible, max_contribution_as_of};
use crate::data::Employee;

/// Processes the roster as of today's local date
pub fn process_employees(employees: &mut [Employee]) {
    process_employees_as_of(employees, Local::now().date_naive());
}

/// Recomputes `hsa_eligible` and `hsa_max_contribution` for every employee
///
/// Order is preserved. Derived fields are always overwritten, whatever they
/// held before.
///
/// # Behavior
/// - Unknown plan type: ineligible, contribution 0
/// - Ineligible: contribution 0, date of birth is not inspected
/// - Eligible but contribution fails (bad date of birth): contribution 0
pub fn process_employees_as_of(employees: &mut [Employee], today: NaiveDate) {
    for employee in employees.iter_mut() {
        employee.hsa_eligible = match is_eligible(&employee.plan_type, employee.deductible) {
            Ok(eligible) => eligible,
            Err(e) => {
                warn!(name = %employee.name, error = %e, "Treating employee as HSA-ineligible");
                false
            }
        };

        employee.hsa_max_contribution = if employee.hsa_eligible {
            match max_contribution_as_of(&employee.plan_type, &employee.date_of_birth, today) {
                Ok(limit) => limit,
                Err(e) => {
                    warn!(
                        name = %employee.name,
                        error = %e,
                        "Error calculating HSA max contribution"
                    );
                    0
                }
            }
        } else {
            0
        };

        debug!(
            name = %employee.name,
            plan_type = %employee.plan_type,
            deductible = employee.deductible,
            date_of_birth = %employee.date_of_birth,
            hsa_eligible = employee.hsa_eligible,
            max_contribution = employee.hsa_max_contribution,
            "Processed employee"
        );
    }
}
