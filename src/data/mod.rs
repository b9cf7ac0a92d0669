//! Core data model for the employee roster
//!
//! This module contains the employee record as delivered by the roster API,
//! together with the client that fetches it.

pub mod roster;

pub use roster::{RosterClient, RosterError};

use serde::{Deserialize, Serialize};

/// A single employee row from the roster
///
/// The first four fields come from the roster source, whose rows may omit any
/// empty cell; missing cells fall back to their defaults. `hsa_eligible` and
/// `hsa_max_contribution` are derived by the batch processor and are never
/// read from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee's display name
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Plan type label, e.g. "Self-only" or "Family"
    #[serde(rename = "Plan Type", default)]
    pub plan_type: String,
    /// Annual plan deductible in whole dollars
    #[serde(rename = "Deductible", default)]
    pub deductible: i64,
    /// Date of birth in `YYYY-MM-DD` form
    #[serde(rename = "Date of birth", default)]
    pub date_of_birth: String,
    /// Whether the plan qualifies for an HSA
    #[serde(rename = "HSAEligible", skip_deserializing)]
    pub hsa_eligible: bool,
    /// Maximum annual HSA contribution, zero when not eligible
    #[serde(rename = "HSAMaxContribution", skip_deserializing)]
    pub hsa_max_contribution: i64,
}

impl Employee {
    /// Creates an unprocessed employee record
    pub fn new(
        name: impl Into<String>,
        plan_type: impl Into<String>,
        deductible: i64,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            plan_type: plan_type.into(),
            deductible,
            date_of_birth: date_of_birth.into(),
            hsa_eligible: false,
            hsa_max_contribution: 0,
        }
    }
}
