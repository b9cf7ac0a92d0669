//! Static HDHP and HSA limit tables
//!
//! Limits are the 2024 figures: the minimum annual deductible a plan needs to
//! qualify as a high-deductible health plan, and the base annual HSA
//! contribution limit for each coverage tier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HsaError;

/// Age at which the catch-up contribution applies
pub const CATCH_UP_AGE: i32 = 55;

/// Extra contribution allowed from [`CATCH_UP_AGE`] onward
pub const CATCH_UP_CONTRIBUTION: i64 = 1000;

/// Coverage tier of a health plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    /// Individual coverage
    #[serde(rename = "Self-only")]
    SelfOnly,
    /// Family coverage
    #[serde(rename = "Family")]
    Family,
}

impl PlanType {
    /// All known plan types
    pub const ALL: [PlanType; 2] = [PlanType::SelfOnly, PlanType::Family];

    /// Label used by the roster source
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::SelfOnly => "Self-only",
            PlanType::Family => "Family",
        }
    }

    /// Minimum annual deductible for the plan to count as an HDHP
    pub fn minimum_deductible(&self) -> i64 {
        match self {
            PlanType::SelfOnly => 1600,
            PlanType::Family => 3200,
        }
    }

    /// Base annual HSA contribution limit, before any catch-up amount
    pub fn contribution_limit(&self) -> i64 {
        match self {
            PlanType::SelfOnly => 4150,
            PlanType::Family => 8300,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = HsaError;

    /// Parses the exact label used by the roster source. Matching is
    /// case-sensitive; anything else is an unknown plan type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanType::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| HsaError::UnknownPlanType(s.to_string()))
    }
}
