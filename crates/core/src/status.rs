//! Project status vocabulary and the date-derived status calculator.
//!
//! A project's status is either a manual override (`Cancelled` / `On Hold`,
//! which always persist) or derived from its start/end dates. The derivation
//! is a pure function over day-granularity dates so it can be unit tested
//! without a clock; callers pass in "today".

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project lifecycle status as stored in `projects.status`.
///
/// Serialized with the display names used on the wire and in the database
/// (`"On Hold"`, not `"OnHold"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Planned,
    Active,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    /// The database TEXT representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether this status is a manual override that survives recomputation.
    pub fn is_override(self) -> bool {
        matches!(self, ProjectStatus::OnHold | ProjectStatus::Cancelled)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(ProjectStatus::Planning),
            "Planned" => Ok(ProjectStatus::Planned),
            "Active" => Ok(ProjectStatus::Active),
            "Completed" => Ok(ProjectStatus::Completed),
            "On Hold" => Ok(ProjectStatus::OnHold),
            "Cancelled" => Ok(ProjectStatus::Cancelled),
            other => Err(format!("Unknown project status: {other}")),
        }
    }
}

/// Derive a project's effective status from its dates.
///
/// Rules, in order:
///
/// 1. `Cancelled` / `On Hold` overrides are returned unchanged.
/// 2. No dates at all -> `Planning`.
/// 3. End date strictly before `today` -> `Completed`.
/// 4. Start date strictly after `today` -> `Planned`.
/// 5. Start date on or before `today`, end absent or on/after `today` -> `Active`.
/// 6. Only an end date, on or after `today` -> `Planned`.
/// 7. Anything else -> `Planning`.
///
/// All comparisons are at day granularity. Called on every project create and
/// update before persisting, so the stored status never goes stale without a
/// write; reads recompute it again for display.
pub fn compute_status(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    current: ProjectStatus,
    today: NaiveDate,
) -> ProjectStatus {
    if current.is_override() {
        return current;
    }

    match (start, end) {
        (None, None) => ProjectStatus::Planning,
        (_, Some(e)) if e < today => ProjectStatus::Completed,
        (Some(s), _) if s > today => ProjectStatus::Planned,
        (Some(s), e) if s <= today && e.is_none_or(|e| e >= today) => ProjectStatus::Active,
        (None, Some(e)) if e >= today => ProjectStatus::Planned,
        _ => ProjectStatus::Planning,
    }
}
