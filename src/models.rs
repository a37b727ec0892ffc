use crate::calendar::{Window, WorkdayCounts};
use crate::leaderboard::LeaderboardRow;
use crate::pacing::PacingReport;
use crate::store::LogStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROSTER: [&str; 3] = ["Ivan Ivanov", "Petr Petrov", "Anna Smirnova"];

/// Numeric activity of one member on one day: the morning plan followed by
/// the evening actuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActivityCounts {
    pub planned_presentations_assigned: u64,
    pub planned_presentations_confirmed: u64,
    pub planned_payments_expected: u64,
    pub actual_presentations_assigned: u64,
    pub actual_presentations_confirmed: u64,
    pub actual_presentations_conducted: u64,
    pub invoices_issued: u64,
    pub payments_received: u64,
    pub call_minutes: u64,
    pub presentation_minutes: u64,
    pub dials: u64,
}

impl ActivityCounts {
    pub fn total_minutes(&self) -> u64 {
        self.call_minutes.saturating_add(self.presentation_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub member: String,
    #[serde(flatten)]
    pub counts: ActivityCounts,
}

impl DailyLog {
    pub fn empty(date: NaiveDate, member: impl Into<String>) -> Self {
        Self {
            date,
            member: member.into(),
            counts: ActivityCounts::default(),
        }
    }
}

/// Field-level overwrite for a [`DailyLog`]. `None` leaves the field as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogPatch {
    pub planned_presentations_assigned: Option<u64>,
    pub planned_presentations_confirmed: Option<u64>,
    pub planned_payments_expected: Option<u64>,
    pub actual_presentations_assigned: Option<u64>,
    pub actual_presentations_confirmed: Option<u64>,
    pub actual_presentations_conducted: Option<u64>,
    pub invoices_issued: Option<u64>,
    pub payments_received: Option<u64>,
    pub call_minutes: Option<u64>,
    pub presentation_minutes: Option<u64>,
    pub dials: Option<u64>,
}

impl LogPatch {
    pub fn apply(&self, counts: &mut ActivityCounts) {
        fn set(slot: &mut u64, value: Option<u64>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut counts.planned_presentations_assigned, self.planned_presentations_assigned);
        set(&mut counts.planned_presentations_confirmed, self.planned_presentations_confirmed);
        set(&mut counts.planned_payments_expected, self.planned_payments_expected);
        set(&mut counts.actual_presentations_assigned, self.actual_presentations_assigned);
        set(&mut counts.actual_presentations_confirmed, self.actual_presentations_confirmed);
        set(&mut counts.actual_presentations_conducted, self.actual_presentations_conducted);
        set(&mut counts.invoices_issued, self.invoices_issued);
        set(&mut counts.payments_received, self.payments_received);
        set(&mut counts.call_minutes, self.call_minutes);
        set(&mut counts.presentation_minutes, self.presentation_minutes);
        set(&mut counts.dials, self.dials);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub daily_presentations_target: u64,
    pub daily_dials_target: u64,
    pub daily_activity_minutes_target: u64,
    pub monthly_invoices_target: u64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            daily_presentations_target: 2,
            daily_dials_target: 30,
            daily_activity_minutes_target: 120,
            monthly_invoices_target: 30,
        }
    }
}

impl Targets {
    /// Targets used for pacing: a zero field counts as unset and takes its
    /// default.
    pub fn effective(&self) -> Self {
        fn or_default(value: u64, default: u64) -> u64 {
            if value == 0 { default } else { value }
        }

        let defaults = Self::default();
        Self {
            daily_presentations_target: or_default(
                self.daily_presentations_target,
                defaults.daily_presentations_target,
            ),
            daily_dials_target: or_default(self.daily_dials_target, defaults.daily_dials_target),
            daily_activity_minutes_target: or_default(
                self.daily_activity_minutes_target,
                defaults.daily_activity_minutes_target,
            ),
            monthly_invoices_target: or_default(
                self.monthly_invoices_target,
                defaults.monthly_invoices_target,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new(members: Vec<String>) -> Self {
        let mut roster = Self(Vec::with_capacity(members.len()));
        for member in members {
            roster.add(&member);
        }
        roster
    }

    /// Appends `name` unless it is blank or already present.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.0.iter().any(|member| member == name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn members(&self) -> &[String] {
        &self.0
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self(DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub roster: Roster,
    pub targets: Targets,
    pub logs: LogStore,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub member: String,
    #[serde(default)]
    pub presentations_assigned: u64,
    #[serde(default)]
    pub presentations_confirmed: u64,
    #[serde(default)]
    pub payments_expected: u64,
}

impl PlanRequest {
    pub fn patch(&self) -> LogPatch {
        LogPatch {
            planned_presentations_assigned: Some(self.presentations_assigned),
            planned_presentations_confirmed: Some(self.presentations_confirmed),
            planned_payments_expected: Some(self.payments_expected),
            ..LogPatch::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ActualsRequest {
    pub member: String,
    #[serde(default)]
    pub presentations_assigned: u64,
    #[serde(default)]
    pub presentations_confirmed: u64,
    #[serde(default)]
    pub presentations_conducted: u64,
    #[serde(default)]
    pub invoices_issued: u64,
    #[serde(default)]
    pub payments_received: u64,
    #[serde(default)]
    pub call_minutes: u64,
    #[serde(default)]
    pub presentation_minutes: u64,
    #[serde(default)]
    pub dials: u64,
}

impl ActualsRequest {
    pub fn patch(&self) -> LogPatch {
        LogPatch {
            actual_presentations_assigned: Some(self.presentations_assigned),
            actual_presentations_confirmed: Some(self.presentations_confirmed),
            actual_presentations_conducted: Some(self.presentations_conducted),
            invoices_issued: Some(self.invoices_issued),
            payments_received: Some(self.payments_received),
            call_minutes: Some(self.call_minutes),
            presentation_minutes: Some(self.presentation_minutes),
            dials: Some(self.dials),
            ..LogPatch::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub member: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActualsResponse {
    pub record: DailyLog,
    pub invoice_goal_met: bool,
}

#[derive(Debug, Serialize)]
pub struct DayBreakdown {
    pub date: String,
    pub weekday: String,
    pub presentations: u64,
    pub dials: u64,
    pub minutes: u64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: String,
    pub member: String,
    pub members: Vec<String>,
    pub targets: Targets,
    pub week: Window,
    pub month: Window,
    pub workdays: WorkdayCounts,
    pub pacing: PacingReport,
    pub week_days: Vec<DayBreakdown>,
    pub leaderboard: Vec<LeaderboardRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_log_missing_counts_default_to_zero() {
        let log: DailyLog =
            serde_json::from_str(r#"{"date":"2026-01-05","member":"Anna","dials":12}"#).unwrap();
        assert_eq!(log.counts.dials, 12);
        assert_eq!(log.counts.call_minutes, 0);
        assert_eq!(log.counts.planned_payments_expected, 0);
    }

    #[test]
    fn targets_fill_missing_fields_with_defaults() {
        let targets: Targets = serde_json::from_str(r#"{"daily_dials_target":50}"#).unwrap();
        assert_eq!(targets.daily_dials_target, 50);
        assert_eq!(targets.daily_presentations_target, 2);
        assert_eq!(targets.daily_activity_minutes_target, 120);
        assert_eq!(targets.monthly_invoices_target, 30);
    }

    #[test]
    fn zero_targets_fall_back_to_defaults() {
        let stored = Targets {
            daily_presentations_target: 0,
            daily_dials_target: 45,
            daily_activity_minutes_target: 0,
            monthly_invoices_target: 0,
        };
        let effective = stored.effective();
        assert_eq!(effective.daily_presentations_target, 2);
        assert_eq!(effective.daily_dials_target, 45);
        assert_eq!(effective.daily_activity_minutes_target, 120);
        assert_eq!(effective.monthly_invoices_target, 30);
    }

    #[test]
    fn roster_rejects_blank_and_duplicate_names() {
        let mut roster = Roster::new(vec!["Anna".into(), "Anna".into()]);
        assert_eq!(roster.members(), ["Anna".to_string()]);
        assert!(!roster.add("   "));
        assert!(!roster.add(" Anna "));
        assert!(roster.add("Boris"));
        assert_eq!(roster.members().len(), 2);
    }

    #[test]
    fn plan_patch_leaves_actuals_untouched() {
        let mut counts = ActivityCounts {
            dials: 40,
            ..ActivityCounts::default()
        };
        let request = PlanRequest {
            member: "Anna".into(),
            presentations_assigned: 4,
            presentations_confirmed: 3,
            payments_expected: 1,
        };
        request.patch().apply(&mut counts);
        assert_eq!(counts.planned_presentations_assigned, 4);
        assert_eq!(counts.planned_payments_expected, 1);
        assert_eq!(counts.dials, 40);
    }
}
