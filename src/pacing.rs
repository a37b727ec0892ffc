use crate::aggregate::WindowTotals;
use crate::calendar::WorkdayCounts;
use crate::models::Targets;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    OnPace,
    Warning,
    Critical,
}

impl PaceStatus {
    pub fn classify(run_rate: f64) -> Self {
        if run_rate >= 1.0 {
            Self::OnPace
        } else if run_rate >= 0.8 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Weekly target prorated to elapsed workdays. At least one day's worth is
/// always expected, even before the first workday of the week has passed.
pub fn prorate_weekly(daily_target: u64, workdays_to_date: u32) -> u64 {
    daily_target.saturating_mul(u64::from(workdays_to_date.max(1)))
}

/// `ceil(monthly_target * month_to_date / month_total)`, zero for an empty month.
pub fn prorate_monthly(monthly_target: u64, month_to_date: u32, month_total: u32) -> u64 {
    if month_total == 0 {
        return 0;
    }
    monthly_target
        .saturating_mul(u64::from(month_to_date))
        .div_ceil(u64::from(month_total))
}

pub fn run_rate(actual: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    actual as f64 / target as f64
}

pub fn deficit(target: u64, actual: u64) -> u64 {
    target.saturating_sub(actual)
}

pub fn required_daily_pace(deficit: u64, workdays_remaining: u32) -> u64 {
    if workdays_remaining == 0 {
        return 0;
    }
    deficit.div_ceil(u64::from(workdays_remaining))
}

/// Invoices issued this month that have not been paid yet.
pub fn pushlist(invoices: u64, payments: u64) -> u64 {
    invoices.saturating_sub(payments)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricPace {
    pub actual: u64,
    pub target: u64,
    pub run_rate: f64,
    pub deficit: u64,
    pub required_per_day: u64,
    pub status: PaceStatus,
}

impl MetricPace {
    pub fn new(actual: u64, target: u64, workdays_remaining: u32) -> Self {
        let rate = run_rate(actual, target);
        let deficit = deficit(target, actual);
        Self {
            actual,
            target,
            run_rate: rate,
            deficit,
            required_per_day: required_daily_pace(deficit, workdays_remaining),
            status: PaceStatus::classify(rate),
        }
    }

    pub fn weekly(actual: u64, daily_target: u64, days: &WorkdayCounts) -> Self {
        Self::new(
            actual,
            prorate_weekly(daily_target, days.week_to_date),
            days.week_remaining,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PacingReport {
    pub presentations: MetricPace,
    pub dials: MetricPace,
    pub minutes: MetricPace,
    pub invoices: MetricPace,
    pub invoices_mtd: u64,
    pub payments_mtd: u64,
    pub pushlist: u64,
}

impl PacingReport {
    pub fn build(
        week: &WindowTotals,
        month: &WindowTotals,
        targets: &Targets,
        days: &WorkdayCounts,
    ) -> Self {
        let targets = targets.effective();
        let invoice_target = prorate_monthly(
            targets.monthly_invoices_target,
            days.month_to_date,
            days.month_total,
        );

        Self {
            presentations: MetricPace::weekly(
                week.presentations_conducted,
                targets.daily_presentations_target,
                days,
            ),
            dials: MetricPace::weekly(week.dials, targets.daily_dials_target, days),
            minutes: MetricPace::weekly(week.minutes, targets.daily_activity_minutes_target, days),
            invoices: MetricPace::new(
                month.invoices_issued,
                invoice_target,
                days.month_remaining(),
            ),
            invoices_mtd: month.invoices_issued,
            payments_mtd: month.payments_received,
            pushlist: pushlist(month.invoices_issued, month.payments_received),
        }
    }

    /// Month-to-date invoices have reached a non-zero prorated target.
    pub fn invoice_goal_met(&self) -> bool {
        self.invoices.target > 0 && self.invoices.actual >= self.invoices.target
    }
}
