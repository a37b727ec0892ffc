use crate::aggregate::{Field, WindowTotals, filter_by_member_and_range, sum_field, sum_minutes};
use crate::calendar::{Window, WorkdayCounts};
use crate::leaderboard::{member_universe, rank};
use crate::models::{AppData, DashboardResponse, DayBreakdown};
use crate::pacing::PacingReport;
use chrono::{Local, NaiveDate};

pub fn build_dashboard(data: &AppData, member: Option<&str>) -> Option<DashboardResponse> {
    build_dashboard_at(Local::now().date_naive(), data, member)
}

/// Everything the page shows for `member` as of `today`. Falls back to the
/// first known member; `None` when no member is known at all.
pub fn build_dashboard_at(
    today: NaiveDate,
    data: &AppData,
    member: Option<&str>,
) -> Option<DashboardResponse> {
    let logs = data.logs.records();
    let members = member_universe(&data.roster, logs);
    let member = match member.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => members.first()?.clone(),
    };

    let week = Window::week_of(today);
    let month = Window::month_of(today);
    let workdays = WorkdayCounts::at(today);

    let weekly = WindowTotals::for_member(logs, &member, week.start, week.end);
    let monthly = WindowTotals::for_member(logs, &member, month.start, month.end);
    let pacing = PacingReport::build(&weekly, &monthly, &data.targets, &workdays);

    let week_days = week
        .days()
        .map(|date| {
            let rows = filter_by_member_and_range(logs, &member, date, date);
            DayBreakdown {
                date: date.to_string(),
                weekday: date.format("%a").to_string(),
                presentations: sum_field(&rows, Field::ActualPresentationsConducted),
                dials: sum_field(&rows, Field::Dials),
                minutes: sum_minutes(&rows),
            }
        })
        .collect();

    Some(DashboardResponse {
        date: today.to_string(),
        leaderboard: rank(&data.roster, logs, week, month),
        member,
        members,
        targets: data.targets,
        week,
        month,
        workdays,
        pacing,
        week_days,
    })
}
