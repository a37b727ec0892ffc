use crate::aggregate::WindowTotals;
use crate::calendar::Window;
use crate::models::{DailyLog, Roster};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub member: String,
    pub presentations: u64,
    pub dials: u64,
    pub minutes: u64,
    pub payments: u64,
}

/// Roster members in roster order, followed by members that only appear in
/// the log, in order of first appearance.
pub fn member_universe(roster: &Roster, logs: &[DailyLog]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    roster
        .members()
        .iter()
        .chain(logs.iter().map(|record| &record.member))
        .filter(|member| seen.insert(member.as_str()))
        .cloned()
        .collect()
}

/// Weekly presentations, dials and minutes plus monthly payments per member,
/// best first.
pub fn rank(
    roster: &Roster,
    logs: &[DailyLog],
    week: Window,
    month: Window,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = member_universe(roster, logs)
        .into_iter()
        .map(|member| {
            let weekly = WindowTotals::for_member(logs, &member, week.start, week.end);
            let monthly = WindowTotals::for_member(logs, &member, month.start, month.end);
            LeaderboardRow {
                member,
                presentations: weekly.presentations_conducted,
                dials: weekly.dials,
                minutes: weekly.minutes,
                payments: monthly.payments_received,
            }
        })
        .collect();

    // Vec::sort_by is stable, so full ties keep universe order.
    rows.sort_by(|a, b| {
        b.presentations
            .cmp(&a.presentations)
            .then_with(|| b.payments.cmp(&a.payments))
            .then_with(|| b.dials.cmp(&a.dials))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityCounts;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
    }

    fn log(
        date: NaiveDate,
        member: &str,
        presentations: u64,
        payments: u64,
        dials: u64,
    ) -> DailyLog {
        DailyLog {
            counts: ActivityCounts {
                actual_presentations_conducted: presentations,
                payments_received: payments,
                dials,
                ..ActivityCounts::default()
            },
            ..DailyLog::empty(date, member)
        }
    }

    fn ranked(roster: &Roster, logs: &[DailyLog]) -> Vec<LeaderboardRow> {
        rank(roster, logs, Window::week_of(today()), Window::month_of(today()))
    }

    fn names(rows: &[LeaderboardRow]) -> Vec<&str> {
        rows.iter().map(|row| row.member.as_str()).collect()
    }

    #[test]
    fn payments_break_presentation_ties() {
        let roster = Roster::new(vec!["A".into(), "B".into()]);
        let logs = vec![log(today(), "A", 3, 2, 0), log(today(), "B", 3, 5, 0)];
        assert_eq!(names(&ranked(&roster, &logs)), ["B", "A"]);
    }

    #[test]
    fn dials_break_remaining_ties() {
        let roster = Roster::new(vec!["A".into(), "B".into(), "C".into()]);
        let logs = vec![
            log(today(), "A", 1, 1, 10),
            log(today(), "B", 1, 1, 40),
            log(today(), "C", 2, 0, 0),
        ];
        assert_eq!(names(&ranked(&roster, &logs)), ["C", "B", "A"]);
    }

    #[test]
    fn full_ties_keep_universe_order() {
        let roster = Roster::new(vec!["Zed".into(), "Amy".into()]);
        let logs = vec![log(today(), "Kim", 0, 0, 0)];
        let first = ranked(&roster, &logs);
        assert_eq!(names(&first), ["Zed", "Amy", "Kim"]);
        assert_eq!(first, ranked(&roster, &logs));
    }

    #[test]
    fn universe_merges_roster_and_log_members() {
        let roster = Roster::new(vec!["A".into(), "B".into()]);
        let logs = vec![
            log(today(), "C", 0, 0, 0),
            log(today(), "A", 0, 0, 0),
            log(today(), "C", 0, 0, 0),
        ];
        assert_eq!(member_universe(&roster, &logs), ["A", "B", "C"]);
    }

    #[test]
    fn payments_count_for_the_whole_month_presentations_for_the_week() {
        let roster = Roster::new(vec!["A".into()]);
        let earlier_this_month = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let logs = vec![log(earlier_this_month, "A", 5, 4, 0), log(today(), "A", 1, 1, 0)];
        let rows = ranked(&roster, &logs);
        assert_eq!(rows[0].presentations, 1);
        assert_eq!(rows[0].payments, 5);
    }
}
