use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

/// Anything that falls on a single local calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Monday 00:00:00.000 of the ISO week containing `day`.
pub fn start_of_week(day: impl CalendarDay) -> NaiveDateTime {
    week_start(day.calendar_day()).and_time(NaiveTime::MIN)
}

/// Sunday 23:59:59.999 of the ISO week containing `day`.
pub fn end_of_week(day: impl CalendarDay) -> NaiveDateTime {
    end_of_day(week_start(day.calendar_day()) + Duration::days(6))
}

pub fn start_of_month(day: impl CalendarDay) -> NaiveDateTime {
    month_start(day.calendar_day()).and_time(NaiveTime::MIN)
}

pub fn end_of_month(day: impl CalendarDay) -> NaiveDateTime {
    end_of_day(month_end(day.calendar_day()))
}

pub fn is_workday(day: impl CalendarDay) -> bool {
    !matches!(day.calendar_day().weekday(), Weekday::Sat | Weekday::Sun)
}

/// Inclusive count of Monday–Friday days between `from` and `to`.
///
/// Only the calendar day of each bound is considered. An inverted range
/// counts as zero.
pub fn count_workdays(from: impl CalendarDay, to: impl CalendarDay) -> u32 {
    let last = to.calendar_day();
    let mut day = from.calendar_day();
    let mut count = 0;
    while day <= last {
        if is_workday(day) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    // 31 days past the 1st always lands inside the following month.
    let next_month = month_start(month_start(date) + Duration::days(31));
    next_month - Duration::days(1)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    (date + Duration::days(1)).and_time(NaiveTime::MIN) - Duration::milliseconds(1)
}

/// Inclusive window of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn week_of(day: impl CalendarDay) -> Self {
        let start = week_start(day.calendar_day());
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn month_of(day: impl CalendarDay) -> Self {
        let date = day.calendar_day();
        Self {
            start: month_start(date),
            end: month_end(date),
        }
    }

    pub fn contains(&self, day: impl CalendarDay) -> bool {
        let date = day.calendar_day();
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let len = (self.end - self.start).num_days() + 1;
        (0..len.max(0)).map(move |offset| start + Duration::days(offset))
    }
}

/// Elapsed and remaining workdays around a fixed "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkdayCounts {
    pub week_to_date: u32,
    pub week_remaining: u32,
    pub month_to_date: u32,
    pub month_total: u32,
}

impl WorkdayCounts {
    pub fn at(today: NaiveDate) -> Self {
        let week = Window::week_of(today);
        let month = Window::month_of(today);
        let week_remaining = match today.succ_opt() {
            Some(tomorrow) => count_workdays(tomorrow, week.end),
            None => 0,
        };

        Self {
            week_to_date: count_workdays(week.start, today),
            week_remaining,
            month_to_date: count_workdays(month.start, today),
            month_total: count_workdays(month.start, month.end),
        }
    }

    pub fn month_remaining(&self) -> u32 {
        self.month_total.saturating_sub(self.month_to_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_bounds_span_monday_to_sunday() {
        let wednesday = date(2026, 1, 7);
        assert_eq!(
            start_of_week(wednesday),
            date(2026, 1, 5).and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            end_of_week(wednesday),
            date(2026, 1, 11).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );

        let sunday = date(2026, 1, 11);
        assert_eq!(start_of_week(sunday).date(), date(2026, 1, 5));
    }

    #[test]
    fn month_bounds_handle_short_and_leap_months() {
        assert_eq!(start_of_month(date(2026, 2, 13)).date(), date(2026, 2, 1));
        assert_eq!(
            end_of_month(date(2026, 2, 13)),
            date(2026, 2, 28).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
        assert_eq!(end_of_month(date(2024, 2, 1)).date(), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2026, 12, 31)).date(), date(2026, 12, 31));
        assert_eq!(end_of_month(date(2026, 1, 31)).date(), date(2026, 1, 31));
    }

    #[test]
    fn weekends_are_not_workdays() {
        assert!(is_workday(date(2026, 1, 9)));
        assert!(!is_workday(date(2026, 1, 10)));
        assert!(!is_workday(date(2026, 1, 11)));
    }

    #[test]
    fn inverted_range_counts_zero() {
        assert_eq!(count_workdays(date(2026, 1, 9), date(2026, 1, 5)), 0);
    }

    #[test]
    fn single_day_range() {
        assert_eq!(count_workdays(date(2026, 1, 5), date(2026, 1, 5)), 1);
        assert_eq!(count_workdays(date(2026, 1, 10), date(2026, 1, 10)), 0);
    }

    #[test]
    fn count_ignores_time_of_day() {
        let monday_evening = date(2026, 1, 5).and_hms_opt(22, 0, 0).unwrap();
        let monday_morning = date(2026, 1, 5).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(count_workdays(monday_evening, monday_morning), 1);
        assert_eq!(
            count_workdays(start_of_week(date(2026, 1, 7)), end_of_week(date(2026, 1, 7))),
            5
        );
    }

    #[test]
    fn every_week_has_at_most_five_workdays() {
        let mut day = date(2025, 12, 1);
        for _ in 0..120 {
            let week = Window::week_of(day);
            assert_eq!(count_workdays(week.start, week.end), 5);
            let month = Window::month_of(day);
            let clipped = count_workdays(week.start.max(month.start), week.end.min(month.end));
            assert!(clipped <= 5);
            day += Duration::days(1);
        }
    }

    #[test]
    fn workday_counts_midweek() {
        let counts = WorkdayCounts::at(date(2026, 1, 7));
        assert_eq!(counts.week_to_date, 3);
        assert_eq!(counts.week_remaining, 2);
    }

    #[test]
    fn workday_counts_on_friday_and_weekend() {
        let friday = WorkdayCounts::at(date(2026, 1, 9));
        assert_eq!(friday.week_to_date, 5);
        assert_eq!(friday.week_remaining, 0);

        let saturday = WorkdayCounts::at(date(2026, 1, 10));
        assert_eq!(saturday.week_to_date, 5);
        assert_eq!(saturday.week_remaining, 0);
    }

    #[test]
    fn workday_counts_for_month() {
        let counts = WorkdayCounts::at(date(2026, 2, 13));
        assert_eq!(counts.month_to_date, 10);
        assert_eq!(counts.month_total, 20);
        assert_eq!(counts.month_remaining(), 10);

        let june = WorkdayCounts::at(date(2026, 6, 30));
        assert_eq!(june.month_total, 22);
        assert_eq!(june.month_to_date, 22);
    }

    #[test]
    fn window_days_cover_the_week() {
        let week = Window::week_of(date(2026, 10, 21));
        let days: Vec<_> = week.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 10, 19));
        assert_eq!(days[6], date(2026, 10, 25));
        assert!(week.contains(date(2026, 10, 25)));
        assert!(!week.contains(date(2026, 10, 26)));
    }
}
