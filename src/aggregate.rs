use crate::calendar::CalendarDay;
use crate::models::{ActivityCounts, DailyLog};
use serde::Serialize;

/// Numeric fields of a [`DailyLog`] that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlannedPresentationsAssigned,
    PlannedPresentationsConfirmed,
    PlannedPaymentsExpected,
    ActualPresentationsAssigned,
    ActualPresentationsConfirmed,
    ActualPresentationsConducted,
    InvoicesIssued,
    PaymentsReceived,
    CallMinutes,
    PresentationMinutes,
    Dials,
}

impl ActivityCounts {
    pub fn get(&self, field: Field) -> u64 {
        match field {
            Field::PlannedPresentationsAssigned => self.planned_presentations_assigned,
            Field::PlannedPresentationsConfirmed => self.planned_presentations_confirmed,
            Field::PlannedPaymentsExpected => self.planned_payments_expected,
            Field::ActualPresentationsAssigned => self.actual_presentations_assigned,
            Field::ActualPresentationsConfirmed => self.actual_presentations_confirmed,
            Field::ActualPresentationsConducted => self.actual_presentations_conducted,
            Field::InvoicesIssued => self.invoices_issued,
            Field::PaymentsReceived => self.payments_received,
            Field::CallMinutes => self.call_minutes,
            Field::PresentationMinutes => self.presentation_minutes,
            Field::Dials => self.dials,
        }
    }
}

/// Records of `member` dated within `[from, to]`, both ends inclusive.
pub fn filter_by_member_and_range<'a>(
    records: &'a [DailyLog],
    member: &str,
    from: impl CalendarDay,
    to: impl CalendarDay,
) -> Vec<&'a DailyLog> {
    let (from, to) = (from.calendar_day(), to.calendar_day());
    records
        .iter()
        .filter(|record| record.member == member && from <= record.date && record.date <= to)
        .collect()
}

pub fn sum_field(records: &[&DailyLog], field: Field) -> u64 {
    records
        .iter()
        .fold(0u64, |total, record| total.saturating_add(record.counts.get(field)))
}

/// Call minutes and presentation minutes, each summed on its own.
pub fn sum_minutes(records: &[&DailyLog]) -> u64 {
    sum_field(records, Field::CallMinutes)
        .saturating_add(sum_field(records, Field::PresentationMinutes))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WindowTotals {
    pub presentations_conducted: u64,
    pub dials: u64,
    pub minutes: u64,
    pub invoices_issued: u64,
    pub payments_received: u64,
}

impl WindowTotals {
    pub fn from_records(records: &[&DailyLog]) -> Self {
        Self {
            presentations_conducted: sum_field(records, Field::ActualPresentationsConducted),
            dials: sum_field(records, Field::Dials),
            minutes: sum_minutes(records),
            invoices_issued: sum_field(records, Field::InvoicesIssued),
            payments_received: sum_field(records, Field::PaymentsReceived),
        }
    }

    pub fn for_member(
        records: &[DailyLog],
        member: &str,
        from: impl CalendarDay,
        to: impl CalendarDay,
    ) -> Self {
        Self::from_records(&filter_by_member_and_range(records, member, from, to))
    }
}
