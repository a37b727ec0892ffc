use crate::models::{DailyLog, LogPatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Daily activity records, at most one per member and date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogStore {
    records: Vec<DailyLog>,
}

impl LogStore {
    pub fn new(records: Vec<DailyLog>) -> Self {
        let mut store = Self { records };
        store.dedupe();
        store
    }

    pub fn records(&self) -> &[DailyLog] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn find(&self, member: &str, date: NaiveDate) -> Option<&DailyLog> {
        self.records
            .iter()
            .find(|record| record.date == date && record.member == member)
    }

    /// Merges `patch` into the record for `member` on `today`, creating a
    /// zeroed record first when none exists.
    pub fn upsert_today(&mut self, today: NaiveDate, member: &str, patch: &LogPatch) -> &DailyLog {
        let index = match self
            .records
            .iter()
            .position(|record| record.date == today && record.member == member)
        {
            Some(index) => index,
            None => {
                self.records.push(DailyLog::empty(today, member));
                self.records.len() - 1
            }
        };

        let record = &mut self.records[index];
        patch.apply(&mut record.counts);
        record
    }

    /// Drops every record whose `(member, date)` key was already seen.
    /// Returns how many were dropped.
    pub fn dedupe(&mut self) -> usize {
        let before = self.records.len();
        let mut seen = BTreeSet::new();
        self.records
            .retain(|record| seen.insert((record.member.clone(), record.date)));
        before - self.records.len()
    }
}
