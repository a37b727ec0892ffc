use crate::calendar::{Window, is_workday};
use crate::errors::AppError;
use crate::models::{ActivityCounts, AppData, DailyLog, Roster, Targets};
use crate::store::LogStore;
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const ROSTER_FILE: &str = "roster.json";
pub const TARGETS_FILE: &str = "targets.json";
pub const LOGS_FILE: &str = "logs.json";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("APP_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}

pub fn seed_demo_enabled() -> bool {
    env::var("APP_SEED_DEMO")
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Loads all three collections. Each one falls back to its default on its
/// own when missing or unreadable.
pub async fn load_data(dir: &Path) -> AppData {
    let roster: Roster = load_collection(&dir.join(ROSTER_FILE)).await;
    let targets: Targets = load_collection(&dir.join(TARGETS_FILE)).await;
    let mut logs: LogStore = load_collection(&dir.join(LOGS_FILE)).await;

    let dropped = logs.dedupe();
    if dropped > 0 {
        warn!("dropped {dropped} duplicate log records");
    }

    AppData {
        roster: Roster::new(roster.members().to_vec()),
        targets,
        logs,
    }
}

async fn load_collection<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

async fn persist_collection<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value)?;
    fs::write(path, payload).await?;
    Ok(())
}

pub async fn persist_roster(dir: &Path, roster: &Roster) -> Result<(), AppError> {
    persist_collection(&dir.join(ROSTER_FILE), roster).await
}

pub async fn persist_targets(dir: &Path, targets: &Targets) -> Result<(), AppError> {
    persist_collection(&dir.join(TARGETS_FILE), targets).await
}

pub async fn persist_logs(dir: &Path, logs: &LogStore) -> Result<(), AppError> {
    persist_collection(&dir.join(LOGS_FILE), logs).await
}

/// Sample activity for two members across the workdays of the week
/// containing `today`.
pub fn demo_logs(today: NaiveDate) -> LogStore {
    const MEMBERS: [&str; 2] = ["Petr Petrov", "Anna Smirnova"];

    let mut records = Vec::new();
    for (day_index, date) in Window::week_of(today).days().enumerate() {
        if !is_workday(date) {
            continue;
        }
        let i = day_index as u64;
        for (member_index, member) in MEMBERS.iter().enumerate() {
            let m = member_index as u64;
            records.push(DailyLog {
                date,
                member: member.to_string(),
                counts: ActivityCounts {
                    planned_presentations_assigned: 4 + m,
                    planned_presentations_confirmed: 3 + m,
                    planned_payments_expected: 1,
                    actual_presentations_assigned: 4 + m,
                    actual_presentations_confirmed: 3 + m,
                    actual_presentations_conducted: 2 + m % 2,
                    invoices_issued: 1 + i % 2,
                    payments_received: u64::from(i % 3 == 0),
                    call_minutes: 60 + 5 * i,
                    presentation_minutes: 60 + 10 * i,
                    dials: 30 + 2 * i,
                },
            });
        }
    }
    LogStore::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_dir(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("sales_pacing_{label}_{}_{nanos}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn missing_files_load_defaults() {
        let dir = unique_dir("missing");
        let data = load_data(&dir).await;
        assert_eq!(data.roster, Roster::default());
        assert_eq!(data.targets, Targets::default());
        assert!(data.logs.is_empty());
    }

    #[tokio::test]
    async fn corrupt_files_fall_back_per_collection() {
        let dir = unique_dir("corrupt");
        std::fs::write(dir.join(LOGS_FILE), b"{not json").unwrap();
        std::fs::write(dir.join(TARGETS_FILE), br#"{"daily_dials_target": 45}"#).unwrap();
        std::fs::write(dir.join(ROSTER_FILE), br#"["Kim", "Kim", "Lee"]"#).unwrap();

        let data = load_data(&dir).await;
        assert!(data.logs.is_empty());
        assert_eq!(data.targets.daily_dials_target, 45);
        assert_eq!(data.targets.monthly_invoices_target, 30);
        assert_eq!(data.roster.members(), ["Kim".to_string(), "Lee".to_string()]);
    }

    #[tokio::test]
    async fn persisted_collections_reload() {
        let dir = unique_dir("persist");
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let logs = demo_logs(today);
        let targets = Targets {
            monthly_invoices_target: 12,
            ..Targets::default()
        };
        let mut roster = Roster::default();
        roster.add("Kim");

        persist_logs(&dir, &logs).await.unwrap();
        persist_targets(&dir, &targets).await.unwrap();
        persist_roster(&dir, &roster).await.unwrap();

        let data = load_data(&dir).await;
        assert_eq!(data.logs, logs);
        assert_eq!(data.targets, targets);
        assert_eq!(data.roster, roster);
    }

    #[tokio::test]
    async fn duplicate_log_keys_collapse_on_load() {
        let dir = unique_dir("dupes");
        std::fs::write(
            dir.join(LOGS_FILE),
            br#"[
                {"date": "2026-01-05", "member": "Kim", "dials": 3},
                {"date": "2026-01-05", "member": "Kim", "dials": 9}
            ]"#,
        )
        .unwrap();

        let data = load_data(&dir).await;
        assert_eq!(data.logs.len(), 1);
        assert_eq!(data.logs.records()[0].counts.dials, 3);
    }

    #[test]
    fn demo_logs_cover_weekdays_for_two_members() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let logs = demo_logs(today);
        assert_eq!(logs.len(), 10);
        assert!(logs.records().iter().all(|record| is_workday(record.date)));
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let petr = logs.find("Petr Petrov", monday).expect("seeded");
        assert_eq!(petr.counts.payments_received, 1);
        assert_eq!(petr.counts.dials, 30);
    }
}
