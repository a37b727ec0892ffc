use crate::dashboard::build_dashboard_at;
use crate::errors::AppError;
use crate::models::{
    ActualsRequest, ActualsResponse, AddMemberRequest, DailyLog, DashboardQuery, DashboardResponse,
    LogPatch, PlanRequest, Roster, Targets,
};
use crate::pacing::PacingReport;
use crate::state::AppState;
use crate::storage::{persist_logs, persist_roster, persist_targets};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let today = today();
    let data = state.data.lock().await;
    build_dashboard_at(today, &data, query.member.as_deref())
        .map(Json)
        .ok_or_else(|| AppError::bad_request("no team members are known yet"))
}

pub async fn submit_plan(
    State(state): State<AppState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<DailyLog>, AppError> {
    let (record, _) = apply_patch(&state, &payload.member, payload.patch()).await?;
    info!(member = %record.member, date = %record.date, "morning plan saved");
    Ok(Json(record))
}

pub async fn submit_actuals(
    State(state): State<AppState>,
    Json(payload): Json<ActualsRequest>,
) -> Result<Json<ActualsResponse>, AppError> {
    let (record, pacing) = apply_patch(&state, &payload.member, payload.patch()).await?;
    let invoice_goal_met = pacing.invoice_goal_met();
    info!(
        member = %record.member,
        date = %record.date,
        invoice_goal_met,
        "evening actuals saved"
    );
    Ok(Json(ActualsResponse {
        record,
        invoice_goal_met,
    }))
}

pub async fn get_targets(State(state): State<AppState>) -> Json<Targets> {
    let data = state.data.lock().await;
    Json(data.targets)
}

pub async fn put_targets(
    State(state): State<AppState>,
    Json(targets): Json<Targets>,
) -> Result<Json<Targets>, AppError> {
    let mut data = state.data.lock().await;
    persist_targets(&state.data_dir, &targets).await?;
    data.targets = targets;
    info!(?targets, "targets updated");
    Ok(Json(targets))
}

pub async fn get_roster(State(state): State<AppState>) -> Json<Roster> {
    let data = state.data.lock().await;
    Json(data.roster.clone())
}

pub async fn add_member(
    State(state): State<AppState>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<Json<Roster>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let mut data = state.data.lock().await;
    let mut roster = data.roster.clone();
    if roster.add(&payload.name) {
        persist_roster(&state.data_dir, &roster).await?;
        data.roster = roster;
        info!(member = payload.name.trim(), "member added to roster");
    }
    Ok(Json(data.roster.clone()))
}

/// Upserts today's record for `member` and persists the log. The shared log
/// only changes once the write has succeeded. Returns the stored record and
/// the member's pacing right after the write.
async fn apply_patch(
    state: &AppState,
    member: &str,
    patch: LogPatch,
) -> Result<(DailyLog, PacingReport), AppError> {
    let member = member.trim();
    if member.is_empty() {
        return Err(AppError::bad_request("member must not be empty"));
    }

    let today = today();
    let mut data = state.data.lock().await;
    let mut logs = data.logs.clone();
    let record = logs.upsert_today(today, member, &patch).clone();
    persist_logs(&state.data_dir, &logs).await?;
    data.logs = logs;

    let pacing = build_dashboard_at(today, &data, Some(member))
        .map(|dashboard| dashboard.pacing)
        .ok_or_else(|| AppError::bad_request("unknown member"))?;

    Ok((record, pacing))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
