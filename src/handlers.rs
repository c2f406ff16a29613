use crate::board::{Completion, Redemption};
use crate::catalog::find_reward;
use crate::errors::AppError;
use crate::models::{
    BoardSnapshot, NewNoteRequest, NewTaskRequest, NoteForm, Priority, ReturnTo, TaskForm,
};
use crate::state::AppState;
use crate::ui::{render_home, render_todo};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_todo(&session.snapshot()))
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_home(&session.snapshot(), Local::now().naive_local()))
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardSnapshot> {
    let session = state.session.lock().await;
    Json(session.snapshot())
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<Json<BoardSnapshot>, AppError> {
    let due = parse_due(payload.due.as_deref().unwrap_or_default())?;
    let priority = parse_priority(payload.priority.as_deref().unwrap_or_default())?;
    Ok(Json(apply_add_task(&state, &payload.text, due, priority).await))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BoardSnapshot> {
    Json(apply_complete_task(&state, &id).await)
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BoardSnapshot> {
    Json(apply_delete_task(&state, &id).await)
}

pub async fn add_note(
    State(state): State<AppState>,
    Json(payload): Json<NewNoteRequest>,
) -> Json<BoardSnapshot> {
    Json(apply_add_note(&state, &payload.text).await)
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BoardSnapshot> {
    Json(apply_delete_note(&state, &id).await)
}

pub async fn redeem_reward(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardSnapshot>, AppError> {
    Ok(Json(apply_redeem(&state, &id).await?))
}

pub async fn reset_session(State(state): State<AppState>) -> Json<BoardSnapshot> {
    let mut session = state.session.lock().await;
    session.reset();
    info!("session reset");
    Json(session.snapshot())
}

pub async fn add_task_form(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let due = parse_due(&form.due)?;
    let priority = parse_priority(&form.priority)?;
    apply_add_task(&state, &form.text, due, priority).await;
    Ok(back_to(form.return_to.as_deref()))
}

pub async fn complete_task_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnTo>,
) -> Redirect {
    apply_complete_task(&state, &id).await;
    back_to(form.return_to.as_deref())
}

pub async fn delete_task_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnTo>,
) -> Redirect {
    apply_delete_task(&state, &id).await;
    back_to(form.return_to.as_deref())
}

pub async fn add_note_form(State(state): State<AppState>, Form(form): Form<NoteForm>) -> Redirect {
    apply_add_note(&state, &form.text).await;
    back_to(form.return_to.as_deref())
}

pub async fn delete_note_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnTo>,
) -> Redirect {
    apply_delete_note(&state, &id).await;
    back_to(form.return_to.as_deref())
}

pub async fn redeem_reward_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect, AppError> {
    apply_redeem(&state, &id).await?;
    Ok(back_to(form.return_to.as_deref()))
}

async fn apply_add_task(
    state: &AppState,
    text: &str,
    due: Option<NaiveDate>,
    priority: Priority,
) -> BoardSnapshot {
    let mut session = state.session.lock().await;
    if let Some(task) = session.board.add_task(text, due, priority) {
        info!(id = %task.id, priority = %task.priority, "task added");
    }
    session.snapshot()
}

async fn apply_complete_task(state: &AppState, id: &str) -> BoardSnapshot {
    let mut session = state.session.lock().await;
    if session.board.complete_task(id) == Completion::Completed {
        info!(%id, xp = session.board.xp(), "task completed");
    }
    session.snapshot()
}

async fn apply_delete_task(state: &AppState, id: &str) -> BoardSnapshot {
    let mut session = state.session.lock().await;
    if session.board.delete_task(id) {
        info!(%id, "task deleted");
    }
    session.snapshot()
}

async fn apply_add_note(state: &AppState, text: &str) -> BoardSnapshot {
    let mut session = state.session.lock().await;
    if let Some(note) = session.board.add_note(text) {
        info!(id = %note.id, "note added");
    }
    session.snapshot()
}

async fn apply_delete_note(state: &AppState, id: &str) -> BoardSnapshot {
    let mut session = state.session.lock().await;
    if session.board.delete_note(id) {
        info!(%id, "note deleted");
    }
    session.snapshot()
}

async fn apply_redeem(state: &AppState, id: &str) -> Result<BoardSnapshot, AppError> {
    let reward = find_reward(id).ok_or_else(|| AppError::not_found(format!("unknown reward '{id}'")))?;
    let mut session = state.session.lock().await;
    if session.board.redeem_reward(reward) == Redemption::Redeemed {
        info!(reward = reward.id, xp = session.board.xp(), "reward redeemed");
    }
    Ok(session.snapshot())
}

fn parse_due(value: &str) -> Result<Option<NaiveDate>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::bad_request(format!("due date must be YYYY-MM-DD, got '{value}'")))
}

fn parse_priority(value: &str) -> Result<Priority, AppError> {
    value.parse().map_err(AppError::bad_request)
}

fn back_to(return_to: Option<&str>) -> Redirect {
    match return_to {
        Some("/home") => Redirect::to("/home"),
        _ => Redirect::to("/"),
    }
}
