use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/home", get(handlers::home))
        .route("/tasks", post(handlers::add_task_form))
        .route("/tasks/:id/complete", post(handlers::complete_task_form))
        .route("/tasks/:id/delete", post(handlers::delete_task_form))
        .route("/notes", post(handlers::add_note_form))
        .route("/notes/:id/delete", post(handlers::delete_note_form))
        .route("/rewards/:id/redeem", post(handlers::redeem_reward_form))
        .route("/api/board", get(handlers::get_board))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route("/api/tasks/:id/complete", post(handlers::complete_task))
        .route("/api/notes", post(handlers::add_note))
        .route("/api/notes/:id", delete(handlers::delete_note))
        .route("/api/rewards/:id/redeem", post(handlers::redeem_reward))
        .route("/api/session/reset", post(handlers::reset_session))
        .with_state(state)
}
