pub mod app;
pub mod board;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use board::Board;
pub use state::{AppState, Session};
pub use storage::{load_or_create_identity, resolve_storage_path};
