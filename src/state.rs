use crate::board::Board;
use crate::identity::Identity;
use crate::models::BoardSnapshot;
use crate::stats::build_snapshot;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one user session owns: who they are and their board.
#[derive(Debug)]
pub struct Session {
    pub identity: Identity,
    pub board: Board,
}

impl Session {
    pub fn start(identity: Identity) -> Self {
        Self {
            identity,
            board: Board::new(),
        }
    }

    /// Drops all tasks, notes and XP. The identity is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        build_snapshot(&self.identity, &self.board)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(identity: Identity) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::start(identity))),
        }
    }
}
