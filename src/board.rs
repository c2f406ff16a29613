use crate::catalog::{CLASSES, REWARDS};
use crate::models::{ClassItem, HistoryEntry, Note, Priority, Reward, Task};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

pub const XP_PER_TASK: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Completed,
    AlreadyCompleted,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    Redeemed,
    Insufficient,
}

/// In-memory productivity state: tasks, notes and the XP ledger.
///
/// Every operation is total. Invalid input (blank text, unknown ids, rewards the
/// player cannot afford) leaves the board untouched and is reported through the
/// return value only.
#[derive(Debug, Clone, Default)]
pub struct Board {
    tasks: Vec<Task>,
    notes: Vec<Note>,
    xp: u64,
    // most recent first
    history: Vec<HistoryEntry>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn classes(&self) -> &'static [ClassItem] {
        &CLASSES
    }

    pub fn rewards(&self) -> &'static [Reward] {
        &REWARDS
    }

    /// Appends a task. Surrounding whitespace is stripped from the stored text.
    pub fn add_task(&mut self, text: &str, due: Option<NaiveDate>, priority: Priority) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank task");
            return None;
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            due,
            priority,
            completed: false,
        };
        self.tasks.push(task.clone());
        Some(task)
    }

    pub fn complete_task(&mut self, id: &str) -> Completion {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(%id, "complete: no such task");
            return Completion::NotFound;
        };
        if task.completed {
            debug!(%id, "complete: already completed, no xp awarded");
            return Completion::AlreadyCompleted;
        }

        task.completed = true;
        let label = task.text.clone();
        self.xp = self.xp.saturating_add(XP_PER_TASK);
        self.record(label, XP_PER_TASK as i64);
        Completion::Completed
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before != self.tasks.len()
    }

    /// Appends a note, stored trimmed like task text.
    pub fn add_note(&mut self, text: &str) -> Option<Note> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank note");
            return None;
        }

        let note = Note {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
        };
        self.notes.push(note.clone());
        Some(note)
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        before != self.notes.len()
    }

    pub fn can_redeem(&self, reward: &Reward) -> bool {
        self.xp >= reward.cost
    }

    pub fn redeem_reward(&mut self, reward: &Reward) -> Redemption {
        let Some(remaining) = self.xp.checked_sub(reward.cost) else {
            debug!(reward = reward.id, xp = self.xp, cost = reward.cost, "redeem: not enough xp");
            return Redemption::Insufficient;
        };

        self.xp = remaining;
        self.record(format!("Redeemed: {}", reward.label), -(reward.cost as i64));
        Redemption::Redeemed
    }

    fn record(&mut self, label: String, delta: i64) {
        self.history.insert(0, HistoryEntry { label, delta });
    }
}
