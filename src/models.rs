use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassItem {
    pub id: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub id: &'static str,
    pub label: &'static str,
    pub cost: u64,
    pub emoji: &'static str,
}

/// One XP-affecting event. Positive deltas are completions, negative ones redemptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub label: String,
    pub delta: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u64,
    pub xp_in_level: u64,
    pub level_xp: u64,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct RewardView {
    #[serde(flatten)]
    pub reward: Reward,
    pub can_redeem: bool,
}

#[derive(Debug, Serialize)]
pub struct IdentityView {
    pub user_id: String,
    pub display_id: String,
}

#[derive(Debug, Serialize)]
pub struct BoardSnapshot {
    pub identity: IdentityView,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub classes: Vec<ClassItem>,
    pub xp: u64,
    pub progress: LevelProgress,
    pub completed_count: usize,
    pub upcoming: Vec<Task>,
    pub upcoming_count: usize,
    pub recent_history: Vec<HistoryEntry>,
    pub history_len: usize,
    pub rewards: Vec<RewardView>,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewNoteRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    pub text: String,
    #[serde(default)]
    pub due: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub text: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    pub return_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively_and_defaults_to_low() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" medium ".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!("".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn task_due_date_serializes_as_iso_date() {
        let task = Task {
            id: "t1".to_string(),
            text: "Submit lab report".to_string(),
            due: NaiveDate::from_ymd_opt(2026, 11, 2),
            priority: Priority::Medium,
            completed: false,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["due"], "2026-11-02");
        assert_eq!(json["priority"], "Medium");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
