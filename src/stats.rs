use crate::board::Board;
use crate::identity::Identity;
use crate::models::{BoardSnapshot, IdentityView, LevelProgress, RewardView, Task};

pub const LEVEL_XP: u64 = 100;
pub const RECENT_HISTORY_LEN: usize = 5;

pub fn compute_level(xp: u64) -> LevelProgress {
    let level = xp / LEVEL_XP + 1;
    let xp_in_level = xp - LEVEL_XP * (level - 1);
    LevelProgress {
        level,
        xp_in_level,
        level_xp: LEVEL_XP,
        percent: xp_in_level as f64 / LEVEL_XP as f64 * 100.0,
    }
}

pub fn completed_count(board: &Board) -> usize {
    board.tasks().iter().filter(|task| task.completed).count()
}

pub fn upcoming_tasks(board: &Board) -> Vec<Task> {
    board
        .tasks()
        .iter()
        .filter(|task| !task.completed)
        .cloned()
        .collect()
}

pub fn build_snapshot(identity: &Identity, board: &Board) -> BoardSnapshot {
    let upcoming = upcoming_tasks(board);
    let recent_history = board
        .history()
        .iter()
        .take(RECENT_HISTORY_LEN)
        .cloned()
        .collect();
    let rewards = board
        .rewards()
        .iter()
        .map(|reward| RewardView {
            reward: reward.clone(),
            can_redeem: board.can_redeem(reward),
        })
        .collect();

    BoardSnapshot {
        identity: IdentityView {
            user_id: identity.user_id().to_string(),
            display_id: identity.display_id(),
        },
        tasks: board.tasks().to_vec(),
        notes: board.notes().to_vec(),
        classes: board.classes().to_vec(),
        xp: board.xp(),
        progress: compute_level(board.xp()),
        completed_count: completed_count(board),
        upcoming_count: upcoming.len(),
        upcoming,
        recent_history,
        history_len: board.history().len(),
        rewards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn level_boundaries() {
        assert_eq!(compute_level(0).level, 1);
        assert_eq!(compute_level(0).xp_in_level, 0);
        assert_eq!(compute_level(99).level, 1);
        assert_eq!(compute_level(100).level, 2);
        assert_eq!(compute_level(100).xp_in_level, 0);

        let progress = compute_level(250);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.xp_in_level, 50);
        assert!((progress.percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_derives_counts_and_truncates_history() {
        let mut board = Board::new();
        let mut ids = Vec::new();
        for index in 0..7 {
            let task = board
                .add_task(&format!("chore {index}"), None, Priority::Low)
                .unwrap();
            ids.push(task.id);
        }
        for id in &ids[..6] {
            board.complete_task(id);
        }

        let identity = Identity::new("User-abc12345".to_string());
        let snapshot = build_snapshot(&identity, &board);

        assert_eq!(snapshot.completed_count, 6);
        assert_eq!(snapshot.upcoming_count, 1);
        assert_eq!(snapshot.upcoming[0].text, "chore 6");
        assert_eq!(snapshot.recent_history.len(), RECENT_HISTORY_LEN);
        assert_eq!(snapshot.history_len, 6);
        assert_eq!(snapshot.recent_history[0].label, "chore 5");
        assert_eq!(snapshot.xp, 120);
        assert_eq!(snapshot.progress.level, 2);
        assert_eq!(snapshot.classes.len(), board.classes().len());
    }

    #[test]
    fn snapshot_flags_affordable_rewards() {
        let mut board = Board::new();
        for index in 0..15 {
            let task = board.add_task(&format!("t{index}"), None, Priority::Low).unwrap();
            board.complete_task(&task.id);
        }

        let identity = Identity::new("User-abc12345".to_string());
        let snapshot = build_snapshot(&identity, &board);
        let affordable: Vec<_> = snapshot
            .rewards
            .iter()
            .filter(|view| view.can_redeem)
            .map(|view| view.reward.id)
            .collect();
        assert_eq!(affordable, vec!["book", "coffee"]);
    }
}
