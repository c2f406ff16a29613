use crate::models::{ClassItem, Reward};

pub static REWARDS: [Reward; 5] = [
    Reward { id: "gaming", label: "Gaming Credit ($20)", cost: 1200, emoji: "🎮" },
    Reward { id: "book", label: "Bookstore Voucher ($5)", cost: 300, emoji: "📚" },
    Reward { id: "movie", label: "Movie Ticket", cost: 500, emoji: "🎬" },
    Reward { id: "coffee", label: "Coffee Voucher", cost: 200, emoji: "☕️" },
    Reward { id: "gift", label: "Online Store Gift Card ($10)", cost: 1000, emoji: "🎁" },
];

pub static CLASSES: [ClassItem; 4] = [
    ClassItem { id: "math", name: "Calculus II", time: "08:30 - 09:45", location: "Hall B, Room 204" },
    ClassItem { id: "cs", name: "Data Structures", time: "10:00 - 11:15", location: "Engineering 1.12" },
    ClassItem { id: "phys", name: "Physics Lab", time: "13:00 - 15:00", location: "Science Annex 3" },
    ClassItem { id: "lit", name: "Modern Literature", time: "15:30 - 16:45", location: "Humanities 310" },
];

pub fn find_reward(id: &str) -> Option<&'static Reward> {
    REWARDS.iter().find(|reward| reward.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_costs_are_positive_and_ids_unique() {
        for (index, reward) in REWARDS.iter().enumerate() {
            assert!(reward.cost > 0, "{} has no cost", reward.id);
            assert!(REWARDS[index + 1..].iter().all(|other| other.id != reward.id));
        }
    }

    #[test]
    fn find_reward_by_id() {
        assert_eq!(find_reward("coffee").map(|r| r.cost), Some(200));
        assert!(find_reward("yacht").is_none());
    }
}
