// Seed rows for the sidebar and the focus room explorer. Owned by the shell
// and handed to the views read-only.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub name: String,
    pub avatar: String,
    pub is_online: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Learner {
    pub name: String,
    pub avatar: String,
    pub points: u32,
    pub study_time: String,
    pub pages_read: u32,
    pub rank: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FocusRoom {
    pub name: String,
    pub participants: u32,
    pub is_locked: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub participants: Vec<Participant>,
    pub top_learners: Vec<Learner>,
    pub focus_rooms: Vec<FocusRoom>,
}

impl SeedData {
    pub fn online_participants(&self) -> usize {
        self.participants.iter().filter(|p| p.is_online).count()
    }

    /// Learners ordered by rank.
    pub fn leaderboard(&self) -> Vec<&Learner> {
        let mut learners: Vec<&Learner> = self.top_learners.iter().collect();
        learners.sort_by_key(|l| l.rank);
        learners
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let participant = |name: &str, avatar: &str| Participant {
            name: name.to_string(),
            avatar: avatar.to_string(),
            is_online: true,
        };

        let learner = |name: &str, avatar: &str, points, study_time: &str, pages_read, rank| Learner {
            name: name.to_string(),
            avatar: avatar.to_string(),
            points,
            study_time: study_time.to_string(),
            pages_read,
            rank,
        };

        let room = |name: &str, participants, is_locked, description: &str| FocusRoom {
            name: name.to_string(),
            participants,
            is_locked,
            description: description.to_string(),
        };

        Self {
            participants: vec![
                participant("Alex", "👨‍💼"),
                participant("Sarah", "👩‍🎓"),
                participant("Mike", "👨‍🔬"),
                participant("Emma", "👩‍💻"),
                participant("David", "👨‍🎨"),
            ],
            top_learners: vec![
                learner("Alex Kim", "👨‍💼", 1250, "4h 15m", 87, 1),
                learner("Jamie Chen", "👩‍🎓", 880, "3h 45m", 62, 2),
                learner("Taylor Swift", "👩‍💻", 840, "3h 10m", 53, 3),
            ],
            focus_rooms: vec![
                room("Focus Room 1", 619, false, "General study room for focused work"),
                room("Focus Room 2", 58, false, "Collaborative learning space"),
                room("\"Do Anything\" Room", 2, true, "Flexible study environment"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_rank_ordered() {
        let mut seed = SeedData::default();
        seed.top_learners.reverse();
        let ranks: Vec<u8> = seed.leaderboard().iter().map(|l| l.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn counts_online_participants() {
        let mut seed = SeedData::default();
        seed.participants[0].is_online = false;
        assert_eq!(seed.online_participants(), 4);
    }
}
