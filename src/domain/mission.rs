use serde::{Deserialize, Serialize};

/// A completable task carrying a fixed XP reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Challenge id on the gamification service
    pub id: String,
    pub text: String,
    pub description: String,
    pub xp: i64,
    pub completed: bool,
}

impl Mission {
    /// Whether the completion flow may start for this mission
    pub fn is_open(&self) -> bool {
        !self.completed
    }
}
