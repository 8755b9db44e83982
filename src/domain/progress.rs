//! XP progress and plantation growth
//!
//! The plantation grows through fixed stages as the player's total points
//! pass each threshold.

/// Plantation stage definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantStage {
    pub level: u32,
    pub xp_required: i64,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// All plantation stages (must be sorted by level)
pub static PLANT_STAGES: &[PlantStage] = &[
    PlantStage {
        level: 0,
        xp_required: 0,
        emoji: "🌱",
        label: "Semente",
    },
    PlantStage {
        level: 1,
        xp_required: 50,
        emoji: "🌿",
        label: "Broto",
    },
    PlantStage {
        level: 2,
        xp_required: 100,
        emoji: "🌾",
        label: "Plantação",
    },
    PlantStage {
        level: 3,
        xp_required: 200,
        emoji: "🚜",
        label: "Colheita Completa!",
    },
];

impl PlantStage {
    /// Stage reached with the given total points
    pub fn for_xp(xp: i64) -> &'static PlantStage {
        PLANT_STAGES
            .iter()
            .rev()
            .find(|s| xp >= s.xp_required)
            .unwrap_or(&PLANT_STAGES[0])
    }

    /// Points needed for the stage after `current_level` (None if fully grown)
    pub fn xp_for_next(current_level: u32) -> Option<i64> {
        PLANT_STAGES
            .iter()
            .find(|s| s.level == current_level + 1)
            .map(|s| s.xp_required)
    }
}

/// Progress of total points towards the farm's XP goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpProgress {
    pub current: i64,
    pub goal: i64,
}

impl XpProgress {
    pub fn new(current: i64, goal: i64) -> Self {
        Self { current, goal }
    }

    /// Percentage towards the goal, capped at 100 (0 when there is no goal)
    pub fn percentage(&self) -> f64 {
        if self.goal <= 0 {
            return 0.0;
        }
        ((self.current as f64 / self.goal as f64) * 100.0).clamp(0.0, 100.0)
    }

    /// Text bar for terminal output, `width` cells wide
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.percentage() / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}
