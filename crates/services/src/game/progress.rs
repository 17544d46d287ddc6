/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub current_round: u32,
    pub total_rounds: u32,
    pub rounds_completed: u32,
    pub score: u32,
    pub is_complete: bool,
}
