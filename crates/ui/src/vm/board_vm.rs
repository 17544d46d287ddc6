use services::{GameProgress, RoundSnapshot};

/// Render model for the game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub number1: u32,
    pub number2: u32,
    pub tiles1: Vec<u32>,
    pub tiles2: Vec<u32>,
    pub dropped: Vec<u32>,
    pub round_label: String,
    pub score_label: String,
}

/// Map a round snapshot onto the board.
///
/// Collected factors leave both source lists and appear in the drop zone.
#[must_use]
pub fn map_board(snapshot: &RoundSnapshot, progress: &GameProgress) -> BoardVm {
    let dropped = snapshot.collected.clone();
    let tiles1 = snapshot
        .factors1
        .iter()
        .copied()
        .filter(|factor| !dropped.contains(factor))
        .collect();
    let tiles2 = snapshot
        .factors2
        .iter()
        .copied()
        .filter(|factor| !dropped.contains(factor))
        .collect();

    BoardVm {
        number1: snapshot.number1,
        number2: snapshot.number2,
        tiles1,
        tiles2,
        dropped,
        round_label: format!("Question {} of {}", snapshot.index, progress.total_rounds),
        score_label: format!("Score: {}", progress.score),
    }
}
