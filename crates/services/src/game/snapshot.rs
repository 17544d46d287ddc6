use serde::Serialize;

use hcf_core::model::Round;

/// Cloneable view of the live round for the presentation layer.
///
/// Carries only what the board renders. The answer key stays inside the
/// round and surfaces through hints and completion reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub index: u32,
    pub number1: u32,
    pub number2: u32,
    pub factors1: Vec<u32>,
    pub factors2: Vec<u32>,
    pub collected: Vec<u32>,
    pub is_complete: bool,
}

impl RoundSnapshot {
    #[must_use]
    pub fn of(round: &Round) -> Self {
        Self {
            index: round.index().value(),
            number1: round.number1(),
            number2: round.number2(),
            factors1: round.factors1().to_vec(),
            factors2: round.factors2().to_vec(),
            collected: round.collected(),
            is_complete: round.is_complete(),
        }
    }
}
