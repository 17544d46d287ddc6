use tracing::debug;

use hcf_core::model::{DropOutcome, GameSummary, Round};

use super::progress::GameProgress;
use super::service::{GamePhase, GameSession};
use super::snapshot::RoundSnapshot;
use crate::error::GameError;

/// Result of dropping a single factor on the drop zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropReport {
    pub factor: u32,
    pub outcome: DropOutcome,
    pub round_complete: bool,
    /// Set when this drop completed the round.
    pub target_hcf: Option<u32>,
    pub score: u32,
}

/// Bridges presentation drag/drop gestures to the game state machine.
///
/// Owns the transient drag slot. Which tile is mid-drag is UI-local
/// bookkeeping, cleared on drop or drag end, and never part of the game
/// state proper.
#[derive(Debug)]
pub struct GameLoopService {
    session: GameSession,
    dragging: Option<u32>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            dragging: None,
        }
    }

    /// Start the awaited round and return its board snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the state machine's preconditions.
    pub fn start(&mut self) -> Result<RoundSnapshot, GameError> {
        let index = self.session.next_index();
        let round = self.session.start_round(index)?;
        Ok(RoundSnapshot::of(round))
    }

    /// Record the tile picked up by a drag gesture.
    pub fn begin_drag(&mut self, factor: u32) {
        self.dragging = Some(factor);
    }

    /// Clear the drag slot (the drag ended outside the drop zone).
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    #[must_use]
    pub fn dragging(&self) -> Option<u32> {
        self.dragging
    }

    /// Drop the tile currently mid-drag onto the drop zone.
    ///
    /// Returns `None` for a spurious drop with nothing dragged. The drag
    /// slot is cleared either way.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRoundInProgress` when no round is live.
    pub fn drop_current(&mut self) -> Result<Option<DropReport>, GameError> {
        let Some(factor) = self.dragging.take() else {
            debug!("drop with nothing dragged, ignored");
            return Ok(None);
        };
        self.drop_factor(factor).map(Some)
    }

    /// Judge a dropped factor directly.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRoundInProgress` when no round is live.
    pub fn drop_factor(&mut self, factor: u32) -> Result<DropReport, GameError> {
        let outcome = self.session.submit_factor(factor)?;
        let round_complete = self.session.phase() == GamePhase::RoundComplete;
        let target_hcf = if round_complete {
            self.session.round().map(Round::target_hcf)
        } else {
            None
        };

        Ok(DropReport {
            factor,
            outcome,
            round_complete,
            target_hcf,
            score: self.session.score(),
        })
    }

    /// Advance past a completed round.
    ///
    /// Returns the next round's snapshot, or `None` once the session is
    /// complete.
    ///
    /// # Errors
    ///
    /// Propagates the state machine's preconditions.
    pub fn next_round(&mut self) -> Result<Option<RoundSnapshot>, GameError> {
        self.dragging = None;
        Ok(self.session.advance()?.map(RoundSnapshot::of))
    }

    /// Reset the session and immediately start round 1.
    ///
    /// # Errors
    ///
    /// Propagates errors from starting the fresh round.
    pub fn restart(&mut self) -> Result<RoundSnapshot, GameError> {
        self.dragging = None;
        self.session.reset();
        self.start()
    }

    /// Shared factors still missing, for the hint affordance. Non-mutating.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRoundInProgress` when no round is live.
    pub fn hint(&self) -> Result<Vec<u32>, GameError> {
        self.session.hint()
    }

    /// Snapshot of the live round, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.session.round().map(RoundSnapshot::of)
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        self.session.progress()
    }

    /// Validated summary of a finished game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotComplete` while the game is still running.
    pub fn summary(&self) -> Result<GameSummary, GameError> {
        self.session.build_summary()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::QuestionGenerator;
    use hcf_core::time::fixed_clock;

    fn game(seed: u64) -> GameLoopService {
        GameLoopService::new(GameSession::new(
            QuestionGenerator::with_seed(seed),
            fixed_clock(),
        ))
    }

    #[test]
    fn spurious_drop_is_ignored() {
        let mut game = game(1);
        game.start().unwrap();

        assert_eq!(game.drop_current().unwrap(), None);
    }

    #[test]
    fn drag_slot_clears_on_drop_and_cancel() {
        let mut game = game(2);
        game.start().unwrap();

        game.begin_drag(3);
        assert_eq!(game.dragging(), Some(3));
        game.cancel_drag();
        assert_eq!(game.dragging(), None);

        game.begin_drag(103);
        let report = game.drop_current().unwrap().unwrap();
        assert_eq!(report.outcome, DropOutcome::Rejected);
        assert_eq!(game.dragging(), None);
    }

    #[test]
    fn completing_drop_reports_the_target_hcf() {
        let mut game = game(4);
        let snapshot = game.start().unwrap();
        assert_eq!(snapshot.index, 1);

        let needed = game.hint().unwrap();
        let (last, rest) = needed.split_last().unwrap();

        for factor in rest {
            let report = game.drop_factor(*factor).unwrap();
            assert!(!report.round_complete);
            assert_eq!(report.target_hcf, None);
        }

        let report = game.drop_factor(*last).unwrap();
        assert!(report.round_complete);
        assert_eq!(report.score, 10);
        let expected = game.session().round().unwrap().target_hcf();
        assert_eq!(report.target_hcf, Some(expected));
    }
}
