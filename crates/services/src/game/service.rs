use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use hcf_core::Clock;
use hcf_core::model::{
    DropOutcome, GameSummary, POINTS_PER_ROUND, Round, RoundIndex, TOTAL_ROUNDS,
};

use super::progress::GameProgress;
use crate::error::GameError;
use crate::generator::QuestionGenerator;

//
// ─── GAME PHASE ────────────────────────────────────────────────────────────────
//

/// Discrete states of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the next round to be started.
    AwaitingRound,
    /// A round is live and accepting factor drops.
    InProgress,
    /// Every shared factor collected; waiting for `advance`.
    RoundComplete,
    /// Every round played; the final score is frozen.
    SessionComplete,
}

//
// ─── GAME SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory game session: the single owner of all game state.
///
/// Steps through a fixed sequence of rounds, judging factor drops and
/// awarding `POINTS_PER_ROUND` per completed round. Rounds are generated
/// lazily and discarded once the session advances past them.
pub struct GameSession {
    generator: QuestionGenerator,
    clock: Clock,
    phase: GamePhase,
    round: Option<Round>,
    next_index: RoundIndex,
    total_rounds: u32,
    score: u32,
    rounds_completed: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Create a session awaiting its first round.
    #[must_use]
    pub fn new(generator: QuestionGenerator, clock: Clock) -> Self {
        let started_at = clock.now();
        Self {
            generator,
            clock,
            phase: GamePhase::AwaitingRound,
            round: None,
            next_index: RoundIndex::first(),
            total_rounds: TOTAL_ROUNDS,
            score: 0,
            rounds_completed: 0,
            started_at,
            completed_at: None,
        }
    }

    /// Override the round count. Useful for short deterministic tests.
    #[must_use]
    pub fn with_total_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The round `start_round` is currently waiting for.
    #[must_use]
    pub fn next_index(&self) -> RoundIndex {
        self.next_index
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current game progress.
    #[must_use]
    pub fn progress(&self) -> GameProgress {
        let current_round = match &self.round {
            Some(round) => round.index().value(),
            None => self.next_index.value().min(self.total_rounds),
        };
        GameProgress {
            current_round,
            total_rounds: self.total_rounds,
            rounds_completed: self.rounds_completed,
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Start the round the session is waiting for.
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundAlreadyStarted` if a round is live,
    /// `GameError::SessionComplete` once every round has been played,
    /// `GameError::InvalidIndex` for an index outside `1..=total_rounds`,
    /// and `GameError::IndexMismatch` if `index` is not the awaited round.
    pub fn start_round(&mut self, index: RoundIndex) -> Result<&Round, GameError> {
        match self.phase {
            GamePhase::AwaitingRound => {}
            GamePhase::InProgress | GamePhase::RoundComplete => {
                return Err(GameError::RoundAlreadyStarted);
            }
            GamePhase::SessionComplete => return Err(GameError::SessionComplete),
        }
        if index.value() == 0 || index.value() > self.total_rounds {
            return Err(GameError::InvalidIndex {
                index: index.value(),
                total: self.total_rounds,
            });
        }
        if index != self.next_index {
            return Err(GameError::IndexMismatch {
                expected: self.next_index.value(),
                requested: index.value(),
            });
        }

        let round = self.generator.generate_round(index)?;
        debug!(
            round = index.value(),
            number1 = round.number1(),
            number2 = round.number2(),
            "round started"
        );
        self.next_index = index.next();
        self.round = Some(round);
        self.phase = GamePhase::InProgress;

        self.round.as_ref().ok_or(GameError::NoRoundInProgress)
    }

    /// Judge a dropped factor against the live round.
    ///
    /// Duplicates and rejections are `Ok` outcomes that leave the round
    /// untouched. The accepting drop that completes the shared set awards
    /// `POINTS_PER_ROUND` and freezes the round until `advance`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRoundInProgress` when no round is live.
    pub fn submit_factor(&mut self, factor: u32) -> Result<DropOutcome, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::NoRoundInProgress);
        }
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::NoRoundInProgress);
        };

        let outcome = round.submit(factor);
        debug!(factor, ?outcome, "factor submitted");

        if outcome.is_accepted() && round.is_complete() {
            self.score += POINTS_PER_ROUND;
            self.rounds_completed += 1;
            self.phase = GamePhase::RoundComplete;
            info!(
                round = round.index().value(),
                target_hcf = round.target_hcf(),
                score = self.score,
                "round complete"
            );
        }

        Ok(outcome)
    }

    /// Move past a completed round.
    ///
    /// Starts the next round, or completes the session (`None`) when the
    /// final round was just finished.
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundNotComplete` unless the current round is
    /// complete, `GameError::SessionComplete` if the session already ended.
    pub fn advance(&mut self) -> Result<Option<&Round>, GameError> {
        match self.phase {
            GamePhase::RoundComplete => {}
            GamePhase::SessionComplete => return Err(GameError::SessionComplete),
            GamePhase::AwaitingRound | GamePhase::InProgress => {
                return Err(GameError::RoundNotComplete);
            }
        }

        let current = self
            .round
            .as_ref()
            .ok_or(GameError::NoRoundInProgress)?
            .index();

        if current.value() < self.total_rounds {
            let index = self.next_index;
            let round = self.generator.generate_round(index)?;
            debug!(
                round = index.value(),
                number1 = round.number1(),
                number2 = round.number2(),
                "round started"
            );
            self.next_index = index.next();
            self.round = Some(round);
            self.phase = GamePhase::InProgress;
            return Ok(self.round.as_ref());
        }

        self.phase = GamePhase::SessionComplete;
        self.completed_at = Some(self.clock.now());
        self.round = None;
        info!(score = self.score, "session complete");
        Ok(None)
    }

    /// Restart from scratch: round 1 awaited, score zeroed.
    ///
    /// Valid in any state.
    pub fn reset(&mut self) {
        self.phase = GamePhase::AwaitingRound;
        self.round = None;
        self.next_index = RoundIndex::first();
        self.score = 0;
        self.rounds_completed = 0;
        self.started_at = self.clock.now();
        self.completed_at = None;
        debug!("session reset");
    }

    /// Shared factors still missing from the drop zone.
    ///
    /// Read-only; a hint never changes the round.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRoundInProgress` when no round is live.
    pub fn hint(&self) -> Result<Vec<u32>, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::NoRoundInProgress);
        }
        let round = self.round.as_ref().ok_or(GameError::NoRoundInProgress)?;
        Ok(round.remaining())
    }

    /// Build the validated summary of a finished game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotComplete` before `SessionComplete`;
    /// summary invariant violations surface via `GameError::Summary`.
    pub fn build_summary(&self) -> Result<GameSummary, GameError> {
        let completed_at = self.completed_at.ok_or(GameError::NotComplete)?;
        Ok(GameSummary::from_parts(
            self.total_rounds,
            self.rounds_completed,
            self.score,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("next_index", &self.next_index)
            .field("total_rounds", &self.total_rounds)
            .field("score", &self.score)
            .field("rounds_completed", &self.rounds_completed)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use hcf_core::time::{fixed_clock, fixed_now};

    fn session(seed: u64) -> GameSession {
        GameSession::new(QuestionGenerator::with_seed(seed), fixed_clock())
    }

    /// A started session whose first round has at least two shared factors,
    /// so duplicate/hint assertions cannot collide with round completion.
    fn started_multi_factor_session() -> GameSession {
        for seed in 0..64 {
            let mut candidate = session(seed);
            candidate.start_round(RoundIndex::first()).unwrap();
            if candidate.hint().unwrap().len() >= 2 {
                return candidate;
            }
        }
        panic!("no multi-factor round among the probed seeds");
    }

    fn finish_current_round(session: &mut GameSession) {
        for factor in session.hint().unwrap() {
            assert_eq!(
                session.submit_factor(factor).unwrap(),
                DropOutcome::Accepted
            );
        }
        assert_eq!(session.phase(), GamePhase::RoundComplete);
    }

    #[test]
    fn submit_before_start_fails_loudly() {
        let mut session = session(1);

        let err = session.submit_factor(2).unwrap_err();
        assert!(matches!(err, GameError::NoRoundInProgress));
    }

    #[test]
    fn start_requires_the_awaited_index() {
        let mut session = session(1);

        let err = session.start_round(RoundIndex::new(2)).unwrap_err();
        assert!(matches!(
            err,
            GameError::IndexMismatch {
                expected: 1,
                requested: 2
            }
        ));

        let err = session.start_round(RoundIndex::new(6)).unwrap_err();
        assert!(matches!(err, GameError::InvalidIndex { index: 6, total: 5 }));

        session.start_round(RoundIndex::first()).unwrap();
        let err = session.start_round(RoundIndex::new(2)).unwrap_err();
        assert!(matches!(err, GameError::RoundAlreadyStarted));
    }

    #[test]
    fn completing_a_round_scores_ten() {
        let mut session = session(3);
        session.start_round(RoundIndex::first()).unwrap();

        finish_current_round(&mut session);
        assert_eq!(session.score(), 10);
        assert_eq!(session.rounds_completed(), 1);
    }

    #[test]
    fn rejected_and_duplicate_drops_change_nothing() {
        let mut session = started_multi_factor_session();

        // 103 is prime and above the number cap, so it divides neither number.
        assert_eq!(session.submit_factor(103).unwrap(), DropOutcome::Rejected);
        assert_eq!(session.score(), 0);

        let first = session.hint().unwrap()[0];
        assert_eq!(session.submit_factor(first).unwrap(), DropOutcome::Accepted);
        let collected = session.round().unwrap().collected();

        assert_eq!(
            session.submit_factor(first).unwrap(),
            DropOutcome::Duplicate
        );
        assert_eq!(session.round().unwrap().collected(), collected);
    }

    #[test]
    fn advance_requires_a_complete_round() {
        let mut session = session(8);
        session.start_round(RoundIndex::first()).unwrap();

        let err = session.advance().unwrap_err();
        assert!(matches!(err, GameError::RoundNotComplete));
    }

    #[test]
    fn full_game_reaches_fifty_points() {
        let mut session = session(11);
        session.start_round(RoundIndex::first()).unwrap();

        for round in 1..=5_u32 {
            finish_current_round(&mut session);
            assert_eq!(session.score(), round * 10);

            let next = session.advance().unwrap();
            if round < 5 {
                assert_eq!(next.map(|r| r.index().value()), Some(round + 1));
            } else {
                assert!(next.is_none());
            }
        }

        assert_eq!(session.phase(), GamePhase::SessionComplete);
        assert!(session.round().is_none());

        let summary = session.build_summary().unwrap();
        assert_eq!(summary.score(), 50);
        assert_eq!(summary.rounds_completed(), 5);
        assert_eq!(summary.completed_at(), fixed_now());
    }

    #[test]
    fn submit_after_completion_fails() {
        let mut session = session(13).with_total_rounds(1);
        session.start_round(RoundIndex::first()).unwrap();
        finish_current_round(&mut session);

        let err = session.submit_factor(1).unwrap_err();
        assert!(matches!(err, GameError::NoRoundInProgress));

        session.advance().unwrap();
        let err = session.advance().unwrap_err();
        assert!(matches!(err, GameError::SessionComplete));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = session(17).with_total_rounds(1);
        session.start_round(RoundIndex::first()).unwrap();
        finish_current_round(&mut session);
        session.advance().unwrap();
        assert!(session.is_complete());

        session.reset();

        assert_eq!(session.phase(), GamePhase::AwaitingRound);
        assert_eq!(session.score(), 0);
        assert_eq!(session.next_index(), RoundIndex::first());
        assert!(session.round().is_none());
        assert!(!session.is_complete());

        let round = session.start_round(RoundIndex::first()).unwrap();
        assert_eq!(round.index().value(), 1);
        assert!(round.collected().is_empty());
    }

    #[test]
    fn hint_lists_only_missing_factors() {
        let mut session = started_multi_factor_session();

        let before = session.hint().unwrap();
        let first = before[0];
        session.submit_factor(first).unwrap();

        let after = session.hint().unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(!after.contains(&first));
    }

    #[test]
    fn summary_before_completion_is_an_error() {
        let session = session(23);
        let err = session.build_summary().unwrap_err();
        assert!(matches!(err, GameError::NotComplete));
    }

    #[test]
    fn progress_tracks_round_and_score() {
        let mut session = session(29);
        session.start_round(RoundIndex::first()).unwrap();

        let progress = session.progress();
        assert_eq!(progress.current_round, 1);
        assert_eq!(progress.total_rounds, 5);
        assert_eq!(progress.score, 0);
        assert!(!progress.is_complete);

        finish_current_round(&mut session);
        session.advance().unwrap();

        let progress = session.progress();
        assert_eq!(progress.current_round, 2);
        assert_eq!(progress.rounds_completed, 1);
        assert_eq!(progress.score, 10);
    }
}
