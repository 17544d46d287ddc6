use chrono::{DateTime, Utc};
use thiserror::Error;

/// Number of rounds in a full game.
pub const TOTAL_ROUNDS: u32 = 5;
/// Points awarded for completing a round.
pub const POINTS_PER_ROUND: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("completed rounds ({completed}) exceed total rounds ({total})")]
    TooManyRounds { completed: u32, total: u32 },

    #[error("score ({score}) does not match completed rounds (expected {expected})")]
    ScoreMismatch { score: u32, expected: u32 },
}

/// Aggregate summary for a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    total_rounds: u32,
    rounds_completed: u32,
    score: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl GameSummary {
    /// Build a summary from final session state.
    ///
    /// # Errors
    ///
    /// Returns `GameSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `TooManyRounds` if the round counter overran,
    /// and `ScoreMismatch` if the score is not exactly
    /// `POINTS_PER_ROUND` per completed round.
    pub fn from_parts(
        total_rounds: u32,
        rounds_completed: u32,
        score: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, GameSummaryError> {
        if completed_at < started_at {
            return Err(GameSummaryError::InvalidTimeRange);
        }
        if rounds_completed > total_rounds {
            return Err(GameSummaryError::TooManyRounds {
                completed: rounds_completed,
                total: total_rounds,
            });
        }
        let expected = rounds_completed * POINTS_PER_ROUND;
        if score != expected {
            return Err(GameSummaryError::ScoreMismatch { score, expected });
        }

        Ok(Self {
            total_rounds,
            rounds_completed,
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The score a perfect game would have reached.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.total_rounds * POINTS_PER_ROUND
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn summary_accepts_consistent_state() {
        let now = fixed_now();
        let summary = GameSummary::from_parts(5, 5, 50, now, now).unwrap();

        assert_eq!(summary.score(), 50);
        assert_eq!(summary.max_score(), 50);
        assert_eq!(summary.rounds_completed(), 5);
    }

    #[test]
    fn summary_rejects_reversed_time_range() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::minutes(5);

        let err = GameSummary::from_parts(5, 5, 50, now, earlier).unwrap_err();
        assert!(matches!(err, GameSummaryError::InvalidTimeRange));
    }

    #[test]
    fn summary_rejects_score_drift() {
        let now = fixed_now();

        let err = GameSummary::from_parts(5, 3, 40, now, now).unwrap_err();
        assert!(matches!(
            err,
            GameSummaryError::ScoreMismatch {
                score: 40,
                expected: 30
            }
        ));
    }

    #[test]
    fn summary_rejects_overrun_round_counter() {
        let now = fixed_now();

        let err = GameSummary::from_parts(5, 6, 60, now, now).unwrap_err();
        assert!(matches!(
            err,
            GameSummaryError::TooManyRounds {
                completed: 6,
                total: 5
            }
        ));
    }
}
