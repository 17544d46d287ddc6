use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hcf_core::model::{MAX_NUMBER, MIN_NUMBER, Round, RoundError, RoundIndex};

//
// ─── QUESTION GENERATOR ────────────────────────────────────────────────────────
//

/// Draws the random number pair for each round.
///
/// The rng is owned so a whole game can be replayed from a seed; `new`
/// pulls entropy from the OS. Generation has no side effects beyond
/// advancing the rng stream.
#[derive(Debug)]
pub struct QuestionGenerator {
    rng: StdRng,
}

impl QuestionGenerator {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed, for tests and replayable games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh question for the given round.
    ///
    /// Both numbers are drawn independently and uniformly from
    /// `MIN_NUMBER..=MAX_NUMBER`.
    ///
    /// # Errors
    ///
    /// Propagates `RoundError` from round construction. Unreachable for
    /// in-range draws; kept so a future range change cannot panic here.
    pub fn generate_round(&mut self, index: RoundIndex) -> Result<Round, RoundError> {
        let number1 = self.rng.random_range(MIN_NUMBER..=MAX_NUMBER);
        let number2 = self.rng.random_range(MIN_NUMBER..=MAX_NUMBER);
        Round::new(index, number1, number2)
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_question_range() {
        let mut generator = QuestionGenerator::with_seed(42);

        for i in 1..=100 {
            let round = generator.generate_round(RoundIndex::new(i)).unwrap();
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&round.number1()));
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&round.number2()));
        }
    }

    #[test]
    fn generated_rounds_uphold_invariants() {
        let mut generator = QuestionGenerator::with_seed(7);

        for i in 1..=50 {
            let round = generator.generate_round(RoundIndex::new(i)).unwrap();

            assert!(!round.common_factors().is_empty());
            assert_eq!(round.common_factors().first(), Some(&1));
            assert_eq!(
                round.common_factors().last().copied(),
                Some(round.target_hcf())
            );
            assert!(round.collected().is_empty());
        }
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let mut left = QuestionGenerator::with_seed(99);
        let mut right = QuestionGenerator::with_seed(99);

        for i in 1..=10 {
            let a = left.generate_round(RoundIndex::new(i)).unwrap();
            let b = right.generate_round(RoundIndex::new(i)).unwrap();
            assert_eq!(a.number1(), b.number1());
            assert_eq!(a.number2(), b.number2());
        }
    }
}
