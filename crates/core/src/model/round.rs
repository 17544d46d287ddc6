use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::factors;
use crate::model::DropOutcome;

/// Smallest number a question may use.
pub const MIN_NUMBER: u32 = 10;
/// Largest number a question may use.
pub const MAX_NUMBER: u32 = 100;

//
// ─── ROUND INDEX ───────────────────────────────────────────────────────────────
//

/// 1-based position of a round within a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundIndex(u32);

impl RoundIndex {
    /// Creates a new `RoundIndex`
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The first round of a game.
    #[must_use]
    pub fn first() -> Self {
        Self(1)
    }

    /// The round that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RoundIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundIndex({})", self.0)
    }
}

impl fmt::Display for RoundIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("question number {value} is outside {MIN_NUMBER}..={MAX_NUMBER}")]
    OutOfRange { value: u32 },

    #[error("numbers {number1} and {number2} share no factors")]
    NoCommonFactor { number1: u32, number2: u32 },
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// One number-pair challenge.
///
/// Holds the two question numbers, their factor lists, the shared factors
/// the learner must find, and the factors collected so far. The collected
/// set only ever grows; a factor cannot be collected twice or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    index: RoundIndex,
    number1: u32,
    number2: u32,
    factors1: Vec<u32>,
    factors2: Vec<u32>,
    common: Vec<u32>,
    target_hcf: u32,
    collected: BTreeSet<u32>,
}

impl Round {
    /// Build a round from a question pair.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::OutOfRange` if either number falls outside
    /// `MIN_NUMBER..=MAX_NUMBER`. `RoundError::NoCommonFactor` guards the
    /// empty-intersection case, unreachable for in-range numbers.
    pub fn new(index: RoundIndex, number1: u32, number2: u32) -> Result<Self, RoundError> {
        for value in [number1, number2] {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
                return Err(RoundError::OutOfRange { value });
            }
        }

        let common = factors::common_factors(number1, number2);
        let target_hcf = common
            .last()
            .copied()
            .ok_or(RoundError::NoCommonFactor { number1, number2 })?;

        Ok(Self {
            index,
            number1,
            number2,
            factors1: factors::factors_of(number1),
            factors2: factors::factors_of(number2),
            common,
            target_hcf,
            collected: BTreeSet::new(),
        })
    }

    #[must_use]
    pub fn index(&self) -> RoundIndex {
        self.index
    }

    #[must_use]
    pub fn number1(&self) -> u32 {
        self.number1
    }

    #[must_use]
    pub fn number2(&self) -> u32 {
        self.number2
    }

    #[must_use]
    pub fn factors1(&self) -> &[u32] {
        &self.factors1
    }

    #[must_use]
    pub fn factors2(&self) -> &[u32] {
        &self.factors2
    }

    /// Factors shared by both numbers, ascending.
    #[must_use]
    pub fn common_factors(&self) -> &[u32] {
        &self.common
    }

    /// The highest common factor, i.e. the answer being taught.
    #[must_use]
    pub fn target_hcf(&self) -> u32 {
        self.target_hcf
    }

    /// Factors collected so far, ascending.
    #[must_use]
    pub fn collected(&self) -> Vec<u32> {
        self.collected.iter().copied().collect()
    }

    /// Shared factors still missing from the drop zone, ascending.
    #[must_use]
    pub fn remaining(&self) -> Vec<u32> {
        self.common
            .iter()
            .filter(|factor| !self.collected.contains(factor))
            .copied()
            .collect()
    }

    /// True once every shared factor has been collected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.common.len()
    }

    /// Judge a dropped factor.
    ///
    /// A single membership-checked insert: either the factor is a new
    /// shared factor (`Accepted`), already collected (`Duplicate`), or not
    /// shared at all (`Rejected`). The latter two change nothing.
    pub fn submit(&mut self, factor: u32) -> DropOutcome {
        if !self.common.contains(&factor) {
            return DropOutcome::Rejected;
        }
        if self.collected.insert(factor) {
            DropOutcome::Accepted
        } else {
            DropOutcome::Duplicate
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
