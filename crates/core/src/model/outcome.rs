//
// ─── DROP OUTCOME ──────────────────────────────────────────────────────────────
//

/// Result of dropping a single factor tile on the drop zone.
///
/// Only `Accepted` changes the round; the other two leave it untouched.
/// None of these are errors — a wrong drop is an expected part of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A shared factor collected for the first time.
    Accepted,
    /// A shared factor that was already in the drop zone. No-op.
    Duplicate,
    /// Not a factor of both numbers. No-op.
    Rejected,
}

impl DropOutcome {
    /// True when the drop collected a new shared factor.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, DropOutcome::Accepted)
    }

    /// True when the drop should surface an error notice to the learner.
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, DropOutcome::Rejected)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        assert!(DropOutcome::Accepted.is_accepted());
        assert!(!DropOutcome::Duplicate.is_accepted());
        assert!(DropOutcome::Rejected.is_rejected());
        assert!(!DropOutcome::Duplicate.is_rejected());
    }
}
