/// Visual flavor of a notice in the result area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    /// CSS class suffix for the notice container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
        }
    }
}

/// A notice shown in the result area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl GameMessage {
    /// Persistent notice for a completed round.
    #[must_use]
    pub fn round_complete(number1: u32, number2: u32, hcf: u32) -> Self {
        Self {
            kind: MessageKind::Success,
            text: format!("Great! The HCF of {number1} and {number2} is {hcf}!"),
        }
    }

    /// Transient notice for a rejected drop; the view auto-dismisses it.
    #[must_use]
    pub fn not_common() -> Self {
        Self {
            kind: MessageKind::Error,
            text: "Not a common factor! Try again.".to_string(),
        }
    }

    /// Terminal notice once every round is played.
    #[must_use]
    pub fn game_complete(score: u32, max_score: u32) -> Self {
        Self {
            kind: MessageKind::Success,
            text: format!("Game complete! Final score: {score}/{max_score}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_carry_the_expected_wording() {
        let done = GameMessage::round_complete(12, 18, 6);
        assert_eq!(done.kind, MessageKind::Success);
        assert_eq!(done.text, "Great! The HCF of 12 and 18 is 6!");

        let wrong = GameMessage::not_common();
        assert_eq!(wrong.kind, MessageKind::Error);

        let over = GameMessage::game_complete(40, 50);
        assert_eq!(over.text, "Game complete! Final score: 40/50");
    }
}
