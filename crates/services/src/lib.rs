#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod generator;

pub use hcf_core::Clock;

pub use error::GameError;
pub use game::{DropReport, GameLoopService, GamePhase, GameProgress, GameSession, RoundSnapshot};
pub use generator::QuestionGenerator;
