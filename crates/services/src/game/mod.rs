mod progress;
mod service;
mod snapshot;
mod workflow;

// Public API of the game subsystem.
pub use crate::error::GameError;
pub use progress::GameProgress;
pub use service::{GamePhase, GameSession};
pub use snapshot::RoundSnapshot;
pub use workflow::{DropReport, GameLoopService};
