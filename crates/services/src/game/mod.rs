mod progress;
mod session;

// Public API of the game subsystem.
pub use progress::LevelProgress;
pub use session::{Feedback, GamePhase, GameSession, PhaseKind};
