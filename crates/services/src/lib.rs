#![forbid(unsafe_code)]

pub mod game;
pub mod rng;

pub use sansu_core::Clock;

pub use game::{Feedback, GamePhase, GameSession, LevelProgress, PhaseKind};
pub use rng::StdSampler;
