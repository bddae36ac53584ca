use sansu_core::model::{INITIAL_LEVEL, MAX_LEVELS};

/// Launch parameters handed to the UI by the composition root
/// (`crates/app`), consumed by the game view via `use_context`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppContext {
    start_level: u32,
    seed: Option<u64>,
}

impl AppContext {
    /// Build a context, clamping the start level into `[1, MAX_LEVELS]`.
    #[must_use]
    pub fn new(start_level: u32, seed: Option<u64>) -> Self {
        Self {
            start_level: start_level.clamp(INITIAL_LEVEL, MAX_LEVELS),
            seed,
        }
    }

    #[must_use]
    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    /// Fixed RNG seed for reproducible games, if one was requested.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(INITIAL_LEVEL, None)
    }
}
