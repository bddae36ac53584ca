use sansu_core::model::Problem;
use services::{Feedback, GameSession, LevelProgress, PhaseKind, StdSampler};

/// What the player just did, dispatched through a single callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Advance,
    SubmitAnswer,
    SetPending(String),
}

/// View model over a [`GameSession`]: routes intents to the controller and
/// derives the strings the view renders.
pub struct GameVm {
    session: GameSession,
}

impl GameVm {
    #[must_use]
    pub fn new(start_level: u32, seed: Option<u64>) -> Self {
        let sampler = match seed {
            Some(seed) => StdSampler::seeded(seed),
            None => StdSampler::from_entropy(),
        };
        Self {
            session: GameSession::new()
                .with_sampler(Box::new(sampler))
                .with_start_level(start_level),
        }
    }

    /// Wrap an already-configured session, e.g. one with a scripted sampler.
    #[must_use]
    pub fn from_session(session: GameSession) -> Self {
        Self { session }
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::Advance => self.session.advance(),
            GameIntent::SubmitAnswer => {
                let text = self.session.pending_answer().to_string();
                self.session.submit_answer(&text);
            }
            GameIntent::SetPending(text) => self.session.set_pending_answer(text),
        }
    }

    #[must_use]
    pub fn phase_kind(&self) -> PhaseKind {
        self.session.phase_kind()
    }

    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        self.session.current_problem()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.session.feedback()
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.session.banner()
    }

    #[must_use]
    pub fn pending_answer(&self) -> &str {
        self.session.pending_answer()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.session.level()
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.session.streak()
    }

    #[must_use]
    pub fn progress(&self) -> LevelProgress {
        self.session.progress()
    }

    /// Caption for the single action button, by phase.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match self.phase_kind() {
            PhaseKind::Start => "Start!",
            PhaseKind::Playing => "Check answer",
            PhaseKind::Feedback => "Next problem",
            PhaseKind::LevelUp => "Let's go!",
        }
    }

    /// The submit button is disabled while playing with nothing typed.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.phase_kind() != PhaseKind::Playing || !self.pending_answer().trim().is_empty()
    }

    /// Progress-bar caption, e.g. `"2 more to clear level 1!"`.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        let progress = self.progress();
        match progress.remaining {
            0 => format!("Level {} cleared!", progress.level),
            1 => format!("1 more to clear level {}!", progress.level),
            n => format!("{n} more to clear level {}!", progress.level),
        }
    }

    /// Footer line, e.g. `"Answered 7 · 86% correct · Best streak 4"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        match self.session.summary() {
            Ok(summary) if summary.total_answered() > 0 => format!(
                "Answered {} · {:.0}% correct · Best streak {}",
                summary.total_answered(),
                summary.accuracy() * 100.0,
                self.session.best_streak(),
            ),
            _ => "No answers yet".to_string(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
