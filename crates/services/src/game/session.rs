use std::fmt;

use chrono::{DateTime, Utc};

use sansu_core::model::{
    AnswerOutcome, AnswerRecord, Problem, SessionSummary, SessionSummaryError, INITIAL_LEVEL,
    MAX_LEVELS, PROBLEMS_PER_LEVEL,
};
use sansu_core::{generate, Clock, Sampler};

use super::progress::LevelProgress;
use crate::rng::StdSampler;

/// Points for a correct answer before the streak bonus.
const BASE_POINTS: u32 = 10;

/// Extra points per step of the streak held *before* the answer.
const STREAK_BONUS: u32 = 2;

//
// ─── FEEDBACK ─────────────────────────────────────────────────────────────────
//

/// Outcome of the most recently evaluated answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: AnswerOutcome,
    pub message: String,
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// The session's top-level state.
///
/// Each phase carries exactly the data that is valid in it, so a feedback
/// screen without a problem, or a live problem during the level-up
/// celebration, cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum GamePhase {
    /// Before the first problem; waiting for the player to start.
    Start,
    /// A problem is live and accepting answers. `banner` carries the
    /// "fully cleared" celebration when play continues at the top level.
    Playing {
        problem: Problem,
        banner: Option<String>,
    },
    /// The last answer has been evaluated; waiting to move on.
    Feedback { problem: Problem, feedback: Feedback },
    /// The quota was met below the top level; waiting to enter the next one.
    LevelUp { message: String },
}

/// `Copy` discriminant of [`GamePhase`], convenient for view matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Start,
    Playing,
    Feedback,
    LevelUp,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// In-memory drill session: score, streak, level progression, and the phase
/// state machine driven by `advance` and `submit_answer`.
///
/// Events whose preconditions are unmet are ignored rather than surfaced as
/// errors: submitting blank or non-numeric text, or advancing from a phase
/// with no defined transition, leaves the session unchanged.
pub struct GameSession {
    sampler: Box<dyn Sampler + Send>,
    clock: Clock,
    phase: GamePhase,
    score: u32,
    level: u32,
    streak: u32,
    best_streak: u32,
    solved_this_level: u32,
    pending_answer: String,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// A fresh session at level 1 with an entropy-backed sampler.
    #[must_use]
    pub fn new() -> Self {
        let clock = Clock::default_clock();
        Self {
            sampler: Box::new(StdSampler::from_entropy()),
            started_at: clock.now(),
            clock,
            phase: GamePhase::Start,
            score: 0,
            level: INITIAL_LEVEL,
            streak: 0,
            best_streak: 0,
            solved_this_level: 0,
            pending_answer: String::new(),
            records: Vec::new(),
        }
    }

    /// Replace the randomness source, e.g. with a seeded or scripted sampler.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Box<dyn Sampler + Send>) -> Self {
        self.sampler = sampler;
        self
    }

    /// Replace the clock used to timestamp answer records.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.started_at = clock.now();
        self
    }

    /// Start at a later level, clamped into `[1, MAX_LEVELS]`.
    #[must_use]
    pub fn with_start_level(mut self, level: u32) -> Self {
        self.level = level.clamp(INITIAL_LEVEL, MAX_LEVELS);
        self
    }

    //
    // ─── EVENTS ───────────────────────────────────────────────────────────
    //

    /// Record in-progress input without evaluating it.
    pub fn set_pending_answer(&mut self, text: impl Into<String>) {
        self.pending_answer = text.into();
    }

    /// Submit an answer, attempting the `Playing → Feedback` transition.
    ///
    /// The text is recorded as the pending answer either way. Blank or
    /// non-numeric text is ignored beyond that, as is a submission in any
    /// phase without a live problem.
    pub fn submit_answer(&mut self, text: &str) {
        self.pending_answer = text.to_string();
        let Ok(guess) = self.pending_answer.trim().parse::<i32>() else {
            return;
        };

        match std::mem::replace(&mut self.phase, GamePhase::Start) {
            GamePhase::Playing { problem, .. } => {
                let feedback = self.evaluate(&problem, guess);
                self.phase = GamePhase::Feedback { problem, feedback };
            }
            other => self.phase = other,
        }
    }

    /// Advance to whichever phase follows the current one.
    ///
    /// From `Start`, generates the first problem. From `Feedback`, either
    /// celebrates a level-up (quota met below the top level), continues at
    /// the top level with the fully-cleared banner (quota met there), or
    /// simply serves the next problem. From `LevelUp`, enters the next
    /// level. During `Playing` there is no transition and the event is
    /// ignored.
    pub fn advance(&mut self) {
        match std::mem::replace(&mut self.phase, GamePhase::Start) {
            GamePhase::Start => self.begin_problem(None),
            GamePhase::Feedback { feedback, .. } => {
                let quota_met = feedback.outcome.is_correct()
                    && self.solved_this_level >= PROBLEMS_PER_LEVEL;
                if quota_met && self.level < MAX_LEVELS {
                    self.phase = GamePhase::LevelUp {
                        message: level_up_message(self.level + 1),
                    };
                } else if quota_met {
                    // Top level re-cleared: celebrate and keep playing here.
                    self.solved_this_level = 0;
                    self.begin_problem(Some(all_cleared_message()));
                } else {
                    self.begin_problem(None);
                }
            }
            GamePhase::LevelUp { .. } => {
                // LevelUp is only entered while below MAX_LEVELS.
                self.level += 1;
                self.solved_this_level = 0;
                self.begin_problem(None);
            }
            playing @ GamePhase::Playing { .. } => self.phase = playing,
        }
    }

    fn begin_problem(&mut self, banner: Option<String>) {
        self.pending_answer.clear();
        let problem = generate(self.sampler.as_mut(), self.level);
        self.phase = GamePhase::Playing { problem, banner };
    }

    fn evaluate(&mut self, problem: &Problem, guess: i32) -> Feedback {
        let outcome = if guess == problem.answer() {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };

        match outcome {
            AnswerOutcome::Correct => {
                self.score += BASE_POINTS + self.streak * STREAK_BONUS;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
                self.solved_this_level = (self.solved_this_level + 1).min(PROBLEMS_PER_LEVEL);
            }
            AnswerOutcome::Incorrect => self.streak = 0,
        }

        self.records.push(AnswerRecord::new(
            problem.question_text(),
            guess,
            problem.answer(),
            outcome,
            self.clock.now(),
        ));

        let message = match outcome {
            AnswerOutcome::Correct => correct_message(),
            AnswerOutcome::Incorrect => incorrect_message(problem.answer()),
        };
        Feedback { outcome, message }
    }

    //
    // ─── SNAPSHOT ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn phase_kind(&self) -> PhaseKind {
        match self.phase {
            GamePhase::Start => PhaseKind::Start,
            GamePhase::Playing { .. } => PhaseKind::Playing,
            GamePhase::Feedback { .. } => PhaseKind::Feedback,
            GamePhase::LevelUp { .. } => PhaseKind::LevelUp,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn problems_solved_this_level(&self) -> u32 {
        self.solved_this_level
    }

    /// The live problem, if one is being played or reviewed.
    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        match &self.phase {
            GamePhase::Playing { problem, .. } | GamePhase::Feedback { problem, .. } => {
                Some(problem)
            }
            GamePhase::Start | GamePhase::LevelUp { .. } => None,
        }
    }

    /// Outcome of the most recent evaluation, while on the feedback screen.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.phase {
            GamePhase::Feedback { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    /// The celebration text shown while playing on after a full clear, or
    /// during the level-up screen.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        match &self.phase {
            GamePhase::Playing {
                banner: Some(text), ..
            } => Some(text),
            GamePhase::LevelUp { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_answer(&self) -> &str {
        &self.pending_answer
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn progress(&self) -> LevelProgress {
        LevelProgress {
            level: self.level,
            solved: self.solved_this_level,
            quota: PROBLEMS_PER_LEVEL,
            remaining: PROBLEMS_PER_LEVEL.saturating_sub(self.solved_this_level),
            is_max_level: self.level >= MAX_LEVELS,
        }
    }

    /// Summary of everything answered so far.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::TooManyRecords` if the record count
    /// cannot fit in `u32`.
    pub fn summary(&self) -> Result<SessionSummary, SessionSummaryError> {
        SessionSummary::from_records(self.started_at, &self.records)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase_kind())
            .field("score", &self.score)
            .field("level", &self.level)
            .field("streak", &self.streak)
            .field("solved_this_level", &self.solved_this_level)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── MESSAGES ─────────────────────────────────────────────────────────────────
//

fn correct_message() -> String {
    "Correct! Great job! 🎉".to_string()
}

fn incorrect_message(answer: i32) -> String {
    format!("Not quite... the answer was {answer}. 🤔")
}

fn level_up_message(next_level: u32) -> String {
    format!("Level {next_level} unlocked! Congratulations! 🚀")
}

fn all_cleared_message() -> String {
    "Every level cleared! Amazing! 🏆 Play another round!".to_string()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use sansu_core::time::fixed_clock;
    use sansu_core::SequenceSampler;

    // An exhausted SequenceSampler makes every generated problem the
    // lowest-operand addition of the current tier: "1 + 1 = ?" at level 1,
    // "10 + 10 = ?" at level 2, and so on.
    fn scripted_session() -> GameSession {
        GameSession::new()
            .with_sampler(Box::new(SequenceSampler::default()))
            .with_clock(fixed_clock())
    }

    fn answer_correctly(session: &mut GameSession) {
        let answer = session
            .current_problem()
            .expect("a problem should be live")
            .answer();
        session.submit_answer(&answer.to_string());
    }

    #[test]
    fn starting_generates_the_first_problem() {
        let mut session = scripted_session();
        assert_eq!(session.phase_kind(), PhaseKind::Start);
        assert!(session.current_problem().is_none());

        session.advance();
        assert!(matches!(
            session.phase(),
            GamePhase::Playing { banner: None, .. }
        ));
        assert_eq!(
            session.current_problem().unwrap().question_text(),
            "1 + 1 = ?"
        );
    }

    #[test]
    fn correct_answer_scores_and_advances_progress() {
        let mut session = scripted_session();
        session.advance();

        session.submit_answer("2");

        assert_eq!(session.phase_kind(), PhaseKind::Feedback);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.problems_solved_this_level(), 1);
        assert!(session.feedback().unwrap().outcome.is_correct());

        session.advance();
        assert_eq!(session.phase_kind(), PhaseKind::Playing);
        assert!(session.current_problem().is_some());
        assert_eq!(session.problems_solved_this_level(), 1);
        assert!(session.feedback().is_none());
        assert!(session.pending_answer().is_empty());
    }

    #[test]
    fn wrong_answer_resets_streak_and_reveals_the_result() {
        let mut session = scripted_session();
        session.advance();
        for _ in 0..3 {
            answer_correctly(&mut session);
            session.advance();
        }
        assert_eq!(session.streak(), 3);
        let score_before = session.score();

        session.submit_answer("999");

        assert_eq!(session.streak(), 0);
        assert_eq!(session.best_streak(), 3);
        assert_eq!(session.score(), score_before);
        let feedback = session.feedback().unwrap();
        assert!(!feedback.outcome.is_correct());
        assert!(feedback.message.contains('2'), "answer not revealed");
    }

    #[test]
    fn streak_bonus_accumulates() {
        let mut session = scripted_session();
        session.advance();
        for _ in 0..3 {
            answer_correctly(&mut session);
            session.advance();
        }
        // 10 + 12 + 14
        assert_eq!(session.score(), 36);
        assert_eq!(session.streak(), 3);
    }

    #[test]
    fn blank_and_non_numeric_submissions_are_ignored() {
        let mut session = scripted_session();
        session.advance();

        session.submit_answer("");
        assert_eq!(session.phase_kind(), PhaseKind::Playing);

        session.submit_answer("   ");
        assert_eq!(session.phase_kind(), PhaseKind::Playing);

        session.submit_answer("abc");
        assert_eq!(session.phase_kind(), PhaseKind::Playing);
        assert_eq!(session.pending_answer(), "abc");
        assert_eq!(session.score(), 0);
        assert_eq!(session.records().len(), 0);
    }

    #[test]
    fn events_without_a_defined_transition_are_ignored() {
        let mut session = scripted_session();
        session.submit_answer("5");
        assert_eq!(session.phase_kind(), PhaseKind::Start);

        session.advance();
        let before = session.current_problem().cloned();
        session.advance();
        assert_eq!(session.phase_kind(), PhaseKind::Playing);
        assert_eq!(session.current_problem().cloned(), before);

        session.submit_answer("2");
        session.submit_answer("2");
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn quota_below_the_top_level_enters_level_up() {
        let mut session = scripted_session();
        session.advance();
        for _ in 0..PROBLEMS_PER_LEVEL {
            answer_correctly(&mut session);
            if session.problems_solved_this_level() < PROBLEMS_PER_LEVEL {
                session.advance();
            }
        }
        assert_eq!(session.phase_kind(), PhaseKind::Feedback);

        session.advance();
        assert_eq!(session.phase_kind(), PhaseKind::LevelUp);
        // The level itself only moves once the celebration is dismissed.
        assert_eq!(session.level(), 1);
        assert!(session.banner().unwrap().contains("Level 2"));

        session.advance();
        assert_eq!(session.phase_kind(), PhaseKind::Playing);
        assert_eq!(session.level(), 2);
        assert_eq!(session.problems_solved_this_level(), 0);
        assert_eq!(
            session.current_problem().unwrap().question_text(),
            "10 + 10 = ?"
        );
    }

    #[test]
    fn quota_at_the_top_level_celebrates_without_advancing() {
        let mut session = scripted_session().with_start_level(MAX_LEVELS);
        session.advance();
        for _ in 0..PROBLEMS_PER_LEVEL {
            answer_correctly(&mut session);
            if session.problems_solved_this_level() < PROBLEMS_PER_LEVEL {
                session.advance();
            }
        }

        session.advance();
        assert!(matches!(
            session.phase(),
            GamePhase::Playing {
                banner: Some(_),
                ..
            }
        ));
        assert_eq!(session.level(), MAX_LEVELS);
        assert_eq!(session.problems_solved_this_level(), 0);
        assert!(session.banner().unwrap().contains("Amazing"));

        // The banner is gone once the next problem cycle starts.
        answer_correctly(&mut session);
        session.advance();
        assert!(session.banner().is_none());
    }

    #[test]
    fn missed_quota_keeps_playing_at_the_same_level() {
        let mut session = scripted_session();
        session.advance();
        for _ in 0..4 {
            answer_correctly(&mut session);
            session.advance();
        }
        session.submit_answer("999");
        session.advance();

        assert_eq!(session.phase_kind(), PhaseKind::Playing);
        assert_eq!(session.level(), 1);
        assert_eq!(session.problems_solved_this_level(), 4);
    }

    #[test]
    fn start_level_is_clamped() {
        assert_eq!(GameSession::new().with_start_level(0).level(), 1);
        assert_eq!(GameSession::new().with_start_level(99).level(), MAX_LEVELS);
        assert_eq!(GameSession::new().with_start_level(3).level(), 3);
    }

    #[test]
    fn summary_reflects_the_answer_log() {
        let mut session = scripted_session();
        session.advance();
        answer_correctly(&mut session);
        session.advance();
        session.submit_answer("999");

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_answered(), 2);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.started_at(), session.started_at());
    }
}
