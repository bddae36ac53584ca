use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ─── ANSWER OUTCOME ───────────────────────────────────────────────────────────
//

/// Whether a submitted answer matched the problem's correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

//
// ─── ANSWER RECORD ────────────────────────────────────────────────────────────
//

/// Record of a single evaluated answer.
///
/// Stores the question as shown, what the player typed, what was expected,
/// and when. Used for the in-session summary; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub given: i32,
    pub expected: i32,
    pub outcome: AnswerOutcome,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        given: i32,
        expected: i32,
        outcome: AnswerOutcome,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question: question.into(),
            given,
            expected,
            outcome,
            answered_at,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
