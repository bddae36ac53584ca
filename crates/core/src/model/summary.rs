use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AnswerOutcome, AnswerRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("too many records for a single session: {len}")]
    TooManyRecords { len: usize },
}

/// Aggregate view of everything answered so far in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    total_answered: u32,
    correct: u32,
    incorrect: u32,
}

impl SessionSummary {
    /// Build a summary from the session's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::TooManyRecords` if the record count
    /// cannot fit in `u32`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SessionSummaryError> {
        let total_answered = u32::try_from(records.len())
            .map_err(|_| SessionSummaryError::TooManyRecords { len: records.len() })?;

        let mut correct = 0_u32;
        for record in records {
            if let AnswerOutcome::Correct = record.outcome {
                correct = correct.saturating_add(1);
            }
        }

        Ok(Self {
            started_at,
            total_answered,
            correct,
            incorrect: total_answered - correct,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Fraction of answers that were correct, `0.0` before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_answered == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total_answered)
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
