mod level;
mod operation;
mod problem;
mod record;
mod summary;

pub use level::{FactorRanges, Tier, INITIAL_LEVEL, MAX_LEVELS, PROBLEMS_PER_LEVEL};
pub use operation::Operation;
pub use problem::{Problem, ProblemError};
pub use record::{AnswerOutcome, AnswerRecord};
pub use summary::{SessionSummary, SessionSummaryError};
