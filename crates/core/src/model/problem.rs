use thiserror::Error;

use crate::model::Operation;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("operands must be non-negative, got {left} and {right}")]
    NegativeOperand { left: i32, right: i32 },

    #[error("subtraction would go negative: {left} - {right}")]
    NegativeDifference { left: i32, right: i32 },

    #[error("division by zero: {left} ÷ 0")]
    ZeroDivisor { left: i32 },

    #[error("{left} is not divisible by {right}")]
    InexactDivision { left: i32, right: i32 },
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// A single arithmetic question with its unique correct answer.
///
/// Immutable once built. The answer is always a non-negative integer
/// consistent with the operands and operation: subtraction never goes
/// negative and division is always exact, both enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    left: i32,
    right: i32,
    operation: Operation,
    answer: i32,
    question: String,
}

impl Problem {
    /// Build a problem from two operands and an operation.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::NegativeOperand` if either operand is negative,
    /// `ProblemError::NegativeDifference` if a subtraction would yield a
    /// negative answer, and `ProblemError::ZeroDivisor` /
    /// `ProblemError::InexactDivision` for divisions that have no exact
    /// non-negative integer quotient.
    pub fn new(left: i32, operation: Operation, right: i32) -> Result<Self, ProblemError> {
        Self::validate(left, operation, right)?;
        Ok(Self::from_drawn(left, operation, right))
    }

    /// Build a division problem from the answer side.
    ///
    /// The dividend is derived as `quotient × divisor`, which is the only way
    /// to guarantee an exact integer quotient. Never construct a division
    /// problem from an independently chosen dividend.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::NegativeOperand` if the quotient is negative
    /// and `ProblemError::ZeroDivisor` if the divisor is not positive.
    pub fn division_from_quotient(quotient: i32, divisor: i32) -> Result<Self, ProblemError> {
        if divisor <= 0 {
            return Err(ProblemError::ZeroDivisor {
                left: quotient.saturating_mul(divisor),
            });
        }
        Self::new(quotient * divisor, Operation::Divide, divisor)
    }

    /// Constructor for the generator, whose drawn operands satisfy the
    /// invariants by range construction.
    pub(crate) fn from_drawn(left: i32, operation: Operation, right: i32) -> Self {
        debug_assert!(Self::validate(left, operation, right).is_ok());
        let answer = operation.apply(left, right);
        let question = format!("{left} {} {right} = ?", operation.symbol());
        Self {
            left,
            right,
            operation,
            answer,
            question,
        }
    }

    fn validate(left: i32, operation: Operation, right: i32) -> Result<(), ProblemError> {
        if left < 0 || right < 0 {
            return Err(ProblemError::NegativeOperand { left, right });
        }
        match operation {
            Operation::Add | Operation::Multiply => Ok(()),
            Operation::Subtract => {
                if left < right {
                    Err(ProblemError::NegativeDifference { left, right })
                } else {
                    Ok(())
                }
            }
            Operation::Divide => {
                if right == 0 {
                    Err(ProblemError::ZeroDivisor { left })
                } else if left % right != 0 {
                    Err(ProblemError::InexactDivision { left, right })
                } else {
                    Ok(())
                }
            }
        }
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i32 {
        self.right
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The glyph between the operands in `question_text`.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.operation.symbol()
    }

    #[must_use]
    pub fn answer(&self) -> i32 {
        self.answer
    }

    /// The rendered question, e.g. `"12 × 4 = ?"`.
    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
