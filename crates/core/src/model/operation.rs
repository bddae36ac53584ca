use serde::{Deserialize, Serialize};

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// The four arithmetic operations a problem can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in the order the generator draws from.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The glyph shown in question text.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Plain-language name, used for accessibility labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }

    /// Applies the operation under standard integer arithmetic.
    ///
    /// Division truncates; `Problem` construction only permits exact
    /// quotients, so truncation never loses information there.
    #[must_use]
    pub fn apply(self, left: i32, right: i32) -> i32 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
            Operation::Divide => left / right,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
