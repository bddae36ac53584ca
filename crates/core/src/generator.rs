//! Problem generation: maps a difficulty level to a fresh random problem.

use crate::model::{FactorRanges, Operation, Problem, Tier};
use crate::sampler::Sampler;

//
// ─── GENERATE ──────────────────────────────────────────────────────────────────
//

/// Generate a problem for the given level.
///
/// Pure apart from the sampler: one operation is chosen uniformly, then the
/// operands are drawn from that level's tier ranges. Levels above the tier
/// table reuse the highest tier, and level 0 is treated as level 1, so every
/// level yields a problem.
///
/// Subtraction draws the subtrahend strictly below the minuend, and division
/// derives the dividend from a drawn quotient and divisor, so every problem
/// satisfies the `Problem` invariants by construction.
#[must_use]
pub fn generate(sampler: &mut dyn Sampler, level: u32) -> Problem {
    let tier = Tier::for_level(level);
    let index = sampler.int_between(0, Operation::ALL.len() as i32 - 1);
    let operation = Operation::ALL[index as usize];

    match operation {
        Operation::Add => {
            let left = draw(sampler, tier.addend);
            let right = draw(sampler, tier.addend);
            Problem::from_drawn(left, Operation::Add, right)
        }
        Operation::Subtract => {
            let minuend = draw(sampler, tier.minuend);
            let subtrahend = sampler.int_between(tier.subtrahend_min, minuend - 1);
            Problem::from_drawn(minuend, Operation::Subtract, subtrahend)
        }
        Operation::Multiply => {
            let (left, right) = match tier.factors {
                FactorRanges::Uniform(lo, hi) => {
                    (sampler.int_between(lo, hi), sampler.int_between(lo, hi))
                }
                FactorRanges::Split { factor, other } => {
                    let factor = draw(sampler, factor);
                    let other = draw(sampler, other);
                    // The flip varies the printed order only; the product is
                    // the same either way.
                    if sampler.coin_flip() {
                        (other, factor)
                    } else {
                        (factor, other)
                    }
                }
            };
            Problem::from_drawn(left, Operation::Multiply, right)
        }
        Operation::Divide => {
            let quotient = draw(sampler, tier.quotient);
            let divisor = draw(sampler, tier.divisor);
            Problem::from_drawn(quotient * divisor, Operation::Divide, divisor)
        }
    }
}

fn draw(sampler: &mut dyn Sampler, (min, max): (i32, i32)) -> i32 {
    sampler.int_between(min, max)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
