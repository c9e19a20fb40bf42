//! Dice helpers. Every stochastic decision in the engine routes through
//! an injected `rand::Rng`, so seeded test rngs reproduce whole battles.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A dice expression: `count` rolls of a `sides`-sided die, summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub count: u32,
    pub sides: u32,
}

impl Dice {
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        roll(rng, self.count, self.sides)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Rolls `count` dice with `sides` sides and sums them.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32) -> i32 {
    if sides == 0 {
        return 0;
    }
    (0..count).map(|_| rng.gen_range(1..=sides) as i32).sum()
}

/// Returns true with probability `p` (clamped to [0, 1]).
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p >= 1.0 {
        return true;
    }
    if p <= 0.0 {
        return false;
    }
    rng.gen::<f64>() < p
}
