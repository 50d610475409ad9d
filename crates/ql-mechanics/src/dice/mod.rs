//! Dice types and rolling.
//!
//! All randomness flows through the [`RollSource`] trait. The production
//! source is a seeded [`StdRng`]; [`ScriptedRolls`] replays a fixed
//! sequence for tests.

pub mod expr;

pub use expr::{DamageExpr, DamageRoll, MAX_DICE, roll_damage_expression};

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A uniform integer generator.
pub trait RollSource {
    /// Return an integer in `1..=sides`. `sides` is at least 1.
    fn roll(&mut self, sides: u32) -> u32;
}

impl RollSource for StdRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of rolls, then repeats the last value.
///
/// Each value is clamped into `1..=sides` for the die being rolled, so a
/// script written for a d20 is still valid when a d4 is rolled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a script from the given values.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// How many scripted values have been consumed.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self
            .values
            .get(self.cursor)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(1);
        self.cursor += 1;
        value.clamp(1, sides.max(1))
    }
}

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The die with this many sides.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut dyn RollSource) -> MechResult<u32> {
        roll_uniform(rng, self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Roll a single die with `sides` faces.
pub fn roll_uniform(rng: &mut dyn RollSource, sides: u32) -> MechResult<u32> {
    if sides == 0 {
        return Err(MechError::InvalidDie(0));
    }
    let value = rng.roll(sides);
    tracing::trace!(sides, value, "roll");
    Ok(value)
}

/// Roll `sides` and shift the result so the minimum is `offset`.
///
/// `roll_uniform_offset(rng, 41, 10)` yields 10 through 50.
pub fn roll_uniform_offset(rng: &mut dyn RollSource, sides: u32, offset: u32) -> MechResult<u32> {
    Ok(offset + roll_uniform(rng, sides)? - 1)
}

/// Roll a d20.
pub fn d20(rng: &mut dyn RollSource) -> u32 {
    let value = rng.roll(20);
    tracing::trace!(sides = 20, value, "roll");
    value
}

/// Roll six ability scores, each the sum of three d6.
pub fn roll_ability_scores(rng: &mut dyn RollSource) -> [i32; 6] {
    std::array::from_fn(|_| (0..3).map(|_| rng.roll(6) as i32).sum())
}

/// The modifier for an ability score: `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}
