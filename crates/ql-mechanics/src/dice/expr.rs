//! Damage expressions of the form `<count>d<sides>[+|-<modifier>]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RollSource, roll_uniform};
use crate::error::{MechError, MechResult};

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 100;

/// A parsed damage expression such as `2d6+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageExpr {
    /// Number of dice.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

/// The outcome of rolling a [`DamageExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageRoll {
    /// Individual die results.
    pub rolls: Vec<u32>,
    /// Flat modifier applied.
    pub modifier: i32,
    /// Dice plus modifier, floored at zero.
    pub total: u32,
}

impl DamageExpr {
    /// Roll the dice and add the modifier.
    pub fn roll(&self, rng: &mut dyn RollSource) -> MechResult<DamageRoll> {
        let rolls = (0..self.count)
            .map(|_| roll_uniform(rng, self.sides))
            .collect::<MechResult<Vec<_>>>()?;
        let sum: i64 = rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + i64::from(self.modifier);
        let total = u32::try_from(sum.max(0)).unwrap_or(u32::MAX);
        Ok(DamageRoll {
            rolls,
            modifier: self.modifier,
            total,
        })
    }
}

impl FromStr for DamageExpr {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MechError::InvalidDamageExpression(s.to_string());
        let text = s.trim().to_lowercase();
        let (count, rest) = text.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            unsigned(count).ok_or_else(invalid)?
        };

        let (sides, modifier) = match rest.find(['+', '-']) {
            Some(idx) => {
                let (sides, modifier) = rest.split_at(idx);
                let magnitude = unsigned(&modifier[1..])
                    .and_then(|m| i32::try_from(m).ok())
                    .ok_or_else(invalid)?;
                let signed = if modifier.starts_with('-') { -magnitude } else { magnitude };
                (sides, signed)
            }
            None => (rest, 0),
        };
        let sides = unsigned(sides).ok_or_else(invalid)?;

        if count == 0 || count > MAX_DICE || sides == 0 {
            return Err(invalid());
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

/// Plain decimal digits only; `u32::from_str` would also take a leading `+`.
fn unsigned(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for DamageExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

/// Parse and roll a damage expression in one step.
pub fn roll_damage_expression(expr: &str, rng: &mut dyn RollSource) -> MechResult<u32> {
    let parsed: DamageExpr = expr.parse()?;
    Ok(parsed.roll(rng)?.total)
}
