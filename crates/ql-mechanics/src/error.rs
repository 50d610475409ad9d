//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// A die with no sides was rolled.
    #[error("invalid die: d{0}")]
    InvalidDie(u32),

    /// A damage expression could not be parsed.
    #[error("invalid damage expression: {0}")]
    InvalidDamageExpression(String),

    /// No class is defined with this id.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// An item id is not in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Adding an item would exceed carrying capacity.
    #[error("{item} weighs {weight} lb, which would exceed the {capacity} lb limit")]
    TooHeavy {
        /// Name of the item.
        item: String,
        /// Weight of the item.
        weight: f64,
        /// Maximum carry weight.
        capacity: f64,
    },

    /// The item is not in the inventory.
    #[error("item not held: {0}")]
    ItemNotHeld(String),

    /// No combat is in progress.
    #[error("not in combat")]
    NotInCombat,

    /// The action needs the player's turn.
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    /// The NPC cannot fight.
    #[error("{0} has no combat stats")]
    NoCombatStats(String),

    /// The target is not part of the current fight.
    #[error("{0} is not part of this fight")]
    EnemyNotInCombat(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
