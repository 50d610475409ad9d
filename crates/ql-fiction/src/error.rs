//! Error types for the fiction engine.

use ql_core::CoreError;
use ql_mechanics::MechError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while setting up a game.
///
/// Nothing the player types produces one of these: rule failures are
/// reported through the game log instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Character creation or another mechanics call failed.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// World data could not be loaded.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The template's start location does not exist.
    #[error("start location not found: {0}")]
    StartLocationMissing(String),
}

/// Input that does not map to a valid action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing was typed.
    #[error("Please enter a command. Type \"help\" for a list of commands.")]
    Empty,

    /// The verb is not recognized.
    #[error("Unknown command: \"{0}\". Type \"help\" for a list of commands.")]
    UnknownCommand(String),

    /// A verb was given without its object.
    #[error("\"{verb}\" needs {what}.")]
    MissingArgument {
        /// The verb as typed.
        verb: String,
        /// What was expected, e.g. "a direction".
        what: String,
    },

    /// The direction is not one of north, south, east, west, up, down.
    #[error("\"{0}\" is not a direction. Try north, south, east, west, up, or down.")]
    InvalidDirection(String),

    /// No entity matched the name.
    #[error("There is no \"{name}\" {what}.{}", suggestion_suffix(.suggestion))]
    NotFound {
        /// Where the parser looked, e.g. "here to talk to".
        what: String,
        /// The name as typed.
        name: String,
        /// A similarly named candidate, if any.
        suggestion: Option<String>,
    },

    /// Nobody at the location runs a shop.
    #[error("There is no one here to trade with.")]
    NoShop,

    /// A dialogue option number is not valid.
    #[error("\"{0}\" is not a valid option. Options are numbered from 1.")]
    InvalidOption(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" Did you mean \"{s}\"?"))
        .unwrap_or_default()
}
