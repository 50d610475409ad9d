//! Interactive fiction engine for Questline.
//!
//! Free text goes through [`parse`] into a typed [`Action`]; [`process`]
//! turns the current [`GameState`] and that action into the next state.
//! Neither step mutates its input. [`Session`] wires the two together with
//! a seeded RNG for front ends.

/// Typed player intents.
pub mod action;
/// Game configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// The append-only game log.
pub mod log;
/// Free-text command parsing and entity resolution.
pub mod parser;
/// The action processor.
pub mod processor;
/// Interactive session management.
pub mod session;
/// The aggregate game state.
pub mod state;

pub use action::{Action, END_CONVERSATION};
pub use config::GameConfig;
pub use error::{FictionError, FictionResult, ParseError};
pub use log::{GameLog, LogEntry, LogKind};
pub use parser::parse;
pub use processor::process;
pub use session::Session;
pub use state::{ActiveDialogue, GameState, new_game, new_game_with_name};
