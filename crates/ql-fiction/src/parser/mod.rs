//! Command parsing and entity resolution.
//!
//! [`parse`] never touches the game log: a [`ParseError`](crate::ParseError)
//! goes back to the caller, which decides how to report it.

pub mod command;
pub mod resolver;

pub use command::{DEFAULT_SAVE_SLOT, normalize, parse};
pub use resolver::{Named, resolve, suggest};
