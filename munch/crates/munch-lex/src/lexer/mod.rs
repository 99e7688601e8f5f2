//! Lexer module.
//!
//! The state machine is split by the kind of token each state builds:
//! - `core` - The Lexer struct, the scan loop and end-of-input handling
//! - `state` - The closed set of scan states
//! - `word` - Word and keyword scanning
//! - `number` - Integer and float literal scanning
//! - `operator` - Longest-match operator scanning

mod core;
mod number;
mod operator;
mod state;
mod word;

pub use self::core::Lexer;
pub use self::state::LexState;
