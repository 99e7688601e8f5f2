//! munch-util - Foundation types shared by the munch crates
//!
//! This crate holds the small pieces of infrastructure that the tokenizer
//! and its front end both need but that carry no lexing semantics of their
//! own.
//!
//! # Module Structure
//!
//! - [`index_vec`] - Vectors addressed by typed indices. The prefix tries in
//!   `munch-lex` store their nodes in an [`IndexVec`] so that a node handle
//!   can never be confused with an index into some other table.
//! - [`span`] - Source locations ([`Span`]) and whole-file line lookup
//!   ([`SourceFile`]) used when reporting lexical errors.
//! - [`error`] - Error types for the operations above.
//!
//! # Example
//!
//! ```
//! use munch_util::{define_idx, IndexVec};
//!
//! define_idx!(NodeId);
//!
//! let mut nodes: IndexVec<NodeId, &str> = IndexVec::new();
//! let root = nodes.push("root");
//! assert_eq!(nodes[root], "root");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod index_vec;
pub mod span;

pub use error::{SourceError, SourceResult};
pub use index_vec::{Idx, IndexVec};
pub use span::{SourceFile, Span};
