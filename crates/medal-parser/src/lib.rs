//! Medal Parser - condition string to AST translator
//!
//! Legacy achievement conditions are small boolean expressions over a
//! score, for example:
//!
//! ```text
//! (score.mods & 1 == 0) and mode_vn == 0 and 2000 <= score.max_combo
//! ```
//!
//! This crate turns them into a [`Conjunction`](medal_core::Conjunction)
//! of typed conditions and serializes it as a JSON document:
//!
//! ```
//! let json = medal_parser::translate("score.mods & 8").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"type":"and","conditions":[{"type":"bit_ne","stat":"mods","mask":8}]}"#
//! );
//! ```
//!
//! Translation is lossy by contract: clauses that match none of the known
//! forms are dropped from the output. [`Translator`] reports them in
//! [`Translation::dropped`] without changing the document.

pub mod classifier;
pub mod error;
pub mod number;
pub mod splitter;
pub mod translator;

// Re-export main parser types
pub use classifier::{classify_clause, classify_clause_kind, ClauseKind, ClauseMatch};
pub use error::{ParseError, Result};
pub use splitter::{split_clauses, unwrap_parens};
pub use translator::{translate, translate_value, Translation, Translator};
