//! Abstract Syntax Tree (AST) definitions for achievement conditions
//!
//! A translated condition is always a single `and` node whose children are
//! the leaf conditions recognized in the source expression, in source order.

pub mod condition;
pub mod operator;

pub use condition::{Condition, Conjunction};
pub use operator::CompareOp;
