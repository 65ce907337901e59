//! # calc
//!
//! calc is a tiny line calculator for single-digit addition and subtraction.
//! Each line is tokenized one character at a time, flattened back into text
//! and reduced by splitting on its `+` and `-` operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type shared by the lexer and the evaluator.
///
/// Every way a line can be rejected is a variant of `ParseError`, carrying
/// the offending character, term or operand count for the message.
pub mod error;
/// Turns a line of text into a number.
///
/// # Responsibilities
/// - Tokenizes the line one character at a time.
/// - Flattens the tokens and reduces them to an `i64`.
pub mod interpreter;
/// The read-evaluate-print loop used by the binary.
pub mod repl;

pub use crate::{error::ParseError, interpreter::evaluator::evaluate};
