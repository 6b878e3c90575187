//! A converter from regular expression infix notation to postfix (RPN).
//!
//! The conversion runs as a fixed pipeline: [`tokenize`], [`expand_quantifiers`],
//! [`validate`], [`insert_concatenation`] and finally [`to_postfix`].

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod concat;
pub mod expand;
pub mod lexer;
pub mod options;
pub mod postfix;
pub mod validate;

pub use self::{
    concat::insert_concatenation,
    expand::expand_quantifiers,
    lexer::{Lexer, Operator, PosToken, Token, tokenize},
    options::{ConcatRule, Options},
    postfix::{Assoc, Postfix, Precedence, to_postfix},
    validate::validate,
};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression ended right after an escape marker.
    #[error("escape '\\' at {pos} is not followed by a character")]
    UnterminatedEscape { pos: usize },

    /// A character class was opened but never closed.
    #[error("character class '[' at {pos} is not closed with ']'")]
    UnterminatedCharClass { pos: usize },

    /// A `+` or `?` has nothing to apply to.
    #[error("quantifier '{quantifier}' at {pos} has no preceding operand")]
    DanglingQuantifier { pos: usize, quantifier: char },

    /// A `*` has nothing to repeat.
    #[error("misplaced '*' at {pos}")]
    MisplacedRepetition { pos: usize },

    /// A `|` starts the expression or follows another `|`.
    #[error("misplaced or repeated '|' at {pos}")]
    MisplacedAlternation { pos: usize },

    /// The expression ends on `|` or `(`.
    #[error("expression ends with invalid operator '{token}' at {pos}")]
    TrailingOperator { pos: usize, token: Token },

    /// A group is never closed, or closed without being opened. Only reported
    /// with [`Options::strict_groups`].
    #[error("unbalanced group at {pos}")]
    UnbalancedGroup { pos: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts an infix expression into postfix using the default [`Options`].
///
/// # Errors
///
/// If any stage of the pipeline rejects the expression, the first violation
/// found is returned.
pub fn convert_to_postfix(expression: &str) -> Result<Postfix> {
    convert_to_postfix_with(expression, &Options::default())
}

/// Converts an infix expression into postfix.
///
/// # Errors
///
/// If any stage of the pipeline rejects the expression, the first violation
/// found is returned.
pub fn convert_to_postfix_with(expression: &str, options: &Options) -> Result<Postfix> {
    let result = run_pipeline(expression, options);
    match &result {
        Ok(postfix) => log::debug!("{expression:?} => {postfix}"),
        Err(err) => log::debug!("{expression:?} rejected: {err}"),
    }
    result
}

fn run_pipeline(expression: &str, options: &Options) -> Result<Postfix> {
    let tokens = expand_quantifiers(tokenize(expression)?)?;
    validate(&tokens)?;
    to_postfix(insert_concatenation(tokens, options.concat), options)
}
