use super::{
    Error, Result,
    lexer::{Operator, PosToken, Token},
    options::Options,
};
use std::fmt;

pub mod precedence;

pub use self::precedence::{Assoc, Precedence};

/// A postfix token sequence.
///
/// Dereferences to the internal form, concatenation included. The
/// [`Display`](fmt::Display) form omits concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::ops::Deref for Postfix {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl PartialEq<&[Token]> for Postfix {
    fn eq(&self, other: &&[Token]) -> bool {
        self.tokens == *other
    }
}

impl<const N: usize> PartialEq<[Token; N]> for Postfix {
    fn eq(&self, other: &[Token; N]) -> bool {
        self.tokens == other
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens
            .iter()
            .filter(|token| !token.is(Operator::Concat))
            .try_for_each(|token| write!(f, "{token}"))
    }
}

/// An entry of the operator stack. Operands never go there.
enum Pending {
    Operator(Operator),
    Open { pos: usize },
}

/// Reorders an infix token sequence with explicit concatenation into postfix.
///
/// # Errors
///
/// Only with [`Options::strict_groups`] set: an unmatched `(` or `)` is
/// returned as [`Error::UnbalancedGroup`]. Otherwise a stray `)` empties the
/// operator stack and a leftover `(` is emitted as is.
pub fn to_postfix(tokens: Vec<PosToken>, options: &Options) -> Result<Postfix> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for PosToken { pos, token } in tokens {
        match token {
            Token::GroupOpen => stack.push(Pending::Open { pos }),
            Token::GroupClose => {
                let mut matched = false;
                while let Some(pending) = stack.pop() {
                    match pending {
                        Pending::Operator(op) => output.push(Token::Operator(op)),
                        Pending::Open { .. } => {
                            matched = true;
                            break;
                        }
                    }
                }
                if !matched && options.strict_groups {
                    return Err(Error::UnbalancedGroup { pos });
                }
            }
            Token::Operator(op) => {
                let incoming = Precedence::of(op);
                while let Some(&Pending::Operator(top)) = stack.last()
                    && Precedence::of(top).yields_to(incoming)
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(op));
            }
            operand => output.push(operand),
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Open { pos } if options.strict_groups => {
                return Err(Error::UnbalancedGroup { pos });
            }
            Pending::Open { .. } => output.push(Token::GroupOpen),
        }
    }

    log::trace!("postfix has {} tokens", output.len());
    Ok(Postfix { tokens: output })
}
