use std::fmt;

/// A regular expression operator taking part in precedence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`
    Caret,
    /// `*`. Zero or more.
    Star,
    /// `·`. Concatenation, never written by the user.
    Concat,
    /// `|`
    Alternation,
}

impl Operator {
    /// Returns the character representation of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Caret => '^',
            Operator::Star => '*',
            Operator::Concat => '·',
            Operator::Alternation => '|',
        }
    }

    /// Returns the number of operands the operator consumes when the postfix
    /// sequence is evaluated.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Operator::Star => 1,
            Operator::Caret | Operator::Concat | Operator::Alternation => 2,
        }
    }
}

/// An expression token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A normal character.
    Literal(char),
    /// A character escaped by `\`.
    EscapedLiteral(char),
    /// A bracketed class like `[a-z]`, brackets included.
    CharClass(String),
    /// `^`, `*`, `|`, or an inserted concatenation.
    Operator(Operator),
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
    /// `ε`. Only produced by expanding `?`.
    Empty,
    /// `+`. Removed by quantifier expansion.
    Plus,
    /// `?`. Removed by quantifier expansion.
    Question,
}

impl Token {
    /// The empty string marker.
    pub const EMPTY_SYMBOL: char = 'ε';

    /// Returns true if the token is something an operator can be applied to.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(
            self,
            Token::Literal(_) | Token::EscapedLiteral(_) | Token::CharClass(_) | Token::Empty
        )
    }

    /// Returns the operator carried by the token, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    #[must_use]
    pub fn is(&self, op: Operator) -> bool {
        self.operator() == Some(op)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "{c}"),
            Token::EscapedLiteral(c) => write!(f, "\\{c}"),
            Token::CharClass(class) => f.write_str(class),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::GroupOpen => f.write_str("("),
            Token::GroupClose => f.write_str(")"),
            Token::Empty => write!(f, "{}", Token::EMPTY_SYMBOL),
            Token::Plus => f.write_str("+"),
            Token::Question => f.write_str("?"),
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Debug, Eq)]
pub struct PosToken {
    /// The start position of the token in the expression, in characters.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl PosToken {
    #[must_use]
    pub fn new(pos: usize, token: impl Into<Token>) -> Self {
        Self {
            pos,
            token: token.into(),
        }
    }
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl PartialEq<Token> for PosToken {
    #[inline]
    fn eq(&self, other: &Token) -> bool {
        self.token == *other
    }
}
