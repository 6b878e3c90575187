use super::{Error, Result};

pub mod token;

pub use token::{Operator, PosToken, Token};

const ESCAPE: char = '\\';
const CLASS_OPEN: char = '[';
const CLASS_CLOSE: char = ']';

/// Splits an expression into tokens.
///
/// # Errors
///
/// If the expression ends inside an escape sequence or a character class, an
/// [`Error`] is returned.
pub fn tokenize(expression: &str) -> Result<Vec<PosToken>> {
    let chars = expression.chars().collect::<Vec<_>>();
    let tokens = Lexer::new(&chars).collect::<Result<Vec<_>>>()?;
    log::trace!("tokenized {expression:?} into {} tokens", tokens.len());
    Ok(tokens)
}

fn classify(c: char) -> Token {
    match c {
        '(' => Token::GroupOpen,
        ')' => Token::GroupClose,
        '^' => Token::Operator(Operator::Caret),
        '*' => Token::Operator(Operator::Star),
        '|' => Token::Operator(Operator::Alternation),
        '+' => Token::Plus,
        '?' => Token::Question,
        _ => Token::Literal(c),
    }
}

/// A cursor over the characters of an expression.
pub struct Lexer<'a> {
    input: &'a [char],
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a [char]) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Returns the current position in the input.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let start = self.pos;
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            ESCAPE => self.scan_escape(start)?,
            CLASS_OPEN => self.scan_class(start)?,
            _ => classify(c),
        };

        Ok(Some(PosToken::new(start, token)))
    }

    /// Consumes the character following an escape marker at `start`.
    fn scan_escape(&mut self, start: usize) -> Result<Token> {
        self.advance()
            .map(Token::EscapedLiteral)
            .ok_or(Error::UnterminatedEscape { pos: start })
    }

    /// Consumes a character class opened at `start` up to and including its
    /// first unescaped closing bracket.
    fn scan_class(&mut self, start: usize) -> Result<Token> {
        loop {
            match self.advance() {
                Some(CLASS_CLOSE) => break,
                Some(ESCAPE) => {
                    if self.advance().is_none() {
                        return Err(Error::UnterminatedCharClass { pos: start });
                    }
                }
                Some(_) => {}
                None => return Err(Error::UnterminatedCharClass { pos: start }),
            }
        }

        Ok(Token::CharClass(
            self.input[start..self.pos].iter().collect(),
        ))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
