use super::{
    Error, Result,
    lexer::{Operator, PosToken, Token},
};

/// Checks operator placement in an expanded token sequence.
///
/// Parenthesis balance is not checked here.
///
/// # Errors
///
/// The first misplaced operator found is returned as an [`Error`].
pub fn validate(tokens: &[PosToken]) -> Result<()> {
    let mut prev: Option<&Token> = None;

    for PosToken { pos, token } in tokens {
        let pos = *pos;
        match token {
            Token::Operator(Operator::Star)
                if matches!(
                    prev,
                    None | Some(Token::GroupOpen | Token::Operator(Operator::Alternation))
                ) =>
            {
                return Err(Error::MisplacedRepetition { pos });
            }
            Token::Operator(Operator::Alternation)
                if matches!(prev, None | Some(Token::Operator(Operator::Alternation))) =>
            {
                return Err(Error::MisplacedAlternation { pos });
            }
            Token::Plus => {
                return Err(Error::DanglingQuantifier {
                    pos,
                    quantifier: '+',
                });
            }
            Token::Question => {
                return Err(Error::DanglingQuantifier {
                    pos,
                    quantifier: '?',
                });
            }
            _ => {}
        }
        prev = Some(token);
    }

    if let Some(last) = tokens.last()
        && matches!(
            last.token,
            Token::GroupOpen | Token::Operator(Operator::Alternation)
        )
    {
        return Err(Error::TrailingOperator {
            pos: last.pos,
            token: last.token.clone(),
        });
    }

    Ok(())
}
