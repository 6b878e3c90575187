use super::{
    Error, Result,
    lexer::{Operator, PosToken, Token},
};

/// Rewrites `+` and `?` in terms of `*` and the empty marker.
///
/// Each quantifier applies to exactly the token written before it:
///
/// - `X+` becomes `X X *`
/// - `X?` becomes `( X | ε )`
///
/// # Errors
///
/// If a quantifier starts the expression, or follows `|`, `^` or `(`, an
/// [`Error::DanglingQuantifier`] is returned.
pub fn expand_quantifiers(tokens: Vec<PosToken>) -> Result<Vec<PosToken>> {
    let mut out: Vec<PosToken> = Vec::with_capacity(tokens.len());

    for pos_token in tokens {
        let PosToken { pos, token } = pos_token;
        let quantifier = match token {
            Token::Plus => '+',
            Token::Question => '?',
            token => {
                out.push(PosToken { pos, token });
                continue;
            }
        };

        let Some(prev) = out.pop().filter(|prev| accepts_quantifier(prev)) else {
            return Err(Error::DanglingQuantifier { pos, quantifier });
        };

        if quantifier == '+' {
            out.push(prev.clone());
            out.push(prev);
            out.push(PosToken::new(pos, Operator::Star));
        } else {
            out.extend([
                PosToken::new(pos, Token::GroupOpen),
                prev,
                PosToken::new(pos, Operator::Alternation),
                PosToken::new(pos, Token::Empty),
                PosToken::new(pos, Token::GroupClose),
            ]);
        }
    }

    log::trace!("expanded quantifiers into {} tokens", out.len());
    Ok(out)
}

fn accepts_quantifier(token: &Token) -> bool {
    !matches!(
        token,
        Token::GroupOpen | Token::Operator(Operator::Alternation | Operator::Caret)
    )
}
