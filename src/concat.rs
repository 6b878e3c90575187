use super::{
    lexer::{Operator, PosToken, Token},
    options::ConcatRule,
};

/// Makes implicit juxtaposition explicit by inserting [`Operator::Concat`]
/// between neighbouring tokens, as decided by `rule`.
#[must_use]
pub fn insert_concatenation(tokens: Vec<PosToken>, rule: ConcatRule) -> Vec<PosToken> {
    let mut out: Vec<PosToken> = Vec::with_capacity(tokens.len() * 2);

    for pos_token in tokens {
        if let Some(prev) = out.last()
            && rule.joins(prev, &pos_token)
        {
            out.push(PosToken::new(pos_token.pos, Operator::Concat));
        }
        out.push(pos_token);
    }

    log::trace!("inserted concatenation: {} tokens", out.len());
    out
}

impl ConcatRule {
    fn joins(self, left: &Token, right: &Token) -> bool {
        match self {
            ConcatRule::Operands => {
                (left.is_operand() || *left == Token::GroupClose)
                    && (right.is_operand() || *right == Token::GroupOpen)
            }
            ConcatRule::Juxtaposed => {
                !matches!(
                    left,
                    Token::GroupOpen | Token::Operator(Operator::Alternation)
                ) && !matches!(
                    right,
                    Token::GroupClose | Token::Operator(Operator::Alternation)
                )
            }
        }
    }
}
