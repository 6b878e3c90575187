use regex_postfix::{
    ConcatRule, Result,
    concat::insert_concatenation,
    expand::expand_quantifiers,
    lexer::tokenize,
};

/// Renders the token sequence with `·` marking each inserted concatenation.
fn joined(input: &str, rule: ConcatRule) -> Result<String> {
    Ok(insert_concatenation(expand_quantifiers(tokenize(input)?)?, rule)
        .iter()
        .map(|pos_token| pos_token.token.to_string())
        .collect())
}

#[test]
fn test_operands_rule() -> Result<()> {
    let rule = ConcatRule::Operands;
    assert_eq!(joined("ab", rule)?, "a·b");
    assert_eq!(joined("abc", rule)?, "a·b·c");
    assert_eq!(joined("a(b|c)", rule)?, "a·(b|c)");
    assert_eq!(joined("(a)(b)", rule)?, "(a)·(b)");
    assert_eq!(joined("(a)b", rule)?, "(a)·b");
    assert_eq!(joined("a|b", rule)?, "a|b");
    assert_eq!(joined("ab*", rule)?, "a·b*");
    assert_eq!(joined("a*b", rule)?, "a*b");
    assert_eq!(joined("a^b", rule)?, "a^b");
    assert_eq!(joined("\\*a", rule)?, "\\*·a");
    assert_eq!(joined("[ab]c", rule)?, "[ab]·c");
    assert_eq!(joined("a?b", rule)?, "(a|ε)·b");
    assert_eq!(joined("a+", rule)?, "a·a*");
    Ok(())
}

#[test]
fn test_juxtaposed_rule() -> Result<()> {
    let rule = ConcatRule::Juxtaposed;
    assert_eq!(joined("ab", rule)?, "a·b");
    assert_eq!(joined("a(b|c)", rule)?, "a·(b|c)");
    assert_eq!(joined("(a)(b)", rule)?, "(a)·(b)");
    assert_eq!(joined("a*b", rule)?, "a·*·b");
    assert_eq!(joined("a^b", rule)?, "a·^·b");
    assert_eq!(joined("a|b*", rule)?, "a|b·*");
    assert_eq!(joined("a?", rule)?, "(a|ε)");
    Ok(())
}

#[test]
fn test_single_and_empty() -> Result<()> {
    assert_eq!(joined("a", ConcatRule::Operands)?, "a");
    assert_eq!(joined("", ConcatRule::Operands)?, "");
    Ok(())
}

#[test]
fn test_inserted_position_is_right_neighbour() -> Result<()> {
    let tokens = insert_concatenation(tokenize("ab")?, ConcatRule::Operands);
    assert_eq!(tokens.iter().map(|t| t.pos).collect::<Vec<_>>(), vec![0, 1, 1]);
    Ok(())
}
