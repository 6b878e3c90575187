use regex_postfix::{
    Error, Result,
    expand::expand_quantifiers,
    lexer::{Operator, PosToken, Token, tokenize},
    validate::validate,
};

fn check(input: &str) -> Result<()> {
    validate(&expand_quantifiers(tokenize(input)?)?)
}

#[test]
fn test_accepts_well_placed_operators() -> Result<()> {
    for input in [
        "a", "ab", "a*", "a**", "a|b", "(a|b)*", "a*|b*", "(a)(b)", "a^b^c", "\\|a",
        "[|]*", "a+", "a?", "a?|b+", "()", "", "a)", "(a",
    ] {
        check(input)?;
    }
    Ok(())
}

#[test]
fn test_misplaced_repetition() {
    assert_eq!(check("*a"), Err(Error::MisplacedRepetition { pos: 0 }));
    assert_eq!(check("a|*b"), Err(Error::MisplacedRepetition { pos: 2 }));
    assert_eq!(check("(*a)"), Err(Error::MisplacedRepetition { pos: 1 }));
    // `a*?` expands to `a ( * | ε )`.
    assert_eq!(check("a*?"), Err(Error::MisplacedRepetition { pos: 1 }));
}

#[test]
fn test_misplaced_alternation() {
    assert_eq!(check("|a"), Err(Error::MisplacedAlternation { pos: 0 }));
    assert_eq!(check("a||b"), Err(Error::MisplacedAlternation { pos: 2 }));
}

#[test]
fn test_trailing_operator() {
    assert_eq!(
        check("a|"),
        Err(Error::TrailingOperator {
            pos: 1,
            token: Token::Operator(Operator::Alternation)
        })
    );
    assert_eq!(
        check("ab("),
        Err(Error::TrailingOperator {
            pos: 2,
            token: Token::GroupOpen
        })
    );
    assert_eq!(
        check("("),
        Err(Error::TrailingOperator {
            pos: 0,
            token: Token::GroupOpen
        })
    );
}

#[test]
fn test_first_violation_wins() {
    assert_eq!(check("*|"), Err(Error::MisplacedRepetition { pos: 0 }));
    assert_eq!(check("a||"), Err(Error::MisplacedAlternation { pos: 2 }));
}

#[test]
fn test_unexpanded_quantifier_rejected() {
    let tokens = [
        PosToken::new(0, Token::Literal('a')),
        PosToken::new(1, Token::Plus),
    ];
    assert_eq!(
        validate(&tokens),
        Err(Error::DanglingQuantifier {
            pos: 1,
            quantifier: '+'
        })
    );
}
