use crate::lexer::Operator;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// The rank and associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    pub rank: u8,
    pub assoc: Assoc,
}

/// Every operator with its precedence, tightest binding first.
pub const TABLE: [(Operator, Precedence); 4] = [
    (Operator::Caret, Precedence::new(4, Assoc::Right)),
    (Operator::Star, Precedence::new(3, Assoc::Left)),
    (Operator::Concat, Precedence::new(2, Assoc::Left)),
    (Operator::Alternation, Precedence::new(1, Assoc::Left)),
];

impl Precedence {
    const fn new(rank: u8, assoc: Assoc) -> Self {
        Precedence { rank, assoc }
    }

    /// Looks up `op` in [`TABLE`].
    #[must_use]
    pub const fn of(op: Operator) -> Self {
        match op {
            Operator::Caret => TABLE[0].1,
            Operator::Star => TABLE[1].1,
            Operator::Concat => TABLE[2].1,
            Operator::Alternation => TABLE[3].1,
        }
    }

    /// Returns true if an operator with this precedence, already on the stack,
    /// must be emitted before `incoming` is pushed.
    #[must_use]
    pub fn yields_to(self, incoming: Self) -> bool {
        self.rank > incoming.rank || (self.rank == incoming.rank && incoming.assoc == Assoc::Left)
    }
}
