//! Pipeline configuration.

/// Decides between which neighbouring tokens a concatenation is inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConcatRule {
    /// Only between the end of an operand (an operand or `)`) and the start of
    /// the next one (an operand or `(`). `*` and `^` then act as infix
    /// operators between their neighbours, so `a*b*c` becomes `ab*c*`.
    #[default]
    Operands,
    /// Between every pair except those with `|` or `(` on the left, or `|` or
    /// `)` on the right. Operators are juxtaposed like operands, so `a^b`
    /// becomes `a·^·b`.
    Juxtaposed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject unbalanced parentheses instead of absorbing them.
    pub strict_groups: bool,
    pub concat: ConcatRule,
}

impl Options {
    #[must_use]
    pub const fn strict() -> Self {
        Options {
            strict_groups: true,
            concat: ConcatRule::Operands,
        }
    }

    #[must_use]
    pub const fn with_concat(mut self, concat: ConcatRule) -> Self {
        self.concat = concat;
        self
    }
}
