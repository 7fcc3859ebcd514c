/// Where a `var` declaration sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// A statement of its own.
    Line,
    /// The first clause of a `for` header.
    ForInit,
}

/// The construct an expression belongs to; decides which token ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    /// A whole statement; ends at end of line, end of input or `}`.
    Line,
    /// An `if` condition; ends at `{`.
    Condition,
    /// The initializer of a `for` declaration; ends at `;`.
    ForInit,
    /// The `for` condition; ends at `;`.
    ForCondition,
    /// The `for` step; ends at the unmatched `)`.
    ForStep,
}

impl Clause {
    /// Describes the token that ends this clause, for error messages.
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::Line => "end of line",
            Self::Condition => "\"{\"",
            Self::ForInit | Self::ForCondition => "\";\"",
            Self::ForStep => "\")\"",
        }
    }
}

/// What opened a brace that is still unclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    /// A bare block or an `else` body.
    Block,
    /// A `for` body.
    Loop,
    /// An `if` body; only its `}` may be followed by `else`.
    If,
}

/// Position of the automaton within the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting the start of a statement, an empty line, `}` or the end.
    Boundary,
    /// After `var`, expecting the name.
    VarName { site: Site },
    /// After `var NAME`, expecting `=`.
    VarEquals { site: Site },
    /// After `print`/`println`; the expression may be empty.
    PrintStart,
    /// Inside an expression, expecting an operand.
    Operand { clause: Clause },
    /// After an operand, expecting an operator or the end of the clause.
    /// `assignable` holds while the expression so far is a bare name at the
    /// start of a statement.
    Operator { clause: Clause, assignable: bool },
    /// After `for`, expecting `(`.
    ForOpen,
    /// After `for (`, expecting `var` or `;`.
    ForInit,
    /// After the condition's `;`, expecting the step name or `)`.
    ForStep,
    /// After the step name, expecting `=`.
    ForStepEquals,
    /// After the header's `)`, expecting `{`.
    ForBody,
    /// Just after `}`; `after_if` is set when it closed an `if` body.
    Closed { after_if: bool },
    /// After `else`, expecting `if` or `{`.
    ElseBranch,
    /// End of input reached cleanly.
    Done,
}
