use serde::{Deserialize, Serialize};

use crate::interpreter::token::TokenKind;

/// Represents a literal value written directly in source code.
///
/// It is used in the AST to represent literal expressions and is turned into a
/// runtime [`Value`](crate::interpreter::value::core::Value) on evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Decimal(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal with escapes already decoded.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant except [`Expr::Group`] records the source line it came from;
/// a group reports the line of its inner expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value (number, string, boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable; evaluates to the assigned value.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Group {
        /// The enclosed expression.
        inner: Box<Self>,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use bsl::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    /// let group = Expr::Group { inner: Box::new(expr.clone()) };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// assert_eq!(group.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
            Self::Group { inner } => inner.line_number(),
        }
    }
}

/// Represents a statement.
///
/// A program is an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// A standalone expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A variable declaration using `var`.
    Var {
        /// The name of the variable.
        name:        String,
        /// The initial value of the variable.
        initializer: Expr,
        /// Line number in the source code.
        line:        usize,
    },
    /// `print` or `println`.
    Print {
        /// The value to write.
        expr:    Expr,
        /// Whether a newline follows the value.
        newline: bool,
    },
    /// A braced sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// Conditional statement.
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Expr,
        /// Statement run when the condition holds.
        then_branch: Box<Self>,
        /// Statement run otherwise, if any.
        else_branch: Option<Box<Self>>,
    },
    /// C-style loop. The parser always wraps it in a [`Stmt::Block`] so that
    /// the induction variable is scoped to the loop.
    For {
        /// Optional declaration run once before the loop.
        init:      Option<Box<Self>>,
        /// Loop condition; must evaluate to a boolean.
        condition: Expr,
        /// Optional step run after every pass.
        iterate:   Option<Box<Self>>,
        /// The loop body.
        body:      Box<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Maps an operator token onto its operator, if it is one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Mod,
            TokenKind::Less => Self::Less,
            TokenKind::LessEqual => Self::LessEqual,
            TokenKind::Greater => Self::Greater,
            TokenKind::GreaterEqual => Self::GreaterEqual,
            TokenKind::EqualEqual => Self::Equal,
            TokenKind::NotEqual => Self::NotEqual,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            _ => return None,
        };
        Some(op)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
