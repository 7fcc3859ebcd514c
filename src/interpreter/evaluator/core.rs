use std::io::Write;

use crate::{
    ast::{Expr, Stmt},
    diagnostics::Diagnostics,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            environment::Environment,
            flow::{Check, Execute, Flow},
            unary::eval_unary,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking evaluator.
///
/// Holds the variable scopes and a [`Flow`] policy. The policy decides how
/// branches, loops and output behave, so the same walk serves both the check
/// pass ([`Evaluator::check`]) and execution ([`Evaluator::run`]).
#[derive(Debug)]
pub struct Evaluator<F: Flow> {
    /// Variable scopes; the outermost holds top-level declarations.
    pub environment: Environment,
    pub(in crate::interpreter::evaluator) flow: F,
}

impl<F: Flow> Evaluator<F> {
    /// Creates an evaluator with an empty environment.
    pub fn new(flow: F) -> Self {
        Self { environment: Environment::new(),
               flow }
    }

    /// Consumes the evaluator and returns its policy.
    pub fn into_flow(self) -> F {
        self.flow
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of binary operators are both evaluated, left first, before
    /// the operator is applied. Arithmetic faults go through
    /// [`Flow::absorb`].
    ///
    /// # Example
    /// ```
    /// use bsl::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         evaluator::{core::Evaluator, flow::Check},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut evaluator = Evaluator::new(Check);
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 7.into(),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: 0.into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// // The check pass does not fail on a value-dependent fault.
    /// assert_eq!(evaluator.eval(&expr).unwrap(), Value::Int(0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.environment.get(name, *line).cloned(),
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                eval_unary(*op, &value, *line).or_else(|error| self.flow.absorb(error))
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line).or_else(|error| self.flow.absorb(error))
            },
            Expr::Group { inner } => self.eval(inner),
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating the statement
    /// or anything nested in it. Scopes opened on the way are closed again.
    pub fn eval_statement(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr } => self.eval(expr).map(|_| ()),
            Stmt::Var { name,
                        initializer,
                        line, } => {
                let value = self.eval(initializer)?;
                self.environment.define(name, value, *line)
            },
            Stmt::Print { expr, newline } => {
                let value = self.eval(expr)?;
                self.flow.emit(&value.to_string(), *newline)
            },
            Stmt::Block { statements } => self.eval_block(statements),
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Stmt::For { init,
                        condition,
                        iterate,
                        body, } => self.eval_for(init.as_deref(), condition, iterate.as_deref(), body),
        }
    }

    /// Runs `statements` in a fresh scope.
    ///
    /// The scope is popped whether or not a statement fails.
    pub fn eval_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push();
        let result = statements.iter()
                               .try_for_each(|statement| self.eval_statement(statement));
        self.environment.pop();
        result
    }
}

impl Evaluator<Check> {
    /// Type-checks a program without producing output.
    ///
    /// Every top-level statement is evaluated with the [`Check`] policy. A
    /// failing statement is recorded into `diagnostics`, the scopes are
    /// unwound and checking continues with the next statement.
    ///
    /// # Returns
    /// `true` if no statement failed.
    ///
    /// # Example
    /// ```
    /// use bsl::{
    ///     diagnostics::Diagnostics,
    ///     interpreter::{
    ///         evaluator::{core::Evaluator, flow::Check},
    ///         lexer::scan,
    ///         parser::parse_program,
    ///     },
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = scan("var a = 1\nif false { a = \"oops\" }\n", &mut diagnostics);
    /// let program = parse_program(&tokens, &mut diagnostics);
    ///
    /// // The branch is never taken at run time, but it is still checked.
    /// assert!(!Evaluator::<Check>::check(&program, &mut diagnostics));
    /// ```
    pub fn check(program: &[Stmt], diagnostics: &mut Diagnostics) -> bool {
        let mut evaluator = Self::new(Check);
        let before = diagnostics.error_count();

        for statement in program {
            if let Err(error) = evaluator.eval_statement(statement) {
                diagnostics.record(&error);
                evaluator.environment.unwind();
            }
        }

        let errors = diagnostics.error_count() - before;
        tracing::debug!(statements = program.len(), errors, "checked program");
        errors == 0
    }
}

impl<W: Write> Evaluator<Execute<W>> {
    /// Executes a program, writing its output to `out`.
    ///
    /// # Returns
    /// The output sink, flushed.
    ///
    /// # Errors
    /// Stops at the first `RuntimeError`.
    pub fn run(program: &[Stmt], out: W) -> EvalResult<W> {
        let mut evaluator = Self::new(Execute::new(out));
        for statement in program {
            evaluator.eval_statement(statement)?;
        }
        tracing::debug!(statements = program.len(), "executed program");
        evaluator.into_flow().finish()
    }
}
