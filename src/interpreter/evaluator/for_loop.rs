use crate::{
    ast::{Expr, Stmt},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        flow::Flow,
    },
};

impl<F: Flow> Evaluator<F> {
    /// Evaluates an `if` statement.
    ///
    /// The condition must be a boolean. Which arms run is up to the policy:
    /// execution takes one, the check pass visits both.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     condition: &Expr,
                                                     then_branch: &Stmt,
                                                     else_branch: Option<&Stmt>)
                                                     -> EvalResult<()> {
        let holds = self.eval(condition)?
                        .as_bool(condition.line_number())?;
        let (run_then, run_else) = self.flow.arms(holds);

        if run_then {
            self.eval_statement(then_branch)?;
        }
        if run_else && let Some(else_branch) = else_branch {
            self.eval_statement(else_branch)?;
        }
        Ok(())
    }

    /// Evaluates a `for` loop.
    ///
    /// Runs `init` once, then alternates condition, body and step for as long
    /// as the policy repeats. The enclosing block the parser wraps around the
    /// loop scopes the induction variable; the body gets its own scope on
    /// every pass.
    pub(in crate::interpreter::evaluator) fn eval_for(&mut self,
                                                      init: Option<&Stmt>,
                                                      condition: &Expr,
                                                      iterate: Option<&Stmt>,
                                                      body: &Stmt)
                                                      -> EvalResult<()> {
        if let Some(init) = init {
            self.eval_statement(init)?;
        }

        let mut passes = 0;
        loop {
            let holds = self.eval(condition)?
                            .as_bool(condition.line_number())?;
            if !self.flow.repeat(holds, passes) {
                break;
            }
            self.eval_statement(body)?;
            if let Some(iterate) = iterate {
                self.eval_statement(iterate)?;
            }
            passes += 1;
        }
        Ok(())
    }
}
