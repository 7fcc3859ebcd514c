use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Decides how the evaluator treats branches, loops, output and arithmetic
/// faults.
///
/// Expression semantics are shared; only these decisions differ between
/// checking a program and running it.
pub trait Flow {
    /// Which arms of an `if` to visit, as `(then, else)`.
    fn arms(&self, condition: bool) -> (bool, bool);

    /// Whether a loop makes another pass, given its condition and the number
    /// of passes made so far.
    fn repeat(&self, condition: bool, passes: usize) -> bool;

    /// Handles the text of a `print` (`newline` for `println`).
    fn emit(&mut self, text: &str, newline: bool) -> EvalResult<()>;

    /// Either turns a failed computation into a stand-in value or passes the
    /// error on.
    fn absorb(&self, error: RuntimeError) -> EvalResult<Value>;
}

/// Type-checking policy.
///
/// Both arms of every `if` are visited and every loop body runs exactly once,
/// so each statement is evaluated at least once whatever the data. Output is
/// discarded. Division by zero and overflow depend on concrete values rather
/// than types, so they yield an integer placeholder instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Check;

impl Flow for Check {
    fn arms(&self, _condition: bool) -> (bool, bool) {
        (true, true)
    }

    fn repeat(&self, _condition: bool, passes: usize) -> bool {
        passes == 0
    }

    fn emit(&mut self, _text: &str, _newline: bool) -> EvalResult<()> {
        Ok(())
    }

    fn absorb(&self, error: RuntimeError) -> EvalResult<Value> {
        if error.is_value_fault() {
            Ok(Value::Int(0))
        } else {
            Err(error)
        }
    }
}

/// Execution policy: real control flow, output written to `out`.
#[derive(Debug)]
pub struct Execute<W: Write> {
    out: W,
}

impl<W: Write> Execute<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Flushes and returns the output sink.
    pub fn finish(mut self) -> EvalResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Flow for Execute<W> {
    fn arms(&self, condition: bool) -> (bool, bool) {
        (condition, !condition)
    }

    fn repeat(&self, condition: bool, _passes: usize) -> bool {
        condition
    }

    fn emit(&mut self, text: &str, newline: bool) -> EvalResult<()> {
        self.out.write_all(text.as_bytes())?;
        if newline {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn absorb(&self, error: RuntimeError) -> EvalResult<Value> {
        Err(error)
    }
}
