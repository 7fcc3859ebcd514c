/// Automaton states and the brace and clause markers they carry.
pub mod state;

/// Name-set stack used to check declarations and references.
pub mod scope;

use crate::{
    diagnostics::Diagnostics,
    error::ParseError,
    interpreter::{
        token::{Token, TokenKind},
        validator::{
            scope::ScopeTable,
            state::{Brace, Clause, Site, State},
        },
    },
};

/// Outcome of feeding one token to the automaton.
type Step = Result<State, ParseError>;

/// Pre-parse checker for grammar and name visibility.
///
/// A finite-state automaton over token kinds. It keeps a stack of open braces,
/// the parenthesis depth of the current expression and a table of declared
/// names, and reports one error per offending statement before skipping to
/// the next line.
///
/// A validator can be reused; every call to [`Validator::validate`] starts
/// from a clean state.
///
/// # Example
/// ```
/// use bsl::{
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, validator::Validator},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let mut validator = Validator::new();
///
/// let tokens = scan("var x = 1\nprintln(x)\n", &mut diagnostics);
/// assert!(validator.validate(&tokens, &mut diagnostics));
///
/// let tokens = scan("println(y)\n", &mut diagnostics);
/// assert!(!validator.validate(&tokens, &mut diagnostics));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    state:       State,
    braces:      Vec<Brace>,
    parens:      usize,
    scopes:      ScopeTable,
    /// Name of a `var` whose declaration has not ended yet.
    pending:     Option<String>,
    /// Set between an `if`/`for` keyword and the `{` of its body, while the
    /// header's scope is open but its brace is not.
    open_header: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self { state:       State::Boundary,
               braces:      Vec::new(),
               parens:      0,
               scopes:      ScopeTable::default(),
               pending:     None,
               open_header: false, }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Checks a complete token sequence.
    ///
    /// Every problem found is recorded into `diagnostics`; checking continues
    /// on the next line after each one.
    ///
    /// # Parameters
    /// - `tokens`: Output of the scanner, ending with `Eof`.
    /// - `diagnostics`: Receives the errors.
    ///
    /// # Returns
    /// `true` if no error was reported during this call.
    pub fn validate(&mut self, tokens: &[Token], diagnostics: &mut Diagnostics) -> bool {
        self.reset();
        let before = diagnostics.error_count();

        let mut index = 0;
        while let Some(token) = tokens.get(index) {
            match self.advance(token) {
                Ok(State::Done) => {
                    self.state = State::Done;
                    break;
                },
                Ok(next) => {
                    self.state = next;
                    index += 1;
                },
                Err(error) => {
                    diagnostics.record(&error);
                    index = self.recover(tokens, index);
                },
            }
        }

        let errors = diagnostics.error_count() - before;
        tracing::debug!(tokens = tokens.len(), errors, "validated token stream");
        errors == 0
    }

    /// Computes the next state for `token`.
    fn advance(&mut self, token: &Token) -> Step {
        use TokenKind as K;

        let line = token.line;
        match (self.state, token.kind) {
            (State::Done, _) => Ok(State::Done),

            (State::Boundary, K::Eol) => Ok(State::Boundary),
            (State::Boundary, K::Eof) => self.finish(line),
            (State::Boundary, K::Var) => Ok(State::VarName { site: Site::Line }),
            (State::Boundary, K::Print | K::Println) => Ok(State::PrintStart),
            (State::Boundary, K::If) => Ok(self.open_if()),
            (State::Boundary, K::For) => {
                self.scopes.enter();
                self.open_header = true;
                Ok(State::ForOpen)
            },
            (State::Boundary, K::LeftBrace) => Ok(self.open(Brace::Block)),
            (State::Boundary | State::Closed { .. }, K::RightBrace) => self.close(line),
            (State::Boundary, K::Else) => Err(ParseError::DanglingElse { line }),
            (State::Boundary | State::PrintStart, K::Identifier) => {
                self.reference(token)?;
                Ok(State::Operator { clause:     Clause::Line,
                                     assignable: true, })
            },
            (State::Boundary, _) => self.operand(Clause::Line, token),

            (State::VarName { site }, K::Identifier) => {
                let name = token.text().unwrap_or_default();
                if self.scopes.declared_here(name) {
                    return Err(ParseError::NameReserved { name: name.to_string(),
                                                          line });
                }
                self.pending = Some(name.to_string());
                Ok(State::VarEquals { site })
            },
            (State::VarName { .. }, found) => Err(ParseError::Expected { expected: "variable name",
                                                                         found,
                                                                         line }),
            (State::VarEquals { site }, K::Equal) => {
                let clause = match site {
                    Site::Line => Clause::Line,
                    Site::ForInit => Clause::ForInit,
                };
                Ok(State::Operand { clause })
            },
            (State::VarEquals { .. }, found) => Err(ParseError::Expected { expected: "\"=\"",
                                                                           found,
                                                                           line }),

            (State::PrintStart, K::Eol | K::Eof | K::RightBrace) => self.end_line(token),
            (State::PrintStart, _) => self.operand(Clause::Line, token),

            (State::Operand { clause }, _) => self.operand(clause, token),
            (State::Operator { clause, assignable }, kind) => {
                self.operator(clause, assignable, kind, token)
            },

            (State::ForOpen, K::LeftParen) => Ok(State::ForInit),
            (State::ForOpen, found) => Err(ParseError::Expected { expected: "\"(\"",
                                                                  found,
                                                                  line }),
            (State::ForInit, K::Var) => Ok(State::VarName { site: Site::ForInit }),
            (State::ForInit, K::Semicolon) => {
                Ok(State::Operand { clause: Clause::ForCondition })
            },
            (State::ForInit, found) => {
                Err(ParseError::Expected { expected: "\"var\" or \";\"",
                                           found,
                                           line })
            },
            (State::ForStep, K::Identifier) => {
                self.reference(token)?;
                Ok(State::ForStepEquals)
            },
            (State::ForStep, K::RightParen) => Ok(State::ForBody),
            (State::ForStep, found) => Err(ParseError::Expected { expected: "variable name or \")\"",
                                                                  found,
                                                                  line }),
            (State::ForStepEquals, K::Equal) => Ok(State::Operand { clause: Clause::ForStep }),
            (State::ForStepEquals, found) => Err(ParseError::Expected { expected: "\"=\"",
                                                                        found,
                                                                        line }),
            (State::ForBody, K::LeftBrace) => Ok(self.open(Brace::Loop)),
            (State::ForBody, found) => Err(ParseError::Expected { expected: "\"{\"",
                                                                  found,
                                                                  line }),

            (State::Closed { .. }, K::Eol) => Ok(State::Boundary),
            (State::Closed { .. }, K::Eof) => self.finish(line),
            (State::Closed { after_if: true }, K::Else) => Ok(State::ElseBranch),
            (State::Closed { after_if: false }, K::Else) => Err(ParseError::DanglingElse { line }),
            (State::Closed { .. }, found) => Err(ParseError::Expected { expected: "end of line",
                                                                        found,
                                                                        line }),

            (State::ElseBranch, K::If) => Ok(self.open_if()),
            (State::ElseBranch, K::LeftBrace) => Ok(self.open(Brace::Block)),
            (State::ElseBranch, found) => Err(ParseError::Expected { expected: "\"if\" or \"{\"",
                                                                     found,
                                                                     line }),
        }
    }

    /// Handles a token where an operand is expected.
    fn operand(&mut self, clause: Clause, token: &Token) -> Step {
        match token.kind {
            TokenKind::LeftParen => {
                self.parens += 1;
                Ok(State::Operand { clause })
            },
            kind if kind.is_unary_operator() => Ok(State::Operand { clause }),
            TokenKind::Identifier => {
                self.reference(token)?;
                Ok(State::Operator { clause,
                                     assignable: false })
            },
            kind if kind.is_literal() => Ok(State::Operator { clause,
                                                              assignable: false }),
            found => Err(ParseError::ExpectedExpression { found,
                                                          line: token.line }),
        }
    }

    /// Handles a token after a complete operand.
    fn operator(&mut self, clause: Clause, assignable: bool, kind: TokenKind, token: &Token) -> Step {
        let line = token.line;
        if kind.is_binary_operator() {
            return Ok(State::Operand { clause });
        }

        match (clause, kind) {
            (_, TokenKind::RightParen) if self.parens > 0 => {
                self.parens -= 1;
                Ok(State::Operator { clause,
                                     assignable: false })
            },
            (Clause::ForStep, TokenKind::RightParen) => Ok(State::ForBody),
            (_, TokenKind::RightParen) => Err(ParseError::Unbalanced { expected: '(',
                                                                       line }),
            (Clause::Line, TokenKind::Equal) if assignable => Ok(State::Operand { clause }),
            (_, TokenKind::Equal) => Err(ParseError::InvalidAssignmentTarget { line }),
            _ if self.parens > 0 && Self::ends(clause, kind) => {
                Err(ParseError::Unbalanced { expected: ')',
                                             line })
            },
            (Clause::Line, TokenKind::Eol | TokenKind::Eof | TokenKind::RightBrace) => {
                self.end_line(token)
            },
            (Clause::Condition, TokenKind::LeftBrace) => Ok(self.open(Brace::If)),
            (Clause::ForInit, TokenKind::Semicolon) => {
                self.commit();
                Ok(State::Operand { clause: Clause::ForCondition })
            },
            (Clause::ForCondition, TokenKind::Semicolon) => Ok(State::ForStep),
            (_, found) => Err(ParseError::Expected { expected: clause.terminator(),
                                                     found,
                                                     line }),
        }
    }

    /// Whether `kind` ends an expression in `clause`.
    const fn ends(clause: Clause, kind: TokenKind) -> bool {
        matches!((clause, kind),
                 (Clause::Line,
                  TokenKind::Eol | TokenKind::Eof | TokenKind::RightBrace)
                 | (Clause::Condition, TokenKind::LeftBrace)
                 | (Clause::ForInit | Clause::ForCondition, TokenKind::Semicolon))
    }

    /// Ends a line statement on `Eol`, `Eof` or `}`.
    fn end_line(&mut self, token: &Token) -> Step {
        self.commit();
        match token.kind {
            TokenKind::Eof => self.finish(token.line),
            TokenKind::RightBrace => self.close(token.line),
            _ => Ok(State::Boundary),
        }
    }

    fn reference(&self, token: &Token) -> Result<(), ParseError> {
        let name = token.text().unwrap_or_default();
        if self.scopes.is_visible(name) {
            Ok(())
        } else {
            Err(ParseError::UndefinedVariable { name: name.to_string(),
                                                line: token.line })
        }
    }

    /// Declares the pending `var` name in the innermost scope.
    fn commit(&mut self) {
        if let Some(name) = self.pending.take() {
            self.scopes.declare(&name);
        }
    }

    fn open_if(&mut self) -> State {
        self.scopes.enter();
        self.open_header = true;
        State::Operand { clause: Clause::Condition }
    }

    /// Opens a body brace. Loop and `if` bodies reuse the scope their header
    /// already opened.
    fn open(&mut self, brace: Brace) -> State {
        if self.open_header {
            self.open_header = false;
        } else {
            self.scopes.enter();
        }
        self.braces.push(brace);
        State::Boundary
    }

    fn close(&mut self, line: usize) -> Step {
        let Some(brace) = self.braces.pop() else {
            return Err(ParseError::Unbalanced { expected: '{',
                                                line });
        };
        self.scopes.exit();
        Ok(State::Closed { after_if: brace == Brace::If })
    }

    fn finish(&self, line: usize) -> Step {
        if self.braces.is_empty() {
            Ok(State::Done)
        } else {
            Err(ParseError::Unbalanced { expected: '}',
                                         line })
        }
    }

    /// Drops the rest of the offending statement.
    ///
    /// Skips through the next `Eol`, keeping the brace stack and scopes in
    /// step with any braces passed over. A declaration cut short still
    /// declares its name so later lines do not report it again. Returns the
    /// index to resume at.
    fn recover(&mut self, tokens: &[Token], from: usize) -> usize {
        self.commit();
        self.parens = 0;
        if self.open_header {
            self.scopes.exit();
            self.open_header = false;
        }
        self.state = State::Boundary;

        let mut index = from;
        while let Some(token) = tokens.get(index) {
            match token.kind {
                TokenKind::Eol => return index + 1,
                TokenKind::Eof => return tokens.len(),
                TokenKind::LeftBrace => {
                    self.scopes.enter();
                    self.braces.push(Brace::Block);
                },
                TokenKind::RightBrace => {
                    if self.braces.pop().is_some() {
                        self.scopes.exit();
                    }
                },
                _ => {},
            }
            index += 1;
        }
        index
    }
}

/// Checks `tokens` with a fresh [`Validator`].
///
/// # Returns
/// `true` if the program is well formed and every name it uses is declared.
pub fn validate(tokens: &[Token], diagnostics: &mut Diagnostics) -> bool {
    Validator::new().validate(tokens, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::scan;

    fn check(source: &str) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        validate(&tokens, &mut diagnostics);
        diagnostics
    }

    fn messages(source: &str) -> Vec<String> {
        check(source).errors()
                     .map(|d| d.message.clone())
                     .collect()
    }

    #[test]
    fn accepts_nested_control_flow() {
        let source = "var n = 0\n\
                      for (var i = 0; i < 3; i = i + 1) {\n\
                          if (i % 2 == 0) { n = n + i } else if (i == 1) { println(i) } else {\n\
                              print\n\
                          }\n\
                      }\n\
                      println(n)\n";
        assert!(check(source).is_empty());
    }

    #[test]
    fn prefix_operators_stack_before_an_operand() {
        assert!(check("var a = - -1
var b = not not true
print(-(a) * - a)
").is_empty());
        assert_eq!(messages("var c = not
").len(), 1);
    }

    #[test]
    fn redeclaration_in_same_scope_is_reserved() {
        let errors = messages("var s = \"a\"\nvar s = 2\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("reserved"));
    }

    #[test]
    fn declaration_is_not_visible_in_own_initializer() {
        let errors = messages("var x = x + 1\n");
        assert_eq!(errors, ["Undefined variable name \"x\""]);
    }

    #[test]
    fn block_names_go_out_of_scope() {
        let errors = messages("{\nvar a = 1\n}\nprintln(a)\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("\"a\""));
    }

    #[test]
    fn loop_variable_is_confined_to_loop() {
        let errors = messages("for (var i = 0; i < 1; i = i + 1) { }\ni = 2\n");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn else_needs_an_if_body() {
        assert_eq!(messages("{ }\nelse { }\n").len(), 1);
        assert_eq!(messages("{ } else { }\n").len(), 1);
        assert!(messages("var b = true\nif b { } else { }\n").is_empty());
    }

    #[test]
    fn one_error_per_statement() {
        let errors = messages("var x = 1 +\nvar y = * 2\nprintln(x)\n");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn unbalanced_delimiters_are_reported() {
        assert_eq!(messages("println((1 + 2)\n"), ["Expected \")\", but not found"]);
        assert_eq!(messages("println(1 + 2))\n"), ["Expected \"(\", but not found"]);
        assert_eq!(messages("{\nprintln(1)\n"), ["Expected \"}\", but not found"]);
        assert_eq!(messages("}\n"), ["Expected \"{\", but not found"]);
    }

    #[test]
    fn only_bare_names_are_assignable() {
        assert!(messages("var a = 1\na = 2\n").is_empty());
        assert_eq!(messages("var a = 1\n(a) = 2\n"), ["Invalid assignment target"]);
        assert_eq!(messages("var a = 1\nvar b = a = 2\n"), ["Invalid assignment target"]);
    }

    #[test]
    fn validator_is_reusable() {
        let mut diagnostics = Diagnostics::new();
        let mut validator = Validator::new();
        let broken = scan("{\n", &mut diagnostics);
        let fine = scan("var a = 1\n", &mut diagnostics);
        assert!(!validator.validate(&broken, &mut diagnostics));
        assert!(validator.validate(&fine, &mut diagnostics));
    }
}
