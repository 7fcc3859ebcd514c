/// The evaluator module walks statement trees.
///
/// One evaluator serves two purposes, chosen by its control-flow policy:
/// checking a program's types without running it, and running it.
///
/// # Responsibilities
/// - Evaluates expressions and statements, including numeric promotion and
///   string concatenation.
/// - Manages nested scopes and keeps every variable to its first kind.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a literal, identifier, keyword, operator or delimiter.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and line.
/// - Decodes numeric and string literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds statement trees from tokens.
///
/// # Responsibilities
/// - Converts tokens into expressions and statements with correct
///   precedence and associativity.
/// - Lowers `for` loops into scoped blocks.
/// - Recovers from a broken statement and keeps parsing.
pub mod parser;
/// Token model shared by the scanner, validator and parser.
pub mod token;
/// The validator checks a token stream before it is parsed.
///
/// # Responsibilities
/// - Checks the statement grammar with a finite-state automaton.
/// - Tracks braces, parentheses and `if`/`else` pairing.
/// - Checks that every referenced name is declared in a visible scope and
///   that no name is declared twice in one scope.
pub mod validator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Kind` a variable is pinned to.
/// - Converts literals into values and values into their printed text.
pub mod value;
