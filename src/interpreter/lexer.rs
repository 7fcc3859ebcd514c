use logos::{Lexer, Logos};

use crate::{
    diagnostics::Diagnostics,
    error::ScanError,
    interpreter::token::{Token, TokenData, TokenKind},
};

/// Raw lexical units as recognized by the generated automaton.
///
/// This is private to the scanner; [`scan`] maps it onto the public
/// [`Token`] model, attaching line numbers and reporting problems.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Decimal literals such as `3.25`. A trailing dot is not part of it.
    /// Fails for literals that overflow to infinity.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok().filter(|d| d.is_finite()))]
    Decimal(f64),
    /// Integer literals such as `42`; fails for values outside `i64`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),
    /// String literals; the callback consumes everything up to the closing quote.
    #[token("\"", lex_string)]
    Str(StringLiteral),
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("var")]
    Var,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("print")]
    Print,
    #[token("println")]
    Println,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Equals,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    /// A lone `!`; only valid as part of `!=`.
    #[token("!")]
    Bang,
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// State carried by the generated lexer between tokens.
struct LexerExtras {
    /// Current 1-based source line.
    line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Payload of a string lexeme.
#[derive(Debug, Clone, PartialEq)]
struct StringLiteral {
    /// Decoded contents without the quotes.
    text:       String,
    /// Lines reached through raw newlines inside the literal.
    breaks:     Vec<usize>,
    /// Whether a closing quote was found.
    terminated: bool,
}

/// Consumes a string literal after its opening quote.
///
/// Recognizes the escapes `\"`, `\\`, `\n` and `\t`; any other backslash is
/// kept literally. Raw newlines are kept in the text and advance the line
/// counter.
fn lex_string(lex: &mut Lexer<'_, Lexeme>) -> StringLiteral {
    let mut text = String::new();
    let mut breaks = Vec::new();
    let mut line = lex.extras.line;
    let mut consumed = 0;
    let mut terminated = false;

    let mut chars = lex.remainder().char_indices();
    while let Some((offset, c)) = chars.next() {
        consumed = offset + c.len_utf8();
        match c {
            '"' => {
                terminated = true;
                break;
            },
            '\\' => {
                let Some((offset, escaped)) = chars.next() else {
                    break;
                };
                consumed = offset + escaped.len_utf8();
                match escaped {
                    'n' => text.push('\n'),
                    't' => text.push('\t'),
                    '"' | '\\' => text.push(escaped),
                    '\n' => {
                        line += 1;
                        breaks.push(line);
                        text.push('\n');
                    },
                    other => {
                        text.push('\\');
                        text.push(other);
                    },
                }
            },
            '\n' => {
                line += 1;
                breaks.push(line);
                text.push('\n');
            },
            other => text.push(other),
        }
    }

    lex.extras.line = line;
    lex.bump(consumed);
    StringLiteral { text,
                    breaks,
                    terminated }
}

/// Splits source text into tokens.
///
/// The returned sequence always ends with exactly one [`TokenKind::Eof`] and
/// never holds two [`TokenKind::Eol`] in a row; blank lines and leading
/// newlines produce nothing. Every lexical problem is recorded into
/// `diagnostics` and scanning carries on past it, so one call reports all of
/// them.
///
/// # Parameters
/// - `source`: The program text.
/// - `diagnostics`: Receives every lexical error.
///
/// # Returns
/// The token sequence, including tokens around any reported error.
///
/// # Example
/// ```
/// use bsl::{diagnostics::Diagnostics,
///           interpreter::{lexer::scan, token::TokenKind}};
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var x = 1\n\n\nprint x\n", &mut diagnostics);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Integer,
///             TokenKind::Eol,
///             TokenKind::Print,
///             TokenKind::Identifier,
///             TokenKind::Eol,
///             TokenKind::Eof]);
/// assert_eq!(tokens[5].line, 4);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens: Vec<Token> = Vec::new();

    loop {
        let line = lexer.extras.line;
        let Some(lexeme) = lexer.next() else {
            break;
        };

        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err(()) => {
                let slice = lexer.slice();
                let numeric = !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit() || b == b'.');
                let error = if numeric && slice.contains('.') {
                    ScanError::DecimalTooLarge { literal: slice.to_string(),
                                                 line }
                } else if numeric {
                    ScanError::IntegerTooLarge { literal: slice.to_string(),
                                                 line }
                } else {
                    ScanError::UnrecognizedSymbol { symbol: slice.to_string(),
                                                    line }
                };
                diagnostics.record(&error);
                continue;
            },
        };

        let token = match lexeme {
            Lexeme::NewLine => {
                if tokens.last().is_some_and(|last| last.kind != TokenKind::Eol) {
                    tokens.push(Token::new(TokenKind::Eol, line));
                }
                continue;
            },
            Lexeme::Str(literal) => {
                for &line in &literal.breaks {
                    diagnostics.record(&ScanError::UnterminatedString { line });
                }
                if !literal.terminated {
                    diagnostics.record(&ScanError::UnterminatedString { line: lexer.extras.line });
                    continue;
                }
                Token::with_data(TokenKind::Str, TokenData::Text(literal.text), line)
            },
            Lexeme::Bang => {
                diagnostics.record(&ScanError::UnrecognizedSymbol { symbol: "!".into(),
                                                                    line });
                continue;
            },
            Lexeme::Integer(value) => Token::with_data(TokenKind::Integer, TokenData::Integer(value), line),
            Lexeme::Decimal(value) => Token::with_data(TokenKind::Decimal, TokenData::Decimal(value), line),
            Lexeme::Identifier(name) => Token::with_data(TokenKind::Identifier, TokenData::Text(name), line),
            Lexeme::True => Token::new(TokenKind::True, line),
            Lexeme::False => Token::new(TokenKind::False, line),
            Lexeme::Var => Token::new(TokenKind::Var, line),
            Lexeme::For => Token::new(TokenKind::For, line),
            Lexeme::If => Token::new(TokenKind::If, line),
            Lexeme::Else => Token::new(TokenKind::Else, line),
            Lexeme::Print => Token::new(TokenKind::Print, line),
            Lexeme::Println => Token::new(TokenKind::Println, line),
            Lexeme::Not => Token::new(TokenKind::Not, line),
            Lexeme::And => Token::new(TokenKind::And, line),
            Lexeme::Or => Token::new(TokenKind::Or, line),
            Lexeme::LParen => Token::new(TokenKind::LeftParen, line),
            Lexeme::RParen => Token::new(TokenKind::RightParen, line),
            Lexeme::LBrace => Token::new(TokenKind::LeftBrace, line),
            Lexeme::RBrace => Token::new(TokenKind::RightBrace, line),
            Lexeme::Semicolon => Token::new(TokenKind::Semicolon, line),
            Lexeme::Plus => Token::new(TokenKind::Plus, line),
            Lexeme::Minus => Token::new(TokenKind::Minus, line),
            Lexeme::Star => Token::new(TokenKind::Star, line),
            Lexeme::Slash => Token::new(TokenKind::Slash, line),
            Lexeme::Percent => Token::new(TokenKind::Percent, line),
            Lexeme::Equals => Token::new(TokenKind::Equal, line),
            Lexeme::EqualEqual => Token::new(TokenKind::EqualEqual, line),
            Lexeme::BangEqual => Token::new(TokenKind::NotEqual, line),
            Lexeme::Less => Token::new(TokenKind::Less, line),
            Lexeme::LessEqual => Token::new(TokenKind::LessEqual, line),
            Lexeme::Greater => Token::new(TokenKind::Greater, line),
            Lexeme::GreaterEqual => Token::new(TokenKind::GreaterEqual, line),
            Lexeme::Comment | Lexeme::Ignored => continue,
        };
        tokens.push(token);
    }

    tokens.push(Token::new(TokenKind::Eof, lexer.extras.line));
    tracing::debug!(tokens = tokens.len(), "scanned source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> (Vec<TokenKind>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let kinds = scan(source, &mut diagnostics).iter()
                                                  .map(|t| t.kind)
                                                  .collect();
        (kinds, diagnostics)
    }

    #[test]
    fn two_char_operators_take_precedence() {
        let (kinds, _) = kinds("<= >= == != < > =");
        assert_eq!(kinds,
                   [TokenKind::LessEqual,
                    TokenKind::GreaterEqual,
                    TokenKind::EqualEqual,
                    TokenKind::NotEqual,
                    TokenKind::Less,
                    TokenKind::Greater,
                    TokenKind::Equal,
                    TokenKind::Eof]);
    }

    #[test]
    fn bare_bang_is_reported_and_skipped() {
        let (kinds, diagnostics) = kinds("! x");
        assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn escapes_are_decoded() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(r#""a\"b\\c\n""#, &mut diagnostics);
        assert_eq!(tokens[0].text(), Some("a\"b\\c\n"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn multiline_string_reports_each_break() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan("\"a\nb\nc\" x", &mut diagnostics);
        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn unclosed_string_emits_no_token() {
        let (kinds, diagnostics) = kinds("print \"abc");
        assert_eq!(kinds, [TokenKind::Print, TokenKind::Eof]);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn oversized_integer_is_reported() {
        let (kinds, diagnostics) = kinds("99999999999999999999 1");
        assert_eq!(kinds, [TokenKind::Integer, TokenKind::Eof]);
        assert!(diagnostics.errors()
                           .any(|d| d.message.contains("too large")));
    }

    #[test]
    fn infinite_decimal_is_reported() {
        let source = format!("{}.5 2.5", "9".repeat(400));
        let (kinds, diagnostics) = kinds(&source);
        assert_eq!(kinds, [TokenKind::Decimal, TokenKind::Eof]);
        assert_eq!(diagnostics.errors().next().unwrap().message,
                   format!("Decimal literal {}.5 is too large", "9".repeat(400)));
    }

    #[test]
    fn dot_without_digits_is_not_decimal() {
        let (kinds, diagnostics) = kinds("1.");
        assert_eq!(kinds, [TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn comments_are_skipped() {
        let (kinds, _) = kinds("// nothing\nx // trailing\n");
        assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Eol, TokenKind::Eof]);
    }
}
