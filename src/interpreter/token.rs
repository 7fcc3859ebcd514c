use std::fmt;

/// The category of a scanned token.
///
/// Every stage after the scanner (validator, parser) dispatches on this enum
/// only; literal payloads travel separately in [`TokenData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `=`
    Equal,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,
    /// A variable name such as `total` or `_i2`.
    Identifier,
    /// A string literal; the decoded text is in the token data.
    Str,
    /// An integer literal such as `42`.
    Integer,
    /// A decimal literal such as `3.25`.
    Decimal,
    /// `true`
    True,
    /// `false`
    False,
    /// `print`
    Print,
    /// `println`
    Println,
    /// `var`
    Var,
    /// `for`
    For,
    /// `if`
    If,
    /// `else`
    Else,
    /// Logical end of a statement, emitted for a newline.
    Eol,
    /// End of input. Always the last token, exactly once.
    Eof,
}

impl TokenKind {
    /// Returns `true` for tokens that combine two operands.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Percent
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::EqualEqual
                 | Self::NotEqual
                 | Self::And
                 | Self::Or)
    }

    /// Returns `true` for tokens that are complete operands on their own.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self,
                 Self::Integer | Self::Decimal | Self::Str | Self::True | Self::False)
    }

    /// Returns `true` for prefix operators (`not`, `-`).
    #[must_use]
    pub const fn is_unary_operator(self) -> bool {
        matches!(self, Self::Not | Self::Minus)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LeftParen => "\"(\"",
            Self::RightParen => "\")\"",
            Self::LeftBrace => "\"{\"",
            Self::RightBrace => "\"}\"",
            Self::Semicolon => "\";\"",
            Self::Equal => "\"=\"",
            Self::Plus => "\"+\"",
            Self::Minus => "\"-\"",
            Self::Star => "\"*\"",
            Self::Slash => "\"/\"",
            Self::Percent => "\"%\"",
            Self::Less => "\"<\"",
            Self::LessEqual => "\"<=\"",
            Self::Greater => "\">\"",
            Self::GreaterEqual => "\">=\"",
            Self::EqualEqual => "\"==\"",
            Self::NotEqual => "\"!=\"",
            Self::Not => "\"not\"",
            Self::And => "\"and\"",
            Self::Or => "\"or\"",
            Self::Identifier => "identifier",
            Self::Str => "string literal",
            Self::Integer => "integer literal",
            Self::Decimal => "decimal literal",
            Self::True => "\"true\"",
            Self::False => "\"false\"",
            Self::Print => "\"print\"",
            Self::Println => "\"println\"",
            Self::Var => "\"var\"",
            Self::For => "\"for\"",
            Self::If => "\"if\"",
            Self::Else => "\"else\"",
            Self::Eol => "end of line",
            Self::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// Literal payload attached to identifier and literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
    /// Value of an integer literal.
    Integer(i64),
    /// Value of a decimal literal.
    Decimal(f64),
    /// Decoded string literal or identifier name.
    Text(String),
}

/// A single scanned token.
///
/// Tokens are produced once by [`scan`](crate::interpreter::lexer::scan) and
/// only ever read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Literal payload, present for identifiers and literals.
    pub data: Option<TokenData>,
    /// Source line the token starts on (1-based).
    pub line: usize,
}

impl Token {
    /// Creates a token without payload.
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind,
               data: None,
               line }
    }

    /// Creates a token carrying a literal payload.
    #[must_use]
    pub const fn with_data(kind: TokenKind, data: TokenData, line: usize) -> Self {
        Self { kind,
               data: Some(data),
               line }
    }

    /// Returns the text of an identifier or string token.
    ///
    /// ```
    /// use bsl::interpreter::token::{Token, TokenData, TokenKind};
    ///
    /// let token = Token::with_data(TokenKind::Identifier, TokenData::Text("x".into()), 1);
    /// assert_eq!(token.text(), Some("x"));
    /// assert_eq!(Token::new(TokenKind::Eof, 1).text(), None);
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            Some(TokenData::Text(text)) => Some(text),
            _ => None,
        }
    }
}
