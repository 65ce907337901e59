use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, ParseError>;

/// Represents a lexical token in an input line.
///
/// Every rule matches exactly one character, so the lexer never looks further
/// ahead than the character under the cursor. `EndOfInput` is never produced
/// by the generated lexer itself; [`next_token`] returns it once the cursor
/// has run off the end of the text.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single decimal digit, such as `7`.
    #[regex(r"[0-9]", parse_digit)]
    Integer(u8),
    /// `+` or `-`
    #[token("+", |_| '+')]
    #[token("-", |_| '-')]
    Operator(char),
    /// A single space.
    #[token(" ")]
    Blank,
    /// No input left.
    EndOfInput,
}

impl Token {
    /// Returns the character this token contributes to the flattened
    /// expression, or `None` for [`Token::EndOfInput`].
    ///
    /// # Examples
    /// ```
    /// use calc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Integer(4).value(), Some('4'));
    /// assert_eq!(Token::Operator('-').value(), Some('-'));
    /// assert_eq!(Token::Blank.value(), Some(' '));
    /// assert_eq!(Token::EndOfInput.value(), None);
    /// ```
    #[must_use]
    pub fn value(self) -> Option<char> {
        match self {
            Self::Integer(digit) => char::from_digit(u32::from(digit), 10),
            Self::Operator(op) => Some(op),
            Self::Blank => Some(' '),
            Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(digit) => write!(f, "Token(INTEGER, {digit})"),
            Self::Operator(op) => write!(f, "Token(OP, {op:?})"),
            Self::Blank => write!(f, "Token(BLANK, ' ')"),
            Self::EndOfInput => write!(f, "Token(EOF, None)"),
        }
    }
}

/// Parses the digit under the cursor into its numeric value.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    lex.slice().bytes().next().map(|byte| byte - b'0')
}

/// Scans the single token starting at `cursor`.
///
/// Returns the token together with the cursor positioned after it. Once the
/// cursor is at or past the end of `text` the result is
/// [`Token::EndOfInput`] and the cursor is returned unchanged.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] if the character at `cursor`
/// is not a digit, `+`, `-` or a space. The cursor is not advanced. Only the
/// ASCII digits `0` to `9` count as digits; other Unicode decimal digits such
/// as `٣` are rejected.
///
/// # Examples
/// ```
/// use calc::interpreter::lexer::{Token, next_token};
///
/// assert_eq!(next_token(0, "3+5").unwrap(), (Token::Integer(3), 1));
/// assert_eq!(next_token(1, "3+5").unwrap(), (Token::Operator('+'), 2));
/// assert_eq!(next_token(3, "3+5").unwrap(), (Token::EndOfInput, 3));
/// assert!(next_token(0, "x").is_err());
/// ```
pub fn next_token(cursor: usize, text: &str) -> LexResult<(Token, usize)> {
    if cursor >= text.len() {
        return Ok((Token::EndOfInput, cursor));
    }

    let Some(rest) = text.get(cursor..) else {
        return Err(unexpected_character(text, cursor));
    };

    let mut lexer = Token::lexer(rest);
    match lexer.next() {
        Some(Ok(token)) => Ok((token, cursor + lexer.span().end)),
        _ => Err(unexpected_character(text, cursor)),
    }
}

/// Collects every token of `text` up to, but not including, the end marker.
///
/// # Errors
/// Propagates the first [`ParseError`] raised by [`next_token`].
///
/// # Examples
/// ```
/// use calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("9 -3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(9), Token::Blank, Token::Operator('-'), Token::Integer(3)]);
/// ```
pub fn tokenize(text: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    loop {
        let (token, next) = next_token(cursor, text)?;
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
        cursor = next;
    }
}

// `cursor` may fall inside a multi-byte character; report the character that
// contains it.
fn unexpected_character(text: &str, cursor: usize) -> ParseError {
    let character = text.char_indices()
                        .rfind(|&(index, _)| index <= cursor)
                        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c);

    ParseError::UnexpectedCharacter { character,
                                      position: cursor }
}
