use crate::{
    error::ParseError,
    interpreter::lexer::{Token, tokenize},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`ParseError`] describing the failure.
pub type EvalResult<T> = Result<T, ParseError>;

/// Evaluates one line of input and returns its integer result.
///
/// The line is tokenized, the tokens are flattened back into text, and the
/// text is reduced by [`reduce`]. No state is carried between calls.
///
/// # Errors
/// Returns a [`ParseError`] if the line contains a character the tokenizer
/// rejects, or if the reduction cannot produce an integer.
///
/// # Examples
/// ```
/// use calc::evaluate;
///
/// assert_eq!(evaluate("3+5").unwrap(), 8);
/// assert_eq!(evaluate("9-3").unwrap(), 6);
/// assert_eq!(evaluate("1+2+3").unwrap(), 6);
///
/// // A bare number has nothing to subtract from it.
/// assert!(evaluate("5").is_err());
/// ```
pub fn evaluate(text: &str) -> EvalResult<i64> {
    let tokens = tokenize(text)?;
    evaluate_tokens(&tokens)
}

/// Evaluates an already tokenized line.
///
/// # Examples
/// ```
/// use calc::interpreter::{evaluator::evaluate_tokens, lexer::Token};
///
/// let tokens = [Token::Integer(9), Token::Operator('-'), Token::Integer(3)];
/// assert_eq!(evaluate_tokens(&tokens).unwrap(), 6);
/// ```
pub fn evaluate_tokens(tokens: &[Token]) -> EvalResult<i64> {
    reduce(&flatten(tokens))
}

/// Concatenates the literal text of every token, in order.
#[must_use]
pub fn flatten(tokens: &[Token]) -> String {
    tokens.iter().filter_map(|token| token.value()).collect()
}

/// Reduces a flattened expression to a number.
///
/// The text is split on `+` and, separately, on `-`. When the `+` split has
/// strictly more pieces, every piece is parsed and the pieces are summed.
/// Otherwise every `-` piece is parsed and the second is subtracted from the
/// first; pieces after the second are parsed but otherwise ignored.
///
/// Mixed input such as `1+2-3` is decided by the piece counts alone, not by
/// reading left to right.
///
/// # Errors
/// - [`ParseError::InvalidTerm`] if any piece of the chosen split is not an
///   integer literal. Empty pieces and pieces containing blanks are invalid.
/// - [`ParseError::MissingOperand`] if the subtraction branch has fewer than
///   two pieces.
/// - [`ParseError::Overflow`] if the result does not fit in an `i64`.
///
/// # Examples
/// ```
/// use calc::interpreter::evaluator::reduce;
///
/// assert_eq!(reduce("9-3-1").unwrap(), 6);
/// assert_eq!(reduce("12+3").unwrap(), 15);
/// assert!(reduce("1+2-3").is_err());
/// ```
pub fn reduce(flattened: &str) -> EvalResult<i64> {
    let plus_pieces = flattened.split('+').count();
    let minus_pieces = flattened.split('-').count();

    if plus_pieces > minus_pieces {
        parse_terms(flattened, '+')?.into_iter()
                                    .try_fold(0_i64, i64::checked_add)
                                    .ok_or(ParseError::Overflow)
    } else {
        let terms = parse_terms(flattened, '-')?;
        match terms.as_slice() {
            [minuend, subtrahend, ..] => {
                minuend.checked_sub(*subtrahend).ok_or(ParseError::Overflow)
            },
            _ => Err(ParseError::MissingOperand { found: terms.len() }),
        }
    }
}

fn parse_terms(flattened: &str, separator: char) -> EvalResult<Vec<i64>> {
    flattened.split(separator).map(parse_term).collect()
}

fn parse_term(term: &str) -> EvalResult<i64> {
    term.parse()
        .map_err(|_| ParseError::InvalidTerm { term: term.to_string() })
}
