/// The evaluator module reduces a line of tokens to an integer.
///
/// It drives the lexer to the end of the line, flattens the collected tokens
/// back into text and computes the result by splitting that text on the two
/// operators.
///
/// # Responsibilities
/// - Collects the full token sequence of a line.
/// - Chooses between the addition and subtraction reductions.
/// - Reports malformed pieces and missing operands as parse errors.
pub mod evaluator;
/// The lexer module tokenizes input one character at a time.
///
/// Each call classifies the character under the cursor as a digit, an
/// operator or a blank and returns the advanced cursor alongside the token.
pub mod lexer;
