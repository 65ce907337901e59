/// Parsing errors.
///
/// Defines the error raised while tokenizing a line or reducing its tokens to
/// a number. Every failure of the calculator core is a parse error.
pub mod parse_error;

pub use parse_error::ParseError;
