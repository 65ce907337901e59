use std::io::{self, BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::evaluate_tokens,
        lexer::{Token, tokenize},
    },
};

/// Prompt written before each line in interactive mode.
pub const DEFAULT_PROMPT: &str = "calc> ";

/// Controls how [`run`] talks to its streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Text written to the output before each line is read. `None` disables
    /// prompting, which is what file and pipe input want.
    pub prompt:      Option<String>,
    /// Writes the token sequence of every line to the error stream before
    /// its result.
    pub dump_tokens: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { prompt:      Some(DEFAULT_PROMPT.to_string()),
               dump_tokens: false, }
    }
}

/// Line counts gathered by one call to [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Non-empty lines handed to the evaluator.
    pub evaluated: usize,
    /// Lines among `evaluated` that produced an error.
    pub failed:    usize,
}

/// Reads lines from `input` until end of stream and evaluates each one.
///
/// Results go to `output`, one per line. Errors go to `errors` and do not
/// stop the loop. Empty lines are skipped without being evaluated; only the
/// line terminator is removed, so a line holding a single space is still
/// evaluated (and rejected). A line that is not valid UTF-8 is rejected at its
/// first bad byte.
///
/// # Errors
/// Returns any I/O error raised while reading `input` or writing to either
/// stream.
///
/// # Examples
/// ```
/// use calc::repl::{Options, Summary, run};
///
/// let options = Options { prompt: None, dump_tokens: false };
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
///
/// let summary = run("3+5\n\n9-3\n".as_bytes(), &mut output, &mut errors, &options).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "8\n6\n");
/// assert_eq!(summary, Summary { evaluated: 2, failed: 0 });
/// ```
pub fn run<R, W, E>(mut input: R,
                    output: &mut W,
                    errors: &mut E,
                    options: &Options)
                    -> io::Result<Summary>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut summary = Summary::default();
    let mut line = Vec::new();

    loop {
        if let Some(prompt) = &options.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            if options.prompt.is_some() {
                writeln!(output)?;
            }
            return Ok(summary);
        }

        let bytes = strip_line_ending(&line);
        if bytes.is_empty() {
            continue;
        }

        summary.evaluated += 1;
        let succeeded = match std::str::from_utf8(bytes) {
            Ok(text) => evaluate_line(text, output, errors, options.dump_tokens)?,
            Err(e) => {
                let position = e.valid_up_to();
                writeln!(errors,
                         "{}",
                         ParseError::UnexpectedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                           position })?;
                false
            },
        };
        if !succeeded {
            summary.failed += 1;
        }
    }
}

/// Evaluates a single line and reports the outcome.
///
/// The value goes to `output`, or the error to `errors`. With `dump_tokens`
/// set, the token sequence is written to `errors` first. The text is used as
/// is: an empty line is evaluated (and rejected) and embedded newlines are
/// not line separators.
///
/// Returns whether the line evaluated successfully.
///
/// # Errors
/// Returns any I/O error raised while writing to either stream.
///
/// # Examples
/// ```
/// use calc::repl::evaluate_line;
///
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
///
/// assert!(evaluate_line("9-3", &mut output, &mut errors, false).unwrap());
/// assert!(!evaluate_line("", &mut output, &mut errors, false).unwrap());
/// assert_eq!(output, b"6\n");
/// ```
pub fn evaluate_line<W, E>(text: &str,
                           output: &mut W,
                           errors: &mut E,
                           dump_tokens: bool)
                           -> io::Result<bool>
    where W: Write,
          E: Write
{
    let result = match tokenize(text) {
        Ok(tokens) => {
            if dump_tokens {
                writeln!(errors, "{}", format_tokens(&tokens))?;
            }
            evaluate_tokens(&tokens)
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            writeln!(output, "{value}")?;
            Ok(true)
        },
        Err(e) => {
            writeln!(errors, "{e}")?;
            Ok(false)
        },
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n")
        .map_or(line, |rest| rest.strip_suffix(b"\r").unwrap_or(rest))
}

fn format_tokens(tokens: &[Token]) -> String {
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
