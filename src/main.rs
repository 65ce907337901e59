use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use calc::repl::{self, DEFAULT_PROMPT, Options};
use clap::Parser;

/// calc evaluates lines of single-digit additions and subtractions such as
/// `3+5` or `9-3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions line by line from a file instead of standard input.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Does not print the prompt before each line.
    #[arg(short, long)]
    quiet: bool,

    /// Prints the tokens of every line to standard error.
    #[arg(short, long)]
    tokens: bool,

    /// A single expression to evaluate. Starts the interactive loop when
    /// omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut output = io::stdout().lock();
    let mut errors = io::stderr().lock();

    let mut options = Options { prompt:      None,
                                dump_tokens: args.tokens, };

    if let Some(expression) = &args.expression {
        return match repl::evaluate_line(expression, &mut output, &mut errors, args.tokens) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let result = if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        repl::run(BufReader::new(file), &mut output, &mut errors, &options)
    } else {
        if !args.quiet {
            options.prompt = Some(DEFAULT_PROMPT.to_string());
        }
        repl::run(io::stdin().lock(), &mut output, &mut errors, &options)
    };

    match result {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
