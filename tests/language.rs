use std::fs::{self};

use calc::{ParseError, evaluate};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, expected) in extract_cases(&content) {
            count += 1;
            match (evaluate(&line), expected) {
                (Ok(value), Some(want)) if value == want => {},
                (Err(_), None) => {},
                (got, want) => {
                    panic!("Case {line:?} in {path:?} gave {got:?}, expected {want:?}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `<expression> => <result>` lines, where the result is an integer or
/// the word `error`. Blank lines and `#` comments are skipped.
fn extract_cases(content: &str) -> Vec<(String, Option<i64>)> {
    let mut cases = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let (expression, expected) =
            line.rsplit_once(" => ")
                .unwrap_or_else(|| panic!("Malformed case line: {line:?}"));
        let expected = match expected.trim() {
            "error" => None,
            n => Some(n.parse().unwrap_or_else(|_| panic!("Bad expected value in {line:?}"))),
        };
        cases.push((expression.to_string(), expected));
    }

    cases
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ParseError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn addition_and_subtraction() {
    assert_value("3+5", 8);
    assert_value("9-3", 6);
    assert_value("1+2+3", 6);
}

#[test]
fn single_integer_is_error() {
    assert_eq!(assert_failure("5"), ParseError::MissingOperand { found: 1 });
}

#[test]
fn blanks_make_terms_invalid() {
    assert_eq!(assert_failure("3 + 5"),
               ParseError::InvalidTerm { term: "3 ".to_string() });
}

#[test]
fn invalid_character_is_reported_with_position() {
    assert_eq!(assert_failure("a+1"),
               ParseError::UnexpectedCharacter { character: 'a',
                                                 position:  0, });
    assert_eq!(assert_failure("1+2*3"),
               ParseError::UnexpectedCharacter { character: '*',
                                                 position:  3, });
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_failure(""),
               ParseError::InvalidTerm { term: String::new() });
}

#[test]
fn subtraction_ignores_extra_terms_but_still_parses_them() {
    assert_value("9-3-1", 6);
    assert_eq!(assert_failure("9-3-"),
               ParseError::InvalidTerm { term: String::new() });
}

#[test]
fn mixed_operators_follow_piece_counts() {
    // Two pieces each way: subtraction branch, and "1+2" is not a number.
    assert_eq!(assert_failure("1+2-3"),
               ParseError::InvalidTerm { term: "1+2".to_string() });
    // Three `+` pieces beat two `-` pieces, and "-3" parses as a negative term.
    assert_value("1+-3+2", 0);
}

#[test]
fn overflow_is_error() {
    assert_eq!(assert_failure("9223372036854775807+1"), ParseError::Overflow);
    assert_eq!(assert_failure("0+99999999999999999999"),
               ParseError::InvalidTerm { term: "99999999999999999999".to_string() });
}

#[test]
fn repeated_evaluation_is_stable() {
    for _ in 0..3 {
        assert_value("7-2", 5);
        assert_value("1+1+1", 3);
    }
}

#[test]
fn error_messages_mention_parsing() {
    for src in ["5", "a", "3 + 5", "9223372036854775807+1"] {
        let message = assert_failure(src).to_string();
        assert!(message.starts_with("Error parsing input"), "unexpected message {message:?}");
    }
}
