//! Cursor scanning and slicing tests

use argcursor::{ArgCursor, CursorError};

fn cursor(tokens: &[&str]) -> ArgCursor {
    ArgCursor::new(std::iter::once("prog").chain(tokens.iter().copied()))
}

/// Position bookkeeping must hold after any sequence of calls
fn assert_counts(args: &ArgCursor) {
    assert_eq!(
        args.remaining_count() + args.position(),
        args.total_count()
    );
}

#[test]
fn test_peek_does_not_move() {
    let args = cursor(&["a", "b"]);

    assert_eq!(args.peek().unwrap(), "a");
    assert_eq!(args.peek().unwrap(), "a");
    assert_eq!(args.remaining_count(), 2);
    assert_counts(&args);
}

#[test]
fn test_peek_at_looks_both_ways() {
    let mut args = cursor(&["a", "b", "c"]);
    args.advance().unwrap();

    assert_eq!(args.peek_at(-1).unwrap(), "a");
    assert_eq!(args.peek_at(0).unwrap(), "b");
    assert_eq!(args.peek_at(1).unwrap(), "c");
    assert!(args.peek_at(2).is_err());
    assert!(args.peek_at(-2).is_err());
}

#[test]
fn test_peek_at_error_messages() {
    let args = cursor(&["a"]);

    assert_eq!(
        args.peek_at(-1).unwrap_err(),
        CursorError::out_of_range("The index must not become negative.")
    );
    assert_eq!(
        args.peek_at(1).unwrap_err(),
        CursorError::out_of_range("Argument vector too short.")
    );
}

#[test]
fn test_consume_then_look_back() {
    let mut args = cursor(&["first", "second"]);

    let token = args.consume().unwrap();
    assert_eq!(token, "first");
    assert_eq!(args.peek_at(-1).unwrap(), token);
    assert_counts(&args);
}

#[test]
fn test_empty_cursor_fails_without_mutation() {
    let mut args = ArgCursor::empty();
    let before = args.remaining_count();

    assert_eq!(
        args.peek().unwrap_err().to_string(),
        "No argument left to peek."
    );
    assert_eq!(
        args.advance().unwrap_err().to_string(),
        "No arguments left to shift."
    );
    assert!(args.consume().is_err());
    assert!(args.peek_at(0).is_err());

    assert_eq!(args.remaining_count(), before);
    assert_eq!(args.position(), 0);
}

#[test]
fn test_exhausted_cursor_fails_without_mutation() {
    let mut args = cursor(&["only"]);
    args.consume().unwrap();

    assert!(args.advance().is_err());
    assert!(args.consume().is_err());
    assert_eq!(args.remaining_count(), 0);
    assert_eq!(args.position(), 1);
    assert_counts(&args);
}

#[test]
fn test_push_back_keeps_position() {
    let mut args = ArgCursor::empty();
    args.set_name("built");
    args.push_back("x");
    args.consume().unwrap();
    args.push_back(String::from("y"));

    assert_eq!(args.name(), "built");
    assert_eq!(args.position(), 1);
    assert_eq!(args.peek().unwrap(), "y");
    assert_eq!(args.total_count(), 2);
    assert_counts(&args);
}

#[test]
fn test_slice_exact_size_is_allowed() {
    let mut args = cursor(&["skip", "a", "b"]);
    args.advance().unwrap();

    let child = args.slice(2).unwrap();
    assert_eq!(child.name(), "");
    assert_eq!(child.remaining(), ["a", "b"]);
    assert_eq!(args.remaining_count(), 0);
    assert_counts(&args);
}

#[test]
fn test_slice_one_short_fails_without_mutation() {
    let mut args = cursor(&["a", "b"]);

    let err = args.slice(3).unwrap_err();
    assert_eq!(err.message(), "Not enough arguments to form subarg.");
    assert_eq!(args.remaining_count(), 2);
    assert_eq!(args.position(), 0);
}

#[test]
fn test_slice_zero_is_empty() {
    let mut args = cursor(&["a"]);

    let child = args.slice(0).unwrap();
    assert_eq!(child.total_count(), 0);
    assert_eq!(args.remaining_count(), 1);
}

#[test]
fn test_slice_is_independent_of_parent() {
    let mut args = cursor(&["a", "b", "c"]);
    let mut child = args.slice(2).unwrap();

    child.consume().unwrap();
    child.push_back("z");

    assert_eq!(args.peek().unwrap(), "c");
    assert_eq!(args.total_count(), 3);
    assert_eq!(child.remaining(), ["b", "z"]);
}

#[test]
fn test_slice_until_stops_before_match() {
    let mut args = cursor(&["a", "b", "--", "c"]);

    let child = args.slice_until(|token| token == "--");
    assert_eq!(child.remaining(), ["a", "b"]);
    assert_eq!(args.peek().unwrap(), "--");
}

#[test]
fn test_slice_until_without_match_takes_everything() {
    let mut args = cursor(&["a", "b"]);
    args.advance().unwrap();

    let child = args.slice_until(|token| token.starts_with('-'));
    assert_eq!(child.remaining(), ["b"]);
    assert_eq!(args.remaining_count(), 0);
    assert_counts(&args);
}

#[test]
fn test_slice_until_immediate_match_is_empty() {
    let mut args = cursor(&["--", "a"]);

    let child = args.slice_until(|token| token == "--");
    assert_eq!(child.total_count(), 0);
    assert_eq!(args.position(), 0);
}

#[test]
fn test_slice_until_on_exhausted_cursor() {
    let mut args = cursor(&[]);

    let child = args.slice_until(|_| false);
    assert_eq!(child.total_count(), 0);
}

#[test]
fn test_subcommand_names_child() {
    let mut args = cursor(&["remote", "add", "origin", "rest"]);

    let mut child = args.subcommand(2).unwrap();
    assert_eq!(child.name(), "remote");
    assert_eq!(child.consume().unwrap(), "add");
    assert_eq!(child.consume().unwrap(), "origin");
    assert!(child.is_empty());

    assert_eq!(args.position(), 3);
    assert_eq!(args.peek().unwrap(), "rest");
}

#[test]
fn test_subcommand_failure_leaves_cursor_unchanged() {
    let mut args = cursor(&["remote", "add"]);

    assert!(args.subcommand(2).is_err());
    assert_eq!(args.position(), 0);
    assert_eq!(args.peek().unwrap(), "remote");

    let mut empty = ArgCursor::empty();
    assert!(empty.subcommand(0).is_err());
    assert_eq!(empty.position(), 0);
}

#[test]
fn test_subcommand_until_never_tests_name() {
    let mut args = cursor(&[";", "a", ";", "b"]);

    let child = args.subcommand_until(|token| token == ";").unwrap();
    assert_eq!(child.name(), ";");
    assert_eq!(child.remaining(), ["a"]);
    assert_eq!(args.peek().unwrap(), ";");
    assert_eq!(args.position(), 2);
}

#[test]
fn test_subcommand_until_requires_name() {
    let mut args = cursor(&[]);

    assert!(args.subcommand_until(|_| true).is_err());
}

#[test]
fn test_nested_dispatch() {
    let mut args = cursor(&["build", "--release", ";", "test", "unit", "--quiet"]);
    let mut seen = Vec::new();

    while !args.is_empty() {
        if args.peek().unwrap() == ";" {
            args.advance().unwrap();
            continue;
        }
        let mut command = args.subcommand_until(|token| token == ";").unwrap();
        if command.name() == "test" {
            let suite = command.subcommand(1).unwrap();
            seen.push(format!("{}:{}", suite.name(), suite.remaining().join(",")));
        } else {
            seen.push(format!("{}:{}", command.name(), command.remaining().join(",")));
        }
    }

    assert_eq!(seen, ["build:--release", "unit:--quiet"]);
}

#[test]
fn test_from_iterator_has_no_name() {
    let args: ArgCursor = vec!["a".to_owned(), "b".to_owned()].into_iter().collect();

    assert_eq!(args.name(), "");
    assert_eq!(args.remaining(), ["a", "b"]);
}
