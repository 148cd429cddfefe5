use indoc::indoc;

use super::error;
use crate::{Error, ErrorLocation, error_location, parse};

#[test]
fn invalid_boost_location() {
    let location = error_location("invalid^ query").unwrap();
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 8);
    assert!(location.message.contains("Don't know"));
    insta::assert_snapshot!(
        location.message,
        @"Don't know what to do with `^` at line 1 column 8 (expected `~`, `^` followed by a number, whitespace, or end of input)"
    );
}

#[test]
fn valid_query_has_no_location() {
    assert_eq!(error_location("valid query"), None);
}

#[test]
fn syntax_error_details() {
    let Err(Error::Syntax(err)) = parse("invalid^ query") else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.offset(), 7);
    assert_eq!(u32::from(err.span().end()), 8);
    assert_eq!(err.found(), "`^`");
    assert_eq!(
        err.expected(),
        &["`~`", "`^` followed by a number", "whitespace", "end of input"]
    );
}

#[test]
fn empty_input() {
    insta::assert_snapshot!(
        error(""),
        @"Don't know what to do with end of input at line 1 column 1 (expected `(`, `+`, `-`, phrase, or term)"
    );
}

#[test]
fn whitespace_only_input() {
    insta::assert_snapshot!(
        error("   "),
        @"Don't know what to do with end of input at line 1 column 4 (expected `(`, `+`, `-`, phrase, or term)"
    );
}

#[test]
fn error_on_second_line() {
    let input = indoc! {"
    foo
    bar ^
    "};
    let location = error_location(input).unwrap();
    assert_eq!((location.line, location.column), (2, 5));
    insta::assert_snapshot!(
        location.message,
        @"Don't know what to do with `^` at line 2 column 5 (expected `(`, `+`, `-`, phrase, `AND`, `OR`, `NOT`, term, or end of input)"
    );
}

#[test]
fn column_counts_characters() {
    let location = error_location("héllo ^").unwrap();
    assert_eq!((location.line, location.column), (1, 7));
}

#[test]
fn unterminated_phrase() {
    let location = error_location(r#"foo "bar"#).unwrap();
    assert_eq!((location.line, location.column), (1, 5));
}

#[test]
fn unrecognized_characters() {
    insta::assert_snapshot!(
        error("foo %"),
        @"Don't know what to do with `%` at line 1 column 5 (expected `(`, `+`, `-`, phrase, `AND`, `OR`, `NOT`, term, or end of input)"
    );
}

#[test]
fn location_matches_parse_outcome() {
    let inputs = [
        "foo",
        "foo bar",
        "title:(a OR b)^2",
        "year:[1 TO 2]",
        "",
        "(",
        "foo AND",
        "invalid^ query",
        "a:[1 TO 2}",
        "\"open",
    ];
    for input in inputs {
        assert_eq!(
            error_location(input).is_none(),
            parse(input).is_ok(),
            "disagreement on {:?}",
            input
        );
    }
}

#[test]
fn location_from_error() {
    let err = parse("foo )").unwrap_err();
    assert_eq!(
        err.location("foo )"),
        ErrorLocation {
            line: 1,
            column: 5,
            message: err.to_string(),
        }
    );
}
