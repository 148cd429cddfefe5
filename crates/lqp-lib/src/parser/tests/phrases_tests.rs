use super::{dump, error};

#[test]
fn simple_phrase() {
    insta::assert_snapshot!(dump(r#""foo bar""#), @r#"Phrase "foo bar""#);
}

#[test]
fn term_then_phrase() {
    insta::assert_snapshot!(dump(r#"foo "stuff and things""#), @r#"
    List
      Term "foo"
      Phrase "stuff and things"
    "#);
}

#[test]
fn wildcards_are_literal_in_phrases() {
    insta::assert_snapshot!(dump(r#""candy* twix""#), @r#"Phrase "candy* twix""#);
}

#[test]
fn phrases_with_distance() {
    insta::assert_snapshot!(dump(r#""foo bar"~3 "mumble stuff"~5 "blah blah""#), @r#"
    List
      Phrase "foo bar" distance=3
      Phrase "mumble stuff" distance=5
      Phrase "blah blah"
    "#);
}

#[test]
fn single_phrase_with_distance() {
    insta::assert_snapshot!(dump(r#""foo bar"~2"#), @r#"Phrase "foo bar" distance=2"#);
}

#[test]
fn empty_phrase() {
    insta::assert_snapshot!(dump(r#""""#), @r#"Phrase """#);
}

#[test]
fn inner_whitespace_is_preserved() {
    insta::assert_snapshot!(dump("\"  two  spaces \""), @r#"Phrase "  two  spaces ""#);
}

#[test]
fn phrase_distance_requires_a_number() {
    insta::assert_snapshot!(
        error(r#""foo bar"~"#),
        @"Don't know what to do with `~` at line 1 column 10 (expected `^` followed by a number, whitespace, integer distance after `~`, or end of input)"
    );
}

#[test]
fn phrase_distance_must_be_an_integer() {
    insta::assert_snapshot!(
        error(r#""foo bar"~0.5"#),
        @"Don't know what to do with `~0.5` at line 1 column 10 (expected `^` followed by a number, whitespace, integer distance after `~`, or end of input)"
    );
}
