use super::{dump, error};

#[test]
fn required_and_prohibited() {
    insta::assert_snapshot!(dump("+foo"), @r#"Term "foo" required"#);
    insta::assert_snapshot!(dump("-foo"), @r#"Term "foo" prohibited"#);
}

#[test]
fn fuzzy_without_similarity() {
    insta::assert_snapshot!(dump("fuzzy~"), @r#"Term "fuzzy" similarity"#);
}

#[test]
fn fuzzy_with_similarity() {
    insta::assert_snapshot!(dump("fuzzy~0"), @r#"Term "fuzzy" similarity=0"#);
    insta::assert_snapshot!(dump("fuzzy~1"), @r#"Term "fuzzy" similarity=1"#);
    insta::assert_snapshot!(dump("fuzzy~0.8"), @r#"Term "fuzzy" similarity=0.8"#);
}

#[test]
fn boosts() {
    insta::assert_snapshot!(dump("boosted^1"), @r#"Term "boosted" boost=1"#);
    insta::assert_snapshot!(dump("boosted^0.1"), @r#"Term "boosted" boost=0.1"#);
}

#[test]
fn boost_applies_to_one_clause() {
    insta::assert_snapshot!(dump("boosted^10 normal"), @r#"
    List
      Term "boosted" boost=10
      Term "normal"
    "#);
}

#[test]
fn boosted_phrase() {
    insta::assert_snapshot!(dump(r#""boosted phrase"^10 "normal phrase""#), @r#"
    List
      Phrase "boosted phrase" boost=10
      Phrase "normal phrase"
    "#);
}

#[test]
fn suffix_then_boost() {
    insta::assert_snapshot!(dump("foo~0.8^2"), @r#"Term "foo" similarity=0.8 boost=2"#);
    insta::assert_snapshot!(dump(r#""a b"~2^3"#), @r#"Phrase "a b" distance=2 boost=3"#);
}

#[test]
fn marker_must_touch_its_clause() {
    insta::assert_snapshot!(
        error("+ foo"),
        @"Don't know what to do with whitespace at line 1 column 2 (expected `(`, phrase, or term)"
    );
}

#[test]
fn boost_requires_a_number() {
    insta::assert_snapshot!(
        error("foo^"),
        @"Don't know what to do with `^` at line 1 column 4 (expected `~`, `^` followed by a number, whitespace, or end of input)"
    );
}

#[test]
fn boost_before_fuzzy_is_rejected() {
    insta::assert_snapshot!(
        error("foo^2~"),
        @"Don't know what to do with `~` at line 1 column 6 (expected whitespace or end of input)"
    );
}
