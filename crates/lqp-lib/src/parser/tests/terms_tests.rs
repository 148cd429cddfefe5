use super::dump;

#[test]
fn single_term() {
    insta::assert_snapshot!(dump("foo"), @r#"Term "foo""#);
}

#[test]
fn two_terms() {
    insta::assert_snapshot!(dump("foo bar"), @r#"
    List
      Term "foo"
      Term "bar"
    "#);
}

#[test]
fn many_spaces_between_terms() {
    insta::assert_snapshot!(dump("foo \t  bar\nbaz"), @r#"
    List
      Term "foo"
      Term "bar"
      Term "baz"
    "#);
}

#[test]
fn leading_and_trailing_whitespace() {
    insta::assert_snapshot!(dump("  foo  "), @r#"Term "foo""#);
    insta::assert_snapshot!(dump("\n foo bar \n"), @r#"
    List
      Term "foo"
      Term "bar"
    "#);
}

#[test]
fn hyphenated_terms() {
    insta::assert_snapshot!(dump("candy-bar twix"), @r#"
    List
      Term "candy-bar"
      Term "twix"
    "#);
}

#[test]
fn trailing_hyphens() {
    insta::assert_snapshot!(dump("candybar--"), @r#"Term "candybar--""#);
}

#[test]
fn wildcards() {
    insta::assert_snapshot!(dump("candy* ca*dy *andy"), @r#"
    List
      Term "candy*"
      Term "ca*dy"
      Term "*andy"
    "#);
}

#[test]
fn apostrophes() {
    insta::assert_snapshot!(dump("isn't"), @r#"Term "isn't""#);
}

#[test]
fn digits_and_underscores() {
    insta::assert_snapshot!(dump("2010 snake_case"), @r#"
    List
      Term "2010"
      Term "snake_case"
    "#);
}

#[test]
fn keyword_prefixes_are_terms() {
    insta::assert_snapshot!(dump("ANDROID ORACLE and"), @r#"
    List
      Term "ANDROID"
      Term "ORACLE"
      Term "and"
    "#);
}

#[test]
fn to_outside_a_range_is_a_term() {
    insta::assert_snapshot!(dump("TO"), @r#"Term "TO""#);
}
