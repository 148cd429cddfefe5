use super::parse_ok;

fn round_trip(input: &str) -> String {
    let query = parse_ok(input);
    let rendered = query.to_string();
    assert_eq!(parse_ok(&rendered), query, "re-parse of {:?} differs", rendered);
    rendered
}

#[test]
fn canonical_rendering() {
    insta::assert_snapshot!(
        round_trip(r#"  +title:(foo   AND bar)^2  NOT "x y"~3 year:{a TO b}  "#),
        @r#"+title:(foo AND bar)^2 NOT "x y"~3 year:{a TO b}"#
    );
}

#[test]
fn range_whitespace_is_normalized() {
    insta::assert_snapshot!(round_trip("price:[ 1.5   TO 10 ]"), @"price:[1.5 TO 10]");
}

#[test]
fn behavior_table_round_trips() {
    let inputs = [
        "foo",
        "foo bar",
        r#"foo "stuff and things""#,
        "candy-bar twix",
        "candybar--",
        "candy* ca*dy *andy",
        r#""candy* twix""#,
        "isn't",
        r#""foo bar"~3 "mumble stuff"~5 "blah blah""#,
        "(foo (bar (baz)))",
        r#"+(foo bar) -"mumble stuff""#,
        "foo AND bar OR baz OR mumble",
        "foo AND (bar OR baz) AND mumble OR truth",
        "foo NOT bar",
        "title:foo",
        r#"title:"a phrase""#,
        "title:(foo AND bar)",
        "fuzzy~ fuzzy~0 fuzzy~0.8",
        "year:[2010 TO 2011] year:{2009 TO 2012}",
        "boosted^10 normal",
        r#""boosted phrase"^10 "normal phrase""#,
        "foo~0.8^2 -title:(a b)^3",
    ];
    for input in inputs {
        round_trip(input);
    }
}
