use crate::{Error, Node, Query, error_location, parse};

#[test]
fn single_term() {
    assert_eq!(parse("foo").unwrap(), Query::Single(Box::new(Node::term("foo"))));
}

#[test]
fn single_phrase() {
    assert_eq!(
        parse(r#""foo bar""#).unwrap(),
        Query::Single(Box::new(Node::phrase("foo bar")))
    );
}

#[test]
fn term_list() {
    assert_eq!(
        parse("candy-bar twix").unwrap(),
        Query::List(vec![Node::term("candy-bar"), Node::term("twix")])
    );
}

#[test]
fn phrases_with_distances() {
    assert_eq!(
        parse(r#""foo bar"~3 "mumble stuff"~5 "blah blah""#).unwrap(),
        Query::List(vec![
            Node::phrase("foo bar").with_distance("3"),
            Node::phrase("mumble stuff").with_distance("5"),
            Node::phrase("blah blah"),
        ])
    );
}

#[test]
fn field_range() {
    assert_eq!(
        parse("title:[2010 TO 2011]").unwrap(),
        Query::Single(Box::new(
            Node::range("2010", "2011", true).with_field("title")
        ))
    );
}

#[test]
fn error_location_for_bad_boost() {
    let location = error_location("invalid^ query").unwrap();
    assert_eq!((location.line, location.column), (1, 8));
}

#[test]
fn operator_never_on_first_clause() {
    for input in ["foo AND bar", "(a OR b) NOT c", "x (y AND z)"] {
        let query = parse(input).unwrap();
        assert_eq!(query.clauses()[0].operator(), None, "{}", input);
        for node in query.clauses() {
            if let crate::NodeKind::Group { body } = &node.kind {
                assert_eq!(body.clauses()[0].operator(), None, "{}", input);
            }
        }
    }
}

#[test]
fn render_syntax_error() {
    let source = "invalid^ query";
    let err = parse(source).unwrap_err();
    insta::assert_snapshot!(err.render(source, false), @r"
    error: unexpected `^`
      |
    1 | invalid^ query
      |        ^ expected `~`, `^` followed by a number, whitespace, or end of input
    ");
}

#[test]
fn error_offsets() {
    assert_eq!(parse("foo )").unwrap_err().offset(), 4);
    let err = Error::ExecFuelExhausted { offset: 3 };
    assert_eq!(err.offset(), 3);
    assert_eq!(err.to_string(), "execution limit exceeded");
}
