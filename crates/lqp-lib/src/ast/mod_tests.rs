use super::*;

#[test]
fn from_clauses_collapses() {
    assert_eq!(Query::from_clauses(Vec::new()), None);

    let single = Query::from_clauses(vec![Node::term("foo")]).unwrap();
    assert_eq!(single, Query::Single(Box::new(Node::term("foo"))));
    assert_eq!(single.as_single(), Some(&Node::term("foo")));

    let list = Query::from_clauses(vec![Node::term("foo"), Node::term("bar")]).unwrap();
    assert!(matches!(&list, Query::List(nodes) if nodes.len() == 2));
    assert_eq!(list.as_single(), None);
}

#[test]
fn clauses_view() {
    let single = Query::Single(Box::new(Node::phrase("a b")));
    assert_eq!(single.len(), 1);
    assert!(!single.is_empty());
    assert_eq!(single.clauses()[0].text(), Some("a b"));
}

#[test]
fn builders_set_modifiers() {
    let node = Node::term("foo")
        .with_field("title")
        .with_marker(Marker::Required)
        .with_boost("2")
        .with_operator(Operator::And);

    assert_eq!(node.field(), Some("title"));
    assert!(node.is_required());
    assert!(!node.is_prohibited());
    assert_eq!(node.modifiers.boost.as_deref(), Some("2"));
    assert_eq!(node.operator(), Some(Operator::And));
}

#[test]
fn suffix_builders_only_apply_to_their_kind() {
    let phrase = Node::phrase("a b").with_similarity(Similarity::Default);
    assert_eq!(phrase, Node::phrase("a b"));

    let term = Node::term("foo").with_distance("2");
    assert_eq!(term, Node::term("foo"));
}

#[test]
fn parsed_query_matches_built_tree() {
    let expected = Query::Single(Box::new(Node::group(Query::List(vec![
        Node::term("foo"),
        Node::group(Query::List(vec![
            Node::term("bar"),
            Node::group(Query::Single(Box::new(Node::term("baz")))),
        ])),
    ]))));
    assert_eq!(crate::parse("(foo (bar (baz)))").unwrap(), expected);
}

#[test]
fn text_of_structural_nodes() {
    assert_eq!(Node::range("1", "2", true).text(), None);
    assert_eq!(Node::group(Query::Single(Box::new(Node::term("x")))).text(), None);
}

#[test]
fn display_of_keywords() {
    assert_eq!(Operator::Not.to_string(), "NOT");
    assert_eq!(Marker::Prohibited.to_string(), "-");
}

#[test]
fn hand_built_short_lists_are_not_collapsed() {
    assert!(!Query::List(Vec::new()).is_collapsed());
    assert!(!Query::List(vec![Node::term("foo")]).is_collapsed());

    let nested = Query::Single(Box::new(Node::group(Query::List(vec![Node::term("a")]))));
    assert!(!nested.is_collapsed());
}

#[test]
fn parsed_queries_are_collapsed() {
    for input in ["foo", "foo bar", "(a)", "x:(a (b c)) d", "((a))^2"] {
        let query = crate::parse(input).unwrap();
        assert!(query.is_collapsed(), "{}", input);
    }
}
