mod errors_tests;
mod modifiers_tests;
mod phrases_tests;
mod round_trip_tests;
mod terms_tests;

use crate::ast::Query;

fn parse_ok(input: &str) -> Query {
    match crate::parse(input) {
        Ok(query) => query,
        Err(err) => panic!("failed to parse {:?}: {}", input, err),
    }
}

/// Tree dump of a query that must parse.
fn dump(input: &str) -> String {
    parse_ok(input).dump()
}

/// Message of a query that must fail to parse.
fn error(input: &str) -> String {
    match crate::parse(input) {
        Ok(query) => panic!("expected {:?} to fail, got:\n{}", input, query.dump()),
        Err(err) => err.to_string(),
    }
}
