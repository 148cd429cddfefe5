//! Show the AST of a query.

use super::run_common::{QueryInput, parse_or_exit};

pub struct AstArgs {
    pub input: QueryInput,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let (_, query) = parse_or_exit(&args.input, args.color);
    print!("{}", query.dump());
}
