use super::run_common::{QueryInput, parse_or_exit};

pub struct CheckArgs {
    pub input: QueryInput,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    parse_or_exit(&args.input, args.color);

    // Silent on success (like cargo check)
}
