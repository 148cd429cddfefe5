use super::run_common::{QueryInput, parse_or_exit};

pub struct JsonArgs {
    pub input: QueryInput,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: JsonArgs) {
    let (_, query) = parse_or_exit(&args.input, args.color);

    let output = if args.compact {
        serde_json::to_string(&query)
    } else {
        serde_json::to_string_pretty(&query)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize query: {}", e);
            std::process::exit(1);
        }
    }
}
