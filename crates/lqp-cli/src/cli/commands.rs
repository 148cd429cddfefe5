//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Query input and limit args shared by every command.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("lqp")
        .about("Parse and validate Lucene-style search queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(json_command())
        .subcommand(check_command())
}

/// Show the parsed query tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the AST of a query")
        .override_usage(
            "\
  lqp ast <QUERY>
  lqp ast -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  lqp ast query.txt                   # query from file
  lqp ast -q 'title:foo AND bar^2'    # inline query
  echo 'foo bar' | lqp ast -          # query from stdin"#,
        );
    with_query_args(cmd)
}

/// Print the parsed query as JSON.
pub fn json_command() -> Command {
    let cmd = Command::new("json")
        .about("Print the AST of a query as JSON")
        .override_usage(
            "\
  lqp json <QUERY> [--compact]
  lqp json -q <TEXT> [--compact]",
        )
        .after_help(
            r#"EXAMPLES:
  lqp json -q '"foo bar"~2'           # pretty JSON
  lqp json query.txt --compact        # one line"#,
        )
        .arg(compact_arg());
    with_query_args(cmd)
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  lqp check <QUERY>
  lqp check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  lqp check query.txt                 # silent when valid
  lqp check -q 'invalid^ query'       # prints a diagnostic, exits 1"#,
        );
    with_query_args(cmd)
}
