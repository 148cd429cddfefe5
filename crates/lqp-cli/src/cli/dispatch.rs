//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::json::JsonArgs;
use crate::commands::run_common::QueryInput;

/// Query source and parser limits common to every command.
pub struct QueryParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub max_depth: Option<u32>,
}

impl QueryParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
        }
    }
}

impl From<QueryParams> for QueryInput {
    fn from(p: QueryParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            max_depth: p.max_depth,
        }
    }
}

pub struct AstParams {
    pub query: QueryParams,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.query.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct JsonParams {
    pub query: QueryParams,
    pub compact: bool,
    pub color: ColorChoice,
}

impl JsonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<JsonParams> for JsonArgs {
    fn from(p: JsonParams) -> Self {
        Self {
            input: p.query.into(),
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query: QueryParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.query.into(),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
