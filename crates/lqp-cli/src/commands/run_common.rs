//! Loading and parsing shared by all commands.

use std::path::PathBuf;

use lqp_lib::{Diagnostic, ParserConfig, Query};

use super::query_loader::{LoadedQuery, load_query};

pub struct QueryInput {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub max_depth: Option<u32>,
}

impl QueryInput {
    fn config(&self) -> ParserConfig {
        match self.max_depth {
            Some(depth) => ParserConfig::default().with_recursion_fuel(Some(depth)),
            None => ParserConfig::default(),
        }
    }
}

/// Loads and parses the query, exiting with a rendered diagnostic on failure.
pub fn parse_or_exit(input: &QueryInput, color: bool) -> (LoadedQuery, Query) {
    let loaded = match load_query(input.query_path.as_deref(), input.query_text.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    match input.config().parse(&loaded.text) {
        Ok(query) => (loaded, query),
        Err(err) => {
            tracing::debug!(offset = err.offset(), "query rejected");
            eprint!("{}", render_error(&err, &loaded, color));
            std::process::exit(1);
        }
    }
}

pub fn render_error(err: &lqp_lib::Error, loaded: &LoadedQuery, color: bool) -> String {
    let diagnostic = Diagnostic::from(err);
    let mut printer = diagnostic
        .printer()
        .source(&loaded.text)
        .colored(color);
    if let Some(origin) = &loaded.origin {
        printer = printer.path(origin);
    }
    let mut out = printer.render();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
