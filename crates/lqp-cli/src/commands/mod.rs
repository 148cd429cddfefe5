pub mod ast;
pub mod check;
pub mod json;
pub mod query_loader;
pub mod run_common;
