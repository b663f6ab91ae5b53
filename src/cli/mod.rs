//! Line-oriented shell that validates user input, drives the ledger, and
//! renders the results.

mod commands;
pub mod core;
mod help;
pub mod input;
mod io;
pub mod output;
mod shell;
mod shell_context;
pub mod view;

pub use shell::{run_cli, SCRIPT_ENV};
