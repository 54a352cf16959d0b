//! Reports and terminal output
//!
//! `report` renders the flat text files the web game consumes; `display`
//! pretty-prints command results.

pub mod display;
pub mod report;

pub use display::{print_evaluated_set, print_game_status, print_generation_result};
pub use report::{Report, render_catalog, render_pairs, write_report};
