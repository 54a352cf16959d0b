//! Command implementations

pub mod evaluate;
pub mod generate;
pub mod session;

pub use evaluate::evaluate_rack;
pub use generate::{GenerationResult, generate_catalog, generate_pairs};
