//! Dictionary loading
//!
//! The generator reads a plain word list once per run and treats it as
//! read-only afterwards.

mod dictionary;
pub mod loader;

pub use dictionary::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, Dictionary, LengthFilter};
