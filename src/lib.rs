//! Rack Forge
//!
//! Offline generator of starting tile racks for a Scrabble-style word game:
//! draws racks from a weighted letter bag, finds the dictionary words each
//! rack can spell, and either pairs racks into balanced head-to-head starts or
//! builds a catalog of distinct racks.
//!
//! # Quick Start
//!
//! ```rust
//! use rack_forge::core::TileSet;
//! use rack_forge::generator::evaluate;
//! use rack_forge::wordlists::{Dictionary, LengthFilter};
//!
//! let dict = Dictionary::from_lines(["cat", "act", "tac", "dog"], LengthFilter::default());
//! let rack = TileSet::parse("catxxxx", 7).unwrap();
//!
//! let set = evaluate(rack, &dict, 10);
//! println!("{} scores {}", set.signature(), set.score());
//! ```

// Core domain types
pub mod core;

// Rack generation policies
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Reports and terminal output
pub mod output;

// Browser session state
pub mod session;
