//! Browser-side session state, as explicit values
//!
//! The web game keeps a word list and a game snapshot in local storage. This
//! module models both over a [`KeyValueStore`] so tools and tests can read and
//! write the same data without a browser.

mod game_ledger;
mod store;
mod word_book;

pub use game_ledger::{
    CurrentGame, FinishedGame, GAME_STATE_KEY, GameLedger, GameState, GameUpdate, PlayerStats,
    Settings, SettingsUpdate, StatsUpdate, load_state, save_state,
};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use word_book::{DEFAULT_WORDS, WORD_BOOK_KEY, WordBook, WordLookup, WordSource};
