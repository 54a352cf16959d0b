//! Word list and game ledger commands over a store file

use crate::session::{
    CurrentGame, FileStore, GameLedger, PlayerStats, StoreError, WordBook,
};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, as the browser records timestamps
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Whether `word` is in the stored word list
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn check_word(store_path: &Path, word: &str) -> Result<bool, StoreError> {
    let mut store = FileStore::open(store_path)?;
    let book = WordBook::load(&mut store)?;
    Ok(book.is_valid_word(word))
}

/// Add `word` to the stored word list; returns whether it was new
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn add_word(store_path: &Path, word: &str) -> Result<bool, StoreError> {
    let mut store = FileStore::open(store_path)?;
    let mut book = WordBook::load(&mut store)?;
    book.add_word(&mut store, word)
}

/// Every stored word
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn list_words(store_path: &Path) -> Result<Vec<String>, StoreError> {
    let mut store = FileStore::open(store_path)?;
    Ok(WordBook::load(&mut store)?.all_words())
}

/// Start a game of `kind`
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn start_game(store_path: &Path, kind: &str, now: u64) -> Result<CurrentGame, StoreError> {
    let mut ledger = GameLedger::load(FileStore::open(store_path)?)?;
    ledger.start_game(kind, now)
}

/// End the current game; `None` when no game was in progress
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn end_game(
    store_path: &Path,
    final_score: u32,
    now: u64,
) -> Result<Option<PlayerStats>, StoreError> {
    let mut ledger = GameLedger::load(FileStore::open(store_path)?)?;
    if ledger.end_game(final_score, now)? {
        Ok(Some(ledger.stats().clone()))
    } else {
        Ok(None)
    }
}

/// Current game (if any) and player stats
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened.
pub fn game_status(store_path: &Path) -> Result<(Option<CurrentGame>, PlayerStats), StoreError> {
    let ledger = GameLedger::load(FileStore::open(store_path)?)?;
    Ok((ledger.game_state().cloned(), ledger.stats().clone()))
}

/// Forget all game state
///
/// # Errors
/// Returns `StoreError` if the store cannot be opened or written.
pub fn clear_game(store_path: &Path) -> Result<(), StoreError> {
    let mut ledger = GameLedger::load(FileStore::open(store_path)?)?;
    ledger.clear_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_commands_share_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        assert!(check_word(&path, "quiz").unwrap());
        assert!(!check_word(&path, "zebra").unwrap());
        assert!(add_word(&path, "Zebra").unwrap());
        assert!(!add_word(&path, "zebra").unwrap());
        assert!(check_word(&path, "ZEBRA").unwrap());
        assert_eq!(list_words(&path).unwrap(), ["apple", "banana", "quiz", "zebra"]);
    }

    #[test]
    fn game_commands_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        assert_eq!(end_game(&path, 10, 1).unwrap(), None);

        let game = start_game(&path, "words", 5).unwrap();
        assert_eq!(game.start_time, 5);
        let (current, _) = game_status(&path).unwrap();
        assert_eq!(current.map(|g| g.kind), Some("words".to_string()));

        let stats = end_game(&path, 21, 9).unwrap().unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.best_score, 21);

        let (current, stats) = game_status(&path).unwrap();
        assert!(current.is_none());
        assert_eq!(stats.total_score, 21);

        clear_game(&path).unwrap();
        let (_, stats) = game_status(&path).unwrap();
        assert_eq!(stats, PlayerStats::default());
    }

    #[test]
    fn word_list_and_game_coexist_in_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        add_word(&path, "oxen").unwrap();
        start_game(&path, "words", 1).unwrap();
        assert!(check_word(&path, "oxen").unwrap());
        assert!(game_status(&path).unwrap().0.is_some());
    }

    #[test]
    fn corrupt_store_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(check_word(&path, "quiz").unwrap());
        let (current, stats) = game_status(&path).unwrap();
        assert!(current.is_none());
        assert_eq!(stats, PlayerStats::default());
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
