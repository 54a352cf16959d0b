//! Game progress and player statistics
//!
//! [`GameState`] is a plain snapshot with pure update methods.
//! [`load_state`] and [`save_state`] move it in and out of a store, and
//! [`GameLedger`] pairs a store with a snapshot, saving after every change.
//! The JSON layout matches what the browser game writes under
//! [`GAME_STATE_KEY`].

use super::store::{KeyValueStore, StoreError};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Storage key of the game snapshot
pub const GAME_STATE_KEY: &str = "scrabbleGameState";

/// The game in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: u64,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub board: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub rack: Option<Vec<String>>,
}

/// A finished game as kept in history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedGame {
    #[serde(flatten)]
    pub game: CurrentGame,
    pub end_time: u64,
    pub final_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_score: u64,
    pub games_played: u32,
    pub best_word: String,
    pub best_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub difficulty: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            difficulty: "normal".to_string(),
        }
    }
}

/// Fields of the current game to overwrite; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUpdate {
    pub score: Option<u32>,
    pub moves: Option<Vec<String>>,
    pub board: Option<Vec<Vec<String>>>,
    pub rack: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsUpdate {
    pub total_score: Option<u64>,
    pub games_played: Option<u32>,
    pub best_word: Option<String>,
    pub best_score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub sound_enabled: Option<bool>,
    pub difficulty: Option<String>,
}

/// Everything the game persists
///
/// Missing fields in stored JSON fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub current_game: Option<CurrentGame>,
    pub player_stats: PlayerStats,
    pub game_history: Vec<FinishedGame>,
    pub settings: Settings,
}

impl GameState {
    /// Begin a new game, replacing any unfinished one
    pub fn start_game(&mut self, kind: &str, now: u64) -> &CurrentGame {
        self.current_game.insert(CurrentGame {
            kind: kind.to_string(),
            start_time: now,
            score: 0,
            moves: Vec::new(),
            board: None,
            rack: None,
        })
    }

    /// Merge `update` into the current game
    ///
    /// Returns false when no game is in progress.
    pub fn save_game_state(&mut self, update: GameUpdate) -> bool {
        let Some(game) = self.current_game.as_mut() else {
            return false;
        };
        if let Some(score) = update.score {
            game.score = score;
        }
        if let Some(moves) = update.moves {
            game.moves = moves;
        }
        if let Some(board) = update.board {
            game.board = Some(board);
        }
        if let Some(rack) = update.rack {
            game.rack = Some(rack);
        }
        true
    }

    /// Close the current game, fold its score into the stats and archive it
    ///
    /// Returns false when no game is in progress.
    pub fn end_game(&mut self, final_score: u32, now: u64) -> bool {
        let Some(game) = self.current_game.take() else {
            return false;
        };

        let stats = &mut self.player_stats;
        stats.games_played += 1;
        stats.total_score += u64::from(final_score);
        stats.best_score = stats.best_score.max(final_score);

        self.game_history.push(FinishedGame {
            game,
            end_time: now,
            final_score,
        });
        true
    }

    pub fn update_stats(&mut self, update: StatsUpdate) {
        let stats = &mut self.player_stats;
        if let Some(total_score) = update.total_score {
            stats.total_score = total_score;
        }
        if let Some(games_played) = update.games_played {
            stats.games_played = games_played;
        }
        if let Some(best_word) = update.best_word {
            stats.best_word = best_word;
        }
        if let Some(best_score) = update.best_score {
            stats.best_score = best_score;
        }
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(sound_enabled) = update.sound_enabled {
            self.settings.sound_enabled = sound_enabled;
        }
        if let Some(difficulty) = update.difficulty {
            self.settings.difficulty = difficulty;
        }
    }
}

/// Read the snapshot from `store`
///
/// A missing key yields the default state. An unreadable value also yields
/// the default state, after printing a warning.
///
/// # Errors
/// Returns `StoreError` if the store itself fails.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> Result<GameState, StoreError> {
    let Some(raw) = store.get(GAME_STATE_KEY)? else {
        return Ok(GameState::default());
    };

    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!(
            "{} game state under '{GAME_STATE_KEY}' is unreadable ({e}); using defaults",
            "warning:".yellow().bold()
        );
        GameState::default()
    }))
}

/// Write the snapshot to `store`
///
/// # Errors
/// Returns `StoreError` if the store fails.
pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    state: &GameState,
) -> Result<(), StoreError> {
    // Plain data with string keys always serializes
    let json = serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string());
    store.set(GAME_STATE_KEY, json)
}

/// A store plus the snapshot it holds, saved after every change
pub struct GameLedger<S: KeyValueStore> {
    store: S,
    state: GameState,
}

impl<S: KeyValueStore> GameLedger<S> {
    /// Load the ledger from `store`
    ///
    /// # Errors
    /// Returns `StoreError` if the store fails.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let state = load_state(&store)?;
        Ok(Self { store, state })
    }

    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn start_game(&mut self, kind: &str, now: u64) -> Result<CurrentGame, StoreError> {
        let game = self.state.start_game(kind, now).clone();
        save_state(&mut self.store, &self.state)?;
        Ok(game)
    }

    /// Returns false (and writes nothing) when no game is in progress.
    ///
    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn save_game_state(&mut self, update: GameUpdate) -> Result<bool, StoreError> {
        if !self.state.save_game_state(update) {
            return Ok(false);
        }
        save_state(&mut self.store, &self.state)?;
        Ok(true)
    }

    #[must_use]
    pub fn game_state(&self) -> Option<&CurrentGame> {
        self.state.current_game.as_ref()
    }

    /// Returns false (and writes nothing) when no game is in progress.
    ///
    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn end_game(&mut self, final_score: u32, now: u64) -> Result<bool, StoreError> {
        if !self.state.end_game(final_score, now) {
            return Ok(false);
        }
        save_state(&mut self.store, &self.state)?;
        Ok(true)
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.state.player_stats
    }

    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn update_stats(&mut self, update: StatsUpdate) -> Result<(), StoreError> {
        self.state.update_stats(update);
        save_state(&mut self.store, &self.state)
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// # Errors
    /// Returns `StoreError` if saving fails.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), StoreError> {
        self.state.update_settings(update);
        save_state(&mut self.store, &self.state)
    }

    #[must_use]
    pub fn history(&self) -> &[FinishedGame] {
        &self.state.game_history
    }

    /// Drop the stored snapshot and reset to defaults
    ///
    /// # Errors
    /// Returns `StoreError` if the store fails.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.store.remove(GAME_STATE_KEY)?;
        self.state = GameState::default();
        Ok(())
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}
