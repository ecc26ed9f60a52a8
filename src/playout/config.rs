//! Configuration and statistics for random playouts.

use std::fs::File;
use std::io::Write;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::env::Rewards;

/// Configuration for a batch of random playouts.
///
/// # Example
/// ```
/// use board_envs::playout::PlayoutConfig;
///
/// let config = PlayoutConfig::default().with_games(500).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Number of games to play.
    pub games: u64,

    /// Stop a game after this many plies and count it as truncated.
    ///
    /// `None` plays every game to the end. Checkers has no draw rule, so a
    /// random checkers game can run for hundreds of plies; set a cap there.
    pub max_plies: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// Game `i` is seeded with `seed + i`, so results do not depend on how
    /// rayon schedules the games. If `None`, each game draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 1_000,
            max_plies: None,
            seed: None,
        }
    }
}

impl PlayoutConfig {
    /// Create a new PlayoutConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set number of games.
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Builder method: set the ply cap.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.max_plies == Some(0) {
            return Err(ConfigError::ZeroPlyCap);
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating a playout config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `games` is zero.
    NoGames,
    /// `max_plies` is `Some(0)`.
    ZeroPlyCap,
    /// The JSON could not be parsed.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoGames => write!(f, "Number of games must be greater than 0"),
            ConfigError::ZeroPlyCap => write!(f, "Ply cap must be greater than 0"),
            ConfigError::Parse(msg) => write!(f, "Invalid playout config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of a single playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutOutcome {
    /// Sum of the rewards returned by every step.
    pub rewards: Rewards,
    /// Plies played.
    pub plies: usize,
    /// Whether the game reached a terminal state.
    pub finished: bool,
}

/// Aggregate statistics over a batch of playouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Environment name.
    pub game: String,

    /// Games played.
    pub games: u64,

    /// Wins for each player.
    pub wins: [u64; 2],

    /// Finished games without a winner.
    pub draws: u64,

    /// Games stopped by the ply cap.
    pub truncated: u64,

    /// Plies played across all games.
    pub total_plies: u64,

    /// Number of games by length in plies.
    pub length_histogram: FxHashMap<usize, u64>,
}

impl PlayoutStats {
    /// Create empty stats for the named game.
    pub fn new(game: &str) -> Self {
        Self {
            game: game.to_string(),
            ..Default::default()
        }
    }

    /// Fold one playout into the totals.
    pub fn record(&mut self, outcome: &PlayoutOutcome) {
        self.games += 1;
        self.total_plies += outcome.plies as u64;
        *self.length_histogram.entry(outcome.plies).or_insert(0) += 1;

        if !outcome.finished {
            self.truncated += 1;
            return;
        }
        match outcome.rewards.winner() {
            Some(player) => self.wins[player] += 1,
            None => self.draws += 1,
        }
    }

    /// Combine two partial tallies.
    pub fn merge(mut self, other: PlayoutStats) -> Self {
        if self.game.is_empty() {
            self.game = other.game;
        }
        self.games += other.games;
        self.wins[0] += other.wins[0];
        self.wins[1] += other.wins[1];
        self.draws += other.draws;
        self.truncated += other.truncated;
        self.total_plies += other.total_plies;
        for (plies, count) in other.length_histogram {
            *self.length_histogram.entry(plies).or_insert(0) += count;
        }
        self
    }

    /// Average game length in plies.
    pub fn mean_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} games | P0 {} | P1 {} | draws {} | truncated {} | {:.1} plies/game",
            self.game,
            self.games,
            self.wins[0],
            self.wins[1],
            self.draws,
            self.truncated,
            self.mean_plies()
        )
    }

    /// Save stats as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
