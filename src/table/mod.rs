//! In-memory registry of concurrent games.
//!
//! A host process typically runs many games at once; `GameTable` owns them
//! and hands out `GameId`s. Nothing here persists - dropping the table
//! drops the games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::GameError;
use crate::game::{GameBuilder, RummyGame};

/// Opaque identifier for a game hosted in a [`GameTable`].
///
/// Serializes as the hyphenated UUID string consumers use as `gameID`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Owns every active game, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct GameTable {
    games: FxHashMap<GameId, RummyGame>,
}

impl GameTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a game from `builder`, register it, and return its id.
    pub fn create(&mut self, builder: GameBuilder) -> Result<GameId, GameError> {
        let game = builder.build()?;
        Ok(self.insert(game))
    }

    /// Register an already-built game and return its id.
    pub fn insert(&mut self, game: RummyGame) -> GameId {
        let id = GameId::generate();
        self.games.insert(id, game);
        id
    }

    /// Look up a game.
    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&RummyGame> {
        self.games.get(&id)
    }

    /// Look up a game for mutation.
    pub fn get_mut(&mut self, id: GameId) -> Option<&mut RummyGame> {
        self.games.get_mut(&id)
    }

    /// Remove a finished or abandoned game, returning it if present.
    pub fn remove(&mut self, id: GameId) -> Option<RummyGame> {
        self.games.remove(&id)
    }

    /// Number of hosted games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the table hosts no games.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over the ids of every hosted game.
    pub fn ids(&self) -> impl Iterator<Item = GameId> + '_ {
        self.games.keys().copied()
    }
}
