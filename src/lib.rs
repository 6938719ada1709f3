//! # rummy-core
//!
//! A rules engine for multiplayer Rummy with per-viewer state snapshots.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Shuffling is the only randomness, driven by a
//!    seeded ChaCha8 RNG. The same seed always produces the same deal.
//!
//! 2. **Typed errors everywhere**: Every setup and player action returns
//!    `Result<_, GameError>`; illegal melds carry the exact rule broken.
//!
//! 3. **Snapshots over shared state**: Consumers never touch the engine's
//!    internals. They receive `GameSnapshot`s - flattened, per-viewer
//!    copies serialized with the field names clients already use.
//!
//! ## Modules
//!
//! - `core`: Cards, players, RNG, errors
//! - `game`: The rules engine - melds, events, turn flow, scoring
//! - `table`: In-memory registry of concurrent games
//! - `view`: Snapshot data contract

pub mod core;
pub mod game;
pub mod table;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, GameError, GameRng, MeldError, PlayerId, PlayerMap, Rank, Suit,
};

pub use crate::game::{
    card_points, hand_points, player_score, validate_meld, EventLog, GameBuilder, GameEvent, Meld,
    MeldKind, RummyGame, Standing, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::table::{GameId, GameTable};

pub use crate::view::{GameSnapshot, PlayerSummary};
