//! The Rummy rules engine: melds, events, turn flow, and scoring.

pub mod engine;
pub mod event;
pub mod meld;
pub mod scoring;

pub use engine::{GameBuilder, RummyGame, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use event::{EventLog, GameEvent};
pub use meld::{validate as validate_meld, Meld, MeldKind};
pub use scoring::{card_points, hand_points, player_score, Standing};
