//! Core types: cards, players, RNG, errors.
//!
//! This module contains the building blocks the rules engine is assembled
//! from. Nothing here knows the rules of Rummy.

pub mod card;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{standard_deck, Card, Rank, Suit};
pub use error::{GameError, MeldError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
