//! Typed errors for the rules engine.
//!
//! Every fallible operation on a game returns `Result<_, GameError>`.
//! Meld validation has its own `MeldError` so callers can report the exact
//! rule a proposed meld broke; it folds into `GameError` via `From`.

use thiserror::Error;

use super::card::Card;
use super::player::PlayerId;

/// Why a proposed meld is not legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MeldError {
    #[error("a meld needs at least 3 cards, got {0}")]
    TooFewCards(usize),

    #[error("a set must hold a single rank")]
    MixedRanks,

    #[error("a run must hold a single suit")]
    MixedSuits,

    #[error("a run must hold consecutive ranks")]
    NonConsecutiveRanks,

    #[error("a run cannot repeat a rank")]
    DuplicateRank,
}

/// Errors raised by game setup and player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("number of players must be between 2 and 4, got {count}")]
    PlayerCount { count: usize },

    #[error("got {names} player names for {players} players")]
    NameCount { names: usize, players: usize },

    #[error("player names cannot be empty")]
    EmptyName,

    #[error("deck of {got} cards cannot seat {players} players")]
    DeckTooSmall { got: usize, players: usize },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("the stock is empty")]
    StockEmpty,

    #[error("{0} is not in the discard pile")]
    CardNotInDiscard(Card),

    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),

    #[error("invalid meld: {0}")]
    InvalidMeld(#[from] MeldError),

    #[error("the game is over")]
    GameOver,
}
