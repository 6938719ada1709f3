//! Snapshots: the data contract consumers read.
//!
//! A [`GameSnapshot`] is the flattened, per-viewer picture of one game,
//! serialized with the field names downstream clients already use
//! (`gameID`, `playerNames`, `handCts`, ...). Capturing a snapshot copies
//! fields - it never mutates the game and derives nothing beyond the
//! rendered event lines.
//!
//! Meld nesting is three levels deep: player, then meld, then card. The
//! `hand` field holds the viewing player's cards only; other hands appear
//! just as counts in `handCts`.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameError, PlayerId};
use crate::game::RummyGame;
use crate::table::GameId;

/// Per-viewer snapshot of one game's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub player_names: Vec<String>,
    /// The viewing player's hand.
    pub hand: Vec<Card>,
    /// Hand sizes for every seat, seat order.
    pub hand_cts: Vec<usize>,
    /// Player, then meld, then card.
    pub melds: Vec<Vec<Vec<Card>>>,
    /// Discard pile, bottom to top.
    pub discards: Vec<Card>,
    /// Cards remaining in the stock.
    pub stack: usize,
    pub active_player_name: String,
    pub player_count: usize,
    pub event_log: Vec<String>,
}

impl GameSnapshot {
    /// Capture the game as seen by `viewer`.
    pub fn capture(
        game: &RummyGame,
        game_id: GameId,
        viewer: PlayerId,
    ) -> Result<Self, GameError> {
        if viewer.index() >= game.player_count() {
            return Err(GameError::UnknownPlayer(viewer));
        }

        let melds = PlayerId::all(game.player_count())
            .map(|p| {
                game.melds(p)
                    .iter()
                    .map(|m| m.cards().to_vec())
                    .collect()
            })
            .collect();

        Ok(Self {
            game_id: game_id.to_string(),
            player_names: game.player_names().to_vec(),
            hand: game.hand(viewer).to_vec(),
            hand_cts: game.hand_sizes(),
            melds,
            discards: game.discard_pile().to_vec(),
            stack: game.stock_size(),
            active_player_name: game.active_player_name().to_string(),
            player_count: game.player_count(),
            event_log: game.events().lines(),
        })
    }
}

/// One player's public stats, as reported alongside snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub score: i64,
}

impl PlayerSummary {
    /// Summaries for every seat, seat order.
    #[must_use]
    pub fn for_game(game: &RummyGame) -> Vec<Self> {
        PlayerId::all(game.player_count())
            .map(|p| Self {
                id: p,
                name: game.player_name(p).to_string(),
                hand_size: game.hand(p).len(),
                score: game.score(p),
            })
            .collect()
    }
}
