//! Scoring: card point values and final standings.
//!
//! A player's score is the point value of everything they melded minus the
//! point value of whatever is left in their hand when someone goes out.
//!
//! Point values: Ace = 15, face cards = 10, everything else = 5.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId, Rank};

use super::meld::Meld;

/// Point value of a single card.
#[must_use]
pub fn card_points(card: Card) -> i64 {
    match card.rank {
        Rank::Ace => 15,
        r if r.is_face() => 10,
        _ => 5,
    }
}

/// Total point value of a collection of cards.
#[must_use]
pub fn hand_points(cards: &[Card]) -> i64 {
    cards.iter().map(|&c| card_points(c)).sum()
}

/// Score for one player: melds earn, leftover hand cards cost.
#[must_use]
pub fn player_score(melds: &[Meld], hand: &[Card]) -> i64 {
    let earned: i64 = melds.iter().map(Meld::points).sum();
    earned - hand_points(hand)
}

/// One row of the final results, produced once the game is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
    pub winner: bool,
}
