//! Melds: sets and runs.
//!
//! A meld is a group of at least three cards a player lays down from their
//! hand. Two kinds exist:
//!
//! - **Set**: three or more cards of a single rank.
//! - **Run**: three or more cards of a single suit with consecutive ranks
//!   (Ace low, so A-2-3 is a run and Q-K-A is not).
//!
//! Validation is order-insensitive: the caller may pass the cards in any
//! order and a valid run is still recognized.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, MeldError};

use super::scoring::card_points;

/// The two legal meld shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeldKind {
    Set,
    Run,
}

impl std::fmt::Display for MeldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeldKind::Set => write!(f, "set"),
            MeldKind::Run => write!(f, "run"),
        }
    }
}

/// A validated meld laid down on the table.
///
/// Can only be built through [`Meld::new`], so a `Meld` is always legal.
/// SmallVec keeps the common 3-4 card case off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    kind: MeldKind,
    cards: SmallVec<[Card; 4]>,
}

impl Meld {
    /// Validate `cards` as a meld of the given kind and build it.
    ///
    /// Run cards are stored in ascending rank order regardless of the order
    /// they were passed in.
    pub fn new(cards: &[Card], kind: MeldKind) -> Result<Self, MeldError> {
        validate(cards, kind)?;

        let mut cards: SmallVec<[Card; 4]> = SmallVec::from_slice(cards);
        if kind == MeldKind::Run {
            cards.sort_by_key(|c| c.rank);
        }

        Ok(Self { kind, cards })
    }

    /// The meld's kind.
    #[must_use]
    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    /// The cards in the meld.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total point value of the meld's cards.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.cards.iter().map(|&c| card_points(c)).sum()
    }
}

/// Check whether `cards` form a legal meld of the given kind.
pub fn validate(cards: &[Card], kind: MeldKind) -> Result<(), MeldError> {
    if cards.len() < 3 {
        return Err(MeldError::TooFewCards(cards.len()));
    }

    match kind {
        MeldKind::Set => {
            let rank = cards[0].rank;
            if cards.iter().any(|c| c.rank != rank) {
                return Err(MeldError::MixedRanks);
            }
        }
        MeldKind::Run => {
            let suit = cards[0].suit;
            if cards.iter().any(|c| c.suit != suit) {
                return Err(MeldError::MixedSuits);
            }

            let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
            values.sort_unstable();

            for pair in values.windows(2) {
                if pair[1] == pair[0] {
                    return Err(MeldError::DuplicateRank);
                }
                if pair[1] != pair[0] + 1 {
                    return Err(MeldError::NonConsecutiveRanks);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_valid_set() {
        let cards = [
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Spades, Rank::Seven),
        ];

        let meld = Meld::new(&cards, MeldKind::Set).unwrap();
        assert_eq!(meld.kind(), MeldKind::Set);
        assert_eq!(meld.cards(), &cards);
    }

    #[test]
    fn test_set_of_four() {
        let cards: Vec<_> = Suit::ALL
            .iter()
            .map(|&s| card(s, Rank::Queen))
            .collect();

        assert!(validate(&cards, MeldKind::Set).is_ok());
    }

    #[test]
    fn test_set_mixed_ranks_rejected() {
        let cards = [
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Spades, Rank::Eight),
        ];

        assert_eq!(
            Meld::new(&cards, MeldKind::Set).unwrap_err(),
            MeldError::MixedRanks
        );
    }

    #[test]
    fn test_valid_run_any_input_order() {
        let cards = [
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
        ];

        let meld = Meld::new(&cards, MeldKind::Run).unwrap();

        // Stored ascending.
        let ranks: Vec<_> = meld.cards().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::Four, Rank::Five]);
    }

    #[test]
    fn test_ace_low_run() {
        let cards = [
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::Two),
            card(Suit::Spades, Rank::Three),
        ];

        assert!(validate(&cards, MeldKind::Run).is_ok());
    }

    #[test]
    fn test_ace_high_run_rejected() {
        // Queen-King-Ace does not wrap.
        let cards = [
            card(Suit::Spades, Rank::Queen),
            card(Suit::Spades, Rank::King),
            card(Suit::Spades, Rank::Ace),
        ];

        assert_eq!(
            validate(&cards, MeldKind::Run).unwrap_err(),
            MeldError::NonConsecutiveRanks
        );
    }

    #[test]
    fn test_run_mixed_suits_rejected() {
        let cards = [
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Hearts, Rank::Six),
        ];

        assert_eq!(
            validate(&cards, MeldKind::Run).unwrap_err(),
            MeldError::MixedSuits
        );
    }

    #[test]
    fn test_run_with_gap_rejected() {
        let cards = [
            card(Suit::Hearts, Rank::Four),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Hearts, Rank::Seven),
        ];

        assert_eq!(
            validate(&cards, MeldKind::Run).unwrap_err(),
            MeldError::NonConsecutiveRanks
        );
    }

    #[test]
    fn test_too_few_cards() {
        let cards = [
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Four),
        ];

        assert_eq!(
            validate(&cards, MeldKind::Set).unwrap_err(),
            MeldError::TooFewCards(2)
        );
        assert_eq!(
            validate(&[], MeldKind::Run).unwrap_err(),
            MeldError::TooFewCards(0)
        );
    }

    #[test]
    fn test_meld_points() {
        let cards = [
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
        ];
        let meld = Meld::new(&cards, MeldKind::Run).unwrap();
        assert_eq!(meld.points(), 15 + 5 + 5);

        let faces = [
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Spades, Rank::Jack),
        ];
        let meld = Meld::new(&faces, MeldKind::Set).unwrap();
        assert_eq!(meld.points(), 30);
    }

    #[test]
    fn test_meld_kind_serde() {
        assert_eq!(serde_json::to_string(&MeldKind::Set).unwrap(), "\"set\"");
        assert_eq!(serde_json::to_string(&MeldKind::Run).unwrap(), "\"run\"");

        let kind: MeldKind = serde_json::from_str("\"run\"").unwrap();
        assert_eq!(kind, MeldKind::Run);
        assert!(serde_json::from_str::<MeldKind>("\"straight\"").is_err());
    }
}
