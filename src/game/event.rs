//! Game events and the public event log.
//!
//! Every state transition the engine performs appends one event. Events
//! render to the human-readable lines consumers display as the game's
//! event log.
//!
//! The log is public information shared with every player, so a stock draw
//! never names the drawn card; a draw from the face-up discard pile does.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId};

use super::meld::MeldKind;

/// Something that happened during a game.
///
/// Events carry player names rather than ids because the rendered log
/// lines are the product; ids stay available alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        player_names: Vec<String>,
    },
    DrewFromStock {
        player: PlayerId,
        name: String,
    },
    DrewFromDiscard {
        player: PlayerId,
        name: String,
        card: Card,
    },
    MeldPlayed {
        player: PlayerId,
        name: String,
        kind: MeldKind,
        cards: Vec<Card>,
    },
    Discarded {
        player: PlayerId,
        name: String,
        card: Card,
    },
    TurnStarted {
        player: PlayerId,
        name: String,
    },
    GameEnded {
        winner: PlayerId,
        name: String,
        score: i64,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { player_names } => {
                write!(f, "Game started with {}", player_names.join(", "))
            }
            GameEvent::DrewFromStock { name, .. } => {
                write!(f, "{} drew from the stock", name)
            }
            GameEvent::DrewFromDiscard { name, card, .. } => {
                write!(f, "{} took {} from the discard pile", name, card)
            }
            GameEvent::MeldPlayed {
                name, kind, cards, ..
            } => {
                let list: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                write!(f, "{} laid down a {}: {}", name, kind, list.join(", "))
            }
            GameEvent::Discarded { name, card, .. } => {
                write!(f, "{} discarded {}", name, card)
            }
            GameEvent::TurnStarted { name, .. } => {
                write!(f, "It is {}'s turn", name)
            }
            GameEvent::GameEnded { name, score, .. } => {
                write!(f, "{} wins with {} points", name, score)
            }
        }
    }
}

/// Append-only event history.
///
/// Backed by a persistent `im::Vector` so cloning the game for a snapshot
/// shares the log instead of copying it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Render every event to its log line, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_event_lines() {
        let started = GameEvent::GameStarted {
            player_names: vec!["Alice".into(), "Bob".into()],
        };
        assert_eq!(started.to_string(), "Game started with Alice, Bob");

        let drew = GameEvent::DrewFromStock {
            player: PlayerId::new(0),
            name: "Alice".into(),
        };
        assert_eq!(drew.to_string(), "Alice drew from the stock");

        let took = GameEvent::DrewFromDiscard {
            player: PlayerId::new(1),
            name: "Bob".into(),
            card: Card::new(Suit::Clubs, Rank::Five),
        };
        assert_eq!(took.to_string(), "Bob took Five of Clubs from the discard pile");

        let ended = GameEvent::GameEnded {
            winner: PlayerId::new(0),
            name: "Alice".into(),
            score: 85,
        };
        assert_eq!(ended.to_string(), "Alice wins with 85 points");
    }

    #[test]
    fn test_meld_line_lists_cards() {
        let event = GameEvent::MeldPlayed {
            player: PlayerId::new(0),
            name: "Alice".into(),
            kind: MeldKind::Run,
            cards: vec![
                Card::new(Suit::Hearts, Rank::Ace),
                Card::new(Suit::Hearts, Rank::Two),
                Card::new(Suit::Hearts, Rank::Three),
            ],
        };

        assert_eq!(
            event.to_string(),
            "Alice laid down a run: Ace of Hearts, Two of Hearts, Three of Hearts"
        );
    }

    #[test]
    fn test_log_preserves_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(GameEvent::GameStarted {
            player_names: vec!["Alice".into(), "Bob".into()],
        });
        log.push(GameEvent::TurnStarted {
            player: PlayerId::new(0),
            name: "Alice".into(),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.lines(),
            vec![
                "Game started with Alice, Bob".to_string(),
                "It is Alice's turn".to_string(),
            ]
        );
    }

    #[test]
    fn test_event_serde_tagged() {
        let event = GameEvent::Discarded {
            player: PlayerId::new(1),
            name: "Bob".into(),
            card: Card::new(Suit::Spades, Rank::King),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"discarded\""));

        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
